//! Glint Core
//!
//! This crate provides the host-boundary primitives for the Glint scroll
//! components:
//!
//! - **Wheel events**: device deltas normalized to pixels, with explicit
//!   propagation control
//! - **Viewport handles**: scroll metrics behind an opaque trait, addressed
//!   by id so stale handles can never dangle
//! - **Event dispatch**: per-viewport handler subscription with synchronous
//!   revocation
//!
//! # Example
//!
//! ```rust
//! use glint_core::{Viewport, ViewportRegistry, WheelDispatcher, WheelEvent};
//!
//! struct CodeBlock {
//!     scroll_left: f32,
//! }
//!
//! impl Viewport for CodeBlock {
//!     fn scroll_width(&self) -> f32 { 1000.0 }
//!     fn offset_width(&self) -> f32 { 400.0 }
//!     fn scroll_left(&self) -> f32 { self.scroll_left }
//!     fn set_scroll_left(&mut self, offset: f32) { self.scroll_left = offset; }
//! }
//!
//! let mut viewports = ViewportRegistry::new();
//! let mut dispatcher = WheelDispatcher::new();
//! let id = viewports.register(Box::new(CodeBlock { scroll_left: 0.0 }));
//!
//! let mut event = WheelEvent::new(id, 12.0, 2.0, 0);
//! dispatcher.dispatch(&mut viewports, &mut event);
//! assert!(!event.propagation_stopped());
//! ```

pub mod dispatcher;
pub mod events;
pub mod viewport;

pub use dispatcher::{HandlerId, WheelDispatcher, WheelHandler};
pub use events::{DeltaUnit, WheelEvent};
pub use viewport::{Viewport, ViewportId, ViewportRegistry};
