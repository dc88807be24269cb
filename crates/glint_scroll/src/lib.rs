//! Glint Scroll
//!
//! Wheel-gesture intent classification and horizontal scroll interception:
//!
//! - **Intent classification**: vertical vs. horizontal from one event's
//!   deltas, with a 2:1 vertical dominance threshold
//! - **Sticky window**: the first event of a burst decides; rapid follow-up
//!   events reuse the decision instead of oscillating
//! - **Interception**: horizontal gestures over overflowing content drive
//!   the viewport's own scroll offset and are claimed before ancestor
//!   scroll containers can react
//!
//! # Example
//!
//! ```rust
//! use glint_core::{Viewport, ViewportRegistry, WheelDispatcher, WheelEvent};
//! use glint_scroll::ScrollIntentInterceptor;
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
//! let mut interceptor = ScrollIntentInterceptor::new();
//! interceptor.attach(&mut dispatcher, &viewports, id);
//!
//! // A shallow-angle trackpad swipe pans the code block itself.
//! let mut event = WheelEvent::new(id, 24.0, 3.0, 0);
//! dispatcher.dispatch(&mut viewports, &mut event);
//!
//! assert!(event.default_prevented());
//! assert!(event.propagation_stopped());
//! assert_eq!(viewports.get(id).unwrap().scroll_left(), 24.0);
//! ```

pub mod intent;
pub mod interceptor;
pub mod window;

pub use intent::{classify, ScrollIntent, VERTICAL_DOMINANCE_RATIO};
pub use interceptor::{AttachState, ScrollIntentInterceptor};
pub use window::{IntentWindow, INTENT_HOLD_MS};
