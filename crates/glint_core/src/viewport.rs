//! Viewport handles
//!
//! A viewport is the host's scrollable surface: it exposes its content and
//! visible widths plus a mutable horizontal scroll offset, and nothing else.
//! The host keeps the concrete widget behind the [`Viewport`] trait and
//! hands out [`ViewportId`]s, so consumers never hold a direct reference
//! that could dangle after the widget unmounts.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Unique identifier for a registered viewport
    pub struct ViewportId;
}

/// Scroll metrics of a horizontally scrollable surface.
pub trait Viewport: Send {
    /// Total content width in pixels
    fn scroll_width(&self) -> f32;

    /// Visible width in pixels
    fn offset_width(&self) -> f32;

    /// Current horizontal scroll offset in pixels
    fn scroll_left(&self) -> f32;

    /// Set the horizontal scroll offset. Implementations may clamp to the
    /// scrollable range.
    fn set_scroll_left(&mut self, offset: f32);

    /// Whether the content is wider than the visible area
    fn has_horizontal_overflow(&self) -> bool {
        self.scroll_width() > self.offset_width()
    }
}

/// Owns the live viewports and maps ids to handles.
///
/// Removing a viewport while subscriptions for it still exist is legal;
/// later dispatches to the removed id are silently dropped.
pub struct ViewportRegistry {
    viewports: SlotMap<ViewportId, Box<dyn Viewport>>,
}

impl ViewportRegistry {
    pub fn new() -> Self {
        Self {
            viewports: SlotMap::with_key(),
        }
    }

    /// Register a viewport and return its id.
    pub fn register(&mut self, viewport: Box<dyn Viewport>) -> ViewportId {
        self.viewports.insert(viewport)
    }

    /// Remove a viewport. Its id becomes stale immediately.
    pub fn remove(&mut self, id: ViewportId) -> Option<Box<dyn Viewport>> {
        self.viewports.remove(id)
    }

    pub fn get(&self, id: ViewportId) -> Option<&dyn Viewport> {
        self.viewports.get(id).map(|v| v.as_ref())
    }

    pub fn get_mut(&mut self, id: ViewportId) -> Option<&mut (dyn Viewport + '_)> {
        self.viewports.get_mut(id).map(|v| v.as_mut() as &mut (dyn Viewport + '_))
    }

    pub fn contains(&self, id: ViewportId) -> bool {
        self.viewports.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.viewports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewports.is_empty()
    }
}

impl Default for ViewportRegistry {
    fn default() -> Self {
        Self::new()
    }
}
