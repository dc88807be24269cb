//! Wheel event model
//!
//! A [`WheelEvent`] carries the deltas reported by the input device for one
//! wheel tick or trackpad frame, normalized into pixel space, plus the
//! propagation flags a handler uses to claim the event. After dispatch the
//! host reads [`WheelEvent::propagation_stopped`] to decide whether ancestor
//! scroll containers may still react, and [`WheelEvent::default_prevented`]
//! to decide whether to run its native scroll response.

use crate::viewport::ViewportId;

/// Unit a wheel device reports its deltas in.
///
/// Trackpads and most touch devices report pixel deltas; classic wheel mice
/// report whole lines. Hosts normalize to pixels at event construction time
/// so downstream consumers see a single delta space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeltaUnit {
    /// Deltas are already in pixels
    #[default]
    Pixel,
    /// Deltas are in lines and scale by the host's line height
    Line,
}

impl DeltaUnit {
    /// Convert a raw device delta into pixel space.
    pub fn to_pixels(self, delta: f32, line_height: f32) -> f32 {
        match self {
            DeltaUnit::Pixel => delta,
            DeltaUnit::Line => delta * line_height,
        }
    }
}

/// A wheel event targeted at a registered viewport.
#[derive(Clone, Debug)]
pub struct WheelEvent {
    /// Viewport the event was delivered to
    pub target: ViewportId,
    /// Horizontal displacement requested by the device, in pixels
    pub delta_x: f32,
    /// Vertical displacement requested by the device, in pixels
    pub delta_y: f32,
    /// Host-supplied event time in milliseconds. Must be non-decreasing
    /// across the events delivered to one viewport.
    pub timestamp: u64,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl WheelEvent {
    /// Create an event from pixel-space deltas.
    pub fn new(target: ViewportId, delta_x: f32, delta_y: f32, timestamp: u64) -> Self {
        Self {
            target,
            delta_x,
            delta_y,
            timestamp,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Create an event from raw device deltas, normalizing into pixel space.
    pub fn from_device(
        target: ViewportId,
        delta_x: f32,
        delta_y: f32,
        unit: DeltaUnit,
        line_height: f32,
        timestamp: u64,
    ) -> Self {
        Self::new(
            target,
            unit.to_pixels(delta_x, line_height),
            unit.to_pixels(delta_y, line_height),
            timestamp,
        )
    }

    /// Suppress the host's native scroll response for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop delivery to any remaining handlers and mark the event as no
    /// longer eligible for ancestor handling.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn test_target() -> ViewportId {
        let mut keys: SlotMap<ViewportId, ()> = SlotMap::with_key();
        keys.insert(())
    }

    #[test]
    fn test_flags_start_clear() {
        let event = WheelEvent::new(test_target(), 4.0, -2.5, 16);
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn test_claiming_an_event_sets_both_flags() {
        let mut event = WheelEvent::new(test_target(), 4.0, 0.0, 16);
        event.prevent_default();
        event.stop_propagation();
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }

    #[test]
    fn test_line_deltas_scale_by_line_height() {
        let event = WheelEvent::from_device(test_target(), 2.0, -1.0, DeltaUnit::Line, 16.0, 0);
        assert_eq!(event.delta_x, 32.0);
        assert_eq!(event.delta_y, -16.0);
    }

    #[test]
    fn test_pixel_deltas_pass_through() {
        let event = WheelEvent::from_device(test_target(), 7.5, 3.0, DeltaUnit::Pixel, 16.0, 0);
        assert_eq!(event.delta_x, 7.5);
        assert_eq!(event.delta_y, 3.0);
    }
}
