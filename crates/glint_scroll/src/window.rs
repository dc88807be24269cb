//! Sticky classification window
//!
//! A wheel burst is a stream of rapid events from one continuous motion. If
//! every event were classified on its own, a diagonal gesture drifting
//! around the decision boundary would flip the viewport between consuming
//! and propagating mid-burst. [`IntentWindow`] pins the decision instead:
//! the first event of a burst classifies, and every event inside the hold
//! window reuses that result.
//!
//! The hold is leading-edge and fixed-length: repeats inside the window do
//! not push the expiry out. Expiry is evaluated lazily against event
//! timestamps, which is equivalent to a scheduled reset because the held
//! state is only ever read here.

use crate::intent::{classify, ScrollIntent};

/// How long the first classification of a burst stays in force, in
/// milliseconds.
pub const INTENT_HOLD_MS: u64 = 100;

#[derive(Debug, Clone, Copy)]
struct HeldIntent {
    intent: ScrollIntent,
    opened_at: u64,
}

/// Leading-edge hold over [`classify`] results.
#[derive(Debug, Clone, Copy)]
pub struct IntentWindow {
    held: Option<HeldIntent>,
    hold_ms: u64,
}

impl IntentWindow {
    pub fn new() -> Self {
        Self::with_hold(INTENT_HOLD_MS)
    }

    /// Create a window with a custom hold duration.
    pub fn with_hold(hold_ms: u64) -> Self {
        Self {
            held: None,
            hold_ms,
        }
    }

    /// Resolve the intent for an event arriving at `now_ms`.
    ///
    /// Inside an open window the held intent is returned without
    /// re-classifying. At or after expiry the deltas are classified fresh
    /// and a new window opens, stamped at `now_ms`.
    pub fn resolve(&mut self, now_ms: u64, delta_x: f32, delta_y: f32) -> ScrollIntent {
        if let Some(held) = self.held {
            if now_ms.saturating_sub(held.opened_at) < self.hold_ms {
                return held.intent;
            }
        }

        let intent = classify(delta_x, delta_y);
        self.held = Some(HeldIntent {
            intent,
            opened_at: now_ms,
        });
        tracing::trace!(
            "intent window opened: {:?} at {}ms (delta_x={:.1}, delta_y={:.1})",
            intent,
            now_ms,
            delta_x,
            delta_y
        );
        intent
    }

    /// Whether a hold window is open at `now_ms`.
    pub fn is_open(&self, now_ms: u64) -> bool {
        self.held
            .is_some_and(|held| now_ms.saturating_sub(held.opened_at) < self.hold_ms)
    }

    /// Drop any held classification so the next event decides fresh.
    pub fn reset(&mut self) {
        self.held = None;
    }
}

impl Default for IntentWindow {
    fn default() -> Self {
        Self::new()
    }
}
