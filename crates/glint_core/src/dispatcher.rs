//! Wheel event dispatch
//!
//! Routes wheel events to the handlers subscribed on their target viewport.
//! Delivery is synchronous and in subscription order; a handler that calls
//! [`WheelEvent::stop_propagation`] ends delivery for the remaining
//! handlers. Unsubscribing is a synchronous revocation: once
//! [`WheelDispatcher::unsubscribe`] returns, the handler can never be
//! invoked again.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::events::WheelEvent;
use crate::viewport::{Viewport, ViewportId, ViewportRegistry};

/// Receives wheel events for a subscribed viewport.
pub trait WheelHandler: Send {
    fn on_wheel(&mut self, viewport: &mut dyn Viewport, event: &mut WheelEvent);
}

new_key_type! {
    /// Subscription handle returned by [`WheelDispatcher::subscribe`]
    pub struct HandlerId;
}

struct Subscription {
    viewport: ViewportId,
    handler: Box<dyn WheelHandler>,
}

/// Dispatches wheel events to registered handlers.
pub struct WheelDispatcher {
    subscriptions: SlotMap<HandlerId, Subscription>,
    by_viewport: FxHashMap<ViewportId, SmallVec<[HandlerId; 2]>>,
}

impl WheelDispatcher {
    pub fn new() -> Self {
        Self {
            subscriptions: SlotMap::with_key(),
            by_viewport: FxHashMap::default(),
        }
    }

    /// Subscribe a handler to a viewport's wheel events.
    pub fn subscribe(&mut self, viewport: ViewportId, handler: Box<dyn WheelHandler>) -> HandlerId {
        let id = self.subscriptions.insert(Subscription { viewport, handler });
        self.by_viewport.entry(viewport).or_default().push(id);
        id
    }

    /// Revoke a subscription and return the handler.
    pub fn unsubscribe(&mut self, id: HandlerId) -> Option<Box<dyn WheelHandler>> {
        let subscription = self.subscriptions.remove(id)?;
        if let Some(ids) = self.by_viewport.get_mut(&subscription.viewport) {
            ids.retain(|h| *h != id);
            if ids.is_empty() {
                self.by_viewport.remove(&subscription.viewport);
            }
        }
        Some(subscription.handler)
    }

    /// Number of handlers subscribed to a viewport.
    pub fn handler_count(&self, viewport: ViewportId) -> usize {
        self.by_viewport.get(&viewport).map_or(0, |ids| ids.len())
    }

    /// Deliver an event to the handlers subscribed on its target.
    ///
    /// Events for an unknown or already-removed viewport are dropped
    /// without error.
    pub fn dispatch(&mut self, viewports: &mut ViewportRegistry, event: &mut WheelEvent) {
        let ids: SmallVec<[HandlerId; 2]> = match self.by_viewport.get(&event.target) {
            Some(ids) => ids.clone(),
            None => return,
        };

        for id in ids {
            if event.propagation_stopped() {
                break;
            }
            let Some(subscription) = self.subscriptions.get_mut(id) else {
                continue;
            };
            let Some(viewport) = viewports.get_mut(event.target) else {
                tracing::debug!("wheel event for missing viewport {:?}, dropped", event.target);
                return;
            };
            subscription.handler.on_wheel(viewport, event);
        }
    }
}

impl Default for WheelDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
