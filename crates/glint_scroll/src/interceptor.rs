//! Horizontal scroll interception
//!
//! [`ScrollIntentInterceptor`] attaches to one viewport's wheel stream.
//! When a gesture over a horizontally overflowing viewport classifies as
//! horizontal, the interceptor drives the viewport's scroll offset itself
//! and claims the event, so an enclosing vertical scroll container never
//! sees it. Vertical gestures pass through untouched.

use std::sync::{Arc, Mutex};

use glint_core::{
    HandlerId, Viewport, ViewportId, ViewportRegistry, WheelDispatcher, WheelEvent, WheelHandler,
};

use crate::intent::ScrollIntent;
use crate::window::IntentWindow;

/// Interceptor lifecycle.
///
/// Wheel events are only processed while attached; detaching is terminal
/// until the next attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachState {
    #[default]
    Detached,
    Attached(ViewportId),
}

impl AttachState {
    pub fn is_attached(&self) -> bool {
        matches!(self, AttachState::Attached(_))
    }

    pub fn target(&self) -> Option<ViewportId> {
        match *self {
            AttachState::Attached(id) => Some(id),
            AttachState::Detached => None,
        }
    }
}

/// Per-viewport interception state, shared with the dispatcher-side handle.
struct InterceptorCore {
    state: AttachState,
    window: IntentWindow,
}

impl InterceptorCore {
    fn on_wheel(&mut self, viewport: &mut dyn Viewport, event: &mut WheelEvent) {
        let AttachState::Attached(target) = self.state else {
            return;
        };
        // Guards mirror short-circuit order: the intent window is only
        // consulted (and opened) once the event is ours and the content
        // actually overflows.
        if event.target != target {
            return;
        }
        if !viewport.has_horizontal_overflow() {
            return;
        }

        let intent = self
            .window
            .resolve(event.timestamp, event.delta_x, event.delta_y);
        if intent != ScrollIntent::Horizontal {
            return;
        }

        viewport.set_scroll_left(viewport.scroll_left() + event.delta_x);
        event.prevent_default();
        event.stop_propagation();
        tracing::trace!(
            "horizontal intercept: delta_x={:.1} -> scroll_left={:.1}",
            event.delta_x,
            viewport.scroll_left()
        );
    }
}

/// Adapter registered on the dispatcher; forwards into the shared core.
struct CoreHandle(Arc<Mutex<InterceptorCore>>);

impl WheelHandler for CoreHandle {
    fn on_wheel(&mut self, viewport: &mut dyn Viewport, event: &mut WheelEvent) {
        self.0.lock().unwrap().on_wheel(viewport, event);
    }
}

/// Classifies wheel gestures over one viewport and consumes the horizontal
/// ones.
pub struct ScrollIntentInterceptor {
    core: Arc<Mutex<InterceptorCore>>,
    registration: Option<HandlerId>,
}

impl ScrollIntentInterceptor {
    pub fn new() -> Self {
        Self::with_window(IntentWindow::new())
    }

    /// Create an interceptor with a custom classification window.
    pub fn with_window(window: IntentWindow) -> Self {
        Self {
            core: Arc::new(Mutex::new(InterceptorCore {
                state: AttachState::Detached,
                window,
            })),
            registration: None,
        }
    }

    /// Attach to a viewport's wheel stream.
    ///
    /// Attaching while already attached, or to a viewport the registry does
    /// not know, is ignored: the interceptor never installs a duplicate
    /// subscription and never faults on a missing target.
    pub fn attach(
        &mut self,
        dispatcher: &mut WheelDispatcher,
        viewports: &ViewportRegistry,
        viewport: ViewportId,
    ) {
        if self.registration.is_some() {
            tracing::warn!("attach ignored: interceptor is already attached");
            return;
        }
        if !viewports.contains(viewport) {
            tracing::warn!("attach ignored: viewport {:?} is not registered", viewport);
            return;
        }

        {
            let mut core = self.core.lock().unwrap();
            core.state = AttachState::Attached(viewport);
            core.window.reset();
        }
        let id = dispatcher.subscribe(viewport, Box::new(CoreHandle(self.core.clone())));
        self.registration = Some(id);
        tracing::debug!("interceptor attached to viewport {:?}", viewport);
    }

    /// Detach from the viewport.
    ///
    /// Safe to call repeatedly or before any attach. Once this returns the
    /// subscription is revoked and no further events will be processed.
    pub fn detach(&mut self, dispatcher: &mut WheelDispatcher) {
        let Some(id) = self.registration.take() else {
            return;
        };
        dispatcher.unsubscribe(id);

        let mut core = self.core.lock().unwrap();
        let target = core.state.target();
        core.state = AttachState::Detached;
        core.window.reset();
        tracing::debug!("interceptor detached from viewport {:?}", target);
    }

    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    /// Viewport currently attached to, if any.
    pub fn attached_viewport(&self) -> Option<ViewportId> {
        self.core.lock().unwrap().state.target()
    }
}

impl Default for ScrollIntentInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestViewport {
        scroll_width: f32,
        offset_width: f32,
        scroll_left: f32,
    }

    impl TestViewport {
        fn new(scroll_width: f32, offset_width: f32) -> Box<Self> {
            Box::new(Self {
                scroll_width,
                offset_width,
                scroll_left: 0.0,
            })
        }
    }

    impl Viewport for TestViewport {
        fn scroll_width(&self) -> f32 {
            self.scroll_width
        }

        fn offset_width(&self) -> f32 {
            self.offset_width
        }

        fn scroll_left(&self) -> f32 {
            self.scroll_left
        }

        fn set_scroll_left(&mut self, offset: f32) {
            let max = (self.scroll_width - self.offset_width).max(0.0);
            self.scroll_left = offset.clamp(0.0, max);
        }
    }

    struct Fixture {
        viewports: ViewportRegistry,
        dispatcher: WheelDispatcher,
        interceptor: ScrollIntentInterceptor,
        id: ViewportId,
    }

    impl Fixture {
        fn attached(scroll_width: f32, offset_width: f32) -> Self {
            let mut viewports = ViewportRegistry::new();
            let mut dispatcher = WheelDispatcher::new();
            let id = viewports.register(TestViewport::new(scroll_width, offset_width));

            let mut interceptor = ScrollIntentInterceptor::new();
            interceptor.attach(&mut dispatcher, &viewports, id);

            Self {
                viewports,
                dispatcher,
                interceptor,
                id,
            }
        }

        fn dispatch(&mut self, delta_x: f32, delta_y: f32, timestamp: u64) -> WheelEvent {
            let mut event = WheelEvent::new(self.id, delta_x, delta_y, timestamp);
            self.dispatcher.dispatch(&mut self.viewports, &mut event);
            event
        }

        fn scroll_left(&self) -> f32 {
            self.viewports.get(self.id).unwrap().scroll_left()
        }
    }

    #[test]
    fn test_horizontal_gesture_scrolls_overflowing_viewport() {
        let mut fx = Fixture::attached(1000.0, 500.0);

        let event = fx.dispatch(20.0, 5.0, 0);

        assert_eq!(fx.scroll_left(), 20.0);
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }

    #[test]
    fn test_no_overflow_means_no_interception() {
        let mut fx = Fixture::attached(500.0, 500.0);

        let event = fx.dispatch(20.0, 5.0, 0);

        assert_eq!(fx.scroll_left(), 0.0);
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn test_vertical_gesture_passes_through() {
        let mut fx = Fixture::attached(1000.0, 500.0);

        let event = fx.dispatch(5.0, 100.0, 0);

        assert_eq!(fx.scroll_left(), 0.0);
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn test_burst_keeps_first_classification() {
        let mut fx = Fixture::attached(1000.0, 500.0);

        fx.dispatch(5.0, 0.0, 0);
        assert_eq!(fx.scroll_left(), 5.0);

        // Would classify vertical alone, but the window still holds
        // horizontal, so the event is claimed (and moves nothing).
        let event = fx.dispatch(0.0, 100.0, 50);
        assert_eq!(fx.scroll_left(), 5.0);
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());

        // Past the window the same gesture classifies fresh.
        let event = fx.dispatch(0.0, 100.0, 150);
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn test_vertical_burst_stays_vertical() {
        let mut fx = Fixture::attached(1000.0, 500.0);

        fx.dispatch(0.0, 100.0, 0);

        // Drifts to a horizontal angle mid-burst; the hold keeps it
        // vertical, so nothing is intercepted.
        let event = fx.dispatch(30.0, 2.0, 40);
        assert_eq!(fx.scroll_left(), 0.0);
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_detach_halts_processing() {
        let mut fx = Fixture::attached(1000.0, 500.0);

        fx.interceptor.detach(&mut fx.dispatcher);

        assert!(!fx.interceptor.is_attached());
        assert_eq!(fx.dispatcher.handler_count(fx.id), 0);

        let event = fx.dispatch(20.0, 5.0, 0);
        assert_eq!(fx.scroll_left(), 0.0);
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_detach_is_idempotent() {
        let mut fx = Fixture::attached(1000.0, 500.0);

        fx.interceptor.detach(&mut fx.dispatcher);
        fx.interceptor.detach(&mut fx.dispatcher);

        // Detach before any attach is a no-op too.
        let mut fresh = ScrollIntentInterceptor::new();
        fresh.detach(&mut fx.dispatcher);
        assert!(!fresh.is_attached());
    }

    #[test]
    fn test_double_attach_installs_no_duplicate() {
        let mut fx = Fixture::attached(1000.0, 500.0);

        fx.interceptor.attach(&mut fx.dispatcher, &fx.viewports, fx.id);

        assert_eq!(fx.dispatcher.handler_count(fx.id), 1);

        // The delta is applied once, not once per registration.
        fx.dispatch(20.0, 0.0, 0);
        assert_eq!(fx.scroll_left(), 20.0);
    }

    #[test]
    fn test_attach_to_unknown_viewport_is_ignored() {
        let mut viewports = ViewportRegistry::new();
        let mut dispatcher = WheelDispatcher::new();
        let stale = viewports.register(TestViewport::new(1000.0, 500.0));
        viewports.remove(stale);

        let mut interceptor = ScrollIntentInterceptor::new();
        interceptor.attach(&mut dispatcher, &viewports, stale);

        assert!(!interceptor.is_attached());
        assert_eq!(interceptor.attached_viewport(), None);
        assert_eq!(dispatcher.handler_count(stale), 0);
    }

    #[test]
    fn test_viewport_removed_while_attached_is_a_noop() {
        let mut fx = Fixture::attached(1000.0, 500.0);
        fx.viewports.remove(fx.id);

        let event = fx.dispatch(20.0, 5.0, 0);
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn test_reattach_starts_a_fresh_window() {
        let mut fx = Fixture::attached(1000.0, 500.0);

        // Lock in horizontal, then bounce the attachment inside what would
        // have been the hold window.
        fx.dispatch(5.0, 0.0, 0);
        fx.interceptor.detach(&mut fx.dispatcher);
        fx.interceptor.attach(&mut fx.dispatcher, &fx.viewports, fx.id);

        // Fresh classification: vertical passes through.
        let event = fx.dispatch(0.0, 100.0, 50);
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_attached_viewport_accessor() {
        let fx = Fixture::attached(1000.0, 500.0);
        assert!(fx.interceptor.is_attached());
        assert_eq!(fx.interceptor.attached_viewport(), Some(fx.id));
    }

    #[test]
    fn test_scroll_accumulates_across_bursts() {
        let mut fx = Fixture::attached(1000.0, 500.0);

        fx.dispatch(20.0, 0.0, 0);
        fx.dispatch(30.0, 0.0, 50);
        assert_eq!(fx.scroll_left(), 50.0);

        // Next burst, still horizontal.
        fx.dispatch(-10.0, 0.0, 200);
        assert_eq!(fx.scroll_left(), 40.0);
    }

    #[test]
    fn test_viewport_clamps_at_scroll_extent() {
        let mut fx = Fixture::attached(600.0, 500.0);

        fx.dispatch(250.0, 0.0, 0);
        assert_eq!(fx.scroll_left(), 100.0);
    }
}
