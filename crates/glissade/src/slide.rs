//! The slide gesture state machine.
//!
//! One recognizer is attached per node. A pointer-down arms it; movement
//! past [`SLIDE_THRESHOLD`] classifies the dominant axis, claims the
//! interaction lock, and promotes the gesture to an active slide;
//! pointer-up or cancellation resolves the slide as a swipe or not and
//! tears the per-gesture state down. All recoverable failures along the
//! way (lock denied, wrong axis, disabled, re-entrant press) are silent
//! returns to idle, never errors.

use crate::gesture_constants::SLIDE_THRESHOLD;
use crate::handler::SlideCallbacks;
use crate::swipe::{classify_swipe, dominant_axis, Axis, SwipeResult};
use crate::velocity::SmoothedVelocity;
use glissade_core::{
    next_owner_id, InteractionLock, ListenTarget, LockHandle, NodeGeometry, NodeId, Point,
    PointerButton, PointerEvent, PointerEventKind, PointerEventSource, PointerListener,
    PointerType, Rect,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Recognition policy for one recognizer instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlideConfig {
    /// Restricts recognition to one axis. A gesture whose dominant axis
    /// disagrees is silently abandoned.
    pub axis: Option<Axis>,
    /// Whether disabling the recognizer aborts a gesture already in
    /// flight (slide-end with `SwipeResult::None`) instead of letting it
    /// run to completion.
    pub cancel_on_disable: bool,
    /// Whether slide progress is reported only while exactly one
    /// contact point is active.
    pub require_single_pointer: bool,
}

/// Observable recognizer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    /// No pointer sequence is being tracked.
    Idle,
    /// Pointer is down, displacement still below the slide threshold.
    Armed,
    /// Threshold crossed, lock held, slide callbacks firing.
    Sliding,
}

/// Per-gesture state, created on pointer-down and dropped on every
/// terminal transition. Its presence is what distinguishes Armed and
/// Sliding from Idle, so anchor, bounds, and last-point exist exactly
/// while a gesture is tracked.
struct Gesture {
    /// Node under the initiating pointer; the lock is requested on it.
    target: NodeId,
    anchor: Point,
    /// Attached node's rectangle, snapshotted at pointer-down.
    bounds: Rect,
    last_point: Point,
    last_time_ms: i64,
    start_time_ms: i64,
    lock: Option<LockHandle>,
    sliding: bool,
}

struct Inner {
    events: Rc<dyn PointerEventSource>,
    geometry: Rc<dyn NodeGeometry>,
    lock: Rc<dyn InteractionLock>,
    config: SlideConfig,
    enabled: bool,
    owner: u64,
    node: Option<NodeId>,
    callbacks: SlideCallbacks,
    velocity: SmoothedVelocity,
    gesture: Option<Gesture>,
}

/// Recognizes slide gestures on one attached node.
///
/// Construction injects the host capabilities (event subscription, node
/// geometry, the shared interaction lock), so a recognizer never
/// reaches for ambient platform state. Event handlers run
/// synchronously inside the host's dispatch and release their internal
/// borrow before invoking host callbacks, so callbacks may call back
/// into the recognizer.
pub struct SlideRecognizer {
    inner: Rc<RefCell<Inner>>,
}

impl SlideRecognizer {
    pub fn new(
        events: Rc<dyn PointerEventSource>,
        geometry: Rc<dyn NodeGeometry>,
        lock: Rc<dyn InteractionLock>,
        config: SlideConfig,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                events,
                geometry,
                lock,
                config,
                enabled: true,
                owner: next_owner_id(),
                node: None,
                callbacks: SlideCallbacks::new(),
                velocity: SmoothedVelocity::new(),
                gesture: None,
            })),
        }
    }

    /// Attaches to `node`, registering the pointer-down listener. A
    /// previous attachment, if any, is torn down first.
    pub fn attach(&self, node: NodeId, callbacks: SlideCallbacks) {
        self.detach();
        let (events, owner) = {
            let mut inner = self.inner.borrow_mut();
            inner.node = Some(node);
            inner.callbacks = callbacks;
            (inner.events.clone(), inner.owner)
        };
        events.add_listener(
            ListenTarget::Node(node),
            PointerEventKind::Down,
            listener(&self.inner, owner, on_pointer_down),
        );
    }

    /// Removes every listener, releases a held lock, and drops the node
    /// and callback references. Safe to call when not attached.
    pub fn detach(&self) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        if let Some(node) = inner.node.take() {
            inner
                .events
                .remove_listener(ListenTarget::Node(node), PointerEventKind::Down, inner.owner);
        }
        reset(inner);
        inner.callbacks = SlideCallbacks::new();
    }

    /// Gates new gesture starts. A gesture already in flight continues
    /// unless the recognizer was configured with `cancel_on_disable`.
    pub fn set_enabled(&self, enabled: bool) {
        let mut pending: Option<(SlideCallbacks, PointerEvent, Point)> = None;
        let mut abort = false;
        {
            let mut inner = self.inner.borrow_mut();
            inner.enabled = enabled;
            if !enabled && inner.config.cancel_on_disable {
                if let Some(gesture) = inner.gesture.as_ref() {
                    abort = true;
                    if gesture.sliding {
                        let tap = PointerEvent::new(PointerEventKind::Cancel, gesture.last_point)
                            .with_target(gesture.target)
                            .with_time_ms(gesture.last_time_ms);
                        pending = Some((inner.callbacks.clone(), tap, gesture.anchor));
                    }
                }
            }
        }
        if let Some((callbacks, tap, anchor)) = pending {
            callbacks.slide_end(&tap, anchor, SwipeResult::None);
        }
        if abort {
            reset(&mut self.inner.borrow_mut());
        }
    }

    pub fn set_axis(&self, axis: Option<Axis>) {
        self.inner.borrow_mut().config.axis = axis;
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().enabled
    }

    pub fn axis(&self) -> Option<Axis> {
        self.inner.borrow().config.axis
    }

    pub fn phase(&self) -> SlidePhase {
        match self.inner.borrow().gesture.as_ref() {
            None => SlidePhase::Idle,
            Some(gesture) if gesture.sliding => SlidePhase::Sliding,
            Some(_) => SlidePhase::Armed,
        }
    }

    /// Anchor point of the tracked gesture, while one exists.
    pub fn anchor(&self) -> Option<Point> {
        self.inner.borrow().gesture.as_ref().map(|g| g.anchor)
    }

    /// Last smoothed velocity reading in pixels per millisecond. Reset
    /// on pointer-down; the final reading of a finished gesture stays
    /// available until the next one starts.
    pub fn velocity(&self) -> f32 {
        self.inner.borrow().velocity.value()
    }
}

impl Drop for SlideRecognizer {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for SlideRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SlideRecognizer")
            .field("enabled", &inner.enabled)
            .field("node", &inner.node)
            .field("axis", &inner.config.axis)
            .finish()
    }
}

/// Wraps a handler into a listener holding a weak reference, so a
/// dropped recognizer's subscriptions become inert instead of keeping
/// it alive.
fn listener(
    inner: &Rc<RefCell<Inner>>,
    owner: u64,
    handler: fn(&Rc<RefCell<Inner>>, &PointerEvent),
) -> PointerListener {
    let weak = Rc::downgrade(inner);
    PointerListener::new(
        owner,
        Rc::new(move |event| {
            if let Some(inner) = weak.upgrade() {
                handler(&inner, event);
            }
        }),
    )
}

fn on_pointer_down(inner_rc: &Rc<RefCell<Inner>>, event: &PointerEvent) {
    let (events, owner) = {
        let mut inner = inner_rc.borrow_mut();
        if !inner.enabled || inner.gesture.is_some() {
            return;
        }
        if event.pointer_type == PointerType::Mouse
            && !event.buttons.contains(PointerButton::Primary)
        {
            return;
        }
        let Some(node) = inner.node else {
            return;
        };

        let bounds = inner.geometry.bounding_box(node);
        inner.velocity.reset();
        inner.gesture = Some(Gesture {
            target: event.target,
            anchor: event.position,
            bounds,
            last_point: event.position,
            last_time_ms: event.time_ms,
            start_time_ms: event.time_ms,
            lock: None,
            sliding: false,
        });
        log::trace!(
            "slide armed on node {node} at ({}, {})",
            event.position.x,
            event.position.y
        );
        (inner.events.clone(), inner.owner)
    };

    events.add_listener(
        ListenTarget::Window,
        PointerEventKind::Move,
        listener(inner_rc, owner, on_pointer_move),
    );
    events.add_listener(
        ListenTarget::Window,
        PointerEventKind::Up,
        listener(inner_rc, owner, on_pointer_up),
    );
    events.add_listener(
        ListenTarget::Window,
        PointerEventKind::Cancel,
        listener(inner_rc, owner, on_pointer_cancel),
    );
}

fn on_pointer_move(inner_rc: &Rc<RefCell<Inner>>, event: &PointerEvent) {
    enum Notify {
        Start(PointerEvent, Rect),
        Progress(PointerEvent),
    }

    let (callbacks, notify) = {
        let mut guard = inner_rc.borrow_mut();
        let inner = &mut *guard;
        let Some(gesture) = inner.gesture.as_mut() else {
            return;
        };

        let dt = (event.time_ms - gesture.last_time_ms) as f32;
        let step_x = event.position.x - gesture.last_point.x;
        let step_y = event.position.y - gesture.last_point.y;
        let delta = match inner.config.axis {
            None => (step_x * step_x + step_y * step_y).sqrt(),
            Some(Axis::Horizontal) => step_x,
            Some(Axis::Vertical) => step_y,
        };
        inner.velocity.sample(delta, dt);
        gesture.last_point = event.position;
        gesture.last_time_ms = event.time_ms;

        if !gesture.sliding {
            if gesture.anchor.distance(event.position) < SLIDE_THRESHOLD {
                return;
            }

            let dx = event.position.x - gesture.anchor.x;
            let dy = event.position.y - gesture.anchor.y;
            let axis = dominant_axis(dx, dy);
            if inner.config.axis.is_some_and(|constraint| constraint != axis) {
                log::trace!("slide abandoned: {axis:?} movement on a constrained recognizer");
                reset(inner);
                return;
            }

            let Some(handle) = inner.lock.request_lock_on(gesture.target) else {
                log::trace!("slide abandoned: interaction lock denied");
                reset(inner);
                return;
            };
            gesture.lock = Some(handle);
            gesture.sliding = true;
            log::trace!("slide started along {axis:?}");
            (
                inner.callbacks.clone(),
                Notify::Start(event.clone(), gesture.bounds),
            )
        } else {
            if inner.config.require_single_pointer && event.contacts != 1 {
                return;
            }
            event.consume();
            (inner.callbacks.clone(), Notify::Progress(event.clone()))
        }
    };

    match notify {
        Notify::Start(tap, bounds) => callbacks.slide_start(&tap, bounds),
        Notify::Progress(tap) => callbacks.slide(&tap),
    }
}

fn on_pointer_up(inner_rc: &Rc<RefCell<Inner>>, event: &PointerEvent) {
    let pending = {
        let inner = inner_rc.borrow();
        let Some(gesture) = inner.gesture.as_ref() else {
            return;
        };
        if gesture.sliding {
            event.consume();
            let elapsed = (event.time_ms - gesture.start_time_ms) as f32;
            let dx = event.position.x - gesture.anchor.x;
            let dy = event.position.y - gesture.anchor.y;
            let swipe = classify_swipe(dx, dy, elapsed, inner.config.axis);
            Some((inner.callbacks.clone(), event.clone(), gesture.anchor, swipe))
        } else {
            None
        }
    };

    if let Some((callbacks, tap, anchor, swipe)) = pending {
        log::trace!("slide ended: {swipe:?}");
        callbacks.slide_end(&tap, anchor, swipe);
    }
    reset(&mut inner_rc.borrow_mut());
}

fn on_pointer_cancel(inner_rc: &Rc<RefCell<Inner>>, event: &PointerEvent) {
    let pending = {
        let inner = inner_rc.borrow();
        let Some(gesture) = inner.gesture.as_ref() else {
            return;
        };
        gesture
            .sliding
            .then(|| (inner.callbacks.clone(), event.clone(), gesture.anchor))
    };

    if let Some((callbacks, tap, anchor)) = pending {
        log::trace!("slide cancelled");
        callbacks.slide_end(&tap, anchor, SwipeResult::None);
    }
    reset(&mut inner_rc.borrow_mut());
}

/// Terminal transition back to Idle: window-level listeners removed, a
/// held lock released, per-gesture state dropped. The smoothed velocity
/// is left readable until the next pointer-down.
fn reset(inner: &mut Inner) {
    inner
        .events
        .remove_listener(ListenTarget::Window, PointerEventKind::Move, inner.owner);
    inner
        .events
        .remove_listener(ListenTarget::Window, PointerEventKind::Up, inner.owner);
    inner
        .events
        .remove_listener(ListenTarget::Window, PointerEventKind::Cancel, inner.owner);
    if let Some(gesture) = inner.gesture.take() {
        if let Some(handle) = gesture.lock {
            inner.lock.release_lock(handle);
        }
    }
}
