//! Host-facing slide callbacks.

use crate::swipe::SwipeResult;
use glissade_core::{Point, PointerEvent, Rect};
use smallvec::SmallVec;
use std::rc::Rc;

/// Callbacks a host receives over the life of one slide.
///
/// All methods default to no-ops so hosts implement only what they
/// observe.
pub trait SlideHandler {
    /// The gesture crossed the slide threshold and claimed the
    /// interaction lock. `bounds` is the attached node's rectangle
    /// snapshotted at pointer-down.
    fn on_slide_start(&self, tap: &PointerEvent, bounds: Rect) {
        let _ = (tap, bounds);
    }

    /// The pointer moved while the slide was active.
    fn on_slide(&self, tap: &PointerEvent) {
        let _ = tap;
    }

    /// The slide finished. `start` is the anchor the gesture began at;
    /// `swipe` is how the slide was classified.
    fn on_slide_end(&self, tap: &PointerEvent, start: Point, swipe: SwipeResult) {
        let _ = (tap, start, swipe);
    }
}

/// Ordered callback slots for one attachment.
///
/// A host component may expose slide callbacks both directly and
/// through its configuration, so up to two handlers can observe the
/// same gesture. Slots fire in the order they were added.
#[derive(Clone, Default)]
pub struct SlideCallbacks {
    slots: SmallVec<[Rc<dyn SlideHandler>; 2]>,
}

impl SlideCallbacks {
    pub fn new() -> Self {
        Self {
            slots: SmallVec::new(),
        }
    }

    pub fn with_handler(mut self, handler: Rc<dyn SlideHandler>) -> Self {
        self.slots.push(handler);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn slide_start(&self, tap: &PointerEvent, bounds: Rect) {
        for slot in &self.slots {
            slot.on_slide_start(tap, bounds);
        }
    }

    pub(crate) fn slide(&self, tap: &PointerEvent) {
        for slot in &self.slots {
            slot.on_slide(tap);
        }
    }

    pub(crate) fn slide_end(&self, tap: &PointerEvent, start: Point, swipe: SwipeResult) {
        for slot in &self.slots {
            slot.on_slide_end(tap, start, swipe);
        }
    }
}

impl std::fmt::Debug for SlideCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideCallbacks")
            .field("slots", &self.slots.len())
            .finish()
    }
}
