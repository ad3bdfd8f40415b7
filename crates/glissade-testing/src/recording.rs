//! Handlers that record the callbacks they receive.

use glissade::{SlideHandler, SwipeResult};
use glissade_core::{Point, PointerEvent, Rect};
use std::cell::RefCell;
use std::rc::Rc;

/// One observed slide callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlideRecord {
    Start { position: Point, bounds: Rect },
    Progress { position: Point },
    End {
        position: Point,
        start: Point,
        swipe: SwipeResult,
    },
}

/// Records every slide callback for later assertions.
#[derive(Default)]
pub struct RecordingHandler {
    records: RefCell<Vec<SlideRecord>>,
}

impl RecordingHandler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn records(&self) -> Vec<SlideRecord> {
        self.records.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn starts(&self) -> usize {
        self.count(|record| matches!(record, SlideRecord::Start { .. }))
    }

    pub fn progresses(&self) -> usize {
        self.count(|record| matches!(record, SlideRecord::Progress { .. }))
    }

    pub fn ends(&self) -> usize {
        self.count(|record| matches!(record, SlideRecord::End { .. }))
    }

    pub fn last_end(&self) -> Option<SlideRecord> {
        self.records
            .borrow()
            .iter()
            .rev()
            .find(|record| matches!(record, SlideRecord::End { .. }))
            .copied()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }

    fn count(&self, predicate: impl Fn(&SlideRecord) -> bool) -> usize {
        self.records.borrow().iter().filter(|r| predicate(r)).count()
    }
}

impl SlideHandler for RecordingHandler {
    fn on_slide_start(&self, tap: &PointerEvent, bounds: Rect) {
        self.records.borrow_mut().push(SlideRecord::Start {
            position: tap.position,
            bounds,
        });
    }

    fn on_slide(&self, tap: &PointerEvent) {
        self.records.borrow_mut().push(SlideRecord::Progress {
            position: tap.position,
        });
    }

    fn on_slide_end(&self, tap: &PointerEvent, start: Point, swipe: SwipeResult) {
        self.records.borrow_mut().push(SlideRecord::End {
            position: tap.position,
            start,
            swipe,
        });
    }
}

/// Appends its tag to a shared journal on every callback, for asserting
/// the invocation order of multiple handler slots.
pub struct TaggedHandler {
    tag: &'static str,
    journal: Rc<RefCell<Vec<&'static str>>>,
}

impl TaggedHandler {
    pub fn new(tag: &'static str, journal: Rc<RefCell<Vec<&'static str>>>) -> Rc<Self> {
        Rc::new(Self { tag, journal })
    }
}

impl SlideHandler for TaggedHandler {
    fn on_slide_start(&self, _tap: &PointerEvent, _bounds: Rect) {
        self.journal.borrow_mut().push(self.tag);
    }

    fn on_slide(&self, _tap: &PointerEvent) {
        self.journal.borrow_mut().push(self.tag);
    }

    fn on_slide_end(&self, _tap: &PointerEvent, _start: Point, _swipe: SwipeResult) {
        self.journal.borrow_mut().push(self.tag);
    }
}
