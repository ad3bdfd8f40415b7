//! Event subscription capability.
//!
//! Recognizers never touch a concrete platform event target. They are
//! handed a [`PointerEventSource`] at construction and subscribe through
//! it: a per-node listener for pointer-down, window-scoped listeners for
//! the move/up/cancel tail of a gesture. Removal takes the same
//! coordinates as registration so teardown mirrors setup exactly.

use crate::pointer::{NodeId, PointerEvent, PointerEventKind};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Scope a subscription binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    /// Events dispatched on one node.
    Node(NodeId),
    /// The window-level stream that sees a pointer sequence wherever it
    /// travels after the initial press.
    Window,
}

/// A handler bound to its owning context.
///
/// The owner id plays the role of the listener context: one owner may
/// register several listeners and later remove them all by identity,
/// without holding on to the callback itself.
#[derive(Clone)]
pub struct PointerListener {
    owner: u64,
    callback: Rc<dyn Fn(&PointerEvent)>,
}

impl PointerListener {
    pub fn new(owner: u64, callback: Rc<dyn Fn(&PointerEvent)>) -> Self {
        Self { owner, callback }
    }

    pub fn owner(&self) -> u64 {
        self.owner
    }

    pub fn call(&self, event: &PointerEvent) {
        (self.callback)(event);
    }
}

impl std::fmt::Debug for PointerListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerListener")
            .field("owner", &self.owner)
            .finish()
    }
}

/// Hands out process-unique listener-owner ids.
pub fn next_owner_id() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

/// Capability for subscribing to pointer event streams.
pub trait PointerEventSource {
    fn add_listener(
        &self,
        target: ListenTarget,
        kind: PointerEventKind,
        listener: PointerListener,
    );

    /// Removes every listener registered by `owner` for this
    /// target/kind pair.
    fn remove_listener(&self, target: ListenTarget, kind: PointerEventKind, owner: u64);
}

/// Capability for resolving a node's on-screen rectangle.
///
/// Stands in for the host's layout query (`getBoundingClientRect` in a
/// browser host); recognizers snapshot the result at gesture start.
pub trait NodeGeometry {
    fn bounding_box(&self, node: NodeId) -> crate::geometry::Rect;
}
