//! Scripted pointer event source.
//!
//! Stands in for the host's event plumbing: tests register recognizers
//! against it, then emit pointer events with explicit coordinates and
//! timestamps. The listener registry is observable so tests can assert
//! symmetric teardown.

use ahash::AHashMap;
use glissade_core::{
    ListenTarget, NodeGeometry, NodeId, PointerEvent, PointerEventKind, PointerEventSource,
    PointerListener, Rect,
};
use std::cell::RefCell;

#[derive(Default)]
pub struct ScriptedPointerSource {
    listeners: RefCell<AHashMap<(ListenTarget, PointerEventKind), Vec<PointerListener>>>,
    bounds: RefCell<AHashMap<NodeId, Rect>>,
}

impl ScriptedPointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bounds(&self, node: NodeId, rect: Rect) {
        self.bounds.borrow_mut().insert(node, rect);
    }

    /// Dispatches `event` to the listeners registered for its kind on
    /// `target`. Dispatch walks a snapshot of the current registrations,
    /// so handlers may add or remove listeners mid-dispatch the way
    /// recognizers do on terminal transitions.
    pub fn emit(&self, target: ListenTarget, event: &PointerEvent) {
        let snapshot: Vec<PointerListener> = self
            .listeners
            .borrow()
            .get(&(target, event.kind))
            .cloned()
            .unwrap_or_default();
        for listener in snapshot {
            listener.call(event);
        }
    }

    /// Total listeners currently registered, across all scopes.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().values().map(Vec::len).sum()
    }

    /// Listeners registered on the window scope.
    pub fn window_listener_count(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|((target, _), _)| *target == ListenTarget::Window)
            .map(|(_, listeners)| listeners.len())
            .sum()
    }

    /// Listeners registered on one node's scope.
    pub fn node_listener_count(&self, node: NodeId) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|((target, _), _)| *target == ListenTarget::Node(node))
            .map(|(_, listeners)| listeners.len())
            .sum()
    }
}

impl PointerEventSource for ScriptedPointerSource {
    fn add_listener(
        &self,
        target: ListenTarget,
        kind: PointerEventKind,
        listener: PointerListener,
    ) {
        self.listeners
            .borrow_mut()
            .entry((target, kind))
            .or_default()
            .push(listener);
    }

    fn remove_listener(&self, target: ListenTarget, kind: PointerEventKind, owner: u64) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(registered) = listeners.get_mut(&(target, kind)) {
            registered.retain(|listener| listener.owner() != owner);
            if registered.is_empty() {
                listeners.remove(&(target, kind));
            }
        }
    }
}

impl NodeGeometry for ScriptedPointerSource {
    fn bounding_box(&self, node: NodeId) -> Rect {
        self.bounds.borrow().get(&node).copied().unwrap_or(Rect::ZERO)
    }
}
