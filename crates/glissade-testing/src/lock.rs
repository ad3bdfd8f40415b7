//! Scripted interaction lock.

use glissade_core::{InteractionLock, LockHandle, NodeId};
use std::cell::{Cell, RefCell};

/// Lock arbiter with scriptable outcomes.
///
/// Grants every request by default; flip [`FakeLock::set_deny`] to
/// simulate another recognizer holding the sequence. Grants and
/// releases are recorded so tests can assert they stay paired.
#[derive(Default)]
pub struct FakeLock {
    deny: Cell<bool>,
    next_handle: Cell<u64>,
    granted: RefCell<Vec<(LockHandle, NodeId)>>,
    released: RefCell<Vec<LockHandle>>,
}

impl FakeLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every subsequent request is denied.
    pub fn set_deny(&self, deny: bool) {
        self.deny.set(deny);
    }

    pub fn grants(&self) -> usize {
        self.granted.borrow().len()
    }

    pub fn releases(&self) -> usize {
        self.released.borrow().len()
    }

    /// Granted handles not yet released.
    pub fn outstanding(&self) -> usize {
        let released = self.released.borrow();
        self.granted
            .borrow()
            .iter()
            .filter(|(handle, _)| !released.contains(handle))
            .count()
    }

    /// Target of the most recent grant.
    pub fn last_target(&self) -> Option<NodeId> {
        self.granted.borrow().last().map(|(_, target)| *target)
    }
}

impl InteractionLock for FakeLock {
    fn request_lock_on(&self, target: NodeId) -> Option<LockHandle> {
        if self.deny.get() {
            return None;
        }
        let raw = self.next_handle.get() + 1;
        self.next_handle.set(raw);
        let handle = LockHandle::new(raw)?;
        self.granted.borrow_mut().push((handle, target));
        Some(handle)
    }

    fn release_lock(&self, handle: LockHandle) {
        self.released.borrow_mut().push(handle);
    }
}
