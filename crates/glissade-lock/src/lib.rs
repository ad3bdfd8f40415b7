//! Reference implementation of the interaction-lock arbiter.
//!
//! One registry is shared by every recognizer competing for the same
//! pointer sequences (typically one per window). It grants at most one
//! lock at a time: whichever recognizer crosses its gesture threshold
//! first claims the sequence, and everyone else backs off until the
//! holder releases on its terminal transition.
//!
//! Gesture dispatch runs cooperatively inside the host's event loop,
//! so the registry is single-threaded and interior mutability is a
//! plain `RefCell` behind an `Rc`.

use glissade_core::{InteractionLock, LockHandle, NodeId};
use std::cell::RefCell;

#[derive(Debug)]
struct Held {
    handle: LockHandle,
    target: NodeId,
}

#[derive(Debug)]
struct RegistryState {
    next_handle: u64,
    held: Option<Held>,
}

/// Single-slot mutual-exclusion registry.
#[derive(Debug)]
pub struct InteractionLockRegistry {
    state: RefCell<RegistryState>,
}

impl InteractionLockRegistry {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(RegistryState {
                next_handle: 1,
                held: None,
            }),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state.borrow().held.is_some()
    }

    /// Node the current lock was requested on, if any.
    pub fn holder(&self) -> Option<NodeId> {
        self.state.borrow().held.as_ref().map(|held| held.target)
    }
}

impl Default for InteractionLockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionLock for InteractionLockRegistry {
    fn request_lock_on(&self, target: NodeId) -> Option<LockHandle> {
        let mut state = self.state.borrow_mut();
        if state.held.is_some() {
            log::debug!("interaction lock denied for node {target}");
            return None;
        }

        let raw = state.next_handle;
        state.next_handle += 1;
        // next_handle starts at 1 and only increments, so this is always Some.
        let handle = LockHandle::new(raw)?;
        state.held = Some(Held { handle, target });
        log::trace!("interaction lock {raw} granted to node {target}");
        Some(handle)
    }

    fn release_lock(&self, handle: LockHandle) {
        let mut state = self.state.borrow_mut();
        match &state.held {
            Some(held) if held.handle == handle => {
                log::trace!("interaction lock {} released", handle.raw());
                state.held = None;
            }
            _ => {
                log::warn!(
                    "stale interaction lock release, handle {}",
                    handle.raw()
                );
            }
        }
    }
}
