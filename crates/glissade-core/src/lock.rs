//! Interaction lock capability.
//!
//! A pointer sequence should be interpreted by exactly one recognizer,
//! even when several overlap the same region (a carousel inside a
//! scrollable page). The lock service is the arbiter: the first
//! recognizer to cross its gesture threshold requests the lock. A
//! denial means another recognizer won; it is a normal outcome, not an
//! error.
//!
//! The service is injected as a capability rather than reached through a
//! global, so tests can substitute a scripted arbiter.

use crate::pointer::NodeId;
use std::num::NonZeroU64;

/// Opaque token identifying a held lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LockHandle(NonZeroU64);

impl LockHandle {
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn raw(self) -> u64 {
        self.0.get()
    }
}

/// Mutual-exclusion arbiter for pointer sequences.
pub trait InteractionLock {
    /// Requests exclusive handling of the current pointer sequence on
    /// behalf of `target`. Returns `None` when another claimant already
    /// holds the lock.
    fn request_lock_on(&self, target: NodeId) -> Option<LockHandle>;

    /// Releases a previously granted lock. Every grant must be paired
    /// with a release on the claimant's terminal transition.
    fn release_lock(&self, handle: LockHandle);
}
