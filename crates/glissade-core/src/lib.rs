//! Core types and capability seams for Glissade gesture recognition.
//!
//! This crate contains the pointer event model, the geometry primitives
//! gesture recognizers measure against, and the traits recognizers use
//! to reach the host: event subscription, node geometry lookup, and the
//! shared interaction lock.

pub mod events;
pub mod geometry;
pub mod lock;
pub mod pointer;

pub use events::{next_owner_id, ListenTarget, NodeGeometry, PointerEventSource, PointerListener};
pub use geometry::{Point, Rect, Size};
pub use lock::{InteractionLock, LockHandle};
pub use pointer::{
    NodeId, PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId, PointerType,
};

pub mod prelude {
    pub use crate::events::{ListenTarget, NodeGeometry, PointerEventSource, PointerListener};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::lock::{InteractionLock, LockHandle};
    pub use crate::pointer::{
        NodeId, PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId,
        PointerType,
    };
}
