//! Testing utilities for Glissade: scripted event sources, a fake lock
//! arbiter, recording handlers, and a pointer robot for driving whole
//! gestures deterministically.

pub mod lock;
pub mod recording;
pub mod robot;
pub mod source;

pub use lock::FakeLock;
pub use recording::{RecordingHandler, SlideRecord, TaggedHandler};
pub use robot::PointerRobot;
pub use source::ScriptedPointerSource;

pub mod prelude {
    pub use crate::lock::FakeLock;
    pub use crate::recording::{RecordingHandler, SlideRecord, TaggedHandler};
    pub use crate::robot::PointerRobot;
    pub use crate::source::ScriptedPointerSource;
}
