//! Slide gesture recognition for host-driven pointer input.
//!
//! A [`SlideRecognizer`] watches pointer events on one attached node and
//! derives a higher-level slide gesture from them: pointer-down arms the
//! recognizer, movement past a threshold classifies the dominant axis
//! and claims the shared interaction lock, and release or cancellation
//! resolves the gesture as a swipe or a plain drag. Hosts observe the
//! gesture through [`SlideHandler`] callbacks.
//!
//! Everything the recognizer needs from its host (event subscription,
//! node geometry, the interaction lock) is injected at construction,
//! so recognition is deterministic under test and portable across
//! platform integrations.

pub mod gesture_constants;
pub mod handler;
pub mod slide;
pub mod swipe;
pub mod velocity;

pub use handler::{SlideCallbacks, SlideHandler};
pub use slide::{SlideConfig, SlidePhase, SlideRecognizer};
pub use swipe::{classify_swipe, dominant_axis, is_swipe, Axis, SwipeResult};
pub use velocity::{smooth_velocity, SmoothedVelocity};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::handler::{SlideCallbacks, SlideHandler};
    pub use crate::slide::{SlideConfig, SlidePhase, SlideRecognizer};
    pub use crate::swipe::{Axis, SwipeResult};
    pub use crate::velocity::SmoothedVelocity;
    pub use glissade_core::prelude::*;
}
