//! Shared gesture thresholds.
//!
//! Values are in logical pixels and milliseconds. They are fixed rather
//! than DPI-scaled; typical desktop and mobile densities are served well
//! by the defaults below.

/// Displacement from the anchor point before a press is treated as a
/// slide rather than jitter.
///
/// 8.0 is a conventional touch slop: large enough to absorb finger
/// wobble on touch screens, small enough that intentional drags feel
/// immediate. Matches common platform defaults (Android's touch slop is
/// ~8dp).
pub const SLIDE_THRESHOLD: f32 = 8.0;

/// Minimum displacement for a slide to qualify as a swipe.
pub const SWIPE_MIN_DISTANCE: f32 = 10.0;

/// Minimum average speed, in pixels per millisecond, for a slide to
/// qualify as a swipe.
pub const SWIPE_MIN_SPEED: f32 = 0.65;

/// Weight of the newest sample in the exponential velocity filter.
///
/// `v' = SMOOTHING * (delta / dt) + (1 - SMOOTHING) * v`
pub const VELOCITY_SMOOTHING: f32 = 0.6;
