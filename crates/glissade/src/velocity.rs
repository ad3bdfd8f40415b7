//! Exponentially smoothed pointer velocity.
//!
//! Slides report how fast the pointer is moving as a single scalar in
//! pixels per millisecond. Instantaneous `delta / dt` readings from real
//! input are noisy, so each sample is folded into an IIR filter that
//! favors the newest reading while keeping a fraction of the history.

use crate::gesture_constants::VELOCITY_SMOOTHING;

/// One filter step: blends the instantaneous `delta / dt_ms` reading
/// with the previous smoothed value.
///
/// A non-positive `dt_ms` (duplicate or out-of-order timestamps) leaves
/// the previous value unchanged instead of producing a non-finite
/// reading.
pub fn smooth_velocity(previous: f32, delta: f32, dt_ms: f32) -> f32 {
    if dt_ms <= 0.0 {
        return previous;
    }
    VELOCITY_SMOOTHING * (delta / dt_ms) + (1.0 - VELOCITY_SMOOTHING) * previous
}

/// Running smoothed velocity for one gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothedVelocity {
    value: f32,
}

impl SmoothedVelocity {
    pub fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Folds a movement of `delta` pixels over `dt_ms` milliseconds into
    /// the running value.
    pub fn sample(&mut self, delta: f32, dt_ms: f32) {
        self.value = smooth_velocity(self.value, delta, dt_ms);
    }

    /// Current smoothed velocity in pixels per millisecond.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_weighted_by_smoothing_factor() {
        let mut velocity = SmoothedVelocity::new();
        velocity.sample(10.0, 10.0);
        // 0.6 * (10 / 10) + 0.4 * 0
        assert!((velocity.value() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn converges_toward_constant_speed() {
        let mut velocity = SmoothedVelocity::new();
        for _ in 0..20 {
            velocity.sample(20.0, 10.0);
        }
        assert!(
            (velocity.value() - 2.0).abs() < 1e-3,
            "expected ~2.0 px/ms, got {}",
            velocity.value()
        );
    }

    #[test]
    fn keeps_history_fraction() {
        // Second sample mixes 40% of the first reading back in.
        let second = smooth_velocity(smooth_velocity(0.0, 10.0, 10.0), 0.0, 10.0);
        assert!((second - 0.24).abs() < 1e-6);
    }

    #[test]
    fn negative_delta_yields_negative_velocity() {
        let mut velocity = SmoothedVelocity::new();
        velocity.sample(-15.0, 10.0);
        assert!(velocity.value() < 0.0);
    }

    #[test]
    fn zero_dt_leaves_value_unchanged() {
        let mut velocity = SmoothedVelocity::new();
        velocity.sample(10.0, 10.0);
        let before = velocity.value();
        velocity.sample(50.0, 0.0);
        assert_eq!(velocity.value(), before);
    }

    #[test]
    fn reset_clears_reading() {
        let mut velocity = SmoothedVelocity::new();
        velocity.sample(10.0, 10.0);
        velocity.reset();
        assert_eq!(velocity.value(), 0.0);
    }
}
