//! Gesture recognition thresholds

use serde::{Deserialize, Serialize};
use std::time::Duration;

use tactile_core::{InputError, Result};

/// Tunable thresholds for gesture classification
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Maximum travel for a release to count as a tap, in host units
    /// (default: 10.0)
    pub tap_move_tolerance: f32,
    /// Minimum hold duration for a long press (default: 500ms)
    pub long_press_threshold: Duration,
    /// Window within which consecutive taps fuse into double/triple taps
    /// (default: 300ms)
    pub multi_tap_window: Duration,
    /// Maximum distance between consecutive taps for them to fuse
    /// (default: 30.0)
    pub tap_position_tolerance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_move_tolerance: 10.0,
            long_press_threshold: Duration::from_millis(500),
            multi_tap_window: Duration::from_millis(300),
            tap_position_tolerance: 30.0,
        }
    }
}

impl GestureConfig {
    /// Check that every threshold is in its valid range.
    pub fn validate(&self) -> Result<()> {
        if !self.tap_move_tolerance.is_finite() || self.tap_move_tolerance < 0.0 {
            return Err(InputError::InvalidConfig(format!(
                "tap_move_tolerance must be finite and non-negative, got {}",
                self.tap_move_tolerance
            )));
        }
        if !self.tap_position_tolerance.is_finite() || self.tap_position_tolerance < 0.0 {
            return Err(InputError::InvalidConfig(format!(
                "tap_position_tolerance must be finite and non-negative, got {}",
                self.tap_position_tolerance
            )));
        }
        if self.long_press_threshold.is_zero() {
            return Err(InputError::InvalidConfig(
                "long_press_threshold must be non-zero".into(),
            ));
        }
        if self.multi_tap_window.is_zero() {
            return Err(InputError::InvalidConfig(
                "multi_tap_window must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
