//! Monotonic event timestamps
//!
//! The host's event loop owns the clock: every event carries a
//! caller-supplied [`Timestamp`], and all gesture timing is evaluated by
//! comparing those stamps. The library never reads wall time on the input
//! path.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A monotonic timestamp, measured from an arbitrary host-defined origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Create a timestamp from microseconds.
    pub const fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    /// Create a timestamp from milliseconds.
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis * 1000)
    }

    /// Create a timestamp from seconds.
    ///
    /// Negative and non-finite inputs clamp to zero.
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self((secs * 1_000_000.0) as u64)
        } else {
            Self(0)
        }
    }

    /// Create a timestamp from a duration since the origin.
    pub fn from_duration(duration: Duration) -> Self {
        Self(duration.as_micros() as u64)
    }

    /// Get the timestamp as microseconds.
    pub fn as_micros(&self) -> u64 {
        self.0
    }

    /// Get the timestamp as milliseconds.
    pub fn as_millis(&self) -> u64 {
        self.0 / 1000
    }

    /// Get the timestamp as seconds (f64 for precision).
    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Create a zero timestamp.
    pub const fn zero() -> Self {
        Self(0)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::Sub for Timestamp {
    type Output = Duration;

    /// Elapsed time between two stamps, saturating at zero for
    /// out-of-order pairs.
    fn sub(self, rhs: Self) -> Self::Output {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp(self.0.saturating_add(rhs.as_micros() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_conversion() {
        let ts = Timestamp::from_micros(1_500_000);
        assert_eq!(ts.as_millis(), 1500);
        assert!((ts.as_secs_f64() - 1.5).abs() < 0.001);
        assert_eq!(Timestamp::from_millis(20), Timestamp::from_micros(20_000));
    }

    #[test]
    fn test_sub_saturates() {
        let early = Timestamp::from_millis(100);
        let late = Timestamp::from_millis(350);
        assert_eq!(late - early, Duration::from_millis(250));
        assert_eq!(early - late, Duration::ZERO);
    }

    #[test]
    fn test_add_duration() {
        let ts = Timestamp::from_millis(100) + Duration::from_millis(300);
        assert_eq!(ts, Timestamp::from_millis(400));
    }

    #[test]
    fn test_from_secs_clamps_negative() {
        assert_eq!(Timestamp::from_secs_f64(-1.0), Timestamp::zero());
    }
}
