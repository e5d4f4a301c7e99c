//! Exact time points at microsecond resolution.
//!
//! The recognizer reports word boundaries as a seconds-plus-microseconds
//! pair. Keeping the pair instead of a float preserves exact values
//! through segmentation; conversion to milliseconds happens only at the
//! audio-sampling and subtitle-formatting edges.

use serde::{Deserialize, Serialize};

pub const MICROS_PER_SEC: u64 = 1_000_000;

/// A point in time relative to the start of the source audio.
///
/// `micros` is kept below 1_000_000; constructors normalize the carry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct TimePoint {
    /// Whole seconds.
    #[serde(default)]
    pub secs: u64,
    /// Microseconds past the whole second.
    #[serde(default)]
    pub micros: u32,
}

impl TimePoint {
    pub const ZERO: TimePoint = TimePoint { secs: 0, micros: 0 };

    /// Create a time point, normalizing any microsecond carry.
    pub fn new(secs: u64, micros: u64) -> Self {
        Self {
            secs: secs + micros / MICROS_PER_SEC,
            micros: (micros % MICROS_PER_SEC) as u32,
        }
    }

    /// Build from a total microsecond offset.
    pub fn from_micros(total: u64) -> Self {
        Self::new(0, total)
    }

    /// Build from fractional seconds, truncating below microsecond
    /// resolution. Negative inputs clamp to zero.
    pub fn from_secs_f64(secs: f64) -> Self {
        Self::from_micros((secs.max(0.0) * MICROS_PER_SEC as f64) as u64)
    }

    /// Total offset in microseconds.
    pub fn total_micros(&self) -> u64 {
        self.secs * MICROS_PER_SEC + self.micros as u64
    }

    /// Total offset in milliseconds, truncating sub-millisecond digits.
    pub fn total_millis(&self) -> u64 {
        self.total_micros() / 1_000
    }

    /// Offset as fractional seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.secs as f64 + self.micros as f64 / MICROS_PER_SEC as f64
    }

    /// Microseconds from `earlier` to `self`, zero if `earlier` is later.
    pub fn saturating_micros_since(&self, earlier: TimePoint) -> u64 {
        self.total_micros().saturating_sub(earlier.total_micros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carry_normalization() {
        let t = TimePoint::new(1, 2_500_000);
        assert_eq!(t.secs, 3);
        assert_eq!(t.micros, 500_000);
        assert_eq!(t, TimePoint::from_micros(3_500_000));
    }

    #[test]
    fn test_ordering_matches_total_micros() {
        let a = TimePoint::new(1, 999_999);
        let b = TimePoint::new(2, 0);
        assert!(a < b);
        assert!(b > TimePoint::ZERO);
    }

    #[test]
    fn test_conversions() {
        let t = TimePoint::new(6, 200_000);
        assert_eq!(t.total_micros(), 6_200_000);
        assert_eq!(t.total_millis(), 6_200);
        assert!((t.as_secs_f64() - 6.2).abs() < 1e-9);
    }

    #[test]
    fn test_from_secs_f64_truncates() {
        let t = TimePoint::from_secs_f64(1.2345678);
        assert_eq!(t.total_micros(), 1_234_567);
        assert_eq!(TimePoint::from_secs_f64(-1.0), TimePoint::ZERO);
    }

    #[test]
    fn test_saturating_since() {
        let a = TimePoint::new(10, 0);
        let b = TimePoint::new(13, 500_000);
        assert_eq!(b.saturating_micros_since(a), 3_500_000);
        assert_eq!(a.saturating_micros_since(b), 0);
    }
}
