//! stats::sampled — time-average estimation for sampled circular signals.
//!
//! Purpose
//! -------
//! Approximate the time-average of a continuous circular signal that is
//! known only through ordered (value, timestamp) samples. For each
//! consecutive pair of samples the representative value over the interval
//! is the circular midpoint along the *shortest* path between them, and
//! its weight is the elapsed time; the final estimate is the weighted
//! circular mean over the accumulated (midpoint, duration) pairs.
//!
//! Conventions
//! -----------
//! - This is the one stateful component of the crate: a single estimator
//!   instance owns private accumulation state mutated in place by
//!   [`SampledCircSignalAvg::add_measurement`]. Calls must be strictly
//!   ordered by the caller; sharing an instance across threads requires
//!   external synchronization.
//! - Timestamps must be finite and strictly increasing across calls. A
//!   violation is caller misuse of the streaming contract and panics
//!   (fatal precondition), rather than silently reordering.

use crate::circular::range::CircRange;
use crate::circular::value::CircVal;
use crate::stats::mean::circ_weighted_mean;

/// Streaming estimator for the average of a sampled circular signal.
///
/// Purpose
/// -------
/// Turn a time series of circular samples into interval-weighted inputs
/// for the weighted mean solver, using circular linear interpolation: each
/// interval between consecutive samples contributes its shortest-path
/// midpoint, weighted by the interval's duration.
///
/// Key behaviors
/// -------------
/// - [`add_measurement`](Self::add_measurement) ingests one sample and,
///   from the second sample onward, records one (midpoint, duration) pair.
/// - [`average`](Self::average) returns `None` before any sample has been
///   seen, the sample itself after exactly one, and the weighted circular
///   mean of the recorded intervals afterwards. When the weighted mean is
///   tied, the smallest result by range position is returned.
///
/// Invariants
/// ----------
/// - Timestamps are finite and strictly increase across calls (fatal
///   precondition; violated calls panic).
/// - Measurement values are expected to be finite; feeding a NaN-poisoned
///   value breaks the accumulator invariant and causes `average` to panic.
///
/// Examples
/// --------
/// ```rust
/// use circular_stats::circular::{CircVal, UnsignedDegRange};
/// use circular_stats::stats::SampledCircSignalAvg;
///
/// let mut est = SampledCircSignalAvg::<UnsignedDegRange>::new();
/// est.add_measurement(CircVal::new(0.0), 0.0);
/// est.add_measurement(CircVal::new(90.0), 1.0);
/// est.add_measurement(CircVal::new(180.0), 2.0);
///
/// // Intervals: (45°, weight 1) and (135°, weight 1) → average 90°.
/// let avg = est.average().unwrap();
/// assert!(avg.approx_eq(CircVal::new(90.0), 1e-9));
/// ```
#[derive(Debug, Clone)]
pub struct SampledCircSignalAvg<R: CircRange> {
    /// Number of samples ingested so far.
    n_samples: usize,
    /// Most recent sample value.
    prev: CircVal<R>,
    /// Most recent sample timestamp.
    prev_time: f64,
    /// One (shortest-path midpoint, duration) pair per completed interval.
    intervals: Vec<(CircVal<R>, f64)>,
}

impl<R: CircRange> SampledCircSignalAvg<R> {
    /// A fresh estimator with no samples.
    pub fn new() -> Self {
        SampledCircSignalAvg {
            n_samples: 0,
            prev: CircVal::zero(),
            prev_time: 0.0,
            intervals: Vec::new(),
        }
    }

    /// Ingest one (value, timestamp) sample.
    ///
    /// From the second sample onward, records the circular midpoint along
    /// the shortest path from the previous value, weighted by the elapsed
    /// time since the previous sample.
    ///
    /// Panics
    /// ------
    /// - If `time` is non-finite, or not strictly greater than the
    ///   previous timestamp (for the second and later samples). This is a
    ///   contract violation of the streaming interface, not a recoverable
    ///   error.
    pub fn add_measurement(&mut self, c: CircVal<R>, time: f64) {
        assert!(time.is_finite(), "measurement time must be finite, got {time}");
        if self.n_samples > 0 {
            assert!(
                time > self.prev_time,
                "measurement times must be strictly increasing ({} after {})",
                time,
                self.prev_time,
            );

            let midpoint = CircVal::new(self.prev.value() + self.prev.sdist(c) / 2.0);
            self.intervals.push((midpoint, time - self.prev_time));
        }

        self.prev = c;
        self.prev_time = time;
        self.n_samples += 1;
    }

    /// Number of samples ingested so far.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// The estimated time-average of the signal.
    ///
    /// Returns
    /// -------
    /// - `None` if no sample has been ingested (no result exists).
    /// - The sole sample's value if exactly one has been ingested.
    /// - Otherwise the weighted circular mean of the recorded intervals;
    ///   when the mean set is tied, its smallest member by range position.
    pub fn average(&self) -> Option<CircVal<R>> {
        match self.n_samples {
            0 => None,
            1 => Some(self.prev),
            _ => {
                let means = circ_weighted_mean(&self.intervals)
                    .expect("interval accumulator holds finite, positively-timed entries");
                means.first().copied()
            }
        }
    }
}

impl<R: CircRange> Default for SampledCircSignalAvg<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circular::range::UnsignedDegRange;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The zero-, one-, and many-sample contracts of `average`.
    // - Interval midpoint interpolation along the shortest path, including
    //   across the wrap seam.
    // - Unequal interval durations weighting the estimate.
    // - The fatal precondition on timestamp ordering.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the empty and singleton contracts.
    //
    // Given
    // -----
    // - A fresh estimator, then one sample at 42°.
    //
    // Expect
    // ------
    // - `average` is None before any sample and Some(42°) after one.
    fn zero_and_one_sample_contracts() {
        // Arrange
        let mut est = SampledCircSignalAvg::<UnsignedDegRange>::new();

        // Act & Assert: no samples
        assert!(est.average().is_none());

        // Act & Assert: one sample
        est.add_measurement(CircVal::new(42.0), 0.0);
        let avg = est.average().expect("one sample yields a result");
        assert!(avg.approx_eq(CircVal::new(42.0), 1e-12));
        assert_eq!(est.n_samples(), 1);
    }

    #[test]
    // Purpose
    // -------
    // Verify the three-sample scenario: equal intervals produce the
    // unweighted mean of the interval midpoints.
    //
    // Given
    // -----
    // - Samples (0°, t=0), (90°, t=1), (180°, t=2).
    //
    // Expect
    // ------
    // - Intervals (45°, 1) and (135°, 1); the average is 90°.
    fn equal_intervals_average_the_midpoints() {
        // Arrange
        let mut est = SampledCircSignalAvg::<UnsignedDegRange>::new();
        est.add_measurement(CircVal::new(0.0), 0.0);
        est.add_measurement(CircVal::new(90.0), 1.0);
        est.add_measurement(CircVal::new(180.0), 2.0);

        // Act
        let avg = est.average().expect("three samples yield a result");

        // Assert
        assert!(avg.approx_eq(CircVal::new(90.0), 1e-9), "got {avg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that interpolation follows the shortest path across the wrap
    // seam, not the increasing direction.
    //
    // Given
    // -----
    // - Samples (350°, t=0), (10°, t=1).
    //
    // Expect
    // ------
    // - The single interval midpoint is 0° (across the seam), so the
    //   average is 0°.
    fn interpolation_crosses_the_seam_on_the_short_side() {
        // Arrange
        let mut est = SampledCircSignalAvg::<UnsignedDegRange>::new();
        est.add_measurement(CircVal::new(350.0), 0.0);
        est.add_measurement(CircVal::new(10.0), 1.0);

        // Act
        let avg = est.average().expect("two samples yield a result");

        // Assert
        assert!(avg.approx_eq(CircVal::new(0.0), 1e-9), "got {avg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that longer intervals weigh more in the estimate.
    //
    // Given
    // -----
    // - Samples (0°, t=0), (20°, t=1), (40°, t=4): interval midpoints 10°
    //   (weight 1) and 30° (weight 3).
    //
    // Expect
    // ------
    // - The average is the weighted mean (1·10 + 3·30)/4 = 25°.
    fn longer_intervals_weigh_more() {
        // Arrange
        let mut est = SampledCircSignalAvg::<UnsignedDegRange>::new();
        est.add_measurement(CircVal::new(0.0), 0.0);
        est.add_measurement(CircVal::new(20.0), 1.0);
        est.add_measurement(CircVal::new(40.0), 4.0);

        // Act
        let avg = est.average().expect("three samples yield a result");

        // Assert
        assert!(avg.approx_eq(CircVal::new(25.0), 1e-9), "got {avg}");
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    // Purpose
    // -------
    // Verify that a non-monotonic timestamp is a fatal precondition
    // violation.
    //
    // Given
    // -----
    // - A second measurement stamped at the same time as the first.
    //
    // Expect
    // ------
    // - `add_measurement` panics; the streaming contract defines no
    //   recovery.
    fn non_monotonic_timestamps_panic() {
        // Arrange
        let mut est = SampledCircSignalAvg::<UnsignedDegRange>::new();
        est.add_measurement(CircVal::new(10.0), 1.0);

        // Act: violates the strictly-increasing precondition
        est.add_measurement(CircVal::new(20.0), 1.0);
    }
}
