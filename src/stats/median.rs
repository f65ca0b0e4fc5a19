//! stats::median — the circular median solver.
//!
//! Purpose
//! -------
//! Compute, exactly, the set of circular values x minimizing the total
//! absolute wrap-aware distance Σ |sdist(x, aᵢ)| to a sample. Unlike the
//! linear median, the minimizer is not guaranteed to be one of the input
//! points, so candidate generation is the crux; the search is finite and
//! discrete (at most O(n) candidates), making the solver exact rather than
//! a heuristic approximation.
//!
//! Key behaviors
//! -------------
//! - Odd sample count: the candidates are exactly the distinct input
//!   values (duplicates collapse by set semantics).
//! - Even sample count: the sample is sorted by position; for every pair
//!   of circularly-adjacent values (wrapping the last to the first), the
//!   candidate is the element advanced by half the signed distance to its
//!   successor. When that signed distance is exactly −R/2 (an antipodal
//!   pair), the symmetric half-point from the successor's side is added
//!   too, since both are equally valid in that degenerate case.
//! - Every candidate is evaluated against the full sample; the global
//!   minimum and all candidates attaining it (exact floating equality)
//!   form the result set, deduplicated and sorted ascending by position.
//!
//! Conventions
//! -----------
//! - O(n²): each of the O(n) candidates is scored against all n inputs.
//! - Empty samples are reported as `CircStatError::EmptySample`.

use crate::circular::range::CircRange;
use crate::circular::value::CircVal;
use crate::stats::errors::CircStatResult;
use crate::stats::validation::validate_sample;

/// Compute the set of circular medians of a sample.
///
/// Parameters
/// ----------
/// - `sample`: `&[CircVal<R>]`
///   Non-empty sample of circular values; order is irrelevant to the
///   statistic. All positions must be finite.
///
/// Returns
/// -------
/// `CircStatResult<Vec<CircVal<R>>>`
///   The non-empty set of values minimizing Σ |sdist(x, aᵢ)|, deduplicated
///   and sorted ascending by range position.
///
/// Errors
/// ------
/// - `CircStatError::EmptySample` for an empty sample (an empty sample has
///   no circular median).
/// - `CircStatError::NonFiniteValue(v)` if a position is NaN or ±∞.
///
/// Examples
/// --------
/// ```rust
/// use circular_stats::circular::{CircVal, UnsignedDegRange};
/// use circular_stats::stats::circ_median;
///
/// let sample = [
///     CircVal::<UnsignedDegRange>::new(10.0),
///     CircVal::new(20.0),
///     CircVal::new(30.0),
/// ];
/// let medians = circ_median(&sample).unwrap();
/// assert_eq!(medians.len(), 1);
/// assert!(medians[0].approx_eq(CircVal::new(20.0), 1e-9));
/// ```
pub fn circ_median<R: CircRange>(sample: &[CircVal<R>]) -> CircStatResult<Vec<CircVal<R>>> {
    validate_sample(sample)?;

    let mut candidates = if sample.len() % 2 == 0 {
        even_count_candidates(sample)
    } else {
        sample.iter().map(|c| c.value()).collect()
    };

    // set semantics: collapse duplicates before scoring
    candidates.sort_by(f64::total_cmp);
    candidates.dedup();

    let mut min_sum = f64::INFINITY;
    let mut best: Vec<f64> = Vec::new();
    for &b in &candidates {
        let cand = CircVal::<R>::new(b);
        let sum: f64 = sample.iter().map(|&a| cand.sdist(a).abs()).sum();

        if sum < min_sum {
            best.clear();
            best.push(b);
            min_sum = sum;
        } else if sum == min_sum {
            best.push(b);
        }
    }

    let mut out: Vec<CircVal<R>> = best.into_iter().map(CircVal::new).collect();
    out.sort_by(|a, b| a.value().total_cmp(&b.value()));
    out.dedup();
    Ok(out)
}

/// Candidate positions for an even-count sample: the circular midpoint of
/// every circularly-adjacent sorted pair, plus the symmetric midpoint when
/// a pair is exactly antipodal.
fn even_count_candidates<R: CircRange>(sample: &[CircVal<R>]) -> Vec<f64> {
    let mut sorted: Vec<f64> = sample.iter().map(|c| c.value()).collect();
    sorted.sort_by(f64::total_cmp);

    let mut candidates = Vec::with_capacity(sorted.len() + 1);
    for m in 0..sorted.len() {
        let n = (m + 1) % sorted.len();
        let d = CircVal::<R>::new(sorted[m]).sdist(CircVal::new(sorted[n]));

        candidates.push(CircVal::<R>::wrap(sorted[m] + d / 2.0));
        if d == -R::R_2 {
            // antipodal pair: both half-points are equally valid
            candidates.push(CircVal::<R>::wrap(sorted[n] + d / 2.0));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circular::range::UnsignedDegRange;
    use crate::stats::errors::CircStatError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The odd-count scenario with a unique middle value.
    // - The even-count uniform-gap scenario and its symmetric tie set.
    // - The degenerate antipodal pair with both half-points.
    // - Duplicate collapse and error surfacing.
    //
    // They intentionally DO NOT cover:
    // - Cross-checks against brute-force grid search; those live in the
    //   integration tests.
    // -------------------------------------------------------------------------

    fn deg(vals: &[f64]) -> Vec<CircVal<UnsignedDegRange>> {
        vals.iter().map(|&v| CircVal::new(v)).collect()
    }

    #[test]
    // Purpose
    // -------
    // Verify the odd-count case: with uniform small gaps the middle value
    // by sorted order is the unique median.
    //
    // Given
    // -----
    // - Headings {10°, 20°, 30°}.
    //
    // Expect
    // ------
    // - The result set is exactly {20°}.
    fn odd_count_median_is_the_middle_value() {
        // Arrange
        let sample = deg(&[10.0, 20.0, 30.0]);

        // Act
        let medians = circ_median(&sample).expect("non-empty sample");

        // Assert
        assert_eq!(medians.len(), 1, "expected a unique median, got {medians:?}");
        assert!(medians[0].approx_eq(CircVal::new(20.0), 1e-9));
    }

    #[test]
    // Purpose
    // -------
    // Verify the even-count case with all pairwise gaps equal: every
    // adjacent midpoint ties, and the tie set is antipode-symmetric.
    //
    // Given
    // -----
    // - Headings {0°, 90°, 180°, 270°}.
    //
    // Expect
    // ------
    // - A non-empty tie set; for every member its antipode is also a
    //   member; every member scores the same total absolute distance.
    fn even_count_uniform_gaps_produce_symmetric_tie_set() {
        // Arrange
        let sample = deg(&[0.0, 90.0, 180.0, 270.0]);

        // Act
        let medians = circ_median(&sample).expect("non-empty sample");

        // Assert: non-empty and symmetric under the antipode
        assert!(!medians.is_empty());
        for &m in &medians {
            let antipode = m.opposite();
            assert!(
                medians.iter().any(|&x| x.approx_eq(antipode, 1e-9)),
                "antipode of {m} missing from {medians:?}"
            );
        }

        // Assert: all members attain the same objective
        let score = |x: CircVal<UnsignedDegRange>| -> f64 {
            sample.iter().map(|&a| x.sdist(a).abs()).sum()
        };
        let s0 = score(medians[0]);
        for &m in &medians[1..] {
            assert_eq!(score(m), s0, "tied members must score identically");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the degenerate even case: an exactly antipodal pair admits
    // both half-points.
    //
    // Given
    // -----
    // - Headings {0°, 180°}.
    //
    // Expect
    // ------
    // - The result set is {90°, 270°}.
    fn antipodal_pair_yields_both_half_points() {
        // Arrange
        let sample = deg(&[0.0, 180.0]);

        // Act
        let medians = circ_median(&sample).expect("non-empty sample");

        // Assert
        assert_eq!(medians.len(), 2, "expected both half-points, got {medians:?}");
        assert!(medians[0].approx_eq(CircVal::new(90.0), 1e-9));
        assert!(medians[1].approx_eq(CircVal::new(270.0), 1e-9));
    }

    #[test]
    // Purpose
    // -------
    // Verify that duplicated inputs collapse via set semantics before
    // scoring and do not distort the result.
    //
    // Given
    // -----
    // - Headings {10°, 10°, 10°, 40°, 50°} (odd count with duplicates).
    //
    // Expect
    // ------
    // - The result set is {10°}: the tripled value dominates the absolute
    //   distance sum.
    fn duplicate_inputs_collapse_but_still_weigh_in() {
        // Arrange
        let sample = deg(&[10.0, 10.0, 10.0, 40.0, 50.0]);

        // Act
        let medians = circ_median(&sample).expect("non-empty sample");

        // Assert
        assert_eq!(medians.len(), 1);
        assert!(medians[0].approx_eq(CircVal::new(10.0), 1e-9), "got {medians:?}");
    }

    #[test]
    // Purpose
    // -------
    // Verify the even-count midpoint rule on a sample whose adjacent gap
    // crosses the wrap seam.
    //
    // Given
    // -----
    // - Headings {350°, 10°}: sorted order is {10°, 350°}, and the
    //   circular walk from 350° wraps to 10°.
    //
    // Expect
    // ------
    // - The result set is {0°} (the midpoint across the seam), not 180°.
    fn even_count_midpoint_crosses_the_seam() {
        // Arrange
        let sample = deg(&[350.0, 10.0]);

        // Act
        let medians = circ_median(&sample).expect("non-empty sample");

        // Assert
        assert_eq!(medians.len(), 1, "got {medians:?}");
        assert!(medians[0].approx_eq(CircVal::new(0.0), 1e-9), "got {medians:?}");
    }

    #[test]
    // Purpose
    // -------
    // Verify error surfacing for empty and poisoned samples.
    //
    // Given
    // -----
    // - An empty sample and a sample containing NaN.
    //
    // Expect
    // ------
    // - EmptySample and NonFiniteValue respectively.
    fn invalid_inputs_return_errors() {
        // Arrange
        let empty: Vec<CircVal<UnsignedDegRange>> = Vec::new();
        let poisoned = vec![CircVal::<UnsignedDegRange>::new(f64::INFINITY)];

        // Act & Assert
        assert_eq!(circ_median(&empty), Err(CircStatError::EmptySample));
        assert!(matches!(circ_median(&poisoned), Err(CircStatError::NonFiniteValue(_))));
    }
}
