//! stats::mean — the circular mean solver (unweighted and weighted).
//!
//! Purpose
//! -------
//! Compute, exactly, the set of circular values x minimizing the total
//! squared wrap-aware distance Σ wᵢ·sdist(x, aᵢ)² to a sample. Unlike the
//! linear mean, the circular mean is the solution of a global optimization
//! problem and is generically non-unique (any two antipodal points are
//! equally good means of a uniform antipodal pair), so every entry point
//! returns the full set of global minimizers.
//!
//! Key behaviors
//! -------------
//! - [`circ_mean`] and [`circ_weighted_mean`] run the sector-scan
//!   algorithm: for a *fixed* split of the sample into "near" and "far"
//!   halves relative to a candidate mean x, the objective is an ordinary
//!   quadratic in x; the split only changes at the discrete thresholds
//!   where a sample crosses exactly R/2 from the candidate. Scanning the
//!   at most 2(n+1) sectors those thresholds induce, and accepting each
//!   sector's closed-form minimizer only when it falls inside its sector,
//!   yields the exact global minimum in O(n log n).
//! - [`circ_mean_by_rotation`] is an equivalent formulation: the circular
//!   mean is always the plain arithmetic mean of the sorted sample after
//!   rotating some prefix up by one full range, so scanning the n possible
//!   prefix rotations and keeping the minimal-variance ones gives the same
//!   result set. Agreement of the two formulations is verified by tests,
//!   not assumed.
//! - Ties are detected by exact floating equality of the objective sums,
//!   so numerically identical sector minimizers collapse into one entry.
//!
//! Invariants & assumptions
//! ------------------------
//! - All computation happens on canonical positions in [0, R) (the
//!   increasing walk from the range's zero reference), in the range's own
//!   scale; winners are converted back to the caller's range at the end.
//! - Result vectors are deduplicated and sorted ascending by range
//!   position; they are non-empty whenever the input is non-empty.
//! - Weights are validated to be finite and non-negative. An all-zero
//!   weighting makes the objective identically zero; the scan then
//!   degenerates to the boundary candidate alone (the sector minimizers
//!   become 0/0 = NaN and are never accepted).
//!
//! Conventions
//! -----------
//! - Empty samples are reported as
//!   [`CircStatError::EmptySample`](crate::stats::errors::CircStatError);
//!   nothing is retried and there is no partial result.

use crate::circular::range::CircRange;
use crate::circular::value::CircVal;
use crate::stats::errors::CircStatResult;
use crate::stats::validation::{validate_sample, validate_weighted_sample};

/// Compute the set of circular means of an unweighted sample.
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
///   The non-empty set of values minimizing Σ sdist(x, aᵢ)², deduplicated
///   and sorted ascending by range position.
///
/// Errors
/// ------
/// - `CircStatError::EmptySample` for an empty sample (an empty sample has
///   no circular mean).
/// - `CircStatError::NonFiniteValue(v)` if a position is NaN or ±∞.
///
/// Notes
/// -----
/// - Runs in O(n log n); dominated by two sorts of the half-split sample.
///
/// Examples
/// --------
/// ```rust
/// use circular_stats::circular::{CircVal, UnsignedDegRange};
/// use circular_stats::stats::circ_mean;
///
/// // A symmetric pair around north: the shortest arcs cancel at 0°.
/// let sample = [CircVal::<UnsignedDegRange>::new(10.0), CircVal::new(350.0)];
/// let means = circ_mean(&sample).unwrap();
/// assert_eq!(means.len(), 1);
/// assert!(means[0].approx_eq(CircVal::new(0.0), 1e-9));
///
/// // An antipodal pair: two equally valid global minima.
/// let sample = [CircVal::<UnsignedDegRange>::new(0.0), CircVal::new(180.0)];
/// let means = circ_mean(&sample).unwrap();
/// assert_eq!(means.len(), 2);
/// ```
pub fn circ_mean<R: CircRange>(sample: &[CircVal<R>]) -> CircStatResult<Vec<CircVal<R>>> {
    validate_sample(sample)?;
    let canon: Vec<(f64, f64)> = sample.iter().map(|&c| (canonical(c), 1.0)).collect();
    Ok(collect(sector_scan(&canon, R::R)))
}

/// Compute the set of weighted circular means of a sample of
/// (value, weight) pairs.
///
/// Structurally identical to [`circ_mean`] with the weights folded into
/// every sum; the unweighted mean is the special case of all weights
/// equal, and an equal-weight call returns the same result set as
/// [`circ_mean`] on the bare values.
///
/// Errors
/// ------
/// - `CircStatError::EmptySample` for an empty sample.
/// - `CircStatError::NonFiniteValue(v)` if a position is NaN or ±∞.
/// - `CircStatError::InvalidWeight(w)` if a weight is negative or
///   non-finite.
pub fn circ_weighted_mean<R: CircRange>(
    sample: &[(CircVal<R>, f64)],
) -> CircStatResult<Vec<CircVal<R>>> {
    validate_weighted_sample(sample)?;
    let canon: Vec<(f64, f64)> = sample.iter().map(|&(c, w)| (canonical(c), w)).collect();
    Ok(collect(sector_scan(&canon, R::R)))
}

/// Compute the set of circular means by the rotation-index formulation.
///
/// The circular mean of a sorted sample is always its plain arithmetic
/// mean viewed after rotating some prefix of the sorted values up by one
/// full range; this entry point scans all n prefix rotations with an
/// incrementally maintained sum of squares and keeps the rotations of
/// minimal objective. It must agree with [`circ_mean`] on every input
/// (verified by tests); it exists as an independent formulation, not as an
/// optimization.
///
/// Errors
/// ------
/// Identical to [`circ_mean`].
pub fn circ_mean_by_rotation<R: CircRange>(
    sample: &[CircVal<R>],
) -> CircStatResult<Vec<CircVal<R>>> {
    validate_sample(sample)?;
    let full = R::R;
    let n = sample.len() as f64;

    let mut angles: Vec<f64> = sample.iter().map(|&c| canonical(c)).collect();
    angles.sort_by(f64::total_cmp);

    let sum: f64 = angles.iter().sum();
    let mut sum_sqr: f64 = angles.iter().map(|&v| v * v).sum();

    // unshifted order first
    let mut min_sum = sum_sqr - sum * sum / n;
    let mut shifts: Vec<usize> = vec![0];

    for i in 1..angles.len() {
        // move angles[i-1] up by one full range: (v + R)² = v² + 2Rv + R²
        sum_sqr += 2.0 * full * angles[i - 1];
        let shifted_sum = sum + full * i as f64;
        let s = sum_sqr + full * full * i as f64 - shifted_sum * shifted_sum / n;

        if s < min_sum {
            shifts = vec![i];
            min_sum = s;
        } else if s == min_sum {
            shifts.push(i);
        }
    }

    let positions = shifts.into_iter().map(|i| (sum + full * i as f64) / n).collect();
    Ok(collect(positions))
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Canonical position of a value: the increasing walk from the range's
/// zero reference, in [0, R).
#[inline]
fn canonical<R: CircRange>(c: CircVal<R>) -> f64 {
    CircVal::<R>::zero().pdist(c)
}

/// Inverse of [`canonical`]: re-anchor a canonical position at the zero
/// reference and wrap into the range.
#[inline]
fn from_canonical<R: CircRange>(u: f64) -> CircVal<R> {
    CircVal::new(u + R::Z)
}

/// Convert winning canonical positions back into the caller's range,
/// sorted ascending by range position and exactly deduplicated.
fn collect<R: CircRange>(positions: Vec<f64>) -> Vec<CircVal<R>> {
    let mut out: Vec<CircVal<R>> = positions.into_iter().map(|u| from_canonical(u)).collect();
    out.sort_by(|a, b| a.value().total_cmp(&b.value()));
    out.dedup();
    out
}

/// Record a candidate if it improves or ties the running minimum.
///
/// Exact floating equality is deliberate: numerically identical sector
/// minimizers must collapse into a single result entry, and distinct local
/// minima only join the set when their objectives agree to the last bit.
#[inline]
fn track_min(x: f64, s: f64, min_sum: &mut f64, best: &mut Vec<f64>) {
    if s < *min_sum {
        best.clear();
        best.push(x);
        *min_sum = s;
    } else if s == *min_sum {
        best.push(x);
    }
}

/// Σ wᵢ·dist(x, aᵢ)² when the far set D (values more than R/2 *below* x,
/// reached by walking down through the wrap point) has weight `far_w` and
/// weighted position sum `far_wa`.
///
/// For a near value: dist = x − aᵢ. For a far value: dist = R − (x − aᵢ).
/// Expanding both squares over the whole sample gives
/// Σwᵢaᵢ² + x²Σwᵢ − 2xΣwᵢaᵢ + 2R·Σ_D wᵢaᵢ + (R² − 2Rx)·Σ_D wᵢ.
#[inline]
fn sum_sqr_far_below(
    x: f64, sum_w: f64, sum_wa: f64, sum_wa2: f64, far_w: f64, far_wa: f64, full: f64,
) -> f64 {
    sum_wa2 + x * x * sum_w - 2.0 * x * sum_wa
        + 2.0 * full * far_wa
        + (full * full - 2.0 * full * x) * far_w
}

/// Σ wᵢ·dist(x, aᵢ)² when the far set C (values more than R/2 *above* x)
/// has weight `far_w` and weighted position sum `far_wa`.
///
/// For a far value: dist = R − (aᵢ − x), giving the mirrored expansion
/// Σwᵢaᵢ² + x²Σwᵢ − 2xΣwᵢaᵢ − 2R·Σ_C wᵢaᵢ + (R² + 2Rx)·Σ_C wᵢ.
#[inline]
fn sum_sqr_far_above(
    x: f64, sum_w: f64, sum_wa: f64, sum_wa2: f64, far_w: f64, far_wa: f64, full: f64,
) -> f64 {
    sum_wa2 + x * x * sum_w - 2.0 * x * sum_wa - 2.0 * full * far_wa
        + (full * full + 2.0 * full * x) * far_w
}

/// Scan all sectors of the candidate domain [0, R) and return the
/// canonical positions attaining the global minimum objective.
///
/// `canon` holds (canonical position, weight) pairs. Candidates below R/2
/// see their far set grow from the *top* of the range downward; candidates
/// above R/2 see it grow from the *bottom* upward; the thresholds are the
/// sample positions shifted by R/2. Each sector's unconstrained minimizer
/// is the weighted arithmetic mean of the data with the far set translated
/// by ±R; it is accepted only if it actually falls inside its sector (the
/// sector's boundary values are covered by the adjacent sectors and the
/// fixed boundary candidate at exactly R/2).
fn sector_scan(canon: &[(f64, f64)], full: f64) -> Vec<f64> {
    let half = full / 2.0;

    let mut sum_w = 0.0;
    let mut sum_wa = 0.0;
    let mut sum_wa2 = 0.0;
    let mut lower: Vec<(f64, f64)> = Vec::new(); // positions < R/2, ascending
    let mut upper: Vec<(f64, f64)> = Vec::new(); // positions > R/2, descending

    for &(u, w) in canon {
        sum_w += w;
        sum_wa += w * u;
        sum_wa2 += w * u * u;
        if u < half {
            lower.push((u, w));
        } else if u > half {
            upper.push((u, w));
        }
    }
    lower.sort_by(|a, b| a.0.total_cmp(&b.0));
    upper.sort_by(|a, b| b.0.total_cmp(&a.0));

    // boundary candidate at exactly R/2, where both far sets are empty:
    // Σwᵢaᵢ² + (R/2)²Σwᵢ − RΣwᵢaᵢ
    let mut best = vec![half];
    let mut min_sum = half * half * sum_w - full * sum_wa + sum_wa2;

    // candidates in (R/2, R): the far set D grows by one value each time x
    // crosses a lower position + R/2
    let mut sector_lo = half;
    let mut far_w = 0.0;
    let mut far_wa = 0.0;
    for &(u, w) in &lower {
        let x = (sum_wa + full * far_w) / sum_w;
        if x > sector_lo && x <= u + half {
            let s = sum_sqr_far_below(x, sum_w, sum_wa, sum_wa2, far_w, far_wa, full);
            track_min(x, s, &mut min_sum, &mut best);
        }
        sector_lo = u + half;
        far_w += w;
        far_wa += w * u;
    }
    let x = (sum_wa + full * far_w) / sum_w;
    if x > sector_lo && x < full {
        let s = sum_sqr_far_below(x, sum_w, sum_wa, sum_wa2, far_w, far_wa, full);
        track_min(x, s, &mut min_sum, &mut best);
    }

    // candidates in [0, R/2): the far set C grows by one value each time x
    // crosses an upper position − R/2, scanning downward
    let mut sector_hi = half;
    far_w = 0.0;
    far_wa = 0.0;
    for &(u, w) in &upper {
        let x = (sum_wa - full * far_w) / sum_w;
        if x >= u - half && x < sector_hi {
            let s = sum_sqr_far_above(x, sum_w, sum_wa, sum_wa2, far_w, far_wa, full);
            track_min(x, s, &mut min_sum, &mut best);
        }
        sector_hi = u - half;
        far_w += w;
        far_wa += w * u;
    }
    let x = (sum_wa - full * far_w) / sum_w;
    if x >= 0.0 && x < sector_hi {
        let s = sum_sqr_far_above(x, sum_w, sum_wa, sum_wa2, far_w, far_wa, full);
        track_min(x, s, &mut min_sum, &mut best);
    }

    best
}
