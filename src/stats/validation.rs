//! stats::validation — shared input guards for the statistics solvers.
//!
//! Purpose
//! -------
//! Centralize input validation for the mean and median entry points. This
//! keeps the empty-sample, finiteness, and weight checks in one place so
//! every solver reports identical errors for identical misuse.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond what error construction requires.
//! - A successful return guarantees the sample is non-empty, every stored
//!   position is finite, and (for weighted samples) every weight is finite
//!   and non-negative. It does not guarantee positive total weight; an
//!   all-zero weighting degenerates the objective and is handled by the
//!   solver itself.

use crate::circular::range::CircRange;
use crate::circular::value::CircVal;
use crate::stats::errors::{CircStatError, CircStatResult};

/// Validate an unweighted sample: non-empty, all positions finite.
///
/// Errors
/// ------
/// - `CircStatError::EmptySample` when `sample.is_empty()`.
/// - `CircStatError::NonFiniteValue(value)` for the first NaN/±∞ position.
///
/// Examples
/// --------
/// ```rust
/// use circular_stats::circular::{CircVal, UnsignedDegRange};
/// use circular_stats::stats::{validation::validate_sample, CircStatError};
///
/// let sample = [CircVal::<UnsignedDegRange>::new(10.0)];
/// assert!(validate_sample(&sample).is_ok());
///
/// let empty: [CircVal<UnsignedDegRange>; 0] = [];
/// assert_eq!(validate_sample(&empty), Err(CircStatError::EmptySample));
/// ```
pub fn validate_sample<R: CircRange>(sample: &[CircVal<R>]) -> CircStatResult<()> {
    if sample.is_empty() {
        return Err(CircStatError::EmptySample);
    }
    for &c in sample {
        if !c.value().is_finite() {
            return Err(CircStatError::NonFiniteValue(c.value()));
        }
    }
    Ok(())
}

/// Validate a weighted sample: non-empty, all positions finite, all
/// weights finite and non-negative.
///
/// Errors
/// ------
/// - `CircStatError::EmptySample` when `sample.is_empty()`.
/// - `CircStatError::NonFiniteValue(value)` for the first NaN/±∞ position.
/// - `CircStatError::InvalidWeight(weight)` for the first negative or
///   non-finite weight.
pub fn validate_weighted_sample<R: CircRange>(
    sample: &[(CircVal<R>, f64)],
) -> CircStatResult<()> {
    if sample.is_empty() {
        return Err(CircStatError::EmptySample);
    }
    for &(c, w) in sample {
        if !c.value().is_finite() {
            return Err(CircStatError::NonFiniteValue(c.value()));
        }
        if !w.is_finite() || w < 0.0 {
            return Err(CircStatError::InvalidWeight(w));
        }
    }
    Ok(())
}
