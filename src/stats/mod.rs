//! stats — exact circular statistics on top of the circular-value algebra.
//!
//! Purpose
//! -------
//! Collect the statistics solvers for circular data: the circular mean
//! (unweighted, weighted, and an equivalent rotation-index formulation),
//! the circular median, and the streaming sampled-signal average
//! estimator, together with their shared validation and error handling.
//!
//! Key behaviors
//! -------------
//! - Every solver minimizes a sum of wrap-aware distances globally and
//!   returns the *set* of all minimizers ([`circ_mean`],
//!   [`circ_weighted_mean`], [`circ_mean_by_rotation`], [`circ_median`]):
//!   circular statistics generically admit multiple optimal answers, and
//!   the set-valued return is part of the contract, not an edge case.
//! - [`SampledCircSignalAvg`] turns an ordered time series of circular
//!   samples into interval-weighted inputs for the weighted mean solver
//!   via circular linear interpolation.
//! - Shared input guards live in [`validation`]; failures surface as
//!   [`CircStatError`] through the [`CircStatResult`] alias.
//!
//! Invariants & assumptions
//! ------------------------
//! - The mean and median solvers are pure functions: no I/O, no logging,
//!   no shared mutable state; they are safe to invoke concurrently from
//!   independent threads on independent inputs.
//! - Result sets are deduplicated, sorted ascending by range position, and
//!   non-empty whenever the input is non-empty.
//! - The estimator is the one stateful component; it is single-writer and
//!   its calls must be strictly ordered (enforced by the
//!   timestamp-monotonicity precondition, which panics on violation).
//! - Nothing is retried and there is no partial-result recovery: either
//!   all global minimizers are returned or an explicit failure is.
//!
//! Conventions
//! -----------
//! - Complexity: the mean solvers are O(n log n); the median solver is
//!   O(n²) (each of O(n) candidates scored against all n inputs). All run
//!   to completion; no cancellation or timeout semantics apply.
//! - Error messages are phrased in terms of domain constraints; see
//!   [`errors`].
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use circular_stats::circular::{CircVal, UnsignedDegRange};
//!   use circular_stats::stats::{circ_mean, circ_median};
//!
//!   let sample = [CircVal::<UnsignedDegRange>::new(0.0), CircVal::new(180.0)];
//!   let means = circ_mean(&sample).unwrap();
//!   let medians = circ_median(&sample).unwrap();
//!   assert_eq!(means.len(), 2);
//!   assert_eq!(medians.len(), 2);
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`mean`], [`median`], and [`sampled`] cover the
//!   concrete scenarios (symmetric and antipodal pairs, uniform-gap tie
//!   sets, seam-crossing interpolation) and the error branches; unit tests
//!   in [`errors`] and [`validation`] cover messages and guards.
//! - Randomized sweeps (formulation agreement, set properties across
//!   ranges) live in `tests/integration_circular_stats.rs`.

pub mod errors;
pub mod mean;
pub mod median;
pub mod sampled;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{CircStatError, CircStatResult};
pub use self::mean::{circ_mean, circ_mean_by_rotation, circ_weighted_mean};
pub use self::median::circ_median;
pub use self::sampled::SampledCircSignalAvg;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use circular_stats::stats::prelude::*;
//
// to import the main statistics surface in a single line.

pub mod prelude {
    pub use super::errors::{CircStatError, CircStatResult};
    pub use super::mean::{circ_mean, circ_mean_by_rotation, circ_weighted_mean};
    pub use super::median::circ_median;
    pub use super::sampled::SampledCircSignalAvg;
}
