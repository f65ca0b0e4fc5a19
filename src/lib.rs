//! circular_stats — circular-value algebra and exact circular statistics.
//!
//! Purpose
//! -------
//! Provide a principled computational foundation for quantities that live on
//! a cycle rather than a line: angles, compass headings, time-of-day, phase.
//! Ordinary arithmetic, comparison, and statistics are invalid for such
//! quantities because values wrap at the range boundaries; this crate
//! supplies a wrap-aware value type together with the statistics built on
//! it: the circular mean (unweighted and weighted), a streaming estimator
//! for the time-average of a sampled circular signal, and the circular
//! median.
//!
//! Key behaviors
//! -------------
//! - Declare circular ranges as compile-time constant bindings
//!   ([`circular::CircRange`], [`circ_range!`]) with definition-time
//!   validation; four standard ranges (signed/unsigned degrees and radians)
//!   are provided.
//! - Represent positions on a cycle as [`circular::CircVal`], whose
//!   constructors and arithmetic re-normalize every result into `[L, H)`
//!   and whose distances ([`sdist`](circular::CircVal::sdist),
//!   [`pdist`](circular::CircVal::pdist)) respect wraparound.
//! - Solve the circular mean and median as *global* optimization problems,
//!   returning the full set of minimizers ([`stats::circ_mean`],
//!   [`stats::circ_weighted_mean`], [`stats::circ_median`]); ties are a
//!   first-class part of the contract, not an edge case.
//! - Estimate the average of a continuous circular signal from ordered
//!   samples via circular linear interpolation
//!   ([`stats::SampledCircSignalAvg`]).
//! - Model directed arcs on a circular range ([`circular::CircArc`]) with
//!   containment and intersection predicates.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every constructed [`circular::CircVal`] satisfies `L ≤ val < H` for
//!   its range; arithmetic is computed relative to the range's zero
//!   reference `Z`, so `Z` is the additive identity wherever `L` and `H`
//!   are placed.
//! - Range descriptors are immutable compile-time bindings; an invalid
//!   range (`H ≤ L`, or `Z` outside `[L, H)`) is rejected when the range is
//!   declared, never at run time.
//! - Solvers are pure functions of their inputs: no I/O, no logging, no
//!   shared mutable state. The one stateful component, the sampled-signal
//!   estimator, has a single mutation entry point and a strictly-ordered
//!   call contract.
//!
//! Conventions
//! -----------
//! - Solver results are returned as deduplicated vectors sorted ascending
//!   by range position; they represent sets of equally-optimal values.
//! - Empty samples are reported via [`stats::CircStatError::EmptySample`];
//!   numeric degeneracies (division of a value by zero) propagate NaN
//!   rather than erroring.
//! - Position comparison (`<`, `==`, …) orders by the stored wrapped
//!   representation only; see the caveat on [`circular::CircVal`].
//!
//! Downstream usage
//! ----------------
//! - Import the main surface through the subtree preludes:
//!
//!   ```rust
//!   use circular_stats::circular::prelude::*;
//!   use circular_stats::stats::prelude::*;
//!
//!   let headings = [
//!       CircVal::<UnsignedDegRange>::new(10.0),
//!       CircVal::new(350.0),
//!   ];
//!   let mean = circ_mean(&headings).unwrap();
//!   assert_eq!(mean.len(), 1);
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; randomized algebraic-law batteries
//!   and end-to-end pipelines live in `tests/integration_circular_stats.rs`.

pub mod circular;
pub mod stats;
