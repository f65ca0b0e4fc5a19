//! circular — range descriptors, circular values, and circular arcs.
//!
//! Purpose
//! -------
//! Collect the algebraic building blocks for cyclic quantities: the
//! compile-time range descriptor ([`CircRange`] and the
//! [`circ_range!`](crate::circ_range) declaration macro), the wrap-aware
//! value type ([`CircVal`]) with its
//! distances, arithmetic, comparisons, conversions, and trigonometric
//! wrappers, and directed arcs ([`CircArc`], [`CircArcLen`]). The
//! statistics subtree builds entirely on these primitives.
//!
//! Key behaviors
//! -------------
//! - Bind the constants `{L, H, Z}` of a circular domain into a type at
//!   compile time, deriving `R = H − L` and `R/2`, and reject invalid
//!   definitions (`H ≤ L`, `Z` outside `[L, H)`) with a compile error.
//! - Normalize ("wrap") every constructed or computed position into
//!   `[L, H)` and measure wrap-aware distances in both the shortest-walk
//!   and increasing-walk senses.
//! - Convert values between ranges by proportional rescaling around each
//!   range's zero reference, and to/from zero-relative linear reals.
//! - Represent arcs as an increasing walk of a clamped length from a start
//!   point, with endpoint-inclusive containment and intersection tests.
//!
//! Invariants & assumptions
//! ------------------------
//! - `CircVal<R>` always stores a position in `[R::L, R::H)`; the only way
//!   a non-finite position can appear is by constructing from a non-finite
//!   real, in which case NaN propagates through subsequent arithmetic.
//! - Arithmetic treats `R::Z` as the additive identity regardless of where
//!   the range boundaries sit.
//! - This module performs no I/O and no allocation; all types are `Copy`
//!   value types.
//!
//! Conventions
//! -----------
//! - Cross-range conversion is always explicit ([`CircVal::from_circ`],
//!   [`CircVal::to_range`]); there are no implicit `From` conversions
//!   between ranges, so range-mixing stays visible at the call site.
//! - Position comparison operators order by the stored wrapped
//!   representation only; tolerance-based circular equality is provided
//!   separately ([`CircVal::approx_eq`] and the `approx` trait impls).
//!
//! Downstream usage
//! ----------------
//! - The statistics solvers in [`crate::stats`] consume `CircVal` slices
//!   and use [`CircVal::sdist`] as their distance metric.
//! - Typical callers import the surface via the prelude:
//!
//!   ```rust
//!   use circular_stats::circular::prelude::*;
//!
//!   let a = CircVal::<SignedDegRange>::new(170.0);
//!   let b = CircVal::<SignedDegRange>::new(-170.0);
//!   assert_eq!(a.sdist(b), 20.0);
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules cover wrapping fast paths, distance
//!   conventions, operator identities, cross-range conversion, trig
//!   wrappers, and arc containment; randomized law batteries live in the
//!   integration tests.

pub mod arc;
pub mod range;
pub mod value;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::arc::{CircArc, CircArcLen};
pub use self::range::{
    CircRange, SignedDegRange, SignedRadRange, UnsignedDegRange, UnsignedRadRange,
};
pub use self::value::CircVal;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use circular_stats::circular::prelude::*;
//
// to import the main circular-value surface in a single line.

pub mod prelude {
    pub use super::arc::{CircArc, CircArcLen};
    pub use super::range::{
        CircRange, SignedDegRange, SignedRadRange, UnsignedDegRange, UnsignedRadRange,
    };
    pub use super::value::CircVal;
}
