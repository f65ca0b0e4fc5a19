//! circular::range — compile-time circular range descriptors.
//!
//! Purpose
//! -------
//! Define the identity of a circular domain: an immutable tuple
//! `(L, H, Z)` with `H > L` and `L ≤ Z < H`, from which the full range
//! `R = H − L` and the half range `R/2` are derived. A range descriptor is
//! a type-level constant binding, not a runtime object: every
//! [`CircVal`](crate::circular::CircVal) carries its range as a type
//! parameter and multiple ranges coexist freely.
//!
//! Key behaviors
//! -------------
//! - [`CircRange`] exposes `L`, `H`, `Z` as associated constants and
//!   supplies `R` and `R_2` as derived defaults.
//! - [`circ_range!`] declares a new range as a unit struct implementing
//!   [`CircRange`], and rejects invalid definitions with a *compile-time*
//!   assertion; a range with `H ≤ L` or `Z` outside `[L, H)` never becomes
//!   a usable type.
//! - Four standard ranges are declared here: [`SignedDegRange`],
//!   [`UnsignedDegRange`], [`SignedRadRange`], [`UnsignedRadRange`].
//!
//! Conventions
//! -----------
//! - `Z` is the zero reference: the additive identity of the range's
//!   arithmetic and the anchor of cross-range conversion. It need not
//!   coincide with `L`.
//! - All constants are `f64`; the descriptor is fixed for the lifetime of
//!   the program.

/// Compile-time constants of a circular domain `[L, H)` with zero reference `Z`.
///
/// Implementations are normally produced by [`circ_range!`], which also
/// enforces the validity conditions `H > L` and `L ≤ Z < H` at definition
/// time. The derived constants `R` and `R_2` should not be overridden.
pub trait CircRange: Copy + Clone + core::fmt::Debug + PartialEq + 'static {
    /// Lower bound of the range (inclusive).
    const L: f64;
    /// Upper bound of the range (exclusive); identified with `L` by wraparound.
    const H: f64;
    /// Zero reference, the additive identity; satisfies `L ≤ Z < H`.
    const Z: f64;
    /// Full range `H − L`.
    const R: f64 = Self::H - Self::L;
    /// Half range `(H − L) / 2`.
    const R_2: f64 = (Self::H - Self::L) / 2.0;
}

/// Declare a circular range type.
///
/// Expands to a unit struct implementing [`CircRange`] together with a
/// `const` assertion that rejects invalid definitions (`H ≤ L`, or `Z`
/// outside `[L, H)`) when the range is compiled, before any value of the
/// range can exist.
///
/// Examples
/// --------
/// ```rust
/// circular_stats::circ_range! {
///     /// Hours on a 24h clock, midnight as the zero reference.
///     pub struct ClockRange { L: 0.0, H: 24.0, Z: 0.0 }
/// }
///
/// use circular_stats::circular::{CircRange, CircVal};
/// assert_eq!(ClockRange::R, 24.0);
/// let t = CircVal::<ClockRange>::new(25.5);
/// assert_eq!(t.value(), 1.5);
/// ```
///
/// An invalid definition does not compile:
///
/// ```compile_fail
/// circular_stats::circ_range! {
///     /// Backwards: H ≤ L.
///     pub struct BackwardRange { L: 10.0, H: 3.0, Z: 10.0 }
/// }
/// ```
#[macro_export]
macro_rules! circ_range {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident { L: $l:expr, H: $h:expr, Z: $z:expr $(,)? }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::circular::range::CircRange for $name {
            const L: f64 = $l;
            const H: f64 = $h;
            const Z: f64 = $z;
        }

        const _: () = assert!(
            ($h) > ($l) && ($z) >= ($l) && ($z) < ($h),
            concat!(stringify!($name), ": range not valid")
        );
    };
}

circ_range! {
    /// Degrees in `[-180, 180)`, zero reference at 0°.
    pub struct SignedDegRange { L: -180.0, H: 180.0, Z: 0.0 }
}

circ_range! {
    /// Degrees in `[0, 360)`, zero reference at 0°.
    pub struct UnsignedDegRange { L: 0.0, H: 360.0, Z: 0.0 }
}

circ_range! {
    /// Radians in `[-π, π)`, zero reference at 0. The canonical range for
    /// trigonometric conversion.
    pub struct SignedRadRange {
        L: -core::f64::consts::PI,
        H: core::f64::consts::PI,
        Z: 0.0,
    }
}

circ_range! {
    /// Radians in `[0, 2π)`, zero reference at 0.
    pub struct UnsignedRadRange { L: 0.0, H: core::f64::consts::TAU, Z: 0.0 }
}
