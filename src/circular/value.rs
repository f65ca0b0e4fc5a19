//! circular::value — the wrap-aware circular value type.
//!
//! Purpose
//! -------
//! Implement [`CircVal`], a position on the cycle described by a
//! [`CircRange`]: a single `f64` confined to `[L, H)` with wrap-aware
//! construction, distance metrics, arithmetic, comparisons, cross-range
//! conversion, linear conversion, and trigonometric wrappers.
//!
//! Key behaviors
//! -------------
//! - [`CircVal::wrap`] maps any real to its unique congruent representative
//!   in `[L, H)`, with fast paths for values already in range or one period
//!   away and a general modulo fallback for arbitrarily distant inputs.
//! - [`CircVal::sdist`] is the signed length of the shortest directed walk
//!   (in `[−R/2, R/2)`); [`CircVal::pdist`] walks strictly in the
//!   increasing direction (in `[0, R)`).
//! - Arithmetic operates relative to the zero reference: subtract `Z`,
//!   operate, add `Z`, wrap. `Z` is therefore the additive identity
//!   regardless of where `L` and `H` sit.
//! - Cross-range conversion rescales the fractional position measured from
//!   the source zero by the ratio of the two ranges and re-anchors it at
//!   the destination zero.
//! - Trigonometric operations go through the canonical signed-radian range
//!   ([`SignedRadRange`]) in both directions, so a single trigonometric
//!   convention holds no matter which range a value is declared in.
//!
//! Invariants & assumptions
//! ------------------------
//! - `L ≤ val < H` after every construction and every arithmetic result,
//!   except that a non-finite input propagates NaN (dividing by zero, or
//!   constructing from NaN/±∞) rather than raising.
//! - `CircVal` is a plain `Copy` value type with no shared mutable state.
//!
//! Conventions
//! -----------
//! - Two circular values can be meaningfully compared in more than one way
//!   (by stored position, by shortest-distance ordering from a reference,
//!   …). The comparison operators here compare *stored position only*;
//!   callers must choose deliberately. See the type-level caveat.
//! - Equality (`==`) is exact floating equality of the stored position and
//!   is rarely what numerical code wants; use [`CircVal::approx_eq`] or the
//!   `approx` macros for tolerance-based circular equality with an explicit
//!   epsilon.

use core::marker::PhantomData;

use approx::{AbsDiffEq, RelativeEq};

use crate::circular::range::{CircRange, SignedRadRange};

/// A value on the circular range `R`, always in `[R::L, R::H)`.
///
/// Purpose
/// -------
/// Represent a position on a cycle (an angle, a heading, a phase, a
/// time-of-day) with arithmetic and distances that respect wraparound.
/// Construction and every arithmetic result re-normalize into `[L, H)`;
/// the represented quantity is inherently a position on a cycle, not a
/// plain real number.
///
/// Key behaviors
/// -------------
/// - Constructors: [`new`](Self::new) wraps a raw real;
///   [`from_circ`](Self::from_circ) converts a value of *another* range by
///   proportional rescaling around each range's zero;
///   [`from_linear`](Self::from_linear) wraps a zero-relative real.
/// - Distances: [`sdist`](Self::sdist) (shortest signed walk) and
///   [`pdist`](Self::pdist) (increasing walk).
/// - Arithmetic: `+`, `-`, `*` and `/` by scalar, unary `-`, and
///   [`opposite`](Self::opposite) (the antipode at distance `R/2`), all
///   zero-relative and wrapped.
///
/// Comparison caveat
/// -----------------
/// Two circular values can be compared in several different ways: by
/// stored position (what `<`, `<=`, `==`, … do here), by signed shortest
/// distance from a reference, by arc containment, and so on. The operators
/// on this type order by the stored wrapped representation *only*, which
/// makes `CircVal::<UnsignedDegRange>::new(359.0)` greater than
/// `CircVal::new(1.0)` even though the two are 2° apart. Check carefully
/// that position ordering is really what you need.
///
/// Examples
/// --------
/// ```rust
/// use circular_stats::circular::{CircVal, SignedDegRange, UnsignedDegRange};
///
/// let a = CircVal::<UnsignedDegRange>::new(350.0);
/// let b = CircVal::<UnsignedDegRange>::new(20.0);
///
/// // Shortest walk from a to b crosses the wrap point:
/// assert_eq!(a.sdist(b), 30.0);
///
/// // Cross-range conversion is explicit:
/// let s = a.to_range::<SignedDegRange>();
/// assert_eq!(s.value(), -10.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CircVal<R: CircRange> {
    /// Stored position; invariant `R::L ≤ val < R::H` (NaN if poisoned).
    val: f64,
    _range: PhantomData<R>,
}

impl<R: CircRange> CircVal<R> {
    /// Construct from a raw real, wrapping it into `[L, H)`.
    #[inline]
    pub fn new(r: f64) -> Self {
        CircVal { val: Self::wrap(r), _range: PhantomData }
    }

    /// The value at the zero reference `Z`.
    #[inline]
    pub fn zero() -> Self {
        CircVal { val: R::Z, _range: PhantomData }
    }

    /// Whether a raw real already lies in `[L, H)`.
    #[inline]
    pub fn in_range(r: f64) -> bool {
        r >= R::L && r < R::H
    }

    /// Map any real `r` to the unique value in `[L, H)` congruent to `r`
    /// modulo `R`.
    ///
    /// Correct for `r` arbitrarily far outside the range; the common cases
    /// (already in range, or one period away) are short-circuited for speed
    /// and accuracy before the general modulo fallback.
    #[inline]
    pub fn wrap(r: f64) -> f64 {
        if r >= R::L {
            if r < R::H {
                return r;
            } else if r < R::H + R::R {
                return r - R::R;
            }
        } else if r >= R::L - R::R {
            return r + R::R;
        }

        // general case
        (r - R::L).rem_euclid(R::R) + R::L
    }

    /// Signed length of the shortest directed walk from `self` to `other`,
    /// in `[−R/2, R/2)`.
    ///
    /// This is the "difference" that respects wraparound; it is not simply
    /// `other − self`.
    #[inline]
    pub fn sdist(self, other: Self) -> f64 {
        let d = other.val - self.val;
        if d < -R::R_2 {
            d + R::R
        } else if d >= R::R_2 {
            d - R::R
        } else {
            d
        }
    }

    /// Length of the walk from `self` to `other` going strictly in the
    /// increasing direction, in `[0, R)`.
    #[inline]
    pub fn pdist(self, other: Self) -> f64 {
        if other.val >= self.val { other.val - self.val } else { R::R - self.val + other.val }
    }

    /// Convert a circular value of another range into this range.
    ///
    /// The fractional position, measured as [`pdist`](Self::pdist) from the
    /// source range's zero, is rescaled by the ratio of the two ranges and
    /// re-anchored at this range's zero. This is the canonical conversion
    /// law between, e.g., signed-degree and unsigned-radian representations.
    #[inline]
    pub fn from_circ<R2: CircRange>(c: CircVal<R2>) -> Self {
        Self::new(CircVal::<R2>::zero().pdist(c) * R::R / R2::R + R::Z)
    }

    /// Method form of [`from_circ`](Self::from_circ).
    #[inline]
    pub fn to_range<R2: CircRange>(self) -> CircVal<R2> {
        CircVal::<R2>::from_circ(self)
    }

    /// The stored wrapped position in `[L, H)`.
    ///
    /// This is the raw representation, not the zero-relative linear value;
    /// for the latter call [`to_linear`](Self::to_linear).
    #[inline]
    pub fn value(self) -> f64 {
        self.val
    }

    /// Convert to a real in `[L−Z, H−Z)`; the zero reference maps to 0.
    #[inline]
    pub fn to_linear(self) -> f64 {
        self.val - R::Z
    }

    /// Inverse of [`to_linear`](Self::to_linear): wrap a zero-relative real
    /// into the range (0 maps to the zero reference).
    #[inline]
    pub fn from_linear(r: f64) -> Self {
        Self::new(r + R::Z)
    }

    /// The antipodal point, at distance exactly `R/2`.
    #[inline]
    pub fn opposite(self) -> Self {
        Self::new(self.val + R::R_2)
    }

    /// Tolerance-based circular equality: the magnitude of the shortest
    /// signed distance between the two values is at most `epsilon`.
    ///
    /// Prefer this (or the `approx` macros, which use the same metric over
    /// [`AbsDiffEq`]) to `==` whenever the values are results of floating
    /// computation.
    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        self.sdist(other).abs() <= epsilon
    }

    /// Sine, evaluated after conversion to the canonical signed-radian range.
    #[inline]
    pub fn sin(self) -> f64 {
        self.to_range::<SignedRadRange>().to_linear().sin()
    }

    /// Cosine, evaluated after conversion to the canonical signed-radian range.
    #[inline]
    pub fn cos(self) -> f64 {
        self.to_range::<SignedRadRange>().to_linear().cos()
    }

    /// Tangent, evaluated after conversion to the canonical signed-radian range.
    #[inline]
    pub fn tan(self) -> f64 {
        self.to_range::<SignedRadRange>().to_linear().tan()
    }

    /// Arcsine as a value of this range (computed in signed radians, then
    /// converted).
    #[inline]
    pub fn asin(r: f64) -> Self {
        Self::from_circ(CircVal::<SignedRadRange>::new(r.asin()))
    }

    /// Arccosine as a value of this range (computed in signed radians, then
    /// converted).
    #[inline]
    pub fn acos(r: f64) -> Self {
        Self::from_circ(CircVal::<SignedRadRange>::new(r.acos()))
    }

    /// Arctangent as a value of this range (computed in signed radians, then
    /// converted).
    #[inline]
    pub fn atan(r: f64) -> Self {
        Self::from_circ(CircVal::<SignedRadRange>::new(r.atan()))
    }

    /// Two-argument arctangent of `y / x` as a value of this range.
    #[inline]
    pub fn atan2(y: f64, x: f64) -> Self {
        Self::from_circ(CircVal::<SignedRadRange>::new(y.atan2(x)))
    }
}

impl<R: CircRange> Default for CircVal<R> {
    /// The zero reference.
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: CircRange> From<CircVal<R>> for f64 {
    /// The stored wrapped position (see [`CircVal::value`]).
    fn from(c: CircVal<R>) -> f64 {
        c.val
    }
}

impl<R: CircRange> core::fmt::Display for CircVal<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.val, f)
    }
}

// ---- Position comparisons (see the caveat on the type docs) ---------------

impl<R: CircRange> PartialEq for CircVal<R> {
    /// Exact equality of the stored position. Rarely correct for computed
    /// values; see [`CircVal::approx_eq`].
    fn eq(&self, other: &Self) -> bool {
        self.val == other.val
    }
}

impl<R: CircRange> PartialOrd for CircVal<R> {
    /// Ordering by stored position only.
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.val.partial_cmp(&other.val)
    }
}

// ---- Zero-relative arithmetic, wrapped on every result --------------------

impl<R: CircRange> core::ops::Add for CircVal<R> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.val + rhs.val - R::Z)
    }
}

impl<R: CircRange> core::ops::Sub for CircVal<R> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.val - rhs.val + R::Z)
    }
}

impl<R: CircRange> core::ops::Mul<f64> for CircVal<R> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new((self.val - R::Z) * rhs + R::Z)
    }
}

impl<R: CircRange> core::ops::Div<f64> for CircVal<R> {
    type Output = Self;
    /// Division by zero propagates NaN rather than raising.
    fn div(self, rhs: f64) -> Self {
        Self::new((self.val - R::Z) / rhs + R::Z)
    }
}

impl<R: CircRange> core::ops::Neg for CircVal<R> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(R::Z - Self::zero().sdist(self))
    }
}

impl<R: CircRange> core::ops::AddAssign for CircVal<R> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<R: CircRange> core::ops::SubAssign for CircVal<R> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<R: CircRange> core::ops::MulAssign<f64> for CircVal<R> {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<R: CircRange> core::ops::DivAssign<f64> for CircVal<R> {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

// ---- Tolerance-based equality via the `approx` traits ---------------------

impl<R: CircRange> AbsDiffEq for CircVal<R> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    /// Absolute-difference equality along the shortest arc.
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.sdist(*other).abs() <= epsilon
    }
}

impl<R: CircRange> RelativeEq for CircVal<R> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    /// Relative equality of the positions, allowing the pair to differ by
    /// one full period (so values facing each other across the wrap seam
    /// compare equal).
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        if self.val.relative_eq(&other.val, epsilon, max_relative) {
            return true;
        }
        if self.val < other.val {
            self.val.relative_eq(&(other.val - R::R), epsilon, max_relative)
        } else {
            self.val.relative_eq(&(other.val + R::R), epsilon, max_relative)
        }
    }
}
