//! circular::arc — directed arcs on a circular range.
//!
//! Purpose
//! -------
//! Represent a contiguous stretch of a circular range: a start point plus a
//! clamped length, covering the increasing walk from the start. Arcs answer
//! containment and intersection queries (endpoint-inclusive) and convert
//! between ranges like circular values do.
//!
//! Key behaviors
//! -------------
//! - [`CircArcLen`] is a length in `[0, R]`, constructed by clamping; its
//!   cross-range conversion preserves an exactly-full-circle length without
//!   rounding error.
//! - [`CircArc`] is defined by the increasing walk of its length from its
//!   start point; a length of exactly `R` denotes the whole circle, in
//!   which case the start point is irrelevant for equality.
//!
//! Conventions
//! -----------
//! - Arcs contain their endpoints; containment tests use a fixed tolerance
//!   of `1e-12` on walk lengths.
//! - The stored end point equals the start in two cases: zero length and
//!   full-circle length. Disambiguation is by the stored length.

use core::marker::PhantomData;

use crate::circular::range::CircRange;
use crate::circular::value::CircVal;

/// Endpoint tolerance for arc containment tests.
const ARC_EPS: f64 = 1e-12;

/// An arc length on the range `R`, clamped to `[0, R::R]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CircArcLen<R: CircRange> {
    len: f64,
    _range: PhantomData<R>,
}

impl<R: CircRange> CircArcLen<R> {
    /// Construct from a raw real, truncated into `[0, R]`. NaN propagates.
    #[inline]
    pub fn new(r: f64) -> Self {
        CircArcLen { len: r.clamp(0.0, R::R), _range: PhantomData }
    }

    /// Convert an arc length of another range by the ratio of the ranges.
    ///
    /// An exactly-full-circle length maps to exactly `R::R`, so the
    /// full-circle property survives conversion without rounding error.
    #[inline]
    pub fn from_len<R2: CircRange>(l: CircArcLen<R2>) -> Self {
        if l.len == R2::R {
            Self::new(R::R)
        } else {
            Self::new(R::R / R2::R * l.len)
        }
    }

    /// The length as a raw real in `[0, R]`.
    #[inline]
    pub fn value(self) -> f64 {
        self.len
    }

    /// Whether this length spans the whole circle.
    #[inline]
    pub fn is_full_circle(self) -> bool {
        self.len == R::R
    }
}

/// A directed arc on the range `R`: the increasing walk of a clamped length
/// from a start point (the whole circle when the length is exactly `R`).
///
/// Examples
/// --------
/// ```rust
/// use circular_stats::circular::{CircArc, UnsignedDegRange};
///
/// let arc = CircArc::<UnsignedDegRange>::new(100.0, 200.0);
/// assert!(arc.contains_val(circular_stats::circular::CircVal::new(250.0)));
/// assert!(!arc.contains_val(circular_stats::circular::CircVal::new(50.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CircArc<R: CircRange> {
    /// Arc start point in `[L, H)`.
    start: CircVal<R>,
    /// Arc end point in `[L, H)`; equals `start` for zero-length and
    /// full-circle arcs.
    end: CircVal<R>,
    /// Arc length in `[0, R]`.
    len: CircArcLen<R>,
}

impl<R: CircRange> CircArc<R> {
    /// Construct from a start point and an arc length, each possibly
    /// declared in another range.
    pub fn from_start_len<R2, R3>(start: CircVal<R2>, len: CircArcLen<R3>) -> Self
    where
        R2: CircRange,
        R3: CircRange,
    {
        let start = CircVal::<R>::from_circ(start);
        let len = CircArcLen::<R>::from_len(len);
        CircArc { start, end: CircVal::new(start.value() + len.value()), len }
    }

    /// Construct from two raw reals (start point, length); the start is
    /// wrapped and the length is truncated into `[0, R]`.
    pub fn new(start: f64, len: f64) -> Self {
        let len = CircArcLen::<R>::new(len);
        CircArc { start: CircVal::new(start), end: CircVal::new(start + len.value()), len }
    }

    /// Construct from a start and an end point, each possibly declared in
    /// another range; the length is the increasing walk between them (so
    /// coinciding endpoints yield a zero-length arc, not a full circle).
    pub fn from_endpoints<R2, R3>(start: CircVal<R2>, end: CircVal<R3>) -> Self
    where
        R2: CircRange,
        R3: CircRange,
    {
        let start = CircVal::<R>::from_circ(start);
        let end = CircVal::<R>::from_circ(end);
        CircArc { start, end, len: CircArcLen::new(start.pdist(end)) }
    }

    /// Convert an arc of another range into this range.
    pub fn from_arc<R2: CircRange>(a: CircArc<R2>) -> Self {
        CircArc {
            start: CircVal::from_circ(a.start),
            end: CircVal::from_circ(a.end),
            len: CircArcLen::from_len(a.len),
        }
    }

    /// The arc start point.
    #[inline]
    pub fn start(self) -> CircVal<R> {
        self.start
    }

    /// The arc end point; equals the start for zero-length and full-circle
    /// arcs.
    #[inline]
    pub fn end(self) -> CircVal<R> {
        self.end
    }

    /// The arc length.
    #[inline]
    pub fn len(self) -> CircArcLen<R> {
        self.len
    }

    /// Whether the arc has zero length.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len.value() == 0.0
    }

    /// Whether this arc contains a circular value (endpoints included).
    pub fn contains_val(self, c: CircVal<R>) -> bool {
        self.len.value() - self.start.pdist(c) > -ARC_EPS
    }

    /// Whether this arc contains another arc (endpoints included).
    pub fn contains_arc(self, a: CircArc<R>) -> bool {
        if self.len.is_full_circle() {
            return true;
        }
        if a.len.is_full_circle() {
            return false;
        }

        // require the walk order: start .. a.start .. a.end .. end
        let l1 = self.start.pdist(a.start);
        let l2 = self.start.pdist(a.end);
        l2 - l1 > -ARC_EPS && self.len.value() - l2 > -ARC_EPS
    }

    /// Whether two arcs share at least one point (endpoints included).
    pub fn intersects(self, a: CircArc<R>) -> bool {
        // one of them contains the start of the other
        self.contains_val(a.start) || a.contains_val(self.start)
    }
}

impl<R: CircRange> Default for CircArc<R> {
    /// The zero-length arc at the zero reference.
    fn default() -> Self {
        CircArc { start: CircVal::zero(), end: CircVal::zero(), len: CircArcLen::new(0.0) }
    }
}

impl<R: CircRange> PartialEq for CircArc<R> {
    /// Exact equality of start and length; any two full-circle arcs are
    /// equal regardless of start.
    fn eq(&self, other: &Self) -> bool {
        if self.len.is_full_circle() && other.len.is_full_circle() {
            return true;
        }
        self.start == other.start && self.len == other.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circular::range::{SignedDegRange, UnsignedDegRange, UnsignedRadRange};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Length clamping and full-circle preservation across ranges.
    // - Value and arc containment, endpoint inclusion, and intersection.
    // - Full-circle equality and cross-range arc construction.
    //
    // They intentionally DO NOT cover:
    // - Exhaustive grid sweeps over arc pairs; the integration tests run a
    //   coarse randomized version.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that arc lengths clamp into [0, R] and that a full circle
    // survives cross-range conversion exactly.
    //
    // Given
    // -----
    // - Raw lengths below 0, inside the range, and above R; a full-circle
    //   degree length converted to radians.
    //
    // Expect
    // ------
    // - Clamping at both ends; the converted full circle equals 2π exactly.
    fn arc_len_clamps_and_preserves_full_circle() {
        assert_eq!(CircArcLen::<UnsignedDegRange>::new(-5.0).value(), 0.0);
        assert_eq!(CircArcLen::<UnsignedDegRange>::new(90.0).value(), 90.0);
        assert_eq!(CircArcLen::<UnsignedDegRange>::new(400.0).value(), 360.0);

        let full = CircArcLen::<UnsignedDegRange>::new(360.0);
        let rad = CircArcLen::<UnsignedRadRange>::from_len(full);
        assert_eq!(rad.value(), core::f64::consts::TAU);
        assert!(rad.is_full_circle());
    }

    #[test]
    // Purpose
    // -------
    // Verify value containment, including both endpoints and a point on
    // the far side of the wrap seam.
    //
    // Given
    // -----
    // - The arc starting at 300° with length 120° (covering 300°..360°..60°).
    //
    // Expect
    // ------
    // - 300°, 0°, and 60° are contained; 150° is not.
    fn arc_contains_values_across_the_seam() {
        let arc = CircArc::<UnsignedDegRange>::new(300.0, 120.0);
        assert!(arc.contains_val(CircVal::new(300.0)));
        assert!(arc.contains_val(CircVal::new(0.0)));
        assert!(arc.contains_val(CircVal::new(60.0)));
        assert!(!arc.contains_val(CircVal::new(150.0)));
    }

    #[test]
    // Purpose
    // -------
    // Verify arc-in-arc containment and its failure when the inner arc
    // leaks past either end.
    //
    // Given
    // -----
    // - An outer arc [100°, 300°] and candidate inner arcs.
    //
    // Expect
    // ------
    // - A strict sub-arc and the arc itself are contained; an overhanging
    //   arc is not; a full circle contains everything and is contained in
    //   nothing smaller.
    fn arc_containment_orders_endpoints() {
        let outer = CircArc::<UnsignedDegRange>::new(100.0, 200.0);
        assert!(outer.contains_arc(CircArc::new(150.0, 100.0)));
        assert!(outer.contains_arc(outer));
        assert!(!outer.contains_arc(CircArc::new(250.0, 100.0)));

        let full = CircArc::<UnsignedDegRange>::new(0.0, 360.0);
        assert!(full.contains_arc(outer));
        assert!(!outer.contains_arc(full));
    }

    #[test]
    // Purpose
    // -------
    // Verify intersection for touching, overlapping, and disjoint arcs.
    //
    // Given
    // -----
    // - Arcs [0°, 100°] and [100°, 200°] (touching at one point), and a
    //   disjoint arc [210°, 300°].
    //
    // Expect
    // ------
    // - Touching arcs intersect (endpoints included), symmetric in
    //   argument order; the disjoint pair does not.
    fn arc_intersection_includes_endpoints() {
        let a = CircArc::<UnsignedDegRange>::new(0.0, 100.0);
        let b = CircArc::<UnsignedDegRange>::new(100.0, 100.0);
        let c = CircArc::<UnsignedDegRange>::new(210.0, 90.0);
        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
        assert!(!c.intersects(a));
    }

    #[test]
    // Purpose
    // -------
    // Verify that any two full-circle arcs compare equal regardless of
    // their start points, including across construction paths.
    //
    // Given
    // -----
    // - Full circles anchored at −170° and −180° on the signed range.
    //
    // Expect
    // ------
    // - The arcs are equal and mutually containing.
    fn full_circle_arcs_are_equal_wherever_anchored() {
        let a = CircArc::<SignedDegRange>::new(-170.0, 360.0);
        let b = CircArc::<SignedDegRange>::new(-180.0, 360.0);
        assert_eq!(a, b);
        assert!(a.contains_arc(b) && b.contains_arc(a));
    }

    #[test]
    // Purpose
    // -------
    // Verify cross-range arc construction from mixed-range endpoints.
    //
    // Given
    // -----
    // - A start at 10° (unsigned degrees) and an end at π radians,
    //   assembled into a signed-degree arc.
    //
    // Expect
    // ------
    // - The arc runs from 10° to 180° with length 170° (within rounding).
    fn arc_from_mixed_range_endpoints() {
        let start = CircVal::<UnsignedDegRange>::new(10.0);
        let end = CircVal::<UnsignedRadRange>::new(core::f64::consts::PI);
        let arc = CircArc::<SignedDegRange>::from_endpoints(start, end);

        assert!((arc.start().value() - 10.0).abs() < 1e-9);
        assert!((arc.len().value() - 170.0).abs() < 1e-9);
    }
}
