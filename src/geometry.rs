//! Exact planar predicates for cable segments.
//!
//! Feasibility (the non-crossing check) relies only on the sign of the 2D
//! cross product, so it is exact for the coordinate magnitudes a site layout
//! uses. Distances are used for costing only, never for feasibility.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D position (turbine or substation).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Turn direction of the ordered triple (p, q, r).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of (p, q, r) from the sign of the cross product of
/// (q - p) and (r - q). Zero is the collinear case.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// True iff `q` lies within the axis-aligned bounding box of `p` and `r`.
///
/// Only meaningful once (p, q, r) are known to be collinear.
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// True iff segment (p1, q1) intersects segment (p2, q2).
///
/// Four-orientation test with the collinear/on-segment fallbacks, so
/// touching endpoints and collinear overlap both count as intersection.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_distance() {
        assert!((pt(0.0, 0.0).distance(&pt(3.0, 4.0)) - 5.0).abs() < 1e-12);
        assert_eq!(pt(2.0, 7.0).distance(&pt(2.0, 7.0)), 0.0);
    }

    #[test]
    fn test_orientation_cases() {
        assert_eq!(
            orientation(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)),
            Orientation::Collinear
        );
        assert_eq!(
            orientation(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, -1.0)),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn test_proper_crossing() {
        // Diagonals of the unit square cross at (0.5, 0.5)
        assert!(segments_intersect(
            pt(0.0, 0.0),
            pt(1.0, 1.0),
            pt(0.0, 1.0),
            pt(1.0, 0.0)
        ));
    }

    #[test]
    fn test_disjoint_segments() {
        assert!(!segments_intersect(
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            pt(0.0, 1.0),
            pt(1.0, 1.0)
        ));
        assert!(!segments_intersect(
            pt(0.0, 0.0),
            pt(1.0, 1.0),
            pt(2.0, 0.0),
            pt(3.0, 1.0)
        ));
    }

    #[test]
    fn test_touching_endpoint_counts_as_intersection() {
        assert!(segments_intersect(
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            pt(1.0, 0.0),
            pt(2.0, 1.0)
        ));
    }

    #[test]
    fn test_collinear_overlap() {
        assert!(segments_intersect(
            pt(0.0, 0.0),
            pt(2.0, 0.0),
            pt(1.0, 0.0),
            pt(3.0, 0.0)
        ));
    }

    #[test]
    fn test_collinear_disjoint() {
        assert!(!segments_intersect(
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            pt(2.0, 0.0),
            pt(3.0, 0.0)
        ));
    }

    #[test]
    fn test_t_junction() {
        // Endpoint of one segment in the interior of the other
        assert!(segments_intersect(
            pt(0.0, 0.0),
            pt(2.0, 0.0),
            pt(1.0, 0.0),
            pt(1.0, 1.0)
        ));
    }

    proptest! {
        #[test]
        fn prop_intersection_symmetric(
            ax in -100.0f64..100.0, ay in -100.0f64..100.0,
            bx in -100.0f64..100.0, by in -100.0f64..100.0,
            cx in -100.0f64..100.0, cy in -100.0f64..100.0,
            dx in -100.0f64..100.0, dy in -100.0f64..100.0,
        ) {
            let (a, b, c, d) = (pt(ax, ay), pt(bx, by), pt(cx, cy), pt(dx, dy));
            prop_assert_eq!(
                segments_intersect(a, b, c, d),
                segments_intersect(c, d, a, b)
            );
        }

        #[test]
        fn prop_segment_intersects_itself(
            ax in -100.0f64..100.0, ay in -100.0f64..100.0,
            bx in -100.0f64..100.0, by in -100.0f64..100.0,
        ) {
            let (a, b) = (pt(ax, ay), pt(bx, by));
            prop_assert!(segments_intersect(a, b, a, b));
        }

        #[test]
        fn prop_distance_symmetric_nonnegative(
            ax in -1e6f64..1e6, ay in -1e6f64..1e6,
            bx in -1e6f64..1e6, by in -1e6f64..1e6,
        ) {
            let (a, b) = (pt(ax, ay), pt(bx, by));
            prop_assert!(a.distance(&b) >= 0.0);
            prop_assert!((a.distance(&b) - b.distance(&a)).abs() < 1e-9);
        }
    }
}
