//! Polygon helpers used to check hulls: area, strict convexity, containment
//! and an independent reference hull.

use std::f64::consts::TAU;

use super::predicates::{orient2d, sort_dedup_lex};
use super::types::Point2;

/// Shoelace area; positive for counter-clockwise vertex order.
pub fn signed_area(poly: &[Point2]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        twice += a.x * b.y - b.x * a.y;
    }
    0.5 * twice
}

/// True if `poly` is a strictly convex polygon listed clockwise.
///
/// Every consecutive triple must turn clockwise and the edge directions must
/// wind exactly once (rules out self-intersecting stars).
pub fn is_strictly_convex_cw(poly: &[Point2]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let mut winding = 0.0;
    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        let c = poly[(i + 2) % n];
        let turn = orient2d(a, b, c);
        if turn >= 0.0 {
            return false;
        }
        // Edge cross product with exact sign: a near half-turn counts as -π, never +π.
        winding += turn.atan2((b - a).dot(&(c - b)));
    }
    (winding + TAU).abs() < 1e-6
}

/// Closed containment test for a convex polygon listed clockwise.
///
/// Points on the boundary count as contained.
pub fn contains_point(poly_cw: &[Point2], p: Point2) -> bool {
    let n = poly_cw.len();
    if n == 0 {
        return false;
    }
    (0..n).all(|i| orient2d(poly_cw[i], poly_cw[(i + 1) % n], p) <= 0.0)
}

/// Andrew's monotone chain hull, clockwise from the lexicographically
/// smallest point; collinear boundary points are dropped.
///
/// Used as an independent oracle for the incremental hull.
pub fn reference_hull(points: &[Point2]) -> Vec<Point2> {
    let mut pts = points.to_vec();
    sort_dedup_lex(&mut pts);
    if pts.len() < 3 {
        return pts;
    }
    // Upper chain left → right, then lower chain right → left: clockwise.
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while upper.len() >= 2 && orient2d(upper[upper.len() - 2], upper[upper.len() - 1], *p) >= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while lower.len() >= 2 && orient2d(lower[lower.len() - 2], lower[lower.len() - 1], *p) >= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    upper.pop();
    lower.pop();
    let mut hull = upper;
    hull.extend(lower);
    hull
}
