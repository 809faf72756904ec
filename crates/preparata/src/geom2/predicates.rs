//! Orientation, polar angles and the lexicographic point order.
//!
//! `orient2d` is Shewchuk's adaptive predicate (via `robust`): its sign is
//! exact for every finite input, so hull decisions that only look at signs
//! can never contradict each other. The angle helpers are plain `f64`;
//! `relative_angle` goes through `atan2(cross, dot)` instead of a difference
//! of two polar angles, so an exactly collinear target lands exactly on `0`
//! or `π`.

use std::cmp::Ordering;
use std::f64::consts::TAU;

use robust::Coord;

use super::types::{Orientation, Point2};

/// Twice the signed area of the triangle `(a, b, c)`; positive for a
/// counter-clockwise turn. The sign is exact, the magnitude approximate.
#[inline]
pub fn orient2d(a: Point2, b: Point2, c: Point2) -> f64 {
    robust::orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

#[inline]
pub fn orientation(a: Point2, b: Point2, c: Point2) -> Orientation {
    Orientation::from_det(orient2d(a, b, c))
}

/// Map any angle in `(-2π, 2π)` into `[0, 2π)`.
#[inline]
fn wrap_tau(a: f64) -> f64 {
    if a >= 0.0 {
        // `+ 0.0` folds a negative zero into `0.0`.
        a + 0.0
    } else {
        let w = a + TAU;
        if w < TAU {
            w
        } else {
            0.0
        }
    }
}

/// Counter-clockwise angle of the ray `origin → target` against the x axis, in `[0, 2π)`.
#[inline]
pub fn polar_angle(origin: Point2, target: Point2) -> f64 {
    let d = target - origin;
    wrap_tau(d.y.atan2(d.x))
}

/// Counter-clockwise angle from the ray `origin → reference` to the ray
/// `origin → target`, in `[0, 2π)`.
#[inline]
pub fn relative_angle(origin: Point2, reference: Point2, target: Point2) -> f64 {
    let u = reference - origin;
    let v = target - origin;
    let cross = u.x * v.y - u.y * v.x;
    wrap_tau(cross.atan2(u.dot(&v)))
}

/// Lexicographic order by `(x, y)`.
#[inline]
pub fn lex_cmp(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Index of the first point with a NaN or infinite coordinate.
pub fn first_non_finite(points: &[Point2]) -> Option<usize> {
    points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
}

/// Sort lexicographically. Negative zeros are folded into `0.0` first so
/// coordinate-equal points end up adjacent.
pub fn sort_lex(points: &mut [Point2]) {
    for p in points.iter_mut() {
        p.x += 0.0;
        p.y += 0.0;
    }
    points.sort_by(lex_cmp);
}

/// Sort lexicographically and drop coordinate-equal repeats.
///
/// Returns the number of removed points.
pub fn sort_dedup_lex(points: &mut Vec<Point2>) -> usize {
    let before = points.len();
    sort_lex(points);
    points.dedup();
    before - points.len()
}
