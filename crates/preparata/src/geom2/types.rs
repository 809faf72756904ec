//! Point type and turn classes shared by the tree and the hull code.
//!
//! - `Point2`: plain `nalgebra` column vector; no wrapper so callers keep the
//!   full vector algebra.
//! - `Orientation`: sign of the turn `a → b → c`.

use nalgebra::Vector2;

/// A point in the plane.
pub type Point2 = Vector2<f64>;

/// Turn direction of an ordered triple `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    /// Classify a determinant as returned by [`super::orient2d`].
    #[inline]
    pub fn from_det(det: f64) -> Self {
        if det > 0.0 {
            Orientation::CounterClockwise
        } else if det < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}
