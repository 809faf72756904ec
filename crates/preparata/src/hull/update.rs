//! Hull updater: seed triangle, one-point insertion, and the drivers.

use std::cmp::Ordering;

use crate::geom2::{
    contains_point, first_non_finite, lex_cmp, orient2d, sort_lex, Point2,
};
use crate::threaded::ThreadedTree;

use super::search::supporting_path;
use super::types::{
    DuplicatePolicy, HullCfg, HullError, HullTrace, InsertionStep, SupportingPath, Tangent,
};

/// Validate, sort and deduplicate the input according to `cfg`.
pub fn prepare_points(points: &[Point2], cfg: &HullCfg) -> Result<Vec<Point2>, HullError> {
    if let Some(index) = first_non_finite(points) {
        return Err(HullError::NonFinite { index });
    }
    let mut pts = points.to_vec();
    sort_lex(&mut pts);
    if cfg.duplicates == DuplicatePolicy::Reject {
        if let Some(w) = pts.windows(2).find(|w| w[0] == w[1]) {
            return Err(HullError::DuplicatePoint { point: w[0] });
        }
    }
    let before = pts.len();
    pts.dedup();
    let merged = before - pts.len();
    if pts.len() < 3 {
        return Err(HullError::InsufficientPoints {
            distinct: pts.len(),
        });
    }
    tracing::debug!(input = points.len(), distinct = pts.len(), merged, "prepared");
    Ok(pts)
}

/// Pick the seed triangle from sorted, distinct points.
///
/// Scans forward from index 2 for the first point not collinear with
/// `sorted[0]` and `sorted[1]` and moves it to index 2; the collinear points
/// it skipped are inserted later. Returns the triangle clockwise from
/// `sorted[0]`.
pub fn seed_triangle(sorted: &mut Vec<Point2>) -> Result<[Point2; 3], HullError> {
    if sorted.len() < 3 {
        return Err(HullError::InsufficientPoints {
            distinct: sorted.len(),
        });
    }
    let (a, b) = (sorted[0], sorted[1]);
    let i = (2..sorted.len())
        .find(|&i| orient2d(a, b, sorted[i]) != 0.0)
        .ok_or(HullError::AllCollinear)?;
    let c = sorted.remove(i);
    sorted.insert(2, c);
    Ok(clockwise(a, b, c))
}

#[inline]
fn clockwise(a: Point2, b: Point2, c: Point2) -> [Point2; 3] {
    if orient2d(a, b, c) < 0.0 {
        [a, b, c]
    } else {
        [a, c, b]
    }
}

/// Convex hull under one-point insertions.
///
/// Invariant: `hull` is strictly convex, clockwise, and starts at its
/// lexicographically smallest vertex (the anchor).
#[derive(Clone, Debug)]
pub struct IncrementalHull {
    hull: Vec<Point2>,
    steps: usize,
}

impl IncrementalHull {
    /// Start from three non-collinear points in any order.
    pub fn from_seed(seed: [Point2; 3]) -> Result<Self, HullError> {
        if let Some(index) = first_non_finite(&seed) {
            return Err(HullError::NonFinite { index });
        }
        let mut s = seed;
        s.sort_by(lex_cmp);
        if s[0] == s[1] || s[1] == s[2] {
            return Err(HullError::DuplicatePoint { point: s[1] });
        }
        if orient2d(s[0], s[1], s[2]) == 0.0 {
            return Err(HullError::AllCollinear);
        }
        Ok(Self {
            hull: clockwise(s[0], s[1], s[2]).to_vec(),
            steps: 0,
        })
    }

    #[inline]
    pub fn hull(&self) -> &[Point2] {
        &self.hull
    }

    #[inline]
    pub fn into_hull(self) -> Vec<Point2> {
        self.hull
    }

    /// First hull vertex; never removed by later insertions.
    #[inline]
    pub fn anchor(&self) -> Point2 {
        self.hull[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hull.len()
    }

    /// Always false (a hull has at least three vertices).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hull.is_empty()
    }

    /// Number of successful insertions so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Insert `p`, which must lie strictly outside the hull and after the
    /// anchor in lexicographic order (sorted input satisfies both).
    ///
    /// Rebuilds the threaded tree over the current hull, finds both
    /// tangents, drops the clockwise arc strictly between the right and the
    /// left tangent and splices `p` in after the right tangent.
    pub fn insert(&mut self, p: Point2) -> Result<InsertionStep, HullError> {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(HullError::NonFiniteInsert { point: p });
        }
        if self.hull.contains(&p) {
            return Err(HullError::DegenerateQuery { point: p });
        }
        if lex_cmp(&p, &self.anchor()) != Ordering::Greater || contains_point(&self.hull, p) {
            return Err(HullError::NotOutside { point: p });
        }

        let tree = ThreadedTree::from_sequence(self.hull.clone(), true)?;
        let left = supporting_path(&tree, p, Tangent::Left)?;
        let right = supporting_path(&tree, p, Tangent::Right)?;
        let li = tree.node(left.node()).pos;
        let ri = tree.node(right.node()).pos;
        if li == ri {
            return Err(HullError::DegenerateQuery { point: p });
        }

        let (hull, deleted) = splice(&self.hull, p, ri, li);
        self.steps += 1;
        tracing::debug!(
            step = self.steps,
            x = p.x,
            y = p.y,
            right = ri,
            left = li,
            deleted = deleted.len(),
            hull = hull.len(),
            "insert"
        );
        self.hull = hull;
        Ok(InsertionStep {
            step: self.steps,
            point: p,
            tree,
            left,
            right,
            deleted,
            hull: self.hull.clone(),
        })
    }
}

/// New hull and deleted vertices for tangents at positions `ri` and `li`.
fn splice(hull: &[Point2], p: Point2, ri: usize, li: usize) -> (Vec<Point2>, Vec<Point2>) {
    if ri < li {
        let mut kept = Vec::with_capacity(hull.len() + 1 - (li - ri - 1));
        kept.extend_from_slice(&hull[..=ri]);
        kept.push(p);
        kept.extend_from_slice(&hull[li..]);
        (kept, hull[ri + 1..li].to_vec())
    } else {
        // The arc wraps past the end; `li` is 0 for a valid hull.
        let mut deleted = hull[ri + 1..].to_vec();
        deleted.extend_from_slice(&hull[..li]);
        let mut kept = hull[li..=ri].to_vec();
        kept.push(p);
        let start = kept
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| lex_cmp(a, b))
            .map_or(0, |(i, _)| i);
        kept.rotate_left(start);
        (kept, deleted)
    }
}

/// Convex hull of `points`, clockwise from the lexicographically smallest
/// vertex, with collinear boundary points dropped.
///
/// ```
/// use nalgebra::vector;
/// use preparata::hull::{preparata_hull, HullCfg};
///
/// let pts = vec![
///     vector![0.0, 0.0],
///     vector![4.0, 0.0],
///     vector![4.0, 4.0],
///     vector![0.0, 4.0],
///     vector![2.0, 2.0],
/// ];
/// let hull = preparata_hull(&pts, &HullCfg::default()).unwrap();
/// assert_eq!(
///     hull,
///     vec![vector![0.0, 0.0], vector![0.0, 4.0], vector![4.0, 4.0], vector![4.0, 0.0]]
/// );
/// ```
pub fn preparata_hull(points: &[Point2], cfg: &HullCfg) -> Result<Vec<Point2>, HullError> {
    preparata_hull_with(points, cfg, |_| {})
}

/// Like [`preparata_hull`], handing every insertion record to `on_step`.
pub fn preparata_hull_with<F>(
    points: &[Point2],
    cfg: &HullCfg,
    mut on_step: F,
) -> Result<Vec<Point2>, HullError>
where
    F: FnMut(&InsertionStep),
{
    let mut pts = prepare_points(points, cfg)?;
    let seed = seed_triangle(&mut pts)?;
    let mut hull = IncrementalHull::from_seed(seed)?;
    tracing::debug!(seed = ?hull.hull(), remaining = pts.len() - 3, "seeded");
    for p in &pts[3..] {
        let step = hull.insert(*p)?;
        on_step(&step);
    }
    Ok(hull.into_hull())
}

/// Run the driver and keep the seed triangle and every insertion record.
pub fn preparata_trace(points: &[Point2], cfg: &HullCfg) -> Result<HullTrace, HullError> {
    let mut pts = prepare_points(points, cfg)?;
    let seed = seed_triangle(&mut pts)?;
    let mut hull = IncrementalHull::from_seed(seed)?;
    let seed = hull.hull().to_vec();
    let mut steps = Vec::with_capacity(pts.len() - 3);
    for p in &pts[3..] {
        steps.push(hull.insert(*p)?);
    }
    Ok(HullTrace {
        seed,
        steps,
        hull: hull.into_hull(),
    })
}

impl HullTrace {
    /// Hull after the seed and after every step, in order.
    pub fn hulls(&self) -> impl Iterator<Item = &[Point2]> + '_ {
        std::iter::once(self.seed.as_slice()).chain(self.steps.iter().map(|s| s.hull.as_slice()))
    }

    /// Both supporting paths of every step.
    pub fn paths(&self) -> impl Iterator<Item = (&SupportingPath, &SupportingPath)> + '_ {
        self.steps.iter().map(|s| (&s.left, &s.right))
    }
}
