//! Seeded point clouds (shape families + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for tests and benches of the incremental hull:
//!   uniform squares and disks (few hull vertices), circles (every point on
//!   the hull) and integer grids (many collinear triples and duplicates).
//!
//! Model
//! - A replay token `(seed, index)` is mixed into a single RNG, so the n-th
//!   cloud of a stream can be redrawn without replaying the previous ones.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point2;

/// Shape family of a cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    /// Uniform in `[-scale, scale]²`.
    Square,
    /// Uniform in the disk of radius `scale`.
    Disk,
    /// On the circle of radius `scale`.
    Circle,
    /// Integer lattice points in `[0, side)²`; repeats are likely.
    Grid { side: u32 },
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub shape: CloudShape,
    pub count: usize,
    pub scale: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            shape: CloudShape::Square,
            count: 64,
            scale: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next cloud of the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw `cfg.count` points of the requested shape. The output is unsorted and
/// may contain repeats (grid shape).
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let s = if cfg.scale.is_finite() && cfg.scale > 0.0 {
        cfg.scale
    } else {
        1.0
    };
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::Square => Point2::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s)),
            CloudShape::Disk => {
                let r = s * rng.gen::<f64>().sqrt();
                let t = rng.gen::<f64>() * TAU;
                Point2::new(r * t.cos(), r * t.sin())
            }
            CloudShape::Circle => {
                let t = rng.gen::<f64>() * TAU;
                Point2::new(s * t.cos(), s * t.sin())
            }
            CloudShape::Grid { side } => {
                let side = side.max(1);
                Point2::new(
                    f64::from(rng.gen_range(0..side)),
                    f64::from(rng.gen_range(0..side)),
                )
            }
        })
        .collect()
}
