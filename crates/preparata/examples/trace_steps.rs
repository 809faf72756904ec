//! Step-by-step trace of the incremental hull on one seeded cloud.
//!
//! Purpose
//! - Show the supporting paths and deletions of every insertion, and compare
//!   the final hull and timing against the monotone-chain reference.
//!
//! Run (prints debug-level events too):
//!   cargo run -p preparata --example trace_steps
//!
//! References
//! - Code: crates/preparata/src/hull/update.rs::preparata_trace

use std::time::Instant;

use preparata::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use preparata::geom2::reference_hull;
use preparata::hull::{preparata_trace, HullCfg};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .init();

    let pts = draw_cloud(
        CloudCfg {
            shape: CloudShape::Disk,
            count: 24,
            scale: 10.0,
        },
        ReplayToken { seed: 7, index: 0 },
    );

    let start = Instant::now();
    let trace = preparata_trace(&pts, &HullCfg::default()).expect("hull of a disk cloud");
    let ms = start.elapsed().as_secs_f64() * 1e3;

    println!("seed triangle: {:?}", trace.seed);
    for s in &trace.steps {
        println!(
            "step {:>2}: p=({:7.3}, {:7.3}) tree_levels={} left_path={} right_path={} deleted={} hull={}",
            s.step,
            s.point.x,
            s.point.y,
            s.tree.height(),
            s.left.len(),
            s.right.len(),
            s.deleted.len(),
            s.hull.len()
        );
    }
    let expected = reference_hull(&pts);
    assert_eq!(trace.hull, expected, "incremental hull differs from reference");
    println!("final hull: {} vertices in {ms:.3} ms", trace.hull.len());
}
