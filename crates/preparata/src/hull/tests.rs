use super::*;
use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use crate::geom2::{
    contains_point, is_strictly_convex_cw, orient2d, reference_hull, relative_angle, Point2,
};
use crate::threaded::ThreadedTree;
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

fn square() -> Vec<Point2> {
    vec![
        vector![0.0, 0.0],
        vector![0.0, 4.0],
        vector![4.0, 4.0],
        vector![4.0, 0.0],
    ]
}

fn cfg() -> HullCfg {
    HullCfg::default()
}

/// All hull vertices on the required side of the line through `q` and the tangent.
fn supports(hull: &[Point2], q: Point2, path: &SupportingPath) -> bool {
    let t = path.point();
    hull.iter().all(|v| {
        let o = orient2d(t, q, *v);
        match path.tangent() {
            Tangent::Left => o >= 0.0,
            Tangent::Right => o <= 0.0,
        }
    })
}

/// Hull equals the monotone chain, or both agree there is no polygon.
fn assert_matches_reference(pts: &[Point2]) {
    let expected = reference_hull(pts);
    match preparata_hull(pts, &cfg()) {
        Ok(hull) => {
            assert_eq!(hull, expected, "{pts:?}");
            assert!(pts.iter().all(|p| contains_point(&hull, *p)));
        }
        Err(HullError::AllCollinear) | Err(HullError::InsufficientPoints { .. }) => {
            assert!(expected.len() < 3, "{pts:?}");
        }
        Err(e) => panic!("{e} on {pts:?}"),
    }
}

#[test]
fn classification_table() {
    use VertexClass::*;
    assert_eq!(classify_angles(FRAC_PI_2, 3.0 * FRAC_PI_2 - 0.1), Some(Convex));
    assert_eq!(classify_angles(FRAC_PI_4, 7.0 * FRAC_PI_4), Some(Reflex));
    assert_eq!(classify_angles(0.3, 2.0), Some(LeftSupporting));
    assert_eq!(classify_angles(4.0, 5.5), Some(RightSupporting));
    // argument order does not matter
    for (a, b) in [(0.3, 2.0), (4.0, 5.5), (FRAC_PI_4, 7.0 * FRAC_PI_4), (2.0, 4.0)] {
        assert_eq!(classify_angles(a, b), classify_angles(b, a));
    }
}

#[test]
fn classification_boundaries_are_deterministic() {
    use VertexClass::*;
    // neighbour on the query ray
    assert_eq!(classify_angles(0.0, FRAC_PI_2), Some(LeftSupporting));
    assert_eq!(classify_angles(0.0, 3.0 * FRAC_PI_2), Some(RightSupporting));
    // neighbour exactly opposite the query ray
    assert_eq!(classify_angles(PI, 3.0 * FRAC_PI_2), Some(Convex));
    assert_eq!(classify_angles(FRAC_PI_2, PI), Some(Convex));
    // both neighbours on the query line, or on one ray: no tangent
    assert_eq!(classify_angles(0.0, PI), None);
    assert_eq!(classify_angles(1.0, 1.0), None);
    assert_eq!(classify_angles(0.0, 0.0), None);
    // straddling with an exact half turn between the neighbours
    assert_eq!(classify_angles(FRAC_PI_2, 3.0 * FRAC_PI_2), None);
    // a boundary never lands in the reflex row
    for other in [0.1, 1.0, 2.0, 3.5, 5.0, 6.2] {
        assert_ne!(classify_angles(0.0, other), Some(Reflex));
        assert_ne!(classify_angles(PI, other), Some(Reflex));
    }
    assert!(classify_angles(TAU - 1e-9, 0.0).is_some());
}

#[test]
fn heading_table() {
    use Heading::*;
    use VertexClass::*;
    let cases = [
        (Convex, Tangent::Left, Chain::Upper, Right),
        (Convex, Tangent::Right, Chain::Upper, Left),
        (Reflex, Tangent::Left, Chain::Upper, Right),
        (Reflex, Tangent::Right, Chain::Upper, Right),
        (Reflex, Tangent::Left, Chain::Lower, Left),
        (Reflex, Tangent::Right, Chain::Lower, Left),
        (LeftSupporting, Tangent::Left, Chain::Lower, Stay),
        (LeftSupporting, Tangent::Right, Chain::Lower, Left),
        (RightSupporting, Tangent::Right, Chain::Upper, Stay),
        (RightSupporting, Tangent::Left, Chain::Upper, Right),
        // the anchor never heads left
        (LeftSupporting, Tangent::Left, Chain::Anchor, Stay),
        (LeftSupporting, Tangent::Right, Chain::Anchor, Right),
        (RightSupporting, Tangent::Right, Chain::Anchor, Stay),
        (Reflex, Tangent::Left, Chain::Anchor, Right),
    ];
    for (class, tangent, chain, want) in cases {
        assert_eq!(heading(class, tangent, chain), want, "{class:?} {tangent:?} {chain:?}");
    }
}

#[test]
fn vertex_classes_agree_with_the_angle_table() {
    // Lattice offsets: collinear neighbours give exact 0 and π angles.
    let grid: Vec<Point2> = (-2..=2)
        .flat_map(|x| (-2..=2).map(move |y| vector![f64::from(x), f64::from(y)]))
        .collect();
    let v = vector![0.0, 0.0];
    let mut checked = 0;
    for &p in &grid {
        for &s in &grid {
            if p == v || s == v || orient2d(p, v, s) >= 0.0 {
                continue;
            }
            for &q in &grid {
                if q == v {
                    continue;
                }
                let by_angles = classify_angles(relative_angle(v, q, p), relative_angle(v, q, s));
                assert_eq!(classify_vertex(v, p, s, q), by_angles, "p={p:?} s={s:?} q={q:?}");
                assert!(by_angles.is_some());
                checked += 1;
            }
        }
    }
    assert!(checked > 1000);
}

#[test]
fn nearly_collinear_triangle_classifies_every_vertex() {
    // Seed triangle and next point, all on y = 0.3x up to rounding. The
    // neighbour angles at the two ends coincide in floating point.
    let a = vector![0.4244296348972302, 0.12732889046999313];
    let b = vector![0.5492346320857826, 0.164770389626543];
    let c = vector![0.6572389168459526, 0.19717167505458025];
    let q = vector![0.9692686322525209, 0.29078058967665926];
    assert!(orient2d(a, b, c) < 0.0);
    assert_eq!(classify_vertex(a, c, b, q), Some(VertexClass::RightSupporting));
    assert_eq!(classify_vertex(b, a, c, q), Some(VertexClass::Convex));
    assert_eq!(classify_vertex(c, b, a, q), Some(VertexClass::LeftSupporting));
}

#[test]
fn square_tangents_from_the_right() {
    let hull = square();
    let tree = ThreadedTree::from_sequence(hull.clone(), true).unwrap();
    let q = vector![6.0, 2.0];
    let left = supporting_path(&tree, q, Tangent::Left).unwrap();
    let right = supporting_path(&tree, q, Tangent::Right).unwrap();
    assert_eq!(
        left.points(),
        vec![vector![0.0, 4.0], vector![4.0, 4.0], vector![4.0, 0.0]]
    );
    assert_eq!(right.points(), &[vector![0.0, 4.0], vector![4.0, 4.0]]);
    assert_eq!(left.point(), vector![4.0, 0.0]);
    assert_eq!(right.point(), vector![4.0, 4.0]);
    assert!(supports(&hull, q, &left));
    assert!(supports(&hull, q, &right));
}

#[test]
fn left_tangent_can_be_the_anchor() {
    // Query below everything: the visible arc runs up to the wrap.
    let hull = square();
    let tree = ThreadedTree::from_sequence(hull.clone(), true).unwrap();
    let q = vector![6.0, -3.0];
    let left = supporting_path(&tree, q, Tangent::Left).unwrap();
    let right = supporting_path(&tree, q, Tangent::Right).unwrap();
    assert_eq!(left.point(), vector![0.0, 0.0]);
    assert_eq!(right.point(), vector![4.0, 4.0]);
    assert!(left.len() <= tree.height() + 1);
}

#[test]
fn path_accessors() {
    let tree = ThreadedTree::from_sequence(square(), true).unwrap();
    let path = supporting_path(&tree, vector![6.0, 2.0], Tangent::Left).unwrap();
    assert_eq!(path.tangent(), Tangent::Left);
    assert!(!path.is_empty());
    assert_eq!(path.nodes().len(), path.len());
    assert_eq!(path.points().len(), path.len());
    assert_eq!(path.nodes()[0], tree.root());
    assert_eq!(Some(&path.node()), path.nodes().last());
    assert_eq!(*tree.data(path.node()), path.point());
}

#[test]
fn query_on_a_vertex_is_degenerate() {
    let tree = ThreadedTree::from_sequence(square(), true).unwrap();
    let err = supporting_path(&tree, vector![4.0, 4.0], Tangent::Left).unwrap_err();
    assert_eq!(err, HullError::DegenerateQuery { point: vector![4.0, 4.0] });
}

#[test]
fn open_tree_is_rejected() {
    let tree = ThreadedTree::from_sequence(square(), false).unwrap();
    assert_eq!(
        supporting_path(&tree, vector![9.0, 9.0], Tangent::Right).unwrap_err(),
        HullError::NotCircular
    );
}

#[test]
fn square_with_interior_point() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
        vector![2.0, 2.0],
    ];
    let trace = preparata_trace(&pts, &cfg()).unwrap();
    assert_eq!(trace.hull, square());
    // sorted order seeds with (0,0), (0,4), (2,2); the centre drops out for good
    let centre = vector![2.0, 2.0];
    let dropped: usize = trace
        .steps
        .iter()
        .map(|s| s.deleted.iter().filter(|p| **p == centre).count())
        .sum();
    assert_eq!(dropped, 1);
    assert!(!trace.hull.contains(&centre));
    assert_eq!(trace.hulls().count(), 3);
    assert!(trace.paths().all(|(l, r)| l.tangent() == Tangent::Left && r.tangent() == Tangent::Right));
}

#[test]
fn pentagon_is_independent_of_the_seed_triangle() {
    let pentagon: Vec<Point2> = (0..5)
        .map(|k| {
            let t = 0.3 + (k as f64) * TAU / 5.0;
            vector![10.0 * t.cos(), 10.0 * t.sin()]
        })
        .collect();
    let expected = reference_hull(&pentagon);
    assert_eq!(expected.len(), 5);
    assert_eq!(preparata_hull(&pentagon, &cfg()).unwrap(), expected);

    // Every triple containing the smallest point works as a seed.
    let mut sorted = pentagon.clone();
    sorted.sort_by(crate::geom2::lex_cmp);
    for i in 1..5 {
        for j in i + 1..5 {
            let mut h = IncrementalHull::from_seed([sorted[0], sorted[i], sorted[j]]).unwrap();
            for (k, p) in sorted.iter().enumerate().skip(1) {
                if k != i && k != j {
                    h.insert(*p).unwrap();
                }
            }
            assert_eq!(h.hull(), expected.as_slice(), "seed {i},{j}");
        }
    }
}

#[test]
fn collinear_prefix_is_skipped_for_the_seed() {
    let mut pts = vec![
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![2.0, 2.0],
        vector![3.0, 0.0],
    ];
    let seed = seed_triangle(&mut pts).unwrap();
    assert_eq!(seed, [vector![0.0, 0.0], vector![1.0, 1.0], vector![3.0, 0.0]]);
    assert_eq!(pts[3], vector![2.0, 2.0]);
    let hull = preparata_hull(&pts, &cfg()).unwrap();
    assert_eq!(
        hull,
        vec![vector![0.0, 0.0], vector![2.0, 2.0], vector![3.0, 0.0]]
    );
}

#[test]
fn collinear_extensions_drop_middle_vertices() {
    // (8,4) extends the top edge, (12,0) extends the bottom edge.
    let mut pts = square();
    pts.push(vector![8.0, 4.0]);
    pts.push(vector![12.0, 0.0]);
    let trace = preparata_trace(&pts, &cfg()).unwrap();
    assert_eq!(
        trace.hull,
        vec![vector![0.0, 0.0], vector![0.0, 4.0], vector![8.0, 4.0], vector![12.0, 0.0]]
    );
    assert!(trace.hulls().all(is_strictly_convex_cw));
}

#[test]
fn nearly_collinear_input_matches_reference() {
    // Points on y = 0.3x up to rounding.
    let pts = vec![
        vector![0.5492346320857826, 0.164770389626543],
        vector![0.4244296348972302, 0.12732889046999313],
        vector![0.9692686322525209, 0.29078058967665926],
        vector![0.6572389168459526, 0.19717167505458025],
    ];
    let hull = preparata_hull(&pts, &cfg()).unwrap();
    assert_eq!(hull.len(), 3);
    assert_eq!(hull, reference_hull(&pts));
}

#[test]
fn jittered_lines_match_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for trial in 0..400 {
        let n = rng.gen_range(3..30);
        let jitter = [0.0, 1e-16, 1e-14, 1e-12][trial % 4];
        let slope = if trial % 2 == 0 { 0.3 } else { rng.gen_range(-3.0..3.0) };
        let pts: Vec<Point2> = (0..n)
            .map(|_| {
                let x: f64 = rng.gen();
                let j = if jitter > 0.0 {
                    rng.gen_range(-jitter..jitter)
                } else {
                    0.0
                };
                vector![x, slope * x + j]
            })
            .collect();
        assert_matches_reference(&pts);
    }
}

#[test]
fn prepare_points_merges_signed_zeros() {
    let pts = vec![
        vector![0.0, 1.0],
        vector![-0.0, 5.0],
        vector![-0.0, 1.0],
        vector![3.0, 0.0],
        vector![0.0, 5.0],
    ];
    let prepared = prepare_points(&pts, &cfg()).unwrap();
    assert_eq!(
        prepared,
        vec![vector![0.0, 1.0], vector![0.0, 5.0], vector![3.0, 0.0]]
    );
    assert!(prepared.iter().all(|p| p.x.is_sign_positive()));
    let strict = HullCfg {
        duplicates: DuplicatePolicy::Reject,
    };
    assert_eq!(
        prepare_points(&pts, &strict).unwrap_err(),
        HullError::DuplicatePoint { point: vector![0.0, 1.0] }
    );
    assert_eq!(preparata_hull(&pts, &cfg()).unwrap(), prepared);
}

#[test]
fn error_cases() {
    let two = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![1.0, 1.0]];
    assert_eq!(
        preparata_hull(&two, &cfg()).unwrap_err(),
        HullError::InsufficientPoints { distinct: 2 }
    );
    let line: Vec<Point2> = (0..6).map(|k| vector![k as f64, 2.0 * k as f64]).collect();
    assert_eq!(preparata_hull(&line, &cfg()).unwrap_err(), HullError::AllCollinear);
    let nan = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![f64::NAN, 1.0]];
    assert_eq!(
        preparata_hull(&nan, &cfg()).unwrap_err(),
        HullError::NonFinite { index: 2 }
    );

    let mut dup = square();
    dup.push(vector![4.0, 4.0]);
    let strict = HullCfg {
        duplicates: DuplicatePolicy::Reject,
    };
    assert_eq!(
        preparata_hull(&dup, &strict).unwrap_err(),
        HullError::DuplicatePoint { point: vector![4.0, 4.0] }
    );
    assert_eq!(preparata_hull(&dup, &cfg()).unwrap(), square());
}

#[test]
fn errors_render() {
    let errs = [
        HullError::InsufficientPoints { distinct: 1 },
        HullError::AllCollinear,
        HullError::DuplicatePoint { point: vector![1.0, 2.0] },
        HullError::NonFinite { index: 3 },
        HullError::NonFiniteInsert { point: vector![f64::NAN, 0.0] },
        HullError::DegenerateQuery { point: vector![0.0, 0.0] },
        HullError::NotOutside { point: vector![0.5, 0.5] },
        HullError::NotCircular,
        HullError::SearchDiverged { steps: 9 },
        HullError::from(crate::threaded::TreeError::Empty),
    ];
    for e in errs {
        assert!(!e.to_string().is_empty());
    }
    let wrapped = HullError::from(crate::threaded::TreeError::Empty);
    assert!(std::error::Error::source(&wrapped).is_some());
}

#[test]
fn insert_rejects_points_that_are_not_outside() {
    let mut h = IncrementalHull::from_seed([
        vector![4.0, 0.0],
        vector![0.0, 0.0],
        vector![0.0, 4.0],
    ])
    .unwrap();
    assert_eq!(h.anchor(), vector![0.0, 0.0]);
    assert_eq!(
        h.hull(),
        &[vector![0.0, 0.0], vector![0.0, 4.0], vector![4.0, 0.0]]
    );
    let inside = vector![1.0, 1.0];
    assert_eq!(h.insert(inside).unwrap_err(), HullError::NotOutside { point: inside });
    let before_anchor = vector![-1.0, 5.0];
    assert!(matches!(h.insert(before_anchor), Err(HullError::NotOutside { .. })));
    assert!(matches!(
        h.insert(vector![0.0, 4.0]),
        Err(HullError::DegenerateQuery { .. })
    ));
    assert!(matches!(
        IncrementalHull::from_seed([vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]]),
        Err(HullError::AllCollinear)
    ));
    assert!(matches!(
        h.insert(vector![f64::INFINITY, 1.0]),
        Err(HullError::NonFiniteInsert { .. })
    ));
    // rejected insertions leave the hull untouched
    assert_eq!(h.len(), 3);
    assert_eq!(h.steps(), 0);
    let step = h.insert(vector![4.0, 4.0]).unwrap();
    assert_eq!(step.step, 1);
    assert!(step.deleted.is_empty());
    assert_eq!(h.len(), 4);
}

#[test]
fn step_records_are_consistent() {
    let pts = draw_cloud(
        CloudCfg {
            shape: CloudShape::Disk,
            count: 120,
            scale: 5.0,
        },
        ReplayToken { seed: 11, index: 0 },
    );
    let mut prev_len = 3;
    let mut seen = 0;
    let hull = preparata_hull_with(&pts, &cfg(), |s| {
        seen += 1;
        assert_eq!(s.step, seen);
        assert_eq!(s.tree.len(), prev_len);
        assert_eq!(s.hull.len(), prev_len + 1 - s.deleted.len());
        assert!(s.hull.contains(&s.point));
        assert!(s.left.len() <= s.tree.height() + 1);
        assert!(s.right.len() <= s.tree.height() + 1);
        assert_eq!(s.left.points()[0], *s.tree.data(s.tree.root()));
        assert!(is_strictly_convex_cw(&s.hull));
        prev_len = s.hull.len();
    })
    .unwrap();
    assert_eq!(seen, 117);
    assert_eq!(hull, reference_hull(&pts));
}

#[test]
fn tangents_support_the_previous_hull() {
    let pts = draw_cloud(
        CloudCfg {
            shape: CloudShape::Square,
            count: 200,
            scale: 1.0,
        },
        ReplayToken { seed: 3, index: 2 },
    );
    let trace = preparata_trace(&pts, &cfg()).unwrap();
    let before: Vec<&[Point2]> = trace.hulls().collect();
    for (k, s) in trace.steps.iter().enumerate() {
        assert!(supports(before[k], s.point, &s.left));
        assert!(supports(before[k], s.point, &s.right));
    }
}

#[test]
fn seeded_clouds_match_reference() {
    let shapes = [
        CloudShape::Square,
        CloudShape::Disk,
        CloudShape::Circle,
        CloudShape::Grid { side: 6 },
        CloudShape::Grid { side: 40 },
    ];
    let mut tok = ReplayToken { seed: 2024, index: 0 };
    for shape in shapes {
        for count in [3usize, 4, 7, 20, 90] {
            let pts = draw_cloud(
                CloudCfg {
                    shape,
                    count,
                    scale: 3.0,
                },
                tok,
            );
            tok = tok.next();
            let expected = reference_hull(&pts);
            match preparata_hull(&pts, &cfg()) {
                Ok(hull) => {
                    assert_eq!(hull, expected, "{shape:?} n={count}");
                    assert!(pts.iter().all(|p| contains_point(&hull, *p)));
                }
                Err(HullError::AllCollinear) | Err(HullError::InsufficientPoints { .. }) => {
                    assert!(expected.len() < 3, "{shape:?} n={count}");
                }
                Err(e) => panic!("{shape:?} n={count}: {e}"),
            }
        }
    }
}

/// Points on a random line, each nudged by at most 1e-12 vertically.
fn jittered_line() -> impl Strategy<Value = Vec<Point2>> {
    (
        -3.0f64..3.0,
        -1.0f64..1.0,
        prop::collection::vec((0.0f64..1.0, -1.0e-12f64..1.0e-12), 3..40),
    )
        .prop_map(|(slope, offset, xs)| {
            xs.into_iter()
                .map(|(x, j)| vector![x, slope * x + offset + j])
                .collect()
        })
}

fn lattice_points() -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec((-30i32..30, -30i32..30), 3..60).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| vector![f64::from(x), f64::from(y)])
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_matches_reference_on_lattices(pts in lattice_points()) {
        let expected = reference_hull(&pts);
        match preparata_hull(&pts, &HullCfg::default()) {
            Ok(hull) => {
                prop_assert!(is_strictly_convex_cw(&hull));
                prop_assert!(pts.iter().all(|p| contains_point(&hull, *p)));
                prop_assert_eq!(hull, expected);
            }
            Err(HullError::AllCollinear) | Err(HullError::InsufficientPoints { .. }) => {
                prop_assert!(expected.len() < 3);
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn prop_paths_stay_short(
        pts in prop::collection::vec((-1.0e3f64..1.0e3, -1.0e3f64..1.0e3), 3..80)
    ) {
        let pts: Vec<Point2> = pts.into_iter().map(|(x, y)| vector![x, y]).collect();
        if let Ok(trace) = preparata_trace(&pts, &HullCfg::default()) {
            for s in &trace.steps {
                prop_assert!(s.left.len() <= s.tree.height() + 1);
                prop_assert!(s.right.len() <= s.tree.height() + 1);
            }
            prop_assert_eq!(trace.hull, reference_hull(&pts));
        }
    }

    #[test]
    fn prop_jittered_lines_match_reference(pts in jittered_line()) {
        let expected = reference_hull(&pts);
        match preparata_hull(&pts, &HullCfg::default()) {
            Ok(hull) => {
                prop_assert!(pts.iter().all(|p| contains_point(&hull, *p)));
                prop_assert_eq!(hull, expected);
            }
            Err(HullError::AllCollinear) | Err(HullError::InsufficientPoints { .. }) => {
                prop_assert!(expected.len() < 3);
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }
}
