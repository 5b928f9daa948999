use super::*;
use crate::error::{Degeneracy, FrontError};
use crate::sample::{draw_tradeoff_cloud, CloudCfg, PointCount, ReplayToken};
use crate::shape::{convex_hull_indices, hull_edges, outer_ring};
use crate::types::{FrontCfg, Objective, Point, Sense};
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn cloud(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

fn coords(front: &crate::ParetoFront) -> Vec<(f64, f64)> {
    front
        .points()
        .iter()
        .map(|p| (p.objective1, p.objective2))
        .collect()
}

const SCENARIO: [(f64, f64); 5] = [(1.0, 1.0), (2.0, 3.0), (3.0, 2.0), (4.0, 5.0), (5.0, 4.0)];

#[test]
fn convex_scenario_drops_dominated_points() {
    let front = build_pareto_front(&cloud(&SCENARIO), "latency", "accuracy", 0.0).unwrap();
    assert_eq!(coords(&front), vec![(1.0, 1.0), (2.0, 3.0), (4.0, 5.0)]);
    assert_eq!(front.objective1().name, "latency");
    assert_eq!(front.objective2().name, "accuracy");
    assert!(front.is_strictly_monotone());
}

#[test]
fn loose_alpha_reproduces_hull_front() {
    let front = build_pareto_front(&cloud(&SCENARIO), "x", "y", 0.01).unwrap();
    assert_eq!(coords(&front), vec![(1.0, 1.0), (2.0, 3.0), (4.0, 5.0)]);
}

/// Concave front over a jittered 30x10 lattice that stays below `y = x - 0.6`.
fn concave_front_cloud() -> Vec<Point> {
    let mut pts = cloud(&[(0.0, 0.0), (1.0, 2.0), (2.0, 2.5), (3.0, 4.0), (4.0, 4.2), (5.0, 5.0)]);
    for i in 0..30usize {
        for j in 0..10usize {
            let x = 0.5 + 4.5 * i as f64 / 29.0 + 0.011 * ((i * 7 + j * 3) % 5) as f64;
            let y = x - 0.6 - 0.35 * j as f64 - 0.007 * ((i * 3 + j * 5) % 7) as f64;
            pts.push(Point::new(x, y));
        }
    }
    pts
}

#[test]
fn alpha_shape_recovers_concave_front_points() {
    let pts = concave_front_cloud();
    let hull = build_pareto_front(&pts, "latency", "accuracy", 0.0).unwrap();
    assert_eq!(
        coords(&hull),
        vec![(0.0, 0.0), (1.0, 2.0), (3.0, 4.0), (5.0, 5.0)]
    );
    for alpha in [0.5, 0.6] {
        let front = build_pareto_front(&pts, "latency", "accuracy", alpha).unwrap();
        assert_eq!(
            coords(&front),
            vec![(0.0, 0.0), (1.0, 2.0), (2.0, 2.5), (3.0, 4.0), (4.0, 4.2), (5.0, 5.0)]
        );
    }
}

#[test]
fn over_tight_alpha_is_degenerate() {
    let err = build_pareto_front(&cloud(&SCENARIO), "x", "y", 1e6).unwrap_err();
    assert_eq!(err, FrontError::DegenerateGeometry(Degeneracy::OpenBoundary));
}

#[test]
fn non_finite_coordinate_is_rejected() {
    let err = build_pareto_front(&cloud(&[(1.0, 1.0), (f64::NAN, 2.0)]), "x", "y", 0.0)
        .unwrap_err();
    assert_eq!(err, FrontError::InvalidCoordinate { index: 1 });
    let err = build_pareto_front(&cloud(&[(1.0, f64::INFINITY)]), "x", "y", 0.5).unwrap_err();
    assert_eq!(err, FrontError::InvalidCoordinate { index: 0 });
}

#[test]
fn parameter_and_size_checks() {
    let pts = cloud(&SCENARIO);
    assert!(matches!(
        build_pareto_front(&pts, "x", "y", -0.1),
        Err(FrontError::InvalidParameter { name: "alpha", .. })
    ));
    assert!(matches!(
        build_pareto_front(&pts, "x", "y", f64::NAN),
        Err(FrontError::InvalidParameter { name: "alpha", .. })
    ));
    assert_eq!(
        build_pareto_front(&[], "x", "y", 0.0).unwrap_err(),
        FrontError::InsufficientPoints { needed: 1, got: 0 }
    );
}

#[test]
fn equal_quality_keeps_only_first_point() {
    let front = build_pareto_front(&cloud(&[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]), "x", "y", 0.0)
        .unwrap();
    assert_eq!(coords(&front), vec![(1.0, 5.0)]);
}

#[test]
fn single_point_is_its_own_front() {
    for alpha in [0.0, 1.0] {
        let front = build_pareto_front(&cloud(&[(2.0, -3.0)]), "x", "y", alpha).unwrap();
        assert_eq!(coords(&front), vec![(2.0, -3.0)]);
    }
}

#[test]
fn floor_drops_points_below_it() {
    let cfg = FrontCfg {
        alpha: 0.0,
        floor: 2.0,
    };
    let front = build_pareto_front_with(
        &cloud(&SCENARIO),
        Objective::minimize("x"),
        Objective::maximize("y"),
        cfg,
        &MinXMaxY,
    )
    .unwrap();
    assert_eq!(coords(&front), vec![(2.0, 3.0), (4.0, 5.0)]);
}

#[test]
fn vertical_cut_is_an_error() {
    // Lowest-cost point and best-quality point share x = 0.
    let pts = cloud(&[(0.0, 0.0), (0.0, 5.0), (3.0, 1.0), (2.0, 2.0)]);
    let err = build_pareto_front(&pts, "x", "y", 0.0).unwrap_err();
    assert_eq!(
        err,
        FrontError::DegenerateGeometry(Degeneracy::VerticalCut { x: 0.0 })
    );
}

#[test]
fn best_point_at_lowest_cost_stands_alone() {
    let pts = cloud(&[(0.0, 9.0), (1.0, 3.0), (2.0, 5.0), (3.0, 8.0)]);
    let front = build_pareto_front(&pts, "x", "y", 0.0).unwrap();
    assert_eq!(coords(&front), vec![(0.0, 9.0)]);
}

#[test]
fn minimize_both_objectives() {
    let pts = cloud(&[(1.0, 5.0), (2.0, 3.0), (3.0, 4.0), (4.0, 1.0)]);
    let front = build_pareto_front_with(
        &pts,
        Objective::minimize("latency"),
        Objective::minimize("error"),
        FrontCfg::default(),
        &MinXMaxY,
    )
    .unwrap();
    assert_eq!(coords(&front), vec![(1.0, 5.0), (2.0, 3.0), (4.0, 1.0)]);
    assert!(!front.rising());
    assert!(front.is_strictly_monotone());
}

#[test]
fn maximized_first_objective_is_reported_ascending() {
    let mirrored: Vec<(f64, f64)> = SCENARIO.iter().map(|&(x, y)| (-x, y)).collect();
    let front = build_pareto_front_with(
        &cloud(&mirrored),
        Objective {
            name: "throughput".into(),
            sense: Sense::Maximize,
        },
        Objective::maximize("accuracy"),
        FrontCfg::default(),
        &MinXMaxY,
    )
    .unwrap();
    assert_eq!(coords(&front), vec![(-4.0, 5.0), (-2.0, 3.0), (-1.0, 1.0)]);
    assert!(front.is_strictly_monotone());
}

#[test]
fn anchor_rules_differ_on_the_same_ring() {
    let ring: Vec<Vector2<f64>> = vec![
        vector![1.0, 1.0],
        vector![3.0, 2.0],
        vector![5.0, 4.0],
        vector![4.0, 5.0],
        vector![2.0, 3.0],
        vector![1.0, 1.0],
    ];
    assert_eq!(MinXMaxY.left(&ring), 0);
    assert_eq!(MinXMaxY.right(&ring), 3);
    assert_eq!(MinXMaxX.right(&ring), 2);
    let by_max_x = select_front(&ring, &MinXMaxX).unwrap();
    let front = enforce_monotone(&by_max_x, f64::NEG_INFINITY);
    assert_eq!(
        front,
        vec![vector![1.0, 1.0], vector![2.0, 3.0], vector![4.0, 5.0]]
    );
}

#[test]
fn select_front_sorts_ties_by_descending_y() {
    let ring = vec![
        vector![0.0, 0.0],
        vector![4.0, 4.0],
        vector![1.0, 3.0],
        vector![1.0, 2.0],
        vector![0.0, 0.0],
    ];
    let kept = select_front(&ring, &MinXMaxY).unwrap();
    assert_eq!(
        kept,
        vec![
            vector![0.0, 0.0],
            vector![0.0, 0.0],
            vector![1.0, 3.0],
            vector![1.0, 2.0],
            vector![4.0, 4.0]
        ]
    );
    let front = enforce_monotone(&kept, f64::NEG_INFINITY);
    assert_eq!(front, vec![vector![0.0, 0.0], vector![1.0, 3.0], vector![4.0, 4.0]]);
}

#[test]
fn cut_line_through_anchors() {
    let line = CutLine::through(vector![1.0, 1.0], vector![4.0, 5.0]).unwrap();
    assert!((line.m - 4.0 / 3.0).abs() < 1e-12);
    assert!(line.on_or_above(vector![2.0, 3.0]));
    assert!(!line.on_or_above(vector![3.0, 2.0]));
    assert!(CutLine::through(vector![1.0, 1.0], vector![1.0, 4.0]).is_err());
}

#[test]
fn monotone_drops_ties_and_regressions() {
    let c = vec![
        vector![1.0, 1.0],
        vector![2.0, 1.0],
        vector![3.0, 0.5],
        vector![4.0, 2.0],
    ];
    assert_eq!(
        enforce_monotone(&c, f64::NEG_INFINITY),
        vec![vector![1.0, 1.0], vector![4.0, 2.0]]
    );
    assert_eq!(enforce_monotone(&c, 1.5), vec![vector![4.0, 2.0]]);
    assert!(enforce_monotone(&[], 0.0).is_empty());
}

#[test]
fn repeated_builds_are_identical() {
    let cfg = CloudCfg {
        count: PointCount::Fixed(300),
        ..CloudCfg::default()
    };
    let pts = draw_tradeoff_cloud(cfg, ReplayToken { seed: 11, index: 2 });
    for alpha in [0.0, 0.5, 2.0] {
        let a = build_pareto_front(&pts, "x", "y", alpha);
        let b = build_pareto_front(&pts, "x", "y", alpha);
        assert_eq!(a, b);
    }
}

#[test]
fn sampled_cloud_front_hugs_the_frontier() {
    let cfg = CloudCfg {
        count: PointCount::Fixed(400),
        noise: 0.2,
        ..CloudCfg::default()
    };
    let pts = draw_tradeoff_cloud(cfg, ReplayToken { seed: 3, index: 0 });
    let hull = build_pareto_front(&pts, "cost", "quality", 0.0).unwrap();
    let alpha = build_pareto_front(&pts, "cost", "quality", 1e-9).unwrap();
    assert_eq!(hull, alpha);
    assert!(hull.len() >= 2);
    for p in hull.points() {
        assert!(pts.contains(p));
    }
}

fn grid_cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0i32..40, 0i32..40), 1..30).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect()
    })
}

fn float_cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.0f64..10.0, 0.0f64..10.0), 1..40)
        .prop_map(|v| v.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn prop_fronts_are_monotone_subsets(
        pts in float_cloud(),
        alpha in prop_oneof![Just(0.0), 0.05f64..3.0],
    ) {
        match build_pareto_front(&pts, "x", "y", alpha) {
            Ok(front) => {
                prop_assert!(front.is_strictly_monotone());
                for p in front.points() {
                    prop_assert!(pts.contains(p));
                }
            }
            Err(e) => prop_assert!(matches!(e, FrontError::DegenerateGeometry(_))),
        }
    }

    #[test]
    fn prop_hull_front_is_idempotent(pts in grid_cloud()) {
        if let Ok(front) = build_pareto_front(&pts, "x", "y", 0.0) {
            let again = build_pareto_front(front.points(), "x", "y", 0.0).unwrap();
            prop_assert_eq!(again.points(), front.points());
        }
    }

    #[test]
    fn prop_zero_alpha_equals_hull_stages(pts in grid_cloud()) {
        let v: Vec<Vector2<f64>> = pts
            .iter()
            .map(|p| Vector2::new(p.objective1, p.objective2))
            .collect();
        let hull = convex_hull_indices(&v);
        prop_assume!(hull.len() >= 3);
        let manual = outer_ring(&v, &hull_edges(&hull))
            .and_then(|ring| select_front(&ring, &MinXMaxY))
            .map(|c| enforce_monotone(&c, f64::NEG_INFINITY));
        let built = build_pareto_front(&pts, "x", "y", 0.0).map(|f| {
            f.points()
                .iter()
                .map(|p| Vector2::new(p.objective1, p.objective2))
                .collect::<Vec<_>>()
        });
        prop_assert_eq!(built, manual);
    }
}
