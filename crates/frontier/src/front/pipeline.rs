//! The single entry point: point cloud in, Pareto front out.
//!
//! Stages run strictly downstream:
//! `Triangulate -> Filter -> ExtractBoundary -> SelectFront -> EnforceMonotonicity -> Done`.
//! The convex-hull fast path branches inside `Triangulate` and rejoins at
//! `ExtractBoundary` (or at `SelectFront` when the hull is a point or segment).
//! Any error is terminal.

use nalgebra::Vector2;
use tracing::debug;

use super::monotone::enforce_monotone;
use super::select::{select_front, AnchorSelector, MinXMaxY};
use crate::error::FrontError;
use crate::shape::{
    convex_hull_indices, distinct_count, filter_edges, hull_edges, outer_ring, triangulate,
    EdgeSet, Triangulation,
};
use crate::types::{
    from_oriented, to_oriented, FrontCfg, Objective, ParetoFront, Point, PointCloud, Sense,
};

/// Clouds with fewer distinct points than this always take the hull path.
pub const MIN_ALPHA_POINTS: usize = 4;

enum Stage {
    Triangulate,
    Filter(Triangulation),
    ExtractBoundary(EdgeSet),
    SelectFront(Vec<Vector2<f64>>),
    EnforceMonotonicity(Vec<Vector2<f64>>),
    Done(Vec<Vector2<f64>>),
}

/// Build the front with the default convention: objective 1 minimized,
/// objective 2 maximized, `MinXMaxY` anchors, no floor.
pub fn build_pareto_front(
    points: &PointCloud,
    objective1_name: &str,
    objective2_name: &str,
    alpha: f64,
) -> Result<ParetoFront, FrontError> {
    build_pareto_front_with(
        points,
        Objective::minimize(objective1_name),
        Objective::maximize(objective2_name),
        FrontCfg::with_alpha(alpha),
        &MinXMaxY,
    )
}

/// Build the front with explicit objective senses, configuration and anchor rule.
///
/// The returned points are ascending in objective 1 as the caller reads it.
pub fn build_pareto_front_with<S: AnchorSelector + ?Sized>(
    points: &PointCloud,
    objective1: Objective,
    objective2: Objective,
    cfg: FrontCfg,
    selector: &S,
) -> Result<ParetoFront, FrontError> {
    validate(points, &cfg)?;
    let oriented: Vec<Vector2<f64>> = points
        .iter()
        .map(|&p| to_oriented(p, &objective1, &objective2))
        .collect();
    let front = run_stages(&oriented, &cfg, selector)?;
    let mut out: Vec<Point> = front
        .into_iter()
        .map(|v| from_oriented(v, &objective1, &objective2))
        .collect();
    if objective1.sense == Sense::Maximize {
        out.reverse();
    }
    Ok(ParetoFront::new(objective1, objective2, out))
}

fn validate(points: &PointCloud, cfg: &FrontCfg) -> Result<(), FrontError> {
    if !(cfg.alpha.is_finite() && cfg.alpha >= 0.0) {
        return Err(FrontError::InvalidParameter {
            name: "alpha",
            value: cfg.alpha,
        });
    }
    if cfg.floor.is_nan() {
        return Err(FrontError::InvalidParameter {
            name: "floor",
            value: cfg.floor,
        });
    }
    if points.is_empty() {
        return Err(FrontError::InsufficientPoints { needed: 1, got: 0 });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(FrontError::InvalidCoordinate { index });
    }
    Ok(())
}

fn run_stages<S: AnchorSelector + ?Sized>(
    points: &[Vector2<f64>],
    cfg: &FrontCfg,
    selector: &S,
) -> Result<Vec<Vector2<f64>>, FrontError> {
    let mut stage = Stage::Triangulate;
    loop {
        stage = match stage {
            Stage::Triangulate => {
                let distinct = distinct_count(points);
                if distinct < MIN_ALPHA_POINTS || cfg.alpha == 0.0 {
                    debug!(distinct, alpha = cfg.alpha, "convex hull path");
                    let hull = convex_hull_indices(points);
                    if hull.len() < 3 {
                        let mut ring: Vec<Vector2<f64>> = hull.iter().map(|&i| points[i]).collect();
                        if let Some(&first) = ring.first() {
                            ring.push(first);
                        }
                        Stage::SelectFront(ring)
                    } else {
                        Stage::ExtractBoundary(hull_edges(&hull))
                    }
                } else {
                    let tri = triangulate(points)?;
                    debug!(triangles = tri.len(), "triangulated");
                    Stage::Filter(tri)
                }
            }
            Stage::Filter(tri) => {
                let edges = filter_edges(points, &tri, cfg.alpha);
                debug!(edges = edges.len(), alpha = cfg.alpha, "alpha filter");
                Stage::ExtractBoundary(edges)
            }
            Stage::ExtractBoundary(edges) => {
                let ring = outer_ring(points, &edges)?;
                debug!(ring = ring.len(), "boundary extracted");
                Stage::SelectFront(ring)
            }
            Stage::SelectFront(ring) => {
                let candidates = select_front(&ring, selector)?;
                debug!(candidates = candidates.len(), "front selected");
                Stage::EnforceMonotonicity(candidates)
            }
            Stage::EnforceMonotonicity(candidates) => {
                Stage::Done(enforce_monotone(&candidates, cfg.floor))
            }
            Stage::Done(front) => {
                debug!(front = front.len(), "front done");
                return Ok(front);
            }
        };
    }
}
