//! Delaunay triangulation plus the circumradius ("alpha") filter.
//!
//! A triangle survives only as a whole: either all three of its edges enter
//! the `EdgeSet`, or none do. Zero-area triangles are skipped silently.

use nalgebra::Vector2;

use super::EdgeSet;
use crate::error::{Degeneracy, FrontError};

/// Triangles as index triples into the point array.
#[derive(Clone, Debug, Default)]
pub struct Triangulation {
    pub triangles: Vec<[usize; 3]>,
}

impl Triangulation {
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Delaunay triangulation of `points`.
///
/// Coincident points are absorbed by the triangulator and simply never appear
/// in a triangle. A fully collinear cloud yields `EmptyTriangulation`.
pub fn triangulate(points: &[Vector2<f64>]) -> Result<Triangulation, FrontError> {
    if points.len() < 3 {
        return Err(FrontError::InsufficientPoints {
            needed: 3,
            got: points.len(),
        });
    }
    let input: Vec<delaunator::Point> = points
        .iter()
        .map(|p| delaunator::Point { x: p.x, y: p.y })
        .collect();
    let raw = delaunator::triangulate(&input);
    if raw.triangles.is_empty() {
        return Err(Degeneracy::EmptyTriangulation.into());
    }
    let triangles = raw
        .triangles
        .chunks_exact(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect();
    Ok(Triangulation { triangles })
}

/// Circumradius `abc / (4 * area)` with the area from Heron's formula.
///
/// None if the squared area is not strictly positive.
pub fn circumradius(pa: Vector2<f64>, pb: Vector2<f64>, pc: Vector2<f64>) -> Option<f64> {
    let a = (pa - pb).norm();
    let b = (pb - pc).norm();
    let c = (pc - pa).norm();
    let s = (a + b + c) * 0.5;
    let area_sq = s * (s - a) * (s - b) * (s - c);
    if !(area_sq > 0.0) {
        return None;
    }
    Some(a * b * c / (4.0 * area_sq.sqrt()))
}

/// Keep the edges of every triangle whose circumradius is below `1 / alpha`.
pub fn filter_edges(points: &[Vector2<f64>], tri: &Triangulation, alpha: f64) -> EdgeSet {
    let r_max = 1.0 / alpha;
    let mut edges = EdgeSet::default();
    for &[ia, ib, ic] in &tri.triangles {
        let Some(r) = circumradius(points[ia], points[ib], points[ic]) else {
            continue;
        };
        if r < r_max {
            edges.insert(ia, ib);
            edges.insert(ia, ic);
            edges.insert(ib, ic);
        }
    }
    edges
}
