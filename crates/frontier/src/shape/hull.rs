use nalgebra::Vector2;

use super::{lex_cmp, EdgeSet};

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Point indices sorted lexicographically, one index per distinct coordinate.
///
/// Coincident points collapse onto their smallest index.
fn sorted_distinct(points: &[Vector2<f64>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| lex_cmp(points[a], points[b]).then(a.cmp(&b)));
    order.dedup_by(|later, kept| points[*later] == points[*kept]);
    order
}

/// Number of distinct coordinates in the cloud.
pub fn distinct_count(points: &[Vector2<f64>]) -> usize {
    sorted_distinct(points).len()
}

/// Andrew's monotone chain over point indices.
///
/// Returns the hull in CCW order, starting at the lowest-x (then lowest-y)
/// point. Collinear boundary points are dropped, so the hull is minimal.
/// Fewer than three entries means the cloud is a single point or a segment.
pub fn convex_hull_indices(points: &[Vector2<f64>]) -> Vec<usize> {
    let pts = sorted_distinct(points);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<usize> = Vec::with_capacity(pts.len());
    for &i in &pts {
        while lower.len() >= 2
            && cross(
                points[lower[lower.len() - 2]],
                points[lower[lower.len() - 1]],
                points[i],
            ) <= 0.0
        {
            lower.pop();
        }
        lower.push(i);
    }
    let mut upper: Vec<usize> = Vec::with_capacity(pts.len());
    for &i in pts.iter().rev() {
        while upper.len() >= 2
            && cross(
                points[upper[upper.len() - 2]],
                points[upper[upper.len() - 1]],
                points[i],
            ) <= 0.0
        {
            upper.pop();
        }
        upper.push(i);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Closed edge cycle around a hull with at least three vertices.
pub fn hull_edges(hull: &[usize]) -> EdgeSet {
    let mut edges = EdgeSet::default();
    if hull.len() < 3 {
        return edges;
    }
    for k in 0..hull.len() {
        edges.insert(hull[k], hull[(k + 1) % hull.len()]);
    }
    edges
}
