//! Polygonize a planar edge set and return the outer ring of the union.
//!
//! Model
//! - Surviving edges form a planar straight-line graph (a subgraph of a
//!   Delaunay triangulation or a hull cycle). Every bounded face becomes a
//!   polygon, so the union of all polygons is everything not in the unbounded
//!   face and has no holes.
//! - Dangling chains and bridges bound no face; they are peeled off first.
//! - Faces are traced on a rotation system (outgoing half-edges sorted by
//!   angle per vertex). Outer walks come out clockwise; they are split at
//!   repeated vertices (components touching at a point) and the largest
//!   loop wins. Nested or smaller disjoint components are discarded.
//!
//! The returned ring is CCW, starts at its lowest-x (then lowest-y) vertex,
//! and repeats the first vertex at the end.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::{lex_cmp, Edge, EdgeSet};
use crate::error::{Degeneracy, FrontError};

/// Half-edge view of the live edges. Half-edge `2e` runs `edges[e].0 -> edges[e].1`,
/// `2e + 1` runs the other way.
struct HalfEdges<'a> {
    edges: &'a [Edge],
    rot: Vec<Vec<usize>>,
    slot: Vec<usize>,
}

impl<'a> HalfEdges<'a> {
    fn build(points: &[Vector2<f64>], edges: &'a [Edge], alive: &[bool]) -> Self {
        let mut rot: Vec<Vec<usize>> = vec![Vec::new(); points.len()];
        for (e, _) in edges.iter().enumerate().filter(|(e, _)| alive[*e]) {
            rot[edges[e].0].push(2 * e);
            rot[edges[e].1].push(2 * e + 1);
        }
        let mut he = Self {
            edges,
            rot,
            slot: vec![usize::MAX; 2 * edges.len()],
        };
        for v in 0..points.len() {
            let mut out = std::mem::take(&mut he.rot[v]);
            out.sort_by(|&a, &b| {
                let da = points[he.dest(a)] - points[v];
                let db = points[he.dest(b)] - points[v];
                da.y.atan2(da.x)
                    .partial_cmp(&db.y.atan2(db.x))
                    .unwrap_or(Ordering::Equal)
                    .then(he.dest(a).cmp(&he.dest(b)))
            });
            for (k, &h) in out.iter().enumerate() {
                he.slot[h] = k;
            }
            he.rot[v] = out;
        }
        he
    }

    #[inline]
    fn origin(&self, h: usize) -> usize {
        let e = self.edges[h / 2];
        if h % 2 == 0 {
            e.0
        } else {
            e.1
        }
    }

    #[inline]
    fn dest(&self, h: usize) -> usize {
        self.origin(h ^ 1)
    }

    /// Next half-edge around the face on the left of `h`: the first outgoing
    /// edge clockwise from the twin.
    #[inline]
    fn next(&self, h: usize) -> usize {
        let twin = h ^ 1;
        let around = &self.rot[self.origin(twin)];
        around[(self.slot[twin] + around.len() - 1) % around.len()]
    }

    /// Trace all faces. Returns vertex cycles and the face id of each half-edge.
    fn faces(&self, alive: &[bool]) -> (Vec<Vec<usize>>, Vec<usize>) {
        let mut face_of = vec![usize::MAX; 2 * self.edges.len()];
        let mut cycles = Vec::new();
        for start in 0..2 * self.edges.len() {
            if !alive[start / 2] || face_of[start] != usize::MAX {
                continue;
            }
            let id = cycles.len();
            let mut cycle = Vec::new();
            let mut h = start;
            loop {
                face_of[h] = id;
                cycle.push(self.origin(h));
                h = self.next(h);
                if h == start {
                    break;
                }
            }
            cycles.push(cycle);
        }
        (cycles, face_of)
    }
}

/// Repeatedly drop edges hanging off degree-1 vertices.
fn prune_dangles(n: usize, edges: &[Edge], alive: &mut [bool]) {
    let mut incident: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (e, edge) in edges.iter().enumerate() {
        if alive[e] {
            incident[edge.0].push(e);
            incident[edge.1].push(e);
        }
    }
    let mut degree: Vec<usize> = incident.iter().map(Vec::len).collect();
    let mut queue: Vec<usize> = (0..n).filter(|&v| degree[v] == 1).collect();
    while let Some(v) = queue.pop() {
        if degree[v] != 1 {
            continue;
        }
        let Some(&e) = incident[v].iter().find(|&&e| alive[e]) else {
            continue;
        };
        alive[e] = false;
        degree[v] = 0;
        let w = edges[e].other(v);
        degree[w] -= 1;
        if degree[w] == 1 {
            queue.push(w);
        }
    }
}

fn signed_area(points: &[Vector2<f64>], cycle: &[usize]) -> f64 {
    let mut a = 0.0;
    for k in 0..cycle.len() {
        let p = points[cycle[k]];
        let q = points[cycle[(k + 1) % cycle.len()]];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

/// Split a closed vertex walk into simple loops at repeated vertices.
fn split_simple(cycle: &[usize]) -> Vec<Vec<usize>> {
    let mut stack: Vec<usize> = Vec::with_capacity(cycle.len());
    let mut loops = Vec::new();
    for &v in cycle {
        if let Some(pos) = stack.iter().position(|&u| u == v) {
            let mut lp = vec![v];
            lp.extend(stack.drain(pos + 1..));
            loops.push(lp);
        } else {
            stack.push(v);
        }
    }
    loops.push(stack);
    loops.retain(|lp| lp.len() >= 3);
    loops
}

/// Outer boundary ring of the union of all polygons bounded by `edges`.
pub fn outer_ring(
    points: &[Vector2<f64>],
    edges: &EdgeSet,
) -> Result<Vec<Vector2<f64>>, FrontError> {
    let edges = edges.as_slice();
    let mut alive = vec![true; edges.len()];
    let cycles = loop {
        prune_dangles(points.len(), edges, &mut alive);
        let he = HalfEdges::build(points, edges, &alive);
        let (cycles, face_of) = he.faces(&alive);
        let bridges: Vec<usize> = (0..edges.len())
            .filter(|&e| alive[e] && face_of[2 * e] == face_of[2 * e + 1])
            .collect();
        if bridges.is_empty() {
            break cycles;
        }
        for e in bridges {
            alive[e] = false;
        }
    };

    let mut best: Option<(Vec<usize>, f64)> = None;
    for cycle in cycles
        .iter()
        .filter(|c| signed_area(points, c) < 0.0)
        .flat_map(|c| split_simple(c))
    {
        let area = signed_area(points, &cycle);
        if area < 0.0 && best.as_ref().is_none_or(|(_, a)| area < *a) {
            best = Some((cycle, area));
        }
    }
    let (mut lp, _) = best.ok_or(FrontError::DegenerateGeometry(Degeneracy::OpenBoundary))?;

    lp.reverse();
    let start = (0..lp.len())
        .min_by(|&a, &b| lex_cmp(points[lp[a]], points[lp[b]]))
        .unwrap_or(0);
    lp.rotate_left(start);
    let mut ring: Vec<Vector2<f64>> = lp.iter().map(|&i| points[i]).collect();
    ring.push(ring[0]);
    Ok(ring)
}
