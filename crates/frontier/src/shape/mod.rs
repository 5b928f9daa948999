//! Shape of a point cloud: triangulation, alpha filtering, boundary rings.
//!
//! Purpose
//! - Turn an unordered cloud into one closed, counter-clockwise boundary ring
//!   that downstream front selection can cut.
//! - Two roads lead to the ring: the convex hull (small clouds, `alpha == 0`)
//!   and the alpha shape (Delaunay triangles filtered by circumradius).
//!   Both end in `boundary::outer_ring`, so ring orientation and start vertex
//!   follow one convention.
//!
//! Data layout
//! - Points live in a flat `[Vector2<f64>]`; edges and triangles are index
//!   tuples into it. `EdgeSet` deduplicates unordered pairs and remembers
//!   insertion order so results do not depend on hash iteration order.
//!
//! Code cross-refs: `front::pipeline` (stage machine), `types::FrontCfg`.

pub mod alpha;
pub mod boundary;
pub mod hull;

use std::cmp::Ordering;
use std::collections::HashSet;

use nalgebra::Vector2;

pub use alpha::{circumradius, filter_edges, triangulate, Triangulation};
pub use boundary::outer_ring;
pub use hull::{convex_hull_indices, distinct_count, hull_edges};

/// Lexicographic order by x, then y. Incomparable coordinates count as equal.
#[inline]
pub(crate) fn lex_cmp(a: Vector2<f64>, b: Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Unordered pair of point indices, stored as `(min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Edge(i, j)
        } else {
            Edge(j, i)
        }
    }
    /// Endpoint opposite to `v` (assumes `v` is an endpoint).
    #[inline]
    pub fn other(&self, v: usize) -> usize {
        if self.0 == v {
            self.1
        } else {
            self.0
        }
    }
}

/// Deduplicated edges in first-insertion order.
#[derive(Clone, Debug, Default)]
pub struct EdgeSet {
    edges: Vec<Edge>,
    seen: HashSet<Edge>,
}

impl EdgeSet {
    /// Insert `{i, j}`; returns false if it was already present in either orientation.
    pub fn insert(&mut self, i: usize, j: usize) -> bool {
        let e = Edge::new(i, j);
        if self.seen.insert(e) {
            self.edges.push(e);
            true
        } else {
            false
        }
    }
    #[inline]
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.seen.contains(&Edge::new(i, j))
    }
}
