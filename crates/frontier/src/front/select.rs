//! Cut the boundary ring with the line through two anchor points.
//!
//! Anchors are picked by an `AnchorSelector`. The default `MinXMaxY` pairs
//! the lowest-cost point with the highest-quality point; `MinXMaxX` pairs the
//! two x extremes. Ties resolve to the first occurrence in ring order.

use nalgebra::Vector2;

use crate::error::{Degeneracy, FrontError};
use crate::shape::lex_cmp;

/// Picks the two ring indices that define the cut line.
pub trait AnchorSelector {
    fn left(&self, ring: &[Vector2<f64>]) -> usize;
    fn right(&self, ring: &[Vector2<f64>]) -> usize;
}

/// Leftmost point and topmost point.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinXMaxY;

/// Leftmost point and rightmost point.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinXMaxX;

/// First index minimizing `key`.
fn argmin_by(ring: &[Vector2<f64>], key: impl Fn(&Vector2<f64>) -> f64) -> usize {
    let mut best = 0;
    for (i, p) in ring.iter().enumerate().skip(1) {
        if key(p) < key(&ring[best]) {
            best = i;
        }
    }
    best
}

impl AnchorSelector for MinXMaxY {
    fn left(&self, ring: &[Vector2<f64>]) -> usize {
        argmin_by(ring, |p| p.x)
    }
    fn right(&self, ring: &[Vector2<f64>]) -> usize {
        argmin_by(ring, |p| -p.y)
    }
}

impl AnchorSelector for MinXMaxX {
    fn left(&self, ring: &[Vector2<f64>]) -> usize {
        argmin_by(ring, |p| p.x)
    }
    fn right(&self, ring: &[Vector2<f64>]) -> usize {
        argmin_by(ring, |p| -p.x)
    }
}

/// Slope-intercept cut line `y = m x + b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutLine {
    pub m: f64,
    pub b: f64,
}

impl CutLine {
    /// Line through `l` and `r`; a vertical line is an error.
    pub fn through(l: Vector2<f64>, r: Vector2<f64>) -> Result<Self, FrontError> {
        if l.x == r.x {
            return Err(Degeneracy::VerticalCut { x: l.x }.into());
        }
        let m = (l.y - r.y) / (l.x - r.x);
        Ok(Self { m, b: l.y - m * l.x })
    }
    #[inline]
    pub fn on_or_above(&self, p: Vector2<f64>) -> bool {
        p.y >= self.m * p.x + self.b
    }
}

/// Keep ring points on or above the anchor line, sorted by ascending x.
///
/// Equal x values are ordered by descending y so the dominating point comes
/// first. Anchors are always kept. If both anchors are the same point there is
/// no cut and every ring point is kept.
pub fn select_front<S: AnchorSelector + ?Sized>(
    ring: &[Vector2<f64>],
    selector: &S,
) -> Result<Vec<Vector2<f64>>, FrontError> {
    if ring.is_empty() {
        return Ok(Vec::new());
    }
    let l = ring[selector.left(ring)];
    let r = ring[selector.right(ring)];
    let mut kept: Vec<Vector2<f64>> = if l == r {
        ring.to_vec()
    } else {
        let line = CutLine::through(l, r)?;
        ring.iter()
            .copied()
            .filter(|&p| p == l || p == r || line.on_or_above(p))
            .collect()
    };
    kept.sort_by(|a, b| lex_cmp(Vector2::new(a.x, -a.y), Vector2::new(b.x, -b.y)));
    Ok(kept)
}
