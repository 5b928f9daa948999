//! Point records, objective labels, tuning knobs, and the front artifact.
//!
//! - `Point`: one evaluated candidate `(objective1, objective2)`.
//! - `Objective`: caller-facing column name plus optimization sense.
//! - `FrontCfg`: alpha tightness and the initial `best_seen` floor.
//! - `ParetoFront`: immutable, labeled, strictly monotone output.
//!
//! Internally the pipeline works on `nalgebra::Vector2<f64>` in the oriented
//! space where objective 1 is minimized and objective 2 is maximized.

use nalgebra::Vector2;

/// One evaluated candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub objective1: f64,
    pub objective2: f64,
}

impl Point {
    #[inline]
    pub fn new(objective1: f64, objective2: f64) -> Self {
        Self {
            objective1,
            objective2,
        }
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.objective1.is_finite() && self.objective2.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Raw input: an order-irrelevant sequence of points (duplicates allowed).
pub type PointCloud = [Point];

/// Optimization direction of one objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

impl Sense {
    /// Mirror `v` so that it reads in the `target` sense. Involutive.
    #[inline]
    pub fn orient(self, target: Sense, v: f64) -> f64 {
        if self == target {
            v
        } else {
            -v
        }
    }
}

/// Named objective column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Objective {
    pub name: String,
    pub sense: Sense,
}

impl Objective {
    pub fn minimize(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sense: Sense::Minimize,
        }
    }
    pub fn maximize(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sense: Sense::Maximize,
        }
    }
}

/// Pipeline configuration.
#[derive(Clone, Copy, Debug)]
pub struct FrontCfg {
    /// Alpha-shape tightness. `0` selects the convex hull.
    pub alpha: f64,
    /// Initial `best_seen` for the monotonicity pass, in oriented (maximize) units.
    pub floor: f64,
}

impl Default for FrontCfg {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            floor: f64::NEG_INFINITY,
        }
    }
}

impl FrontCfg {
    #[inline]
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha,
            ..Self::default()
        }
    }
}

/// Map a caller point into the oriented space (objective 1 minimized, objective 2 maximized).
#[inline]
pub(crate) fn to_oriented(p: Point, o1: &Objective, o2: &Objective) -> Vector2<f64> {
    Vector2::new(
        o1.sense.orient(Sense::Minimize, p.objective1),
        o2.sense.orient(Sense::Maximize, p.objective2),
    )
}

/// Inverse of `to_oriented`.
#[inline]
pub(crate) fn from_oriented(v: Vector2<f64>, o1: &Objective, o2: &Objective) -> Point {
    Point::new(
        Sense::Minimize.orient(o1.sense, v.x),
        Sense::Maximize.orient(o2.sense, v.y),
    )
}

/// Final non-dominated trade-off curve.
///
/// Invariants:
/// - Points are strictly ascending in objective 1.
/// - Objective 2 is strictly monotone; rising when both objectives point the
///   same way as the default convention (or both are flipped), falling otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct ParetoFront {
    objective1: Objective,
    objective2: Objective,
    points: Vec<Point>,
}

impl ParetoFront {
    pub(crate) fn new(objective1: Objective, objective2: Objective, points: Vec<Point>) -> Self {
        Self {
            objective1,
            objective2,
            points,
        }
    }
    #[inline]
    pub fn objective1(&self) -> &Objective {
        &self.objective1
    }
    #[inline]
    pub fn objective2(&self) -> &Objective {
        &self.objective2
    }
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Values of the column labeled `name`, or None if no objective carries it.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        if self.objective1.name == name {
            Some(self.points.iter().map(|p| p.objective1).collect())
        } else if self.objective2.name == name {
            Some(self.points.iter().map(|p| p.objective2).collect())
        } else {
            None
        }
    }

    /// True if objective 2 increases along ascending objective 1.
    #[inline]
    pub fn rising(&self) -> bool {
        (self.objective1.sense == Sense::Minimize) == (self.objective2.sense == Sense::Maximize)
    }

    /// Check the strict monotonicity invariant.
    pub fn is_strictly_monotone(&self) -> bool {
        let rising = self.rising();
        self.points.windows(2).all(|w| {
            let (a, b) = (w[0], w[1]);
            let y_ok = if rising {
                a.objective2 < b.objective2
            } else {
                a.objective2 > b.objective2
            };
            a.objective1 < b.objective1 && y_ok
        })
    }
}
