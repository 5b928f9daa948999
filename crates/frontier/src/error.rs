//! Errors surfaced by the front pipeline.
//!
//! Every variant is terminal for one `build_pareto_front` call. Callers that
//! run many snapshots (see `progression`) decide per call how to recover.

use std::fmt;

/// Why a geometry stage could not produce a usable shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Degeneracy {
    /// The Delaunay triangulation produced no triangles (all points collinear).
    EmptyTriangulation,
    /// The surviving edges do not close into a single ring.
    OpenBoundary,
    /// The front-selection anchors share an x coordinate, so the cut line is vertical.
    VerticalCut { x: f64 },
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::EmptyTriangulation => {
                write!(f, "triangulation is empty (points are collinear)")
            }
            Degeneracy::OpenBoundary => {
                write!(f, "filtered edges do not close into a boundary ring")
            }
            Degeneracy::VerticalCut { x } => {
                write!(f, "front cut line is vertical at x = {}", x)
            }
        }
    }
}

/// Errors returned by the core pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum FrontError {
    /// Not enough points for the requested stage.
    InsufficientPoints { needed: usize, got: usize },
    /// A coordinate at `index` is NaN or infinite.
    InvalidCoordinate { index: usize },
    /// Boundary extraction or front selection hit a singular configuration.
    DegenerateGeometry(Degeneracy),
    /// A tuning parameter is out of range (e.g. negative alpha).
    InvalidParameter { name: &'static str, value: f64 },
}

impl fmt::Display for FrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontError::InsufficientPoints { needed, got } => {
                write!(f, "need at least {} points, got {}", needed, got)
            }
            FrontError::InvalidCoordinate { index } => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
            FrontError::DegenerateGeometry(d) => write!(f, "degenerate geometry: {}", d),
            FrontError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {} = {}", name, value)
            }
        }
    }
}

impl std::error::Error for FrontError {}

impl From<Degeneracy> for FrontError {
    fn from(d: Degeneracy) -> Self {
        FrontError::DegenerateGeometry(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offending_values() {
        let e = FrontError::InvalidParameter {
            name: "alpha",
            value: -1.0,
        };
        assert_eq!(e.to_string(), "invalid parameter alpha = -1");
        let d: FrontError = Degeneracy::VerticalCut { x: 2.5 }.into();
        assert!(d.to_string().contains("vertical at x = 2.5"));
    }
}
