//! Pareto front extraction from noisy two-objective point clouds.
//!
//! Pipeline (strictly downstream):
//! 1. `shape::alpha`: Delaunay triangulation, circumradius filter.
//! 2. `shape::boundary`: polygonize surviving edges, keep the outer ring.
//! 3. `front::select_front`: cut the ring with the anchor line.
//! 4. `front::enforce_monotone`: strictly monotone cleanup.
//!
//! `build_pareto_front` is the only entry most callers need. `progression`
//! runs it on growing log prefixes; `sample` draws reproducible test clouds.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Breaking changes are fine when they improve clarity.

pub mod api;
pub mod error;
pub mod front;
pub mod progression;
pub mod sample;
pub mod shape;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Degeneracy, FrontError};
pub use front::{build_pareto_front, build_pareto_front_with};
pub use types::{FrontCfg, Objective, ParetoFront, Point, PointCloud, Sense};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::front::{
        build_pareto_front, build_pareto_front_with, AnchorSelector, MinXMaxX, MinXMaxY,
    };
    pub use crate::progression::{
        aggregate_runs, front_series, indicator_series, FrontIndicator, Progression, Schedule,
    };
    pub use crate::sample::{draw_tradeoff_cloud, CloudCfg, PointCount, ReplayToken};
    pub use crate::{Degeneracy, FrontCfg, FrontError, Objective, ParetoFront, Point, Sense};
}
