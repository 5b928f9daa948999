//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI, the
//!   Python bindings, and benches. Breaking changes are allowed and expected.
//! - Stage-level functions are exported so callers can inspect intermediate
//!   shapes (e.g. to plot the alpha boundary next to the front).
//! - The Python bindings import from here only.

// Pipeline entry and configuration
pub use crate::front::{
    build_pareto_front, build_pareto_front_with, AnchorSelector, MinXMaxX, MinXMaxY,
};
pub use crate::types::{FrontCfg, Objective, ParetoFront, Point, PointCloud, Sense};
pub use crate::error::{Degeneracy, FrontError};
// Individual stages
pub use crate::front::{enforce_monotone, select_front, CutLine};
pub use crate::shape::{
    convex_hull_indices, filter_edges, outer_ring, triangulate, EdgeSet, Triangulation,
};
// Progression
pub use crate::progression::{
    aggregate_runs, front_series, indicator_series, AggregateError, FrontIndicator, Progression,
    RunStats, Schedule, Snapshot,
};
// Synthetic clouds
pub use crate::sample::{draw_tradeoff_cloud, CloudCfg, PointCount, ReplayToken};
