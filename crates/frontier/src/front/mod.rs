//! Front selection, monotonicity cleanup, and the pipeline entry.
//!
//! Purpose
//! - Cut the Pareto-relevant arc out of a boundary ring (`select`), then make
//!   it strictly monotone (`monotone`). `pipeline` chains these after the
//!   `shape` stages and maps between caller and oriented coordinates.
//!
//! Anchor rule
//! - The default anchors are min-x and max-y, chosen independently. The rule
//!   is a trait (`AnchorSelector`) so alternatives can be compared on the same
//!   clouds without touching the pipeline.
//!
//! Code cross-refs: `shape::outer_ring`, `types::{FrontCfg, ParetoFront}`.

mod monotone;
mod pipeline;
mod select;

pub use monotone::enforce_monotone;
pub use pipeline::{build_pareto_front, build_pareto_front_with, MIN_ALPHA_POINTS};
pub use select::{select_front, AnchorSelector, CutLine, MinXMaxX, MinXMaxY};

#[cfg(test)]
mod tests;
