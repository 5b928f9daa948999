//! PyO3 bindings for the `frontier` pipeline.
//!
//! Notes
//! - Points cross the boundary as `(objective1, objective2)` tuples; fronts
//!   come back as small dicts (`objective1`, `objective2`, `points`).
//! - Every `FrontError` surfaces as `ValueError` with the Rust message.

mod common;
mod front;
mod sample;

use pyo3::prelude::*;

#[pymodule]
fn frontier_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", frontier::VERSION)?;
    front::register(m)?;
    sample::register(m)?;
    Ok(())
}
