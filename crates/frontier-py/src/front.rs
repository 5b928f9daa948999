//! Front extraction and progression bindings.

use crate::common::{
    anchor_selector, front_to_py, get_with_default, map_front_err, objectives, points_from_py,
};
use frontier::api::{build_pareto_front_with, front_series, FrontCfg, MinXMaxY, Schedule};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

/// Extract the Pareto front of `points` (objective 1 minimized and objective 2
/// maximized unless flipped).
#[pyfunction]
#[pyo3(signature = (points, x_name, y_name, alpha=0.0, floor=None, maximize_x=false, minimize_y=false, anchors="min_x_max_y"))]
#[allow(clippy::too_many_arguments)]
pub fn build_pareto_front(
    py: Python<'_>,
    points: Vec<(f64, f64)>,
    x_name: String,
    y_name: String,
    alpha: f64,
    floor: Option<f64>,
    maximize_x: bool,
    minimize_y: bool,
    anchors: &str,
) -> PyResult<PyObject> {
    let (o1, o2) = objectives(x_name, y_name, maximize_x, minimize_y);
    let cfg = FrontCfg {
        alpha,
        floor: floor.unwrap_or(f64::NEG_INFINITY),
    };
    let selector = anchor_selector(anchors)?;
    let pts = points_from_py(points);
    let front = build_pareto_front_with(&pts, o1, o2, cfg, selector).map_err(map_front_err)?;
    front_to_py(py, &front)
}

/// Fronts on growing prefixes of an evaluation log.
///
/// Returns `[(evals, front_dict | None, error | None), ...]`.
#[pyfunction]
#[pyo3(signature = (points, x_name, y_name, alpha=0.0, schedule=None))]
pub fn front_progression(
    py: Python<'_>,
    points: Vec<(f64, f64)>,
    x_name: String,
    y_name: String,
    alpha: f64,
    schedule: Option<&PyDict>,
) -> PyResult<PyObject> {
    let schedule = match schedule {
        Some(dict) => schedule_from_dict(dict)?,
        None => Schedule::default(),
    };
    let (o1, o2) = objectives(x_name, y_name, false, false);
    let cfg = FrontCfg::with_alpha(alpha);
    let pts = points_from_py(points);
    let series = py.allow_threads(|| {
        front_series(&pts, &o1, &o2, cfg, &MinXMaxY, &schedule)
    });
    let out = PyList::empty(py);
    for (evals, res) in series {
        match res {
            Ok(front) => out.append((evals, front_to_py(py, &front)?, py.None()))?,
            Err(err) => out.append((evals, py.None(), err.to_string()))?,
        }
    }
    Ok(out.into())
}

fn schedule_from_dict(dict: &PyDict) -> PyResult<Schedule> {
    let d = Schedule::default();
    Ok(Schedule {
        fine_step: get_with_default(dict, "fine_step", d.fine_step)?,
        fine_until: get_with_default(dict, "fine_until", d.fine_until)?,
        coarse_step: get_with_default(dict, "coarse_step", d.coarse_step)?,
        limit: get_with_default(dict, "limit", d.limit)?,
    })
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(build_pareto_front, m)?)?;
    m.add_function(wrap_pyfunction!(front_progression, m)?)?;
    Ok(())
}
