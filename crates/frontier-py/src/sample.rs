//! Synthetic cloud bindings. Configs are plain dicts so they round-trip
//! through JSON on the Python side.

use crate::common::get_with_default;
use frontier::api::{draw_tradeoff_cloud, CloudCfg, PointCount, ReplayToken};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyAny, PyDict};

/// Draw a reproducible trade-off cloud for `(seed, index)`.
#[pyfunction]
#[pyo3(signature = (seed, index, params=None))]
fn tradeoff_cloud_sample(
    seed: u64,
    index: u64,
    params: Option<&PyDict>,
) -> PyResult<Vec<(f64, f64)>> {
    let cfg = match params {
        Some(dict) => cloud_cfg_from_dict(dict)?,
        None => CloudCfg::default(),
    };
    Ok(draw_tradeoff_cloud(cfg, ReplayToken { seed, index })
        .into_iter()
        .map(|p| (p.objective1, p.objective2))
        .collect())
}

fn cloud_cfg_from_dict(dict: &PyDict) -> PyResult<CloudCfg> {
    let d = CloudCfg::default();
    let count = match dict.get_item("count")? {
        Some(value) if !value.is_none() => parse_point_count(value)?,
        _ => d.count,
    };
    Ok(CloudCfg {
        count,
        x_range: get_with_default(dict, "x_range", d.x_range)?,
        curvature: get_with_default(dict, "curvature", d.curvature)?,
        y_scale: get_with_default(dict, "y_scale", d.y_scale)?,
        noise: get_with_default(dict, "noise", d.noise)?,
    })
}

fn parse_point_count(obj: &PyAny) -> PyResult<PointCount> {
    if let Ok(fixed) = obj.extract::<usize>() {
        return Ok(PointCount::Fixed(fixed));
    }
    if let Ok((min, max)) = obj.extract::<(usize, usize)>() {
        return Ok(PointCount::Uniform { min, max });
    }
    Err(PyValueError::new_err(
        "count must be an int or a (min, max) tuple",
    ))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(tradeoff_cloud_sample, m)?)?;
    Ok(())
}
