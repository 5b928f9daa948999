use frontier::api::{
    AnchorSelector, FrontError, MinXMaxX, MinXMaxY, Objective, ParetoFront, Point, Sense,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

pub fn map_front_err(err: FrontError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn points_from_py(points: Vec<(f64, f64)>) -> Vec<Point> {
    points.into_iter().map(Point::from).collect()
}

pub fn objectives(
    x_name: String,
    y_name: String,
    maximize_x: bool,
    minimize_y: bool,
) -> (Objective, Objective) {
    let o1 = if maximize_x {
        Objective::maximize(x_name)
    } else {
        Objective::minimize(x_name)
    };
    let o2 = if minimize_y {
        Objective::minimize(y_name)
    } else {
        Objective::maximize(y_name)
    };
    (o1, o2)
}

pub fn anchor_selector(name: &str) -> PyResult<&'static dyn AnchorSelector> {
    match name {
        "min_x_max_y" => Ok(&MinXMaxY),
        "min_x_max_x" => Ok(&MinXMaxX),
        other => Err(PyValueError::new_err(format!(
            "anchors must be 'min_x_max_y' or 'min_x_max_x', got {other}"
        ))),
    }
}

fn sense_str(sense: Sense) -> &'static str {
    match sense {
        Sense::Minimize => "minimize",
        Sense::Maximize => "maximize",
    }
}

pub fn front_to_py(py: Python<'_>, front: &ParetoFront) -> PyResult<PyObject> {
    let points = PyList::empty(py);
    for p in front.points() {
        points.append((p.objective1, p.objective2))?;
    }
    let dict = PyDict::new(py);
    for (key, objective) in [("objective1", front.objective1()), ("objective2", front.objective2())] {
        let label = PyDict::new(py);
        label.set_item("name", objective.name.as_str())?;
        label.set_item("sense", sense_str(objective.sense))?;
        dict.set_item(key, label)?;
    }
    dict.set_item("points", points)?;
    Ok(dict.into())
}

pub fn get_with_default<'py, T>(dict: &'py PyDict, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => value.extract(),
        _ => Ok(default),
    }
}
