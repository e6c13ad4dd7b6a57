use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::convert::{contiguous_slice, to_py_err};

use alcr22_core::{DensityFormula, OimlR22};

const R22: OimlR22 = OimlR22::new();

// ---------------------------------------------------------------------------
// Typed pyclass result objects
// ---------------------------------------------------------------------------

define_series_result! {
    /// Batch evaluation results with typed numpy array attributes.
    pub struct Evaluations from alcr22_core::EvaluationSeries {
        mass_percent, temperature, density,
    }
}

// ---------------------------------------------------------------------------
// Scalar functions
// ---------------------------------------------------------------------------

#[pyfunction]
fn density(mass_percent: f64, temperature: f64) -> PyResult<f64> {
    R22.density(mass_percent, temperature).map_err(to_py_err)
}

#[pyfunction]
fn density_of_water(temperature: f64) -> PyResult<f64> {
    R22.density_of_water(temperature).map_err(to_py_err)
}

#[pyfunction]
fn max_density() -> f64 {
    R22.max_density()
}

#[pyfunction]
fn min_density() -> f64 {
    R22.min_density()
}

// ---------------------------------------------------------------------------
// Array functions
// ---------------------------------------------------------------------------

#[pyfunction]
fn density_array<'py>(
    py: Python<'py>,
    mass_percent: PyReadonlyArray1<'py, f64>,
    temperature: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let mass_slice = contiguous_slice(&mass_percent)?;
    let temp_slice = contiguous_slice(&temperature)?;

    let result = R22.evaluate(mass_slice, temp_slice).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, result.density))
}

#[pyfunction]
fn water_density_array<'py>(
    py: Python<'py>,
    temperature: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let temp_slice = contiguous_slice(&temperature)?;

    let curve = R22.water_curve(temp_slice).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, curve))
}

#[pyfunction]
fn evaluate<'py>(
    py: Python<'py>,
    mass_percent: PyReadonlyArray1<'py, f64>,
    temperature: PyReadonlyArray1<'py, f64>,
) -> PyResult<Evaluations> {
    let mass_slice = contiguous_slice(&mass_percent)?;
    let temp_slice = contiguous_slice(&temperature)?;

    let series = R22.evaluate(mass_slice, temp_slice).map_err(to_py_err)?;
    Ok(Evaluations::from_series(py, series))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "r22")?;
    m.add_function(wrap_pyfunction!(density, &m)?)?;
    m.add_function(wrap_pyfunction!(density_of_water, &m)?)?;
    m.add_function(wrap_pyfunction!(max_density, &m)?)?;
    m.add_function(wrap_pyfunction!(min_density, &m)?)?;
    m.add_function(wrap_pyfunction!(density_array, &m)?)?;
    m.add_function(wrap_pyfunction!(water_density_array, &m)?)?;
    m.add_function(wrap_pyfunction!(evaluate, &m)?)?;
    m.add_class::<Evaluations>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
