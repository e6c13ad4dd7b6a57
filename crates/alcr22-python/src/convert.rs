use alcr22_core::DensityError;
use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice().map_err(|_| {
        pyo3::exceptions::PyValueError::new_err("array must be C-contiguous")
    })
}

/// Map an evaluator error onto `ValueError`, keeping its message.
pub fn to_py_err(err: DensityError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}
