//! Binding stub: the Python-facing module exposing the native function.

use pyo3::prelude::*;
use pyo3::types::{PyList, PyModule};
use std::os::raw::c_int;

use super::config::{BindingConfig, Layout};
use super::native;
use super::wrapper;

/// Arguments are converted to C `int` before the call: values out of range
/// raise `OverflowError`, non-integers raise `TypeError`.
#[pyfunction]
fn add_integers(a: c_int, b: c_int) -> c_int {
    log::trace!("add_integers({}, {})", a, b);
    native::add_integers(a, b)
}

/// `add` as seen from Python code
#[pyfunction]
#[pyo3(name = "add")]
fn py_add(a: i64, b: i64) -> PyResult<i64> {
    Ok(wrapper::add(a, b)?)
}

/// Create a fresh stub module named `name`
pub fn build<'py>(py: Python<'py>, name: &str) -> PyResult<Bound<'py, PyModule>> {
    let stub = PyModule::new_bound(py, name)?;
    stub.add_function(wrap_pyfunction!(add_integers, &stub)?)?;
    Ok(stub)
}

/// Register the package carrying `add` in `sys.modules`, and the stub
/// either inside it (`<package>.<stub>`) or as a top-level `<stub>`.
/// Replaces modules left by an earlier install.
pub fn install(py: Python, cfg: &BindingConfig, layout: Layout) -> PyResult<()> {
    let modules = py.import_bound("sys")?.getattr("modules")?;
    let packaged = cfg.packaged_name();

    let package = PyModule::new_bound(py, &cfg.package)?;
    // An empty `__path__` marks the module as a package
    package.add("__path__", PyList::empty_bound(py))?;
    package.add_function(wrap_pyfunction!(py_add, &package)?)?;

    match layout {
        Layout::Packaged => {
            let stub = build(py, &packaged)?;
            package.add(cfg.stub.as_str(), stub.clone())?;
            modules.set_item(packaged.as_str(), &stub)?;
            log::debug!("Installed stub as {}", packaged);
        },
        Layout::TopLevel => {
            let stub = build(py, cfg.top_level_name())?;
            if modules.contains(packaged.as_str())? {
                modules.del_item(packaged.as_str())?;
            }
            modules.set_item(cfg.top_level_name(), &stub)?;
            log::debug!("Installed stub as {}", cfg.top_level_name());
        },
    }
    modules.set_item(cfg.package.as_str(), &package)?;
    Ok(())
}
