//! The public `add` entry point.

use pyo3::prelude::*;
use pyo3::sync::GILOnceCell;

use super::binding::Binding;
use super::config::BindingConfig;
use super::error::NativeCallFailure;

/// Resolved once per process. Failed resolutions are not stored.
static BINDING: GILOnceCell<Binding> = GILOnceCell::new();

/// Resolve the binding with `cfg` unless one is already cached,
/// and return the cached one.
pub fn init(py: Python, cfg: &BindingConfig) -> Result<&'static Binding, NativeCallFailure> {
    BINDING.get_or_try_init(py, || Binding::resolve(py, cfg))
}

/// Add two integers with the native function.
///
/// Nothing is checked here: arguments outside the C `int` range fail in the
/// stub with `OverflowError`, sums that overflow wrap around.
pub fn add(a: i64, b: i64) -> Result<i64, NativeCallFailure> {
    Python::with_gil(|py| init(py, &BindingConfig::default())?.add_integers(py, a, b))
}
