use pyo3::exceptions::PyImportError;
use pyo3::prelude::*;
use std::fmt;

use super::config::BindingConfig;
use super::error::NativeCallFailure;

/// Lookup path a binding was found through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Packaged,
    TopLevel,
}
impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Packaged => write!(f, "packaged"),
            Self::TopLevel => write!(f, "top-level"),
        }
    }
}

/// A resolved stub module exposing `add_integers`
#[derive(Debug)]
pub struct Binding {
    target: PyObject,
    name: String,
    resolution: Resolution,
}
impl Binding {
    /// Look the stub up as `<package>.<stub>` first, then as `<stub>`.
    ///
    /// Only an `ImportError` on the packaged lookup moves on to the second
    /// step. Any other error, and any error on the second step, is returned.
    pub fn resolve(py: Python, cfg: &BindingConfig) -> Result<Self, NativeCallFailure> {
        let packaged = cfg.packaged_name();
        match py.import_bound(packaged.as_str()) {
            Ok(module) => {
                log::debug!("Resolved binding {}", packaged);
                return Ok(Self {
                    target: module.into_any().unbind(),
                    name: packaged,
                    resolution: Resolution::Packaged,
                });
            },
            Err(e) if e.is_instance_of::<PyImportError>(py) => {
                log::warn!("{} not importable ({}), trying {}", packaged, e, cfg.top_level_name());
            },
            Err(e) => return Err(e.into()),
        }

        let module = py.import_bound(cfg.top_level_name())?;
        log::debug!("Resolved binding {}", cfg.top_level_name());
        Ok(Self {
            target: module.into_any().unbind(),
            name: cfg.top_level_name().to_owned(),
            resolution: Resolution::TopLevel,
        })
    }

    /// Forward to the stub's `add_integers`. The result is returned as is.
    pub fn add_integers(&self, py: Python, a: i64, b: i64) -> Result<i64, NativeCallFailure> {
        log::trace!("{}.add_integers({}, {})", self.name, a, b);
        let result = self.target.bind(py).call_method1("add_integers", (a, b))?;
        Ok(result.extract()?)
    }

    /// Fully qualified module name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
}
