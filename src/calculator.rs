use pyo3::prelude::*;

use super::binding::{Binding, Resolution};
use super::config::BindingConfig;
use super::error::NativeCallFailure;

/// Object-style front end over its own binding
#[derive(Debug)]
pub struct Calculator {
    binding: Binding,
}
impl Calculator {
    pub fn new(py: Python, cfg: &BindingConfig) -> Result<Self, NativeCallFailure> {
        let binding = Binding::resolve(py, cfg)?;
        log::info!("Calculator created, using {}", binding.name());
        Ok(Self { binding })
    }

    pub fn add(&self, a: i64, b: i64) -> Result<i64, NativeCallFailure> {
        log::debug!("Calculator forwarding add({}, {})", a, b);
        Python::with_gil(|py| self.binding.add_integers(py, a, b))
    }

    pub fn resolution(&self) -> Resolution {
        self.binding.resolution()
    }
}
