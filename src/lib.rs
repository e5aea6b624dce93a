#![deny(unused_must_use)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::fs;
use std::io::Write;
use std::path::Path;

pub mod binding;
pub mod calculator;
pub mod config;
pub mod error;
pub mod native;
pub mod stubs;
pub mod wrapper;

pub use self::binding::{Binding, Resolution};
pub use self::calculator::Calculator;
pub use self::config::{BindingConfig, Config, Layout};
pub use self::error::{NativeCallFailure, RunError};
pub use self::wrapper::add;

/// Verify Python version
pub fn check_python(py: Python) -> PyResult<()> {
    let sys = py.import_bound("sys")?;
    let hexversion: u32 = sys.getattr("hexversion")?.extract()?;
    if hexversion < 0x0307_0000 {
        let version: String = sys.getattr("version")?.extract()?;
        return Err(PyRuntimeError::new_err(format!(
            "Python 3.7 or newer required, found {}",
            version
        )));
    }
    Ok(())
}

/// Install the stub, resolve the binding and run the selected demo
pub fn run(py: Python, cfg: &Config, out: &mut impl Write) -> Result<(), RunError> {
    let binding_cfg = cfg.binding();
    stubs::install(py, &binding_cfg, cfg.layout())?;
    let binding = wrapper::init(py, &binding_cfg)?;
    log::info!("Using {} binding {}", binding.resolution(), binding.name());

    if let Some(script) = &cfg.script {
        return run_script(py, script);
    }

    let (a, b) = cfg.operands();
    if cfg.calculator {
        calculator_demo(py, &binding_cfg, a, b, cfg.quiet, out)
    } else {
        add_demo(&binding_cfg, binding, a, b, cfg.quiet, out)
    }
}

fn add_demo(
    cfg: &BindingConfig, binding: &Binding, a: i64, b: i64, quiet: bool, out: &mut impl Write,
) -> Result<(), RunError> {
    if !quiet {
        writeln!(out, "--- DEMO: CALLING THE NATIVE ADDER THROUGH ITS BINDING ---")?;
        writeln!(
            out,
            "Calling add({}, {}) from the '{}' package, stub '{}'...",
            a,
            b,
            cfg.package,
            binding.name()
        )?;
    }
    let result = wrapper::add(a, b)?;
    if quiet {
        writeln!(out, "{}", result)?;
    } else {
        writeln!(out, "Result: {}", result)?;
        writeln!(out, "\nFinished successfully.")?;
    }
    Ok(())
}

fn calculator_demo(
    py: Python, cfg: &BindingConfig, a: i64, b: i64, quiet: bool, out: &mut impl Write,
) -> Result<(), RunError> {
    if !quiet {
        writeln!(out, "--- DEMO: CALCULATOR ---")?;
        writeln!(out, "Creating Calculator object.")?;
    }
    let calc = Calculator::new(py, cfg)?;
    if !quiet {
        writeln!(out, "Calling calc.add({}, {})", a, b)?;
    }
    let result = calc.add(a, b)?;
    if quiet {
        writeln!(out, "{}", result)?;
    } else {
        writeln!(out, "Result: {}", result)?;
        writeln!(out, "Calculator demo finished.")?;
    }
    Ok(())
}

/// Execute a Python file as `__main__`, with the stub already installed
pub fn run_script(py: Python, path: &Path) -> Result<(), RunError> {
    log::info!("Running {:?}", path);
    let code = fs::read_to_string(path)?;

    let globals = PyDict::new_bound(py);
    globals.set_item("__name__", "__main__")?;
    globals.set_item("__file__", path.to_string_lossy().into_owned())?;
    let builtins = py.import_bound("builtins")?;
    globals.set_item("__builtins__", &builtins)?;

    // Compiled with the real path so tracebacks point at the script
    let compiled = builtins
        .getattr("compile")?
        .call1((code, path.to_string_lossy().into_owned(), "exec"))?;
    builtins.getattr("exec")?.call1((compiled, globals))?;
    Ok(())
}

/// Flush `sys.stdout` and `sys.stderr`; the embedded interpreter is never
/// finalized, so buffered output would otherwise be lost at exit
pub fn flush_python_streams(py: Python) -> PyResult<()> {
    let sys = py.import_bound("sys")?;
    for stream in &["stdout", "stderr"] {
        let stream = sys.getattr(*stream)?;
        if !stream.is_none() {
            stream.call_method0("flush")?;
        }
    }
    Ok(())
}
