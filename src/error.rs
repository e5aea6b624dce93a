use pyo3::prelude::*;
use pyo3::PyTypeInfo;
use std::error;
use std::fmt;
use std::io;

/// Any fault on the call path: binding resolution, argument marshaling,
/// or the native call itself. Wraps the Python exception untouched.
#[derive(Debug)]
pub struct NativeCallFailure(PyErr);
impl NativeCallFailure {
    /// Is the underlying exception an instance of `T`
    pub fn is_instance_of<T: PyTypeInfo>(&self, py: Python) -> bool {
        self.0.is_instance_of::<T>(py)
    }

    /// Output Python traceback to stderr
    pub fn show(self, py: Python) {
        self.0.print_and_set_sys_last_vars(py);
    }
}
impl fmt::Display for NativeCallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl error::Error for NativeCallFailure {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.0)
    }
}
impl From<PyErr> for NativeCallFailure {
    fn from(error: PyErr) -> Self {
        Self(error)
    }
}
impl From<NativeCallFailure> for PyErr {
    fn from(error: NativeCallFailure) -> Self {
        error.0
    }
}

#[derive(Debug)]
pub enum RunError {
    NativeCall(NativeCallFailure),
    Io(io::Error),
    Config(toml::de::Error),
}
impl RunError {
    /// Output error state to stderr
    pub fn show(self, py: Python) {
        match self {
            Self::NativeCall(e) => e.show(py),
            Self::Config(e) => eprintln!("Invalid configuration: {}", e),
            other => eprintln!("{:?}", other),
        }
    }
}
impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeCall(e) => write!(f, "{}", e),
            Self::Io(e) => write!(f, "{}", e),
            Self::Config(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}
impl error::Error for RunError {}
impl From<NativeCallFailure> for RunError {
    fn from(error: NativeCallFailure) -> Self {
        Self::NativeCall(error)
    }
}
impl From<PyErr> for RunError {
    fn from(error: PyErr) -> Self {
        Self::NativeCall(error.into())
    }
}
impl From<io::Error> for RunError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}
impl From<toml::de::Error> for RunError {
    fn from(error: toml::de::Error) -> Self {
        Self::Config(error)
    }
}
