#![deny(unused_must_use)]

use adder::{Config, RunError};

use pyo3::prelude::*;
use std::env;
use std::io;

#[paw::main]
fn main(args: Config) {
    pretty_env_logger::init();
    let code = Python::with_gil(|py| {
        let code = inner_main(py, args);
        if let Err(e) = adder::flush_python_streams(py) {
            log::error!("Unable to flush Python output: {}", e);
        }
        code
    });
    std::process::exit(code);
}

fn inner_main(py: Python, args: Config) -> i32 {
    match run(py, args) {
        Ok(()) => 0,
        Err(err) => {
            err.show(py);
            1
        },
    }
}

fn run(py: Python, args: Config) -> Result<(), RunError> {
    adder::check_python(py)?;

    let init_dir = match &args.directory {
        Some(dir) => dir.clone(),
        None => env::current_dir()?,
    };
    let cfg = args.merge(Config::load_toml(&init_dir)?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    adder::run(py, &cfg, &mut out)
}
