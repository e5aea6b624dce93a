use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use structopt::{self, StructOpt};

use super::error::RunError;

pub const CONFIG_FILE: &str = "Adder.toml";

/// Module names the stub is installed under and looked up by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingConfig {
    pub package: String,
    pub stub: String,
}
impl BindingConfig {
    pub fn new(package: &str, stub: &str) -> Self {
        Self {
            package: package.to_owned(),
            stub: stub.to_owned(),
        }
    }

    /// Scoped name, e.g. `adder.stubs`
    pub fn packaged_name(&self) -> String {
        format!("{}.{}", self.package, self.stub)
    }

    /// Unscoped name, e.g. `stubs`
    pub fn top_level_name(&self) -> &str {
        &self.stub
    }
}
impl Default for BindingConfig {
    fn default() -> Self {
        Self::new("adder", "stubs")
    }
}

/// Where the stub module is placed in `sys.modules`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Inside the package, reachable as `<package>.<stub>`
    Packaged,
    /// Directly importable as `<stub>`
    TopLevel,
}
impl Default for Layout {
    fn default() -> Self {
        Self::Packaged
    }
}
impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "packaged" => Ok(Self::Packaged),
            "top-level" => Ok(Self::TopLevel),
            other => Err(format!(
                "unknown layout {:?}, expected `packaged` or `top-level`",
                other
            )),
        }
    }
}
impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Packaged => write!(f, "packaged"),
            Self::TopLevel => write!(f, "top-level"),
        }
    }
}

#[derive(Debug, Deserialize, StructOpt, Default)]
#[structopt(author, about, rename_all = "kebab-case")]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory to look for Adder.toml
    #[structopt(short, long, parse(from_os_str))]
    #[serde(skip)]
    pub directory: Option<PathBuf>,

    /// Package the stub is installed under [default: adder]
    #[structopt(long)]
    pub package: Option<String>,

    /// Name of the stub module [default: stubs]
    #[structopt(long)]
    pub stub: Option<String>,

    /// Stub placement, `packaged` or `top-level` [default: packaged]
    #[structopt(long)]
    pub layout: Option<Layout>,

    /// Only print the result
    #[structopt(short, long)]
    pub quiet: bool,

    /// Run the calculator demo
    #[structopt(long)]
    pub calculator: bool,

    /// Python script to run instead of the built-in demo
    #[structopt(short, long, parse(from_os_str))]
    pub script: Option<PathBuf>,

    /// First operand
    #[structopt(allow_hyphen_values = true)]
    pub a: Option<i64>,

    /// Second operand
    #[structopt(allow_hyphen_values = true)]
    pub b: Option<i64>,
}
impl Config {
    /// Read `Adder.toml` from `dir_path`. A missing file yields the defaults.
    pub fn load_toml(dir_path: &Path) -> Result<Self, RunError> {
        let path = dir_path.join(CONFIG_FILE);
        if !path.is_file() {
            log::debug!("No {} in {:?}, using defaults", CONFIG_FILE, dir_path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        let cfg: Self = toml::from_str(&contents)?;
        log::debug!("Loaded {:?}", path);
        Ok(cfg)
    }

    /// Combine self with other, preferring values in self
    pub fn merge(self, other: Self) -> Self {
        Self {
            directory: self.directory.or(other.directory),
            package: self.package.or(other.package),
            stub: self.stub.or(other.stub),
            layout: self.layout.or(other.layout),
            quiet: self.quiet || other.quiet,
            calculator: self.calculator || other.calculator,
            script: self.script.or(other.script),
            a: self.a.or(other.a),
            b: self.b.or(other.b),
        }
    }

    pub fn binding(&self) -> BindingConfig {
        let default = BindingConfig::default();
        BindingConfig {
            package: self.package.clone().unwrap_or(default.package),
            stub: self.stub.clone().unwrap_or(default.stub),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout.unwrap_or_default()
    }

    /// Operands, falling back to the demo values of the selected mode
    pub fn operands(&self) -> (i64, i64) {
        let (a, b) = if self.calculator { (100, 23) } else { (150, 50) };
        (self.a.unwrap_or(a), self.b.unwrap_or(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml() {
        let cfg: Config = toml::from_str(
            r#"
            package = "calc"
            layout = "top-level"
            a = 1
            b = -2
            "#,
        )
        .unwrap();
        assert_eq!(cfg.binding(), BindingConfig::new("calc", "stubs"));
        assert_eq!(cfg.layout(), Layout::TopLevel);
        assert_eq!(cfg.operands(), (1, -2));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<Config>("threads = 4").is_err());
    }

    #[test]
    fn command_line_wins() {
        let cli = Config::from_iter(vec!["adder", "--layout", "top-level", "7"]);
        let file: Config = toml::from_str("layout = \"packaged\"\na = 1\nb = 2").unwrap();
        let cfg = cli.merge(file);
        assert_eq!(cfg.layout(), Layout::TopLevel);
        assert_eq!(cfg.operands(), (7, 2));
    }

    #[test]
    fn demo_defaults() {
        assert_eq!(Config::default().operands(), (150, 50));
        let calc = Config {
            calculator: true,
            ..Config::default()
        };
        assert_eq!(calc.operands(), (100, 23));
        assert_eq!(calc.layout(), Layout::Packaged);
    }

    #[test]
    fn layout_from_str() {
        assert_eq!("packaged".parse::<Layout>(), Ok(Layout::Packaged));
        assert_eq!("top-level".parse::<Layout>(), Ok(Layout::TopLevel));
        assert!("flat".parse::<Layout>().is_err());
    }
}
