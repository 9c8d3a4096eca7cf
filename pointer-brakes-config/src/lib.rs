#[macro_use]
extern crate tracing;

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use miette::{Context as _, IntoDiagnostic as _};

pub mod braking;
pub mod utils;

pub use crate::braking::Braking;
pub use crate::utils::FloatOrInt;

/// Contents of the bundled default config file.
pub const DEFAULT_CONFIG: &str = include_str!("../../resources/default-config.kdl");

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Config {
    #[knuffel(child, default)]
    pub braking: Braking,
}

#[derive(Debug, Clone)]
pub enum ConfigPath {
    /// Explicitly set config path.
    ///
    /// The file must exist.
    Explicit(PathBuf),

    /// Default config path, usually `$XDG_CONFIG_HOME/pointer-brakes/config.kdl`.
    ///
    /// Built-in defaults are used when the file doesn't exist.
    Regular { user_path: PathBuf },
}

impl Config {
    pub fn load(path: &Path) -> miette::Result<Self> {
        let contents = fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let config = Self::parse(
            path.file_name()
                .and_then(OsStr::to_str)
                .unwrap_or("config.kdl"),
            &contents,
        )
        .context("error parsing")?;
        debug!("loaded config from {path:?}");
        Ok(config)
    }

    pub fn parse(filename: &str, text: &str) -> Result<Self, knuffel::Error> {
        let _span = tracy_client::span!("Config::parse");
        knuffel::parse(filename, text)
    }
}

impl Default for Config {
    fn default() -> Self {
        match Config::parse("default-config.kdl", DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                error!("error parsing the bundled config: {:?}", miette::Report::new(err));
                Config {
                    braking: Braking::default(),
                }
            }
        }
    }
}

impl ConfigPath {
    pub fn path(&self) -> &Path {
        match self {
            ConfigPath::Explicit(path) => path,
            ConfigPath::Regular { user_path } => user_path,
        }
    }

    pub fn load(&self) -> miette::Result<Config> {
        let _span = tracy_client::span!("ConfigPath::load");

        match self {
            ConfigPath::Explicit(path) => Config::load(path),
            ConfigPath::Regular { user_path } => {
                if user_path.exists() {
                    Config::load(user_path)
                } else {
                    debug!("no config file at {user_path:?}, using defaults");
                    Ok(Config::default())
                }
            }
        }
        .context("error loading config")
    }
}
