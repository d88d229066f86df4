//! Configuration file handling
//!
//! Roots are read from `~/.logscope/config.toml`:
//!
//! ```toml
//! log_dir = "/srv/app/Data/Logs"
//! exception_dir = "/srv/app/Data/Logs/Exceptions"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use logscope_browser::Roots;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub roots: Roots,
}

impl Config {
    /// Load configuration from `path`, or the default location when `None`.
    ///
    /// A missing default file yields the default roots; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match config_file_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, log_dir: Option<PathBuf>, exception_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = log_dir {
            self.roots.log_dir = dir;
        }
        if let Some(dir) = exception_dir {
            self.roots.exception_dir = dir;
        }
        self
    }
}

/// Get the path to the config file, if a home directory is known
pub fn config_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".logscope").join("config.toml"))
}
