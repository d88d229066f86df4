use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directories the browser is allowed to look into
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roots {
    /// Root of the `.log` files
    pub log_dir: PathBuf,

    /// Root of the exception dumps
    pub exception_dir: PathBuf,
}

impl Roots {
    pub fn new(log_dir: impl Into<PathBuf>, exception_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            exception_dir: exception_dir.into(),
        }
    }
}

impl Default for Roots {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("Data/Logs"),
            exception_dir: PathBuf::from("Data/Logs/Exceptions"),
        }
    }
}
