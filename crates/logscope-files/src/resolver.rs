use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Reasons a requested file is refused
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no filename given")]
    EmptyName,

    #[error("root {root} is not accessible: {source}")]
    RootUnavailable {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{name} does not exist or is not accessible: {source}")]
    TargetUnavailable {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{name} resolves outside of {root}")]
    OutsideRoot { name: String, root: PathBuf },

    #[error("{name} is not a regular file")]
    NotAFile { name: String },
}

/// Resolves user-supplied filenames against a root directory
pub struct PathResolver;

impl PathResolver {
    /// Resolve `name` under `root`, returning the canonical path of an existing
    /// file inside the root.
    ///
    /// The name is appended to the root with a `/` separator rather than
    /// joined, so an absolute name stays under the root. Both sides are
    /// canonicalized, which follows symlinks before the containment check.
    pub fn resolve(root: &Path, name: &str) -> Result<PathBuf, ResolveError> {
        if name.is_empty() {
            return Err(ResolveError::EmptyName);
        }

        let canonical_root =
            fs::canonicalize(root).map_err(|source| ResolveError::RootUnavailable {
                root: root.to_path_buf(),
                source,
            })?;

        let mut joined = OsString::from(root.as_os_str());
        joined.push("/");
        joined.push(name);

        let target = fs::canonicalize(PathBuf::from(joined)).map_err(|source| {
            ResolveError::TargetUnavailable {
                name: name.to_string(),
                source,
            }
        })?;

        // Component-wise: "/var/log2" does not start with "/var/log"
        if !target.starts_with(&canonical_root) {
            debug!(
                "Rejected {} outside of {}",
                target.display(),
                canonical_root.display()
            );
            return Err(ResolveError::OutsideRoot {
                name: name.to_string(),
                root: canonical_root,
            });
        }

        if !target.is_file() {
            return Err(ResolveError::NotAFile {
                name: name.to_string(),
            });
        }

        Ok(target)
    }

    /// Boolean form of [`PathResolver::resolve`]
    pub fn is_allowed(root: &Path, name: &str) -> bool {
        Self::resolve(root, name).is_ok()
    }
}
