use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use logscope_types::FileRef;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

/// Recursive file discovery under a root
pub struct FileCatalog;

impl FileCatalog {
    /// Find every non-directory under `root` whose name ends with `extension`.
    ///
    /// Symlinks are followed. Any traversal error aborts the whole walk.
    /// Results are in traversal order.
    pub fn discover(root: &Path, extension: &str) -> Result<Vec<PathBuf>, CatalogError> {
        if !root.is_dir() {
            return Err(CatalogError::NotADirectory(root.to_path_buf()));
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            if entry.file_name().to_string_lossy().ends_with(extension) {
                found.push(entry.into_path());
            }
        }

        debug!("Discovered {} {} files under {}", found.len(), extension, root.display());
        Ok(found)
    }

    /// List matching files as basename-keyed references.
    ///
    /// Discovery failures degrade to an empty list.
    pub fn list(root: &Path, extension: &str) -> Vec<FileRef> {
        Self::discover_or_empty(root, extension)
            .iter()
            .map(|path| {
                let identifier = basename(path);
                FileRef::new(identifier.clone(), identifier)
            })
            .collect()
    }

    /// [`FileCatalog::discover`] with failures logged and swallowed
    pub fn discover_or_empty(root: &Path, extension: &str) -> Vec<PathBuf> {
        match Self::discover(root, extension) {
            Ok(paths) => paths,
            Err(e) => {
                warn!("Could not list {} files in {}: {}", extension, root.display(), e);
                Vec::new()
            }
        }
    }
}

/// Final path component as a string
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
