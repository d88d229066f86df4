use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use logscope_files::PathResolver;
use logscope_types::DeleteOutcome;

/// Body shown in place of a dump that could not be found
pub const NOT_FOUND_PLACEHOLDER: &str = "Error: Exception not found";

/// Read and delete access to single exception dumps
pub struct ExceptionStore;

impl ExceptionStore {
    /// Raw content of the dump named `identifier`, or `None` if the name is
    /// rejected or the file can't be read
    pub fn read(root: &Path, identifier: &str) -> Option<String> {
        let path = match PathResolver::resolve(root, identifier) {
            Ok(path) => path,
            Err(e) => {
                debug!("Refused to read exception {:?}: {}", identifier, e);
                return None;
            }
        };

        match fs::read(&path) {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                debug!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Content of the dump, or [`NOT_FOUND_PLACEHOLDER`]
    pub fn read_or_placeholder(root: &Path, identifier: &str) -> (String, bool) {
        match Self::read(root, identifier) {
            Some(content) => (content, true),
            None => (NOT_FOUND_PLACEHOLDER.to_string(), false),
        }
    }

    /// Remove the dump named `identifier`.
    ///
    /// A rejected or missing name is [`DeleteOutcome::NotFound`]; a file that
    /// exists but can't be removed is [`DeleteOutcome::Failed`].
    pub fn delete(root: &Path, identifier: &str) -> DeleteOutcome {
        let path = match PathResolver::resolve(root, identifier) {
            Ok(path) => path,
            Err(e) => {
                debug!("Refused to delete exception {:?}: {}", identifier, e);
                return DeleteOutcome::NotFound;
            }
        };

        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Deleted exception {}", path.display());
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!("Could not delete {}: {}", path.display(), e);
                DeleteOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("202401021030_abc.txt"),
            "<b>NullPointer</b> at line 5\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_read_existing() {
        let dir = fixture();
        assert_eq!(
            ExceptionStore::read(dir.path(), "202401021030_abc.txt").as_deref(),
            Some("<b>NullPointer</b> at line 5\n")
        );
    }

    #[test]
    fn test_read_rejected_names() {
        let dir = fixture();
        assert_eq!(ExceptionStore::read(dir.path(), ""), None);
        assert_eq!(ExceptionStore::read(dir.path(), "missing.txt"), None);
        assert_eq!(ExceptionStore::read(dir.path(), "../../etc/passwd"), None);
    }

    #[test]
    fn test_read_or_placeholder() {
        let dir = fixture();
        let (content, found) = ExceptionStore::read_or_placeholder(dir.path(), "nope.txt");
        assert!(!found);
        assert_eq!(content, NOT_FOUND_PLACEHOLDER);
    }

    #[test]
    fn test_delete_then_read_is_not_found() {
        let dir = fixture();
        let outcome = ExceptionStore::delete(dir.path(), "202401021030_abc.txt");

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(!dir.path().join("202401021030_abc.txt").exists());
        assert_eq!(ExceptionStore::read(dir.path(), "202401021030_abc.txt"), None);
        assert_eq!(
            ExceptionStore::delete(dir.path(), "202401021030_abc.txt"),
            DeleteOutcome::NotFound
        );
    }

    #[test]
    fn test_delete_outside_root_is_not_found() {
        let outer = TempDir::new().unwrap();
        let root = outer.path().join("exceptions");
        fs::create_dir(&root).unwrap();
        let victim = outer.path().join("keep.txt");
        fs::write(&victim, "keep me").unwrap();

        assert_eq!(ExceptionStore::delete(&root, "../keep.txt"), DeleteOutcome::NotFound);
        assert!(victim.exists());
    }

    #[test]
    fn test_delete_directory_is_not_found() {
        let dir = fixture();
        fs::create_dir(dir.path().join("sub")).unwrap();
        assert_eq!(ExceptionStore::delete(dir.path(), "sub"), DeleteOutcome::NotFound);
        assert!(dir.path().join("sub").is_dir());
    }
}
