use tracing::debug;

use logscope_exceptions::{ExceptionIndex, ExceptionStore};
use logscope_files::{FileCatalog, PathResolver};
use logscope_logs::{LOG_EXTENSION, LevelFilter, LogParser};
use logscope_types::markup::escape_html;
use logscope_types::{
    DeleteOutcome, ExceptionRecord, ExceptionView, FileRef, LogView, Notice, Overview,
};

use crate::error::BrowseError;
use crate::roots::Roots;

/// All `.log` files under the log root
pub fn list_logs(roots: &Roots) -> Vec<FileRef> {
    FileCatalog::list(&roots.log_dir, LOG_EXTENSION)
}

/// All exception dumps, most recent first
pub fn list_exceptions(roots: &Roots) -> Vec<ExceptionRecord> {
    ExceptionIndex::list(&roots.exception_dir)
}

/// Both listings at once
pub fn overview(roots: &Roots) -> Overview {
    Overview {
        log_files: list_logs(roots),
        exceptions: list_exceptions(roots),
    }
}

/// Parse one log file, keeping entries whose level equals `level`
/// (all entries when `level` is empty)
pub fn show_log(roots: &Roots, filename: &str, level: &str) -> Result<LogView, BrowseError> {
    let path = PathResolver::resolve(&roots.log_dir, filename).map_err(|source| {
        BrowseError::LogNotFound {
            filename: filename.to_string(),
            source,
        }
    })?;

    let filter = LevelFilter::new(level);
    let parsed =
        LogParser::parse_file(&path, &filter).map_err(|source| BrowseError::LogUnreadable {
            filename: filename.to_string(),
            source,
        })?;

    Ok(LogView {
        filename: filename.to_string(),
        level: filter.level().to_string(),
        entries: parsed.entries,
        levels: parsed.levels,
        notices: Vec::new(),
    })
}

/// [`show_log`] with failures folded into an empty view and a notice
pub fn show_log_or_notice(roots: &Roots, filename: &str, level: &str) -> LogView {
    show_log(roots, filename, level).unwrap_or_else(|e| {
        debug!("{}", e);
        LogView {
            notices: vec![e.notice()],
            ..LogView::not_found(filename, level)
        }
    })
}

/// Escaped content of one exception dump, or a placeholder when it is not found
pub fn show_exception(roots: &Roots, filename: &str) -> ExceptionView {
    let (content, found) = ExceptionStore::read_or_placeholder(&roots.exception_dir, filename);

    ExceptionView {
        filename: filename.to_string(),
        content: escape_html(&content),
        found,
        notices: Vec::new(),
    }
}

/// Delete one exception dump and describe the result for the user
pub fn delete_exception(roots: &Roots, filename: &str) -> (DeleteOutcome, Notice) {
    let outcome = ExceptionStore::delete(&roots.exception_dir, filename);
    let notice = match outcome {
        DeleteOutcome::Deleted => Notice::ok(format!("Exception {} deleted", filename)),
        DeleteOutcome::Failed => {
            Notice::error(format!("Exception {} could not be deleted", filename))
        }
        DeleteOutcome::NotFound => Notice::error(format!("Exception {} not found", filename)),
    };
    (outcome, notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logscope_exceptions::NOT_FOUND_PLACEHOLDER;
    use logscope_types::Severity;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        roots: Roots,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("Logs");
        let exception_dir = log_dir.join("Exceptions");
        fs::create_dir_all(&exception_dir).unwrap();

        fs::write(
            log_dir.join("app.log"),
            "2024-01-02 10:00:00 42 12:00:00.1 ERROR Disk full\n\
             2024-01-02 10:00:05 42 INFO Recovered <ok>\n",
        )
        .unwrap();
        fs::write(log_dir.join("readme.md"), "not a log").unwrap();
        fs::write(
            exception_dir.join("202401021030_abc.txt"),
            "<b>NullPointer</b> at line 5\n#0 main()\n",
        )
        .unwrap();
        fs::write(exception_dir.join("202312312359_old.txt"), "Old & busted").unwrap();
        fs::write(exception_dir.join("manual-dump.txt"), "No timestamp").unwrap();
        fs::write(dir.path().join("secret.txt"), "top secret").unwrap();

        Fixture {
            roots: Roots::new(log_dir, exception_dir),
            _dir: dir,
        }
    }

    #[test]
    fn test_list_logs() {
        let f = fixture();
        let logs = list_logs(&f.roots);
        assert_eq!(logs, vec![FileRef::new("app.log".into(), "app.log".into())]);
    }

    #[test]
    fn test_list_exceptions_sorted() {
        let f = fixture();
        let ids: Vec<String> = list_exceptions(&f.roots)
            .into_iter()
            .map(|r| r.identifier)
            .collect();
        assert_eq!(
            ids,
            vec!["202401021030_abc.txt", "202312312359_old.txt", "manual-dump.txt"]
        );
    }

    #[test]
    fn test_overview_combines_listings() {
        let f = fixture();
        let overview = overview(&f.roots);
        assert_eq!(overview.log_files.len(), 1);
        assert_eq!(overview.exceptions.len(), 3);
        assert_eq!(overview.exceptions[0].excerpt, "NullPointer at line 5");
    }

    #[test]
    fn test_overview_with_missing_roots_is_empty() {
        let dir = TempDir::new().unwrap();
        let roots = Roots::new(dir.path().join("a"), dir.path().join("b"));
        let overview = overview(&roots);
        assert!(overview.log_files.is_empty());
        assert!(overview.exceptions.is_empty());
    }

    #[test]
    fn test_show_log() {
        let f = fixture();
        let view = show_log(&f.roots, "app.log", "").unwrap();

        assert_eq!(view.filename, "app.log");
        assert_eq!(view.level, "");
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.entries[0].date, "2024-01-02 10:00:00");
        assert_eq!(view.entries[0].message, "Disk full");
        assert_eq!(view.entries[1].message, "Recovered &lt;ok&gt;");
        assert_eq!(view.levels.as_slice(), ["ERROR", "INFO"]);
        assert!(view.notices.is_empty());
    }

    #[test]
    fn test_show_log_with_level() {
        let f = fixture();
        let view = show_log(&f.roots, "app.log", "INFO").unwrap();

        assert_eq!(view.level, "INFO");
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].level, "INFO");
        assert_eq!(view.levels.as_slice(), ["ERROR", "INFO"]);
    }

    #[test]
    fn test_show_log_rejects_traversal() {
        let f = fixture();
        let err = show_log(&f.roots, "../../etc/passwd", "").unwrap_err();
        assert!(matches!(err, BrowseError::LogNotFound { .. }));
        assert_eq!(err.filename(), "../../etc/passwd");

        assert!(show_log(&f.roots, "", "").is_err());
        assert!(show_log(&f.roots, "missing.log", "").is_err());
    }

    #[test]
    fn test_show_log_or_notice() {
        let f = fixture();
        let view = show_log_or_notice(&f.roots, "../secret.txt", "ERROR");

        assert!(view.entries.is_empty());
        assert!(view.levels.is_empty());
        assert_eq!(view.filename, "../secret.txt");
        assert_eq!(view.notices.len(), 1);
        assert_eq!(view.notices[0].severity, Severity::Error);
        assert_eq!(view.notices[0].message, "Logfile could not be read");
    }

    #[test]
    fn test_show_exception_escapes_content() {
        let f = fixture();
        let view = show_exception(&f.roots, "202312312359_old.txt");
        assert!(view.found);
        assert_eq!(view.content, "Old &amp; busted");
    }

    #[test]
    fn test_show_exception_placeholder() {
        let f = fixture();
        for name in ["", "missing.txt", "../../secret.txt", "../secret.txt"] {
            let view = show_exception(&f.roots, name);
            assert!(!view.found, "{name} should not be found");
            assert_eq!(view.content, NOT_FOUND_PLACEHOLDER);
        }
    }

    #[test]
    fn test_delete_exception_notices() {
        let f = fixture();

        let (outcome, notice) = delete_exception(&f.roots, "202401021030_abc.txt");
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(notice, Notice::ok("Exception 202401021030_abc.txt deleted"));
        assert!(!show_exception(&f.roots, "202401021030_abc.txt").found);

        let (outcome, notice) = delete_exception(&f.roots, "202401021030_abc.txt");
        assert_eq!(outcome, DeleteOutcome::NotFound);
        assert_eq!(
            notice,
            Notice::error("Exception 202401021030_abc.txt not found")
        );
    }

    #[test]
    fn test_delete_exception_outside_root() {
        let f = fixture();
        let (outcome, _) = delete_exception(&f.roots, "../../secret.txt");
        assert!(!outcome.found());
        assert_eq!(list_exceptions(&f.roots).len(), 3);
    }
}
