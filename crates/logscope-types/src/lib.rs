//! Shared types for logscope
//!
//! This crate contains data structures used across multiple logscope crates.

pub mod markup;

use chrono::NaiveDateTime;
use serde::Serialize;

// ============================================================================
// File Types
// ============================================================================

/// A discovered file, addressable by its basename
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileRef {
    /// Display name (basename for logs, full discovered path for exceptions)
    pub name: String,

    /// Basename used as the external key
    pub identifier: String,
}

impl FileRef {
    pub fn new(name: String, identifier: String) -> Self {
        Self { name, identifier }
    }
}

// ============================================================================
// Log Types
// ============================================================================

/// A single parsed log line
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Date/time token at the start of the line
    pub date: String,

    /// Numeric process or request id
    pub process_id: String,

    /// Optional secondary time token, empty when absent
    pub source: String,

    /// Free-form level token (ERROR, INFO, ...)
    pub level: String,

    /// Remainder of the line, HTML-escaped
    pub message: String,
}

/// Distinct levels in first-seen order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelSet {
    levels: Vec<String>,
}

impl LevelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a level; returns false if it was already present
    pub fn insert(&mut self, level: &str) -> bool {
        if self.contains(level) {
            return false;
        }
        self.levels.push(level.to_string());
        true
    }

    pub fn contains(&self, level: &str) -> bool {
        self.levels.iter().any(|l| l == level)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.levels
    }

    pub fn into_vec(self) -> Vec<String> {
        self.levels
    }
}

// ============================================================================
// Exception Types
// ============================================================================

/// An exception dump found on disk
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExceptionRecord {
    /// Full discovered path
    pub name: String,

    /// Basename used as the external key
    pub identifier: String,

    /// Timestamp from the `YYYYMMDDHHmm` filename prefix, `None` if it didn't parse
    pub date: Option<NaiveDateTime>,

    /// First line of the dump with markup removed
    pub excerpt: String,
}

/// Result of a delete request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// File was found and removed
    Deleted,
    /// File was found but the removal failed
    Failed,
    /// Path was rejected or the file does not exist
    NotFound,
}

impl DeleteOutcome {
    pub fn found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    pub fn deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

// ============================================================================
// Notices
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Ok,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Error => "ERROR",
        }
    }
}

/// User-facing message produced by an operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            title: String::new(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: String::new(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Views
// ============================================================================

/// Both listings shown on the index page
#[derive(Clone, Debug, Default, Serialize)]
pub struct Overview {
    pub log_files: Vec<FileRef>,
    pub exceptions: Vec<ExceptionRecord>,
}

/// Parsed contents of one log file
#[derive(Clone, Debug, Default, Serialize)]
pub struct LogView {
    /// Requested filename, echoed back
    pub filename: String,

    /// Active level filter, empty for none
    pub level: String,

    pub entries: Vec<LogEntry>,
    pub levels: LevelSet,
    pub notices: Vec<Notice>,
}

impl LogView {
    /// Empty view carrying the "could not be read" notice
    pub fn not_found(filename: &str, level: &str) -> Self {
        Self {
            filename: filename.to_string(),
            level: level.to_string(),
            entries: Vec::new(),
            levels: LevelSet::new(),
            notices: vec![Notice::error("Logfile could not be read")],
        }
    }
}

/// Contents of one exception dump
#[derive(Clone, Debug, Serialize)]
pub struct ExceptionView {
    pub filename: String,

    /// HTML-escaped dump, or the placeholder when `found` is false
    pub content: String,

    pub found: bool,
    pub notices: Vec<Notice>,
}
