//! Log and exception browsing for logscope
//!
//! This crate ties path validation, discovery, parsing, and the exception
//! store together into the operations a presentation layer calls. Every
//! operation takes the configured [`Roots`] explicitly and returns a typed
//! result for rendering.

mod error;
mod operations;
mod roots;

pub use error::BrowseError;
pub use operations::{
    delete_exception, list_exceptions, list_logs, overview, show_exception, show_log,
    show_log_or_notice,
};
pub use roots::Roots;

// Re-export types used in our public API
pub use logscope_types::{
    DeleteOutcome, ExceptionRecord, ExceptionView, FileRef, LevelSet, LogEntry, LogView, Notice,
    Overview, Severity,
};
