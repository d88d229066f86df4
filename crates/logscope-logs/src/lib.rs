//! Log processing for logscope
//!
//! This crate parses log files into structured entries and filters them by level.

mod filter;
mod parser;

pub use filter::LevelFilter;
pub use parser::{LogParser, ParsedLog};

/// Suffix of log files
pub const LOG_EXTENSION: &str = ".log";

// Re-export types used in our public API
pub use logscope_types::{LevelSet, LogEntry};
