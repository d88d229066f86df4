use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use logscope_types::markup::escape_html;
use logscope_types::{LevelSet, LogEntry};

use crate::filter::LevelFilter;

/// Line grammar: date, process id, optional secondary time, level, message.
///
/// Applied to the whole file at once. The date class includes whitespace, so a
/// match may start on the newline that ended the previous entry.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9:\-\s]+)\s([0-9]+)(\s+[:.0-9]+)?\s+([0-9A-Za-z_]+)\s+(.+)")
        .expect("log line pattern is valid")
});

/// Entries and levels extracted from one log file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedLog {
    /// Matching entries in file order
    pub entries: Vec<LogEntry>,

    /// Every level seen, regardless of the filter
    pub levels: LevelSet,
}

/// Log parser for extracting structure from raw log files
pub struct LogParser;

impl LogParser {
    /// Parse log content, keeping entries whose level equals `level`
    /// (all entries when `level` is empty)
    pub fn parse(content: &str, level: &str) -> ParsedLog {
        Self::parse_with(content, &LevelFilter::new(level))
    }

    /// Parse log content with a prepared filter
    pub fn parse_with(content: &str, filter: &LevelFilter) -> ParsedLog {
        let mut parsed = ParsedLog::default();

        for caps in LINE_PATTERN.captures_iter(content) {
            let level = &caps[4];
            parsed.levels.insert(level);

            if !filter.matches(level) {
                continue;
            }

            parsed.entries.push(LogEntry {
                date: caps[1].trim().to_string(),
                process_id: caps[2].to_string(),
                source: caps
                    .get(3)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default(),
                level: level.to_string(),
                message: escape_html(&caps[5]),
            });
        }

        parsed
    }

    /// Parse raw bytes; invalid UTF-8 is replaced rather than rejected
    pub fn parse_bytes(content: &[u8], filter: &LevelFilter) -> ParsedLog {
        Self::parse_with(&String::from_utf8_lossy(content), filter)
    }

    /// Read and parse a log file
    pub fn parse_file(path: &Path, filter: &LevelFilter) -> io::Result<ParsedLog> {
        let content = fs::read(path)?;
        let parsed = Self::parse_bytes(&content, filter);
        debug!(
            "Parsed {} entries ({} levels) from {}",
            parsed.entries.len(),
            parsed.levels.len(),
            path.display()
        );
        Ok(parsed)
    }
}
