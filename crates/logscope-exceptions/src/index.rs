use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use logscope_files::{FileCatalog, basename};
use logscope_types::ExceptionRecord;
use logscope_types::markup::strip_tags;

/// Suffix of exception dump files
pub const EXCEPTION_EXTENSION: &str = ".txt";

/// Length of the `YYYYMMDDHHmm` filename prefix
const TIMESTAMP_PREFIX_LEN: usize = 12;

/// Listing of exception dumps under a root
pub struct ExceptionIndex;

impl ExceptionIndex {
    /// List exception files under `root`, newest first
    pub fn list(root: &Path) -> Vec<ExceptionRecord> {
        Self::list_with_extension(root, EXCEPTION_EXTENSION)
    }

    /// List files ending in `extension` under `root`, newest first.
    ///
    /// Discovery failures yield an empty list. A file whose content can't be
    /// read is still listed, with an empty excerpt.
    pub fn list_with_extension(root: &Path, extension: &str) -> Vec<ExceptionRecord> {
        let mut records: Vec<ExceptionRecord> = FileCatalog::discover_or_empty(root, extension)
            .into_iter()
            .map(|path| {
                let identifier = basename(&path);
                let excerpt = match Self::read_excerpt(&path) {
                    Ok(excerpt) => excerpt,
                    Err(e) => {
                        debug!("Could not read excerpt of {}: {}", path.display(), e);
                        String::new()
                    }
                };

                ExceptionRecord {
                    name: path.to_string_lossy().into_owned(),
                    date: Self::parse_timestamp(&identifier),
                    identifier,
                    excerpt,
                }
            })
            .collect();

        Self::sort_newest_first(&mut records);
        records
    }

    /// Parse the `YYYYMMDDHHmm` prefix of a filename
    pub fn parse_timestamp(filename: &str) -> Option<NaiveDateTime> {
        let prefix = filename.get(..TIMESTAMP_PREFIX_LEN)?;
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let field = |range: std::ops::Range<usize>| prefix[range].parse::<u32>().ok();
        let year = i32::try_from(field(0..4)?).ok()?;

        NaiveDate::from_ymd_opt(year, field(4..6)?, field(6..8)?)?
            .and_hms_opt(field(8..10)?, field(10..12)?, 0)
    }

    /// First non-empty line of `content` with markup stripped
    pub fn excerpt(content: &str) -> String {
        content
            .split('\n')
            .find(|line| !line.is_empty())
            .map(strip_tags)
            .unwrap_or_default()
    }

    /// Read only as far as the first non-empty line of a file
    pub fn read_excerpt(path: &Path) -> io::Result<String> {
        let reader = BufReader::new(File::open(path)?);
        for chunk in reader.split(b'\n') {
            let chunk = chunk?;
            if !chunk.is_empty() {
                return Ok(strip_tags(&String::from_utf8_lossy(&chunk)));
            }
        }
        Ok(String::new())
    }

    /// Stable sort, most recent first; undated records go last
    pub fn sort_newest_first(records: &mut [ExceptionRecord]) {
        records.sort_by(|a, b| b.date.cmp(&a.date));
    }
}
