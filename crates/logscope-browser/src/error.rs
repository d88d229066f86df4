use std::io;

use thiserror::Error;

use logscope_files::ResolveError;
use logscope_types::Notice;

/// Errors surfaced to the presentation layer
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("log file {filename:?} not found: {source}")]
    LogNotFound {
        filename: String,
        #[source]
        source: ResolveError,
    },

    #[error("log file {filename:?} could not be read: {source}")]
    LogUnreadable {
        filename: String,
        #[source]
        source: io::Error,
    },
}

impl BrowseError {
    /// The filename the caller asked for
    pub fn filename(&self) -> &str {
        match self {
            Self::LogNotFound { filename, .. } | Self::LogUnreadable { filename, .. } => filename,
        }
    }

    /// Message shown to the user
    pub fn notice(&self) -> Notice {
        Notice::error("Logfile could not be read")
    }
}
