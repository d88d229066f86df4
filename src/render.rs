//! Text and JSON output of browser results

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use logscope_browser::{
    DeleteOutcome, ExceptionRecord, ExceptionView, FileRef, LogView, Notice, Overview,
};

/// Output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Pretty-printed JSON followed by a newline
pub fn json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn notices(out: &mut impl Write, notices: &[Notice]) -> Result<()> {
    for notice in notices {
        writeln!(out, "[{}] {}", notice.severity.as_str(), notice.message)?;
    }
    Ok(())
}

pub fn log_files(out: &mut impl Write, files: &[FileRef]) -> Result<()> {
    if files.is_empty() {
        writeln!(out, "No log files found")?;
    }
    for file in files {
        writeln!(out, "{}", file.identifier)?;
    }
    Ok(())
}

pub fn exceptions(out: &mut impl Write, records: &[ExceptionRecord]) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "No exceptions found")?;
    }
    for record in records {
        let date = record
            .date
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "{:<16}  {}  {}", date, record.identifier, record.excerpt)?;
    }
    Ok(())
}

pub fn overview(out: &mut impl Write, overview: &Overview) -> Result<()> {
    writeln!(out, "Log files")?;
    log_files(out, &overview.log_files)?;
    writeln!(out)?;
    writeln!(out, "Exceptions")?;
    exceptions(out, &overview.exceptions)
}

pub fn log_view(out: &mut impl Write, view: &LogView) -> Result<()> {
    notices(out, &view.notices)?;

    let levels: Vec<&str> = view.levels.iter().collect();
    writeln!(out, "{} (levels: {})", view.filename, levels.join(", "))?;

    for entry in &view.entries {
        writeln!(out, "{} [{}] {}", entry.date, entry.level, entry.message)?;
    }
    Ok(())
}

pub fn exception_view(out: &mut impl Write, view: &ExceptionView) -> Result<()> {
    notices(out, &view.notices)?;
    writeln!(out, "{}", view.content)?;
    Ok(())
}

#[derive(Serialize)]
struct DeleteReport<'a> {
    filename: &'a str,
    outcome: DeleteOutcome,
    deleted: bool,
    found: bool,
    notice: &'a Notice,
}

pub fn delete_result(
    out: &mut impl Write,
    format: Format,
    filename: &str,
    outcome: DeleteOutcome,
    notice: &Notice,
) -> Result<()> {
    match format {
        Format::Text => notices(out, std::slice::from_ref(notice)),
        Format::Json => json(
            out,
            &DeleteReport {
                filename,
                outcome,
                deleted: outcome.deleted(),
                found: outcome.found(),
                notice,
            },
        ),
    }
}
