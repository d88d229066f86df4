use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use logscope_browser::{DeleteOutcome, Roots};

mod config;
mod render;

use config::Config;
use render::Format;

/// Logscope - Browse server log files and exception dumps
#[derive(Parser, Debug)]
#[command(name = "logscope")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Directory containing .log files (overrides the config file)
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Directory containing exception dumps (overrides the config file)
    #[arg(long, global = true, value_name = "DIR")]
    exception_dir: Option<PathBuf>,

    /// Config file (defaults to ~/.logscope/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List log files and exceptions
    Overview,

    /// List log files
    Logs,

    /// List exceptions, most recent first
    Exceptions,

    /// Show the entries of a log file
    ShowLog {
        /// Log filename relative to the log directory
        filename: String,

        /// Only show entries with this level
        #[arg(long, default_value = "")]
        level: String,
    },

    /// Show the content of an exception dump
    ShowException {
        /// Exception filename relative to the exception directory
        filename: String,
    },

    /// Delete an exception dump
    DeleteException {
        /// Exception filename relative to the exception directory
        filename: String,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = run(args);

    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    result
}

fn run(args: Args) -> Result<ExitCode> {
    let config = Config::load(args.config.as_deref())?
        .with_overrides(args.log_dir, args.exception_dir);
    let roots = config.roots;
    tracing::debug!("Using roots {:?}", roots);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let success = execute(&mut out, &roots, args.format, args.command)?;
    out.flush()?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run one command, returning false when the requested file was not usable
fn execute(out: &mut impl Write, roots: &Roots, format: Format, command: Command) -> Result<bool> {
    match command {
        Command::Overview => {
            let overview = logscope_browser::overview(roots);
            match format {
                Format::Text => render::overview(out, &overview)?,
                Format::Json => render::json(out, &overview)?,
            }
        }
        Command::Logs => {
            let files = logscope_browser::list_logs(roots);
            match format {
                Format::Text => render::log_files(out, &files)?,
                Format::Json => render::json(out, &files)?,
            }
        }
        Command::Exceptions => {
            let records = logscope_browser::list_exceptions(roots);
            match format {
                Format::Text => render::exceptions(out, &records)?,
                Format::Json => render::json(out, &records)?,
            }
        }
        Command::ShowLog { filename, level } => {
            let view = logscope_browser::show_log_or_notice(roots, &filename, &level);
            let found = view.notices.is_empty();
            match format {
                Format::Text => render::log_view(out, &view)?,
                Format::Json => render::json(out, &view)?,
            }
            return Ok(found);
        }
        Command::ShowException { filename } => {
            let view = logscope_browser::show_exception(roots, &filename);
            match format {
                Format::Text => render::exception_view(out, &view)?,
                Format::Json => render::json(out, &view)?,
            }
            return Ok(view.found);
        }
        Command::DeleteException { filename } => {
            let (outcome, notice) = logscope_browser::delete_exception(roots, &filename);
            render::delete_result(out, format, &filename, outcome, &notice)?;
            return Ok(outcome == DeleteOutcome::Deleted);
        }
    }

    Ok(true)
}
