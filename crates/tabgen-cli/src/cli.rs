//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tabgen_model::{DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_ICON, DEFAULT_UUID};

#[derive(Parser)]
#[command(
    name = "csv-to-ibus",
    version,
    about = "Convert a transliteration CSV table into an ibus-table source file",
    long_about = "Convert a transliteration CSV table into an ibus-table source file.\n\n\
                  Reads CSV with `transliteration` and `character` columns from stdin\n\
                  (or --input) and writes the table to stdout (or --output)."
)]
pub struct Cli {
    #[command(flatten)]
    pub table: TableArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TableArgs {
    /// CSV input file (default: stdin).
    #[arg(long = "input", value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout). Only created once the table is complete.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Icon for the input method.
    #[arg(short = 'i', long = "icon", default_value = DEFAULT_ICON)]
    pub icon: String,

    /// Author written to the definition block.
    #[arg(long = "author", default_value = DEFAULT_AUTHOR)]
    pub author: String,

    /// Description written to the definition block.
    #[arg(long = "description", default_value = DEFAULT_DESCRIPTION)]
    pub description: String,

    /// Table UUID; keep it stable across releases of the same table.
    #[arg(long = "uuid", default_value = DEFAULT_UUID)]
    pub uuid: String,

    /// Value of the AUTO_SELECT flag.
    #[arg(
        long = "auto-select",
        value_name = "BOOL",
        action = ArgAction::Set,
        default_value_t = true
    )]
    pub auto_select: bool,

    /// Skip the synthetic `na` + `h…` rows.
    #[arg(long = "no-quirks")]
    pub no_quirks: bool,

    /// Fixed serial number (YYYYMMDDhhmm) instead of the current UTC time.
    #[arg(long = "serial", value_name = "YYYYMMDDhhmm", value_parser = parse_serial)]
    pub serial: Option<String>,
}

fn parse_serial(raw: &str) -> Result<String, String> {
    if raw.len() == 12 && raw.chars().all(|ch| ch.is_ascii_digit()) {
        Ok(raw.to_string())
    } else {
        Err(format!("expected 12 digits (YYYYMMDDhhmm), got '{raw}'"))
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
