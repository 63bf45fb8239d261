//! CLI argument definitions for mission-prep.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mission-prep",
    version,
    about = "Mission statement text preparation - normalize free text and apply glossary corrections",
    long_about = "Prepare free-text mission statements for downstream analysis.\n\n\
                  Runs the cleantext protocol (lowercasing, whitespace cleanup, punctuation\n\
                  spacing) over one CSV column, then applies an ordered glossary of literal\n\
                  find/replace corrections in table priority order."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize and correct one text column of a CSV file.
    Clean(CleanArgs),

    /// List the cleantext rules in application order.
    Rules,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Name of the text column to clean.
    #[arg(long = "column", value_name = "NAME", default_value = "mission")]
    pub column: String,

    /// Glossary CSV with `word` and `fix` columns, rows in priority order.
    ///
    /// Without a glossary only the cleantext stage runs.
    #[arg(long = "glossary", value_name = "PATH")]
    pub glossary: Option<PathBuf>,

    /// Output CSV path (default: <input>.clean.csv beside the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip the cleantext stage and apply only the glossary.
    ///
    /// Glossary entries assume cleantext input (for example a hyphen
    /// surrounded by spaces), so this is only useful when the column was
    /// normalized by an earlier run.
    #[arg(long = "skip-cleantext")]
    pub skip_cleantext: bool,

    /// Process and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
