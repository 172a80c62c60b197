//! CLI argument definitions for the beneficiary identifier tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bhid",
    version,
    about = "Beneficiary identifier hashing - validate registration data and derive salted IDs",
    long_about = "Validate beneficiary registration data and derive salted identifiers.\n\n\
                  Reads CSV or spreadsheet sources described by a TOML configuration,\n\
                  applies per-column validation rules, and writes the selected columns\n\
                  together with a SHA-256 identifier per record."
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

    /// Include record values (hash inputs) in trace logs.
    ///
    /// WARNING: trace logs then contain personal data.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the configured sources and write hashed identifiers.
    Hash(HashArgs),

    /// Validate the configured sources without hashing.
    Validate(ConfigArgs),

    /// Show the columns that will be hashed and written.
    Columns(ConfigArgs),
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Path to the run configuration (TOML).
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: PathBuf,
}

#[derive(Parser)]
pub struct HashArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output file (default: `[destination] path` from the configuration).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Validate and hash without writing output files.
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
