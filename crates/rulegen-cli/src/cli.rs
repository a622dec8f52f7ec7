//! CLI argument definitions for the rule generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rulegen",
    version,
    about = "Derive validation rules from a database schema snapshot",
    long_about = "Derive per-column validation rules from a database schema snapshot.\n\n\
                  Reads a JSON schema snapshot, applies table and column exclusions,\n\
                  and prints the rule catalog as JSON on stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the rule catalog for a schema snapshot.
    Generate(GenerateArgs),

    /// List the tables in a schema snapshot.
    Tables(TablesArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the JSON schema snapshot.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// TOML file with `tables`, `ignore_tables` and `ignore_columns`.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Process only this table (repeatable; replaces the config's list).
    #[arg(long = "table", value_name = "NAME")]
    pub tables: Vec<String>,

    /// Skip this table entirely (repeatable; adds to the config's list).
    #[arg(long = "ignore-table", value_name = "NAME")]
    pub ignore_tables: Vec<String>,

    /// Skip this column in every table (repeatable; adds to the config's list).
    #[arg(long = "ignore-column", value_name = "NAME")]
    pub ignore_columns: Vec<String>,

    /// Print single-line JSON.
    #[arg(long = "compact")]
    pub compact: bool,

    /// Do not print the per-table summary on stderr.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Parser)]
pub struct TablesArgs {
    /// Path to the JSON schema snapshot.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,
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
