//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "surgiplan",
    version,
    about = "Rule-based operating-room scheduler for ward surgery lists"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Schedule pending cases from a JSON request file.
    Schedule(ScheduleArgs),

    /// Show how a single diagnosis is labelled and classified.
    Classify(ClassifyArgs),

    /// Schedule a built-in sample ward list.
    Demo,
}

#[derive(Parser)]
pub struct ScheduleArgs {
    /// Request file with `pending` and `alreadyScheduled` lists ("-" for stdin).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format for the suggestions.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Free-text diagnosis.
    #[arg(value_name = "DIAGNOSIS")]
    pub diagnosis: String,

    /// Patient age in years (0 if unknown).
    #[arg(long, default_value_t = 0)]
    pub age: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Table,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
