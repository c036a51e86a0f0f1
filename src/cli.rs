// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `courseplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "courseplan",
    version,
    about = "Order courses so that prerequisites come first.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    #[arg(long, value_name = "PATH", default_value = "Courseplan.toml")]
    pub config: String,

    /// Course to plan, e.g. --course "I&C SCI 33". Repeatable.
    ///
    /// When given, replaces `[plan].courses` from the plan file.
    #[arg(long = "course", value_name = "ID")]
    pub courses: Vec<String>,

    /// Query the catalogue one course at a time instead of concurrently.
    #[arg(long)]
    pub sequential: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COURSEPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Build and print the prerequisite graph, but don't schedule.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
