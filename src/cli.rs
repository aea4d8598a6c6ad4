// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::ordering::Method;

/// Command-line arguments for `salbp`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "salbp",
    version,
    about = "Balance precedence-constrained tasks across assembly line workstations (SALBP-1).",
    long_about = None
)]
pub struct CliArgs {
    /// Task file, one task per line: `<id> <duration> [<next>...] ; [<prev>...]`.
    ///
    /// Overrides `[tasks]` from the config file.
    #[arg(value_name = "TASKS")]
    pub tasks: Option<PathBuf>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Salbp.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Target number of workstations (overrides `[config].workstations`).
    #[arg(long, short = 'w', value_name = "N")]
    pub workstations: Option<usize>,

    /// Ordering method to run (WET or RPW). Repeat to run several.
    ///
    /// Overrides `[config].methods`.
    #[arg(long = "method", short = 'm', value_name = "METHOD")]
    pub methods: Vec<Method>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SALBP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the task graph, but don't balance.
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
