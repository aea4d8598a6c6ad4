// src/lib.rs

pub mod balance;
pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;
pub mod ordering;
pub mod report;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::balance::{base_cycle_time, find_cycle_time, Balance};
use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::dag::TaskGraph;
use crate::input::TaskSource;
use crate::ordering::Method;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - task input resolution and parsing
/// - graph building
/// - one ordering + cycle-time search per method, reported to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("loading config from {}", path.display()),
        None => "loading default config".to_string(),
    })?;

    let workstations = args.workstations.unwrap_or(cfg.config.workstations);
    if workstations == 0 {
        bail!("--workstations must be >= 1 (got 0)");
    }

    let methods = if args.methods.is_empty() {
        cfg.config.methods.clone()
    } else {
        args.methods.clone()
    };

    let config_dir = config_root_dir(args.config.as_deref());
    let source = TaskSource::resolve(args.tasks.as_deref(), &cfg.tasks, &config_dir)?;
    let records = source
        .read_records()
        .with_context(|| describe_source(&source))?;
    let graph = TaskGraph::from_records(&records)?;

    if args.dry_run {
        print_dry_run(&graph, workstations, &methods);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, method) in methods.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        balance_line(&graph, *method, workstations, &mut out)?;
    }

    Ok(())
}

/// Order the graph with `method`, then search for the smallest cycle time
/// that fits `workstations`, writing the order and every attempt to `out`.
///
/// Attempts are separated by a blank line. Returns the final balance.
pub fn balance_line(
    graph: &TaskGraph,
    method: Method,
    workstations: usize,
    out: &mut impl Write,
) -> errors::Result<Balance> {
    let sequence = method.order(graph);
    report::write_order(&mut *out, method, &sequence)?;

    let mut first = true;
    let balance = find_cycle_time(&sequence, workstations, |attempt| {
        if !first {
            writeln!(out)?;
        }
        first = false;
        report::write_attempt(&mut *out, method, attempt)
    })?;

    info!(
        method = %method,
        cycle_time = balance.cycle_time(),
        stations = balance.station_count(),
        "line balanced"
    );

    Ok(balance)
}

/// Directory that relative `[tasks].file` paths are resolved against.
///
/// - If the config path has a non-empty parent (e.g. "lines/Salbp.toml"),
///   we use that directory.
/// - Otherwise we fall back to the current working directory ".".
fn config_root_dir(config_path: Option<&Path>) -> PathBuf {
    match config_path.and_then(Path::parent) {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn describe_source(source: &TaskSource) -> String {
    match source {
        TaskSource::Inline(_) => "reading inline [tasks] block".to_string(),
        TaskSource::File(path) => format!("reading tasks from {}", path.display()),
    }
}

/// Simple dry-run output: print tasks, links and search settings.
fn print_dry_run(graph: &TaskGraph, workstations: usize, methods: &[Method]) {
    let names = methods
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ");

    println!("salbp dry-run");
    println!("  workstations = {workstations}");
    println!("  methods = {names}");
    println!("  total duration = {}", graph.total_duration());

    let sequence: Vec<_> = graph.tasks().iter().collect();
    println!(
        "  base cycle time = {}",
        base_cycle_time(&sequence, workstations)
    );
    println!();

    println!("tasks ({}):", graph.len());
    for task in graph.tasks() {
        println!("  - {} (duration {})", task.id, task.duration);
        if !task.predecessors.is_empty() {
            println!("      after: {}", join_ids(task.predecessors.iter()));
        }
        if !task.successors.is_empty() {
            println!("      before: {}", join_ids(task.successors.iter()));
        }
    }

    debug!("dry-run complete (no balancing)");
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a dag::TaskId>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}
