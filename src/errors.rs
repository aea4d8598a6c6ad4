// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::dag::TaskId;

#[derive(Error, Debug)]
pub enum SalbpError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid method: {0} (expected \"WET\" or \"RPW\")")]
    UnknownMethod(String),

    #[error("Task {0} is defined more than once")]
    DuplicateTask(TaskId),

    #[error("Task {task} references unknown task {reference}")]
    UnresolvedReference { task: TaskId, reference: TaskId },

    #[error("Task {0} cannot precede or follow itself")]
    SelfReference(TaskId),

    #[error("Cycle detected in task graph: {0}")]
    GraphCycle(String),

    #[error("No task input: provide a tasks file argument or [tasks] in the config")]
    MissingInput,

    #[error("Task {task} (duration {duration}) does not fit into cycle time {cycle_time}")]
    TaskExceedsCycleTime {
        task: TaskId,
        duration: u64,
        cycle_time: u64,
    },

    #[error(
        "No task can be marshaled; remaining tasks wait on unplaced predecessors: {}",
        format_ids(.0)
    )]
    PrecedenceDeadlock(Vec<TaskId>),

    #[error("Total task duration overflows at task {0}")]
    DurationOverflow(TaskId),
}

pub type Result<T> = std::result::Result<T, SalbpError>;

fn format_ids(ids: &[TaskId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
