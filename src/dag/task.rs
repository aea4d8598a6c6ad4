// src/dag/task.rs

//! Task identity and resolved task nodes.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Identifier of a task, as written in the input (a positive integer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task node after reference resolution.
///
/// `predecessors` and `successors` only ever contain ids of tasks that exist
/// in the owning [`TaskGraph`](super::TaskGraph), and the two relations are
/// mirror images of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub duration: u64,
    pub predecessors: BTreeSet<TaskId>,
    pub successors: BTreeSet<TaskId>,
}

impl Task {
    pub fn new(id: TaskId, duration: u64) -> Self {
        Self {
            id,
            duration,
            predecessors: BTreeSet::new(),
            successors: BTreeSet::new(),
        }
    }

    /// True if the task has no predecessors.
    pub fn is_root(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Whether every direct predecessor has already been marshaled.
    pub fn can_marshal(&self, marshaled: &HashSet<TaskId>) -> bool {
        self.predecessors.iter().all(|p| marshaled.contains(p))
    }
}
