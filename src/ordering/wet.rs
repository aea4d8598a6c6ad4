// src/ordering/wet.rs

use std::cmp::Reverse;

use crate::dag::{Task, TaskGraph};

/// Tasks by duration, largest first. Ties keep input order.
pub fn order(graph: &TaskGraph) -> Vec<&Task> {
    let mut tasks: Vec<&Task> = graph.tasks().iter().collect();
    tasks.sort_by_key(|t| Reverse(t.duration));
    tasks
}
