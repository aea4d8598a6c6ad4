// src/ordering/rpw.rs

//! Ranked positional weight ordering.
//!
//! The positional weight of a task is its own duration plus the largest
//! positional weight among its direct successors (nothing for sink tasks).
//! Weights are computed over a reverse topological order, so every successor
//! is final before any of its predecessors reads it, whatever the ids look
//! like.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::dag::{Task, TaskGraph, TaskId};

/// Positional weight of every task in the graph.
pub fn ranked_positional_weights(graph: &TaskGraph) -> HashMap<TaskId, u64> {
    let mut weights: HashMap<TaskId, u64> = HashMap::with_capacity(graph.len());

    for &id in graph.topological_order().iter().rev() {
        let Some(task) = graph.get(id) else {
            continue;
        };
        let heaviest_successor = task
            .successors
            .iter()
            .filter_map(|s| weights.get(s).copied())
            .max()
            .unwrap_or(0);
        weights.insert(id, task.duration + heaviest_successor);
    }

    weights
}

/// Tasks by positional weight, largest first. Ties keep input order.
pub fn order(graph: &TaskGraph) -> Vec<&Task> {
    let weights = ranked_positional_weights(graph);
    let mut tasks: Vec<&Task> = graph.tasks().iter().collect();
    tasks.sort_by_key(|t| Reverse(weights.get(&t.id).copied().unwrap_or(t.duration)));
    tasks
}
