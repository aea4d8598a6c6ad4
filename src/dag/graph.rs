// src/dag/graph.rs

use std::collections::{BTreeSet, HashMap};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::dag::task::{Task, TaskId};
use crate::errors::{Result, SalbpError};
use crate::input::TaskRecord;

/// Precedence graph of all tasks on the line.
///
/// Tasks keep their input order; ordering heuristics use it as the
/// tie-break between equal keys. The graph is immutable once built, so it can
/// be shared by any number of ordering runs.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    index: HashMap<TaskId, usize>,
    /// Ids in a topological order (every predecessor before its successors).
    topo_order: Vec<TaskId>,
}

impl TaskGraph {
    /// Build a graph from parsed records.
    ///
    /// Successor and predecessor lists are merged: `a` listing `b` as a
    /// successor is the same as `b` listing `a` as a predecessor.
    ///
    /// Fails on:
    /// - an empty record list
    /// - duplicate task ids
    /// - references to unknown tasks, or to the task itself
    /// - precedence cycles
    /// - durations whose sum does not fit in a `u64`
    pub fn from_records(records: &[TaskRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(SalbpError::ConfigError(
                "task input must contain at least one task".to_string(),
            ));
        }

        // First pass: create nodes.
        let mut tasks = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        let mut total: u64 = 0;
        for record in records {
            if index.insert(record.id, tasks.len()).is_some() {
                return Err(SalbpError::DuplicateTask(record.id));
            }
            total = total
                .checked_add(record.duration)
                .ok_or(SalbpError::DurationOverflow(record.id))?;
            tasks.push(Task::new(record.id, record.duration));
        }

        // Second pass: resolve references into (before, after) edges.
        let mut edges = Vec::new();
        for record in records {
            for &next in &record.successors {
                check_reference(&index, record.id, next)?;
                edges.push((record.id, next));
            }
            for &prev in &record.predecessors {
                check_reference(&index, record.id, prev)?;
                edges.push((prev, record.id));
            }
        }

        let mut graph: DiGraphMap<TaskId, ()> = DiGraphMap::new();
        for task in &tasks {
            graph.add_node(task.id);
        }
        for &(before, after) in &edges {
            graph.add_edge(before, after, ());
            tasks[index[&before]].successors.insert(after);
            tasks[index[&after]].predecessors.insert(before);
        }

        // A topological sort will fail if there is a cycle.
        let topo_order = toposort(&graph, None).map_err(|cycle| {
            SalbpError::GraphCycle(format!(
                "cycle detected in precedence graph involving task {}",
                cycle.node_id()
            ))
        })?;

        debug!(
            tasks = tasks.len(),
            links = graph.edge_count(),
            "task graph built"
        );

        Ok(Self {
            tasks,
            index,
            topo_order,
        })
    }

    /// All tasks, in input order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.index.get(&id).map(|&i| &self.tasks[i])
    }

    /// Immediate predecessors of a task, or `None` for an unknown id.
    pub fn predecessors_of(&self, id: TaskId) -> Option<&BTreeSet<TaskId>> {
        self.get(id).map(|t| &t.predecessors)
    }

    /// Immediate successors of a task, or `None` for an unknown id.
    pub fn successors_of(&self, id: TaskId) -> Option<&BTreeSet<TaskId>> {
        self.get(id).map(|t| &t.successors)
    }

    /// Tasks with no predecessors, in input order.
    pub fn roots(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_root())
    }

    /// Ids in a topological order: each task appears after all of its
    /// predecessors.
    pub fn topological_order(&self) -> &[TaskId] {
        &self.topo_order
    }

    /// Sum of all task durations. Never overflows: construction rejects
    /// graphs whose total does not fit.
    pub fn total_duration(&self) -> u64 {
        self.tasks.iter().map(|t| t.duration).sum()
    }

    /// Duration of the longest single task.
    pub fn max_duration(&self) -> u64 {
        self.tasks.iter().map(|t| t.duration).max().unwrap_or(0)
    }
}

fn check_reference(index: &HashMap<TaskId, usize>, task: TaskId, reference: TaskId) -> Result<()> {
    if reference == task {
        return Err(SalbpError::SelfReference(task));
    }
    if !index.contains_key(&reference) {
        return Err(SalbpError::UnresolvedReference { task, reference });
    }
    Ok(())
}
