// src/balance/station.rs

use crate::dag::{Task, TaskId};

/// A task as placed on a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignedTask {
    pub id: TaskId,
    pub duration: u64,
}

/// One workstation: the tasks assigned to it, in assignment order, and its
/// capacity (the cycle time).
///
/// The total assigned duration never exceeds the capacity; assignment is
/// append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    capacity: u64,
    tasks: Vec<AssignedTask>,
    load: u64,
}

impl Station {
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            tasks: Vec::new(),
            load: 0,
        }
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn tasks(&self) -> &[AssignedTask] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Sum of assigned task durations.
    pub fn load(&self) -> u64 {
        self.load
    }

    /// Capacity left unused.
    pub fn idle_time(&self) -> u64 {
        self.capacity - self.load
    }

    pub fn can_fit(&self, duration: u64) -> bool {
        self.load
            .checked_add(duration)
            .is_some_and(|load| load <= self.capacity)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Assign `task` if it fits. Returns `false` (and leaves the station
    /// untouched) otherwise.
    pub fn try_assign(&mut self, task: &Task) -> bool {
        if !self.can_fit(task.duration) {
            return false;
        }
        self.tasks.push(AssignedTask {
            id: task.id,
            duration: task.duration,
        });
        self.load += task.duration;
        true
    }
}
