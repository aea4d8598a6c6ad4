// src/balance/packer.rs

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::balance::result::Balance;
use crate::balance::station::Station;
use crate::dag::{Task, TaskId};
use crate::errors::{Result, SalbpError};

/// Marshal an ordered task sequence onto stations of capacity `cycle_time`.
///
/// Greedy, single pass, first-fit from the start of the sequence:
/// - scan the unplaced tasks in order for the first one whose predecessors
///   are all placed and which fits the open station
/// - place it and restart the scan from the top
/// - when a full scan places nothing, close the station and open a new one
///
/// Predecessors that are not part of `sequence` are never placed, so tasks
/// waiting on them end in [`SalbpError::PrecedenceDeadlock`]. A ready task
/// longer than `cycle_time` ends in [`SalbpError::TaskExceedsCycleTime`].
pub fn pack(sequence: &[&Task], cycle_time: u64) -> Result<Balance> {
    if cycle_time == 0 {
        return Err(SalbpError::ConfigError(
            "cycle time must be >= 1 (got 0)".to_string(),
        ));
    }
    if sequence.is_empty() {
        return Err(SalbpError::ConfigError(
            "cannot balance an empty task sequence".to_string(),
        ));
    }

    let mut remaining: Vec<&Task> = sequence.to_vec();
    let mut marshaled: HashSet<TaskId> = HashSet::with_capacity(sequence.len());
    let mut stations: Vec<Station> = Vec::new();
    let mut current = Station::new(cycle_time);

    while !remaining.is_empty() {
        let next = remaining
            .iter()
            .position(|t| t.can_marshal(&marshaled) && current.can_fit(t.duration));

        match next {
            Some(idx) => {
                let task = remaining.remove(idx);
                let placed = current.try_assign(task);
                debug_assert!(placed);
                marshaled.insert(task.id);
                trace!(task = %task.id, station = stations.len() + 1, "task marshaled");
            }
            None if current.is_empty() => {
                return Err(stall_error(&remaining, &marshaled, cycle_time));
            }
            None => {
                debug!(
                    station = stations.len() + 1,
                    load = current.load(),
                    cycle_time,
                    "station closed"
                );
                let closed = std::mem::replace(&mut current, Station::new(cycle_time));
                stations.push(closed);
            }
        }
    }

    stations.push(current);

    Ok(Balance::new(cycle_time, stations))
}

/// Explain why an empty station could not take any task.
fn stall_error(remaining: &[&Task], marshaled: &HashSet<TaskId>, cycle_time: u64) -> SalbpError {
    if let Some(task) = remaining.iter().find(|t| t.can_marshal(marshaled)) {
        return SalbpError::TaskExceedsCycleTime {
            task: task.id,
            duration: task.duration,
            cycle_time,
        };
    }

    SalbpError::PrecedenceDeadlock(remaining.iter().map(|t| t.id).collect())
}
