// src/balance/search.rs

use tracing::{debug, info, warn};

use crate::balance::packer::pack;
use crate::balance::result::Balance;
use crate::dag::Task;
use crate::errors::{Result, SalbpError};

/// First candidate cycle time for a sequence and workstation budget.
///
/// This is `total duration / workstations` (integer division), raised to the
/// longest single task when that is larger: below it the longest task fits
/// no station at all.
pub fn base_cycle_time(sequence: &[&Task], workstations: usize) -> u64 {
    let total = total_duration(sequence);
    let longest = sequence.iter().map(|t| t.duration).max().unwrap_or(0);
    let even_split = total / workstations.max(1) as u64;

    if even_split < longest {
        warn!(
            even_split,
            longest, "even split is shorter than the longest task; starting from the longest task"
        );
    }

    even_split.max(longest).max(1)
}

/// Search for the smallest cycle time whose balance uses at most
/// `workstations` stations.
///
/// Candidates start at [`base_cycle_time`] and grow by one. Every attempt,
/// including the final one, is handed to `on_attempt` in order; an error from
/// the callback aborts the search. Returns the final balance.
///
/// At a cycle time equal to the total duration a single station holds every
/// task, so the search never goes past it.
pub fn find_cycle_time<F>(sequence: &[&Task], workstations: usize, mut on_attempt: F) -> Result<Balance>
where
    F: FnMut(&Balance) -> Result<()>,
{
    if workstations == 0 {
        return Err(SalbpError::ConfigError(
            "target workstation count must be >= 1 (got 0)".to_string(),
        ));
    }

    let total = total_duration(sequence);
    let base = base_cycle_time(sequence, workstations);
    debug!(total, workstations, base, "starting cycle time search");

    for cycle_time in base..=total.max(base) {
        let balance = pack(sequence, cycle_time)?;
        on_attempt(&balance)?;

        if balance.station_count() <= workstations {
            info!(
                cycle_time,
                stations = balance.station_count(),
                "cycle time found"
            );
            return Ok(balance);
        }

        debug!(
            cycle_time,
            stations = balance.station_count(),
            workstations,
            "too many stations; trying a longer cycle time"
        );
    }

    Err(SalbpError::ConfigError(format!(
        "no cycle time up to {total} fits {workstations} workstation(s)"
    )))
}

/// Saturates instead of wrapping for sequences that did not come from a
/// [`TaskGraph`](crate::dag::TaskGraph).
fn total_duration(sequence: &[&Task]) -> u64 {
    sequence
        .iter()
        .fold(0u64, |acc, t| acc.saturating_add(t.duration))
}
