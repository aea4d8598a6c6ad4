// src/balance/result.rs

//! Balancing result for one cycle time, and its line metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Line efficiency (LE) | total work / (stations x cycle time) x 100 |
//! | Smoothness index (SI) | sqrt(sum over stations of idle time^2) |
//! | Line time (T) | stations x cycle time |

use crate::balance::station::Station;
use crate::dag::TaskId;

/// Stations produced by one packing pass at a fixed cycle time.
///
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    cycle_time: u64,
    stations: Vec<Station>,
}

impl Balance {
    /// Wrap already-packed stations. Every station's capacity is expected to
    /// equal `cycle_time`.
    pub fn new(cycle_time: u64, stations: Vec<Station>) -> Self {
        debug_assert!(stations.iter().all(|s| s.capacity() == cycle_time));
        Self {
            cycle_time,
            stations,
        }
    }

    pub fn cycle_time(&self) -> u64 {
        self.cycle_time
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Total duration of all assigned tasks.
    pub fn total_work(&self) -> u64 {
        self.stations.iter().map(Station::load).sum()
    }

    /// Index (0-based) of the station holding `id`.
    pub fn station_of(&self, id: TaskId) -> Option<usize> {
        self.stations.iter().position(|s| s.contains(id))
    }

    /// Line time: station count times cycle time (saturating).
    pub fn line_time(&self) -> u64 {
        (self.stations.len() as u64).saturating_mul(self.cycle_time)
    }

    /// Line efficiency in percent (unrounded).
    pub fn line_efficiency(&self) -> f64 {
        let capacity = self.stations.len() as f64 * self.cycle_time as f64;
        if capacity == 0.0 {
            return 0.0;
        }
        self.total_work() as f64 / capacity * 100.0
    }

    /// Smoothness index (unrounded). Zero means every station is fully loaded.
    pub fn smoothness_index(&self) -> f64 {
        let sum_of_squares: f64 = self
            .stations
            .iter()
            .map(|s| (s.idle_time() as f64).powi(2))
            .sum();
        sum_of_squares.sqrt()
    }
}
