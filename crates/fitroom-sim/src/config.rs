//! Simulation settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of slots in the room.
    pub capacity: usize,
    /// Number of blue workers to spawn.
    pub blue_workers: usize,
    /// Number of green workers to spawn.
    pub green_workers: usize,
    /// Upper bound on the random dwell time inside the room.
    pub max_dwell: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: 2,
            blue_workers: 4,
            green_workers: 4,
            max_dwell: Duration::from_millis(1000),
        }
    }
}
