//! Room configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Configuration for a [`Room`](crate::Room) instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Number of slots in the room. Fixed for the room's lifetime.
    pub capacity: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self { capacity: 2 }
    }
}

impl RoomConfig {
    /// Creates a config with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Checks that the configuration can admit at least one occupant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity < 1 {
            return Err(ConfigError::CapacityTooSmall(self.capacity));
        }
        Ok(())
    }
}
