//! Error types for the room coordinator.

/// Errors raised when constructing a [`Room`](crate::Room).
///
/// Rejected before any request can be processed. Contract violations at
/// runtime (releasing a slot that was never granted) are not errors to
/// recover from — [`Room::exit`](crate::Room::exit) panics on them.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configured capacity cannot admit anyone.
    #[error("room capacity must be at least 1, got {0}")]
    CapacityTooSmall(usize),
}
