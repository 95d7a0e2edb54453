//! Simulated room clients.
//!
//! A worker is a task that enters the room, dwells for a random
//! duration, and leaves. Identity exists only for log output; there is
//! no behavioral specialization beyond the group tag.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use fitroom::{Group, Room};
use rand::Rng;
use tracing::info;

/// Identifies a worker in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerId(pub u64);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W-{}", self.0)
    }
}

/// Runs one worker to completion: enter, dwell, exit.
pub async fn run_worker(room: Arc<Room>, id: WorkerId, group: Group, max_dwell: Duration) {
    info!(worker = %id, %group, "wants to enter");
    room.enter(group).await;
    info!(worker = %id, %group, "inside");

    tokio::time::sleep(dwell_duration(max_dwell)).await;

    info!(worker = %id, %group, "leaving");
    room.exit(group);
}

/// A uniformly random dwell in `[0, max_dwell)`.
fn dwell_duration(max_dwell: Duration) -> Duration {
    if max_dwell.is_zero() {
        return Duration::ZERO;
    }
    let ms = rand::rng().random_range(0..max_dwell.as_millis() as u64);
    Duration::from_millis(ms)
}
