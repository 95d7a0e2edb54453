//! Fitting-room simulation driver.
//!
//! Reads the room size and per-group worker counts from stdin, builds
//! one shared [`Room`], and spawns that many concurrent workers per
//! group. Each worker enters, dwells for a random duration, and exits;
//! the run ends when every worker has been through the room.

mod config;
mod input;
mod worker;

use std::error::Error;
use std::io;
use std::sync::Arc;

use fitroom::{Group, Room, RoomConfig};
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

use crate::config::SimConfig;
use crate::worker::{WorkerId, run_worker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sim = input::read_config(&mut io::stdin().lock(), &mut io::stdout())?;
    run(sim).await
}

async fn run(sim: SimConfig) -> Result<(), Box<dyn Error>> {
    let room = Arc::new(Room::new(RoomConfig::with_capacity(sim.capacity))?);
    tracing::info!(
        capacity = sim.capacity,
        blue = sim.blue_workers,
        green = sim.green_workers,
        "starting simulation"
    );

    let mut workers = JoinSet::new();
    let mut next_id = 0u64;
    for group in Group::ALL {
        let count = match group {
            Group::Blue => sim.blue_workers,
            Group::Green => sim.green_workers,
        };
        for _ in 0..count {
            workers.spawn(run_worker(
                Arc::clone(&room),
                WorkerId(next_id),
                group,
                sim.max_dwell,
            ));
            next_id += 1;
        }
    }

    while let Some(res) = workers.join_next().await {
        res?;
    }

    tracing::info!("simulation complete; room is empty");
    Ok(())
}
