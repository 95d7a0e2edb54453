//! Group-exclusive room coordination.
//!
//! A [`Room`] is a bounded-capacity shared resource whose occupants must
//! all belong to the same [`Group`] at any instant. Admission is strict
//! head-of-line FIFO: consecutive same-group arrivals share the room up
//! to capacity, while a different-group arrival blocks everything behind
//! it until the room drains. Later arrivals can never overtake, so
//! neither group starves.
//!
//! # Key types
//!
//! - [`Room`] — the admission/release coordinator
//! - [`Group`] — the exclusivity tag
//! - [`RoomConfig`] — room settings, validated at construction
//! - [`RoomSnapshot`] — point-in-time view for logging and assertions

mod config;
mod error;
mod group;
mod room;

pub use config::RoomConfig;
pub use error::ConfigError;
pub use group::Group;
pub use room::{Room, RoomSnapshot};
