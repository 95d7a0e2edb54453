//! The exclusivity tag partitioning workers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two mutually exclusive worker groups.
///
/// The room admits only one group's members concurrently. The tag is
/// immutable once assigned to a request; there is no behavioral
/// difference between the groups beyond mutual exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    Blue,
    Green,
}

impl Group {
    /// Both groups, in a fixed order.
    pub const ALL: [Group; 2] = [Group::Blue, Group::Green];

    /// The opposite group.
    pub fn other(self) -> Group {
        match self {
            Group::Blue => Group::Green,
            Group::Green => Group::Blue,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Blue => write!(f, "Blue"),
            Group::Green => write!(f, "Green"),
        }
    }
}
