//! The admission/release coordinator.
//!
//! The room hosts occupants of at most one [`Group`] at a time and never
//! more than its configured capacity. Admission is strict head-of-line
//! FIFO: a request is granted only when it is the oldest pending request,
//! a slot is free, and the room is empty or already held by its group.
//! Consecutive same-group requests are admitted in a burst up to
//! capacity; a different-group head blocks everything behind it until the
//! room drains, so later arrivals can never overtake and neither group
//! starves.

use std::collections::VecDeque;
use std::pin::pin;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::Notify;

use crate::{ConfigError, Group, RoomConfig};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// A queued intent to enter the room.
///
/// Tickets are handed out in arrival order; queue position is the only
/// priority there is.
#[derive(Debug)]
struct PendingRequest {
    ticket: u64,
    group: Group,
}

/// All coordinator state lives behind one lock so the capacity,
/// exclusivity, and ordering invariants are checked and mutated as a
/// group, never through independently-updated counters.
#[derive(Debug)]
struct RoomState {
    occupancy: usize,
    /// Set iff `occupancy > 0`; every current occupant belongs to it.
    active_group: Option<Group>,
    /// Pending requests in arrival order.
    wait_queue: VecDeque<PendingRequest>,
    /// Next arrival-order ticket. Incremented under the lock, so ties
    /// between "simultaneous" arrivals resolve by lock acquisition order.
    next_ticket: u64,
}

impl RoomState {
    fn enqueue(&mut self, group: Group) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.wait_queue.push_back(PendingRequest { ticket, group });
        tracing::trace!(%group, ticket, "queued");
        ticket
    }

    /// Admits the request if it is the head of the queue, a slot is
    /// free, and the room is empty or already held by its group.
    fn try_admit(&mut self, ticket: u64, capacity: usize) -> bool {
        let head = match self.wait_queue.front() {
            Some(head) if head.ticket == ticket => head,
            _ => return false,
        };
        if self.occupancy >= capacity {
            return false;
        }
        if self.active_group.is_some_and(|active| active != head.group) {
            return false;
        }

        let group = head.group;
        self.wait_queue.pop_front();
        self.occupancy += 1;
        if self.active_group.is_none() {
            self.active_group = Some(group);
            tracing::info!(%group, "room is now {group} only");
        }
        tracing::debug!(%group, ticket, occupancy = self.occupancy, "admitted");
        true
    }

    /// Withdraws a pending request without touching occupancy. The
    /// relative order of all other entries is preserved.
    fn withdraw(&mut self, ticket: u64) {
        let Some(pos) = self.wait_queue.iter().position(|p| p.ticket == ticket) else {
            return;
        };
        if self.wait_queue.remove(pos).is_some() {
            tracing::debug!(ticket, "pending request withdrawn");
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// The admission/release coordinator for a group-exclusive room.
///
/// Shared across workers via [`Arc`](std::sync::Arc); the coordinator
/// outlives all of them and is the only shared mutable state. The two
/// operations are [`enter`](Self::enter) and [`exit`](Self::exit).
#[derive(Debug)]
pub struct Room {
    capacity: usize,
    state: Mutex<RoomState>,
    /// Signalled on every release, admission, and withdrawal so the
    /// current head re-evaluates its eligibility. Waiters tolerate
    /// spurious wakeups by re-checking the predicate from scratch.
    wakeup: Notify,
}

impl Room {
    /// Creates a room from a validated configuration.
    pub fn new(config: RoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            capacity: config.capacity,
            state: Mutex::new(RoomState {
                occupancy: 0,
                active_group: None,
                wait_queue: VecDeque::new(),
                next_ticket: 0,
            }),
            wakeup: Notify::new(),
        })
    }

    /// Creates a room with the given number of slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        Self::new(RoomConfig::with_capacity(capacity))
    }

    /// The fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupants currently holding a slot.
    pub fn occupancy(&self) -> usize {
        self.lock_state().occupancy
    }

    /// The group currently holding the room, if any.
    pub fn active_group(&self) -> Option<Group> {
        self.lock_state().active_group
    }

    /// Number of requests waiting for admission.
    pub fn waiting(&self) -> usize {
        self.lock_state().wait_queue.len()
    }

    /// A point-in-time view of the room, for logging and assertions.
    pub fn snapshot(&self) -> RoomSnapshot {
        let state = self.lock_state();
        RoomSnapshot {
            capacity: self.capacity,
            occupancy: state.occupancy,
            active_group: state.active_group,
            waiting: state.wait_queue.len(),
        }
    }

    /// Waits for admission and takes one slot for `group`.
    ///
    /// The request joins the tail of the wait queue and the caller
    /// suspends until it is the oldest pending request, a slot is free,
    /// and the room is empty or already held by `group`. Once this
    /// returns the caller holds one slot and must release it with
    /// exactly one matching [`exit`](Self::exit).
    ///
    /// # Cancel safety
    ///
    /// Dropping the future before it resolves withdraws the request: no
    /// slot is held, occupancy is untouched, and the relative order of
    /// the remaining queue entries is preserved.
    pub async fn enter(&self, group: Group) {
        let ticket = self.lock_state().enqueue(group);
        let mut pending = PendingGuard {
            room: self,
            ticket,
            admitted: false,
        };

        loop {
            let mut notified = pin!(self.wakeup.notified());
            {
                let mut state = self.lock_state();
                if state.try_admit(ticket, self.capacity) {
                    pending.admitted = true;
                    drop(state);
                    // The new head may be the same group; let it batch in.
                    self.wakeup.notify_waiters();
                    return;
                }
                // Register for wakeup before the lock drops, so a release
                // landing between the check and the await is not lost.
                notified.as_mut().enable();
            }
            notified.await;
        }
    }

    /// Releases one slot previously granted to `group` by
    /// [`enter`](Self::enter).
    ///
    /// If the room empties, the active group is cleared; in every case
    /// all waiters are signalled so the current head re-evaluates its
    /// eligibility (and simply re-suspends if still ineligible).
    ///
    /// # Panics
    ///
    /// Panics if no slot is outstanding or if `group` does not match the
    /// active group. Both mean the caller is releasing a grant it does
    /// not hold; carrying on would desynchronize the occupancy count
    /// from the real set of admitted workers.
    pub fn exit(&self, group: Group) {
        let mut state = self.lock_state();
        assert!(
            state.occupancy > 0,
            "exit({group}) called on an empty room: no grant is outstanding"
        );
        let active = state
            .active_group
            .expect("occupied room always has an active group");
        assert!(
            active == group,
            "exit({group}) does not match the active group {active}"
        );

        state.occupancy -= 1;
        tracing::debug!(%group, occupancy = state.occupancy, "released");
        if state.occupancy == 0 {
            state.active_group = None;
            tracing::info!("room emptied");
        }
        drop(state);
        self.wakeup.notify_waiters();
    }

    fn lock_state(&self) -> MutexGuard<'_, RoomState> {
        self.state.lock().expect("room state lock poisoned")
    }
}

/// Withdraws the pending request if `enter` is cancelled before
/// admission. Admission and disarming happen under the state lock with
/// no await point in between, so an admitted slot is never withdrawn.
struct PendingGuard<'a> {
    room: &'a Room,
    ticket: u64,
    admitted: bool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.admitted {
            return;
        }
        let mut state = self.room.lock_state();
        state.withdraw(self.ticket);
        drop(state);
        // The withdrawn request may have been the head; whoever is head
        // now gets a chance to re-evaluate.
        self.room.wakeup.notify_waiters();
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A point-in-time view of room state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSnapshot {
    /// The fixed number of slots.
    pub capacity: usize,
    /// Occupants currently holding a slot.
    pub occupancy: usize,
    /// The group holding the room, if any.
    pub active_group: Option<Group>,
    /// Requests waiting for admission.
    pub waiting: usize,
}

impl RoomSnapshot {
    /// Whether the room has no occupants.
    pub fn is_empty(&self) -> bool {
        self.occupancy == 0
    }
}
