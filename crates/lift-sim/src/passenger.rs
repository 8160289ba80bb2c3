//! Passenger arena.
//!
//! Every passenger lives in one `Vec` owned by the simulation and is referred
//! to everywhere else by [`PassengerId`].  Floors and elevators only ever
//! hold ids, and a passenger's [`PassengerStatus`] names the single place
//! that currently holds its id.

use lift_core::{ElevatorId, FloorId, PassengerId, Tick};
use lift_roster::ArrivalRecord;

/// Where a passenger is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PassengerStatus {
    /// Not yet released; still in the arrival queue.
    Pending,
    /// Queued on this floor, waiting for pickup.
    Waiting(FloorId),
    /// Riding this elevator.
    Aboard(ElevatorId),
    /// Delivered (or never needed transport).
    Completed,
}

/// One transport request with its lifecycle timestamps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passenger {
    pub id:          PassengerId,
    pub start:       Tick,
    pub origin:      FloorId,
    pub destination: FloorId,
    /// Tick the passenger stepped into an elevator.
    pub boarded:     Option<Tick>,
    /// Tick the passenger's elevator reached the destination floor.
    pub exited:      Option<Tick>,
    pub status:      PassengerStatus,
}

impl Passenger {
    fn new(id: PassengerId, record: &ArrivalRecord) -> Self {
        Self {
            id,
            start:       record.start,
            origin:      record.origin,
            destination: record.destination,
            boarded:     None,
            exited:      None,
            status:      PassengerStatus::Pending,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == PassengerStatus::Completed
    }

    /// Ticks spent waiting before boarding, once boarded.
    pub fn wait_ticks(&self) -> Option<u64> {
        self.boarded.map(|b| b.since(self.start))
    }

    /// Ticks spent riding, once delivered.
    pub fn travel_ticks(&self) -> Option<u64> {
        Some(self.exited?.since(self.boarded?))
    }
}

/// Owns every passenger of a run, indexed by `PassengerId`.
#[derive(Default, Debug)]
pub struct PassengerStore {
    passengers: Vec<Passenger>,
}

impl PassengerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a passenger for `record`.  Ids are assigned sequentially from 0.
    ///
    /// Returns `None` once the id space is exhausted.
    pub fn push(&mut self, record: &ArrivalRecord) -> Option<PassengerId> {
        let id = PassengerId::try_from(self.passengers.len()).ok()?;
        self.passengers.push(Passenger::new(id, record));
        Some(id)
    }

    #[inline]
    pub fn get(&self, id: PassengerId) -> &Passenger {
        &self.passengers[id.index()]
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// All passengers in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> + '_ {
        self.passengers.iter()
    }

    pub fn completed_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.is_completed()).count()
    }

    // ── Lifecycle transitions (driven by the simulation and elevators) ────

    /// Same-floor request: done at its start tick without transport.
    pub(crate) fn complete_in_place(&mut self, id: PassengerId) {
        let p = &mut self.passengers[id.index()];
        p.boarded = Some(p.start);
        p.exited = Some(p.start);
        p.status = PassengerStatus::Completed;
    }

    pub(crate) fn mark_waiting(&mut self, id: PassengerId) -> FloorId {
        let p = &mut self.passengers[id.index()];
        debug_assert_eq!(p.status, PassengerStatus::Pending);
        p.status = PassengerStatus::Waiting(p.origin);
        p.origin
    }

    pub(crate) fn mark_boarded(&mut self, id: PassengerId, elevator: ElevatorId, now: Tick) {
        let p = &mut self.passengers[id.index()];
        debug_assert!(matches!(p.status, PassengerStatus::Waiting(_)));
        p.boarded = Some(now);
        p.status = PassengerStatus::Aboard(elevator);
    }

    pub(crate) fn mark_exited(&mut self, id: PassengerId, at: Tick) {
        let p = &mut self.passengers[id.index()];
        debug_assert!(matches!(p.status, PassengerStatus::Aboard(_)));
        debug_assert!(p.boarded.is_some_and(|b| b <= at));
        p.exited = Some(at);
        p.status = PassengerStatus::Completed;
    }
}
