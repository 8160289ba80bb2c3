//! Elevator state machine.
//!
//! # States
//!
//! ```text
//!            board / pick target
//!  STOPPED ───────────────────────► MOVING_UP / MOVING_DOWN
//!     ▲                                  │  one floor per ticks_per_floor
//!     │ dwell elapsed                    │  stop reason at new floor
//!     └────────────── STOPPING ◄─────────┘
//! ```
//!
//! Passengers only change hands in STOPPED.  A moving elevator with no stop
//! reason at an extreme floor reverses in place without stopping.

use std::fmt;

use lift_core::{BankConfig, ElevatorId, FloorId, PassengerId, Tick};

use crate::{Building, PassengerStore};

// ── Motion ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

/// Internal motion state, carrying the countdown that belongs to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Motion {
    Stopped,
    /// Dwelling after arrival; `remaining` ticks until STOPPED.
    Stopping { remaining: u32 },
    /// Travelling; `remaining` ticks until the next floor.
    Moving { direction: Direction, remaining: u32 },
}

/// Public, timer-free view of [`Motion`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElevatorState {
    Stopped,
    Stopping,
    MovingUp,
    MovingDown,
}

impl From<Motion> for ElevatorState {
    fn from(motion: Motion) -> Self {
        match motion {
            Motion::Stopped => ElevatorState::Stopped,
            Motion::Stopping { .. } => ElevatorState::Stopping,
            Motion::Moving { direction: Direction::Up, .. } => ElevatorState::MovingUp,
            Motion::Moving { direction: Direction::Down, .. } => ElevatorState::MovingDown,
        }
    }
}

impl fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElevatorState::Stopped => "STOPPED",
            ElevatorState::Stopping => "STOPPING",
            ElevatorState::MovingUp => "MOVING_UP",
            ElevatorState::MovingDown => "MOVING_DOWN",
        })
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Something an elevator did during one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElevatorEvent {
    Exited {
        elevator:  ElevatorId,
        passenger: PassengerId,
        floor:     FloorId,
    },
    Boarded {
        elevator:    ElevatorId,
        passenger:   PassengerId,
        floor:       FloorId,
        destination: FloorId,
    },
    Departed {
        elevator:  ElevatorId,
        floor:     FloorId,
        target:    FloorId,
        direction: Direction,
    },
    Stopping {
        elevator: ElevatorId,
        floor:    FloorId,
    },
    Stopped {
        elevator: ElevatorId,
        floor:    FloorId,
    },
    /// Hit an extreme floor with nothing to do there; now heading `direction`.
    Reversed {
        elevator:  ElevatorId,
        floor:     FloorId,
        direction: Direction,
    },
}

impl fmt::Display for ElevatorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ElevatorEvent::Exited { elevator, passenger, floor } => {
                write!(f, "elevator {}: passenger {} exits at floor {}", elevator.0, passenger.0, floor.0)
            }
            ElevatorEvent::Boarded { elevator, passenger, floor, destination } => write!(
                f,
                "elevator {}: passenger {} boards at floor {} -> {}",
                elevator.0, passenger.0, floor.0, destination.0
            ),
            ElevatorEvent::Departed { elevator, floor, target, direction } => write!(
                f,
                "elevator {}: leaving floor {} {direction} toward {}",
                elevator.0, floor.0, target.0
            ),
            ElevatorEvent::Stopping { elevator, floor } => {
                write!(f, "elevator {}: stopping at floor {}", elevator.0, floor.0)
            }
            ElevatorEvent::Stopped { elevator, floor } => {
                write!(f, "elevator {}: stopped at floor {}", elevator.0, floor.0)
            }
            ElevatorEvent::Reversed { elevator, floor, direction } => {
                write!(f, "elevator {}: reversing at floor {}, now {direction}", elevator.0, floor.0)
            }
        }
    }
}

/// Per-tick scratch output of [`Elevator::tick`].  Reused across ticks by the
/// simulation; call [`clear`][TickOutput::clear] between elevators.
#[derive(Default, Debug)]
pub struct TickOutput {
    /// Passengers delivered this tick.
    pub completed: Vec<PassengerId>,
    pub events:    Vec<ElevatorEvent>,
}

impl TickOutput {
    pub fn clear(&mut self) {
        self.completed.clear();
        self.events.clear();
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Elevator {
    id:              ElevatorId,
    floor:           FloorId,
    motion:          Motion,
    ticks_per_floor: u32,
    dwell_ticks:     u32,
    capacity:        usize,
    max_floor:       u16,
    /// Aboard passengers, longest-aboard first.
    riders:          Vec<PassengerId>,
    target:          Option<FloorId>,
    /// Tick at which the car last reached `floor`.
    arrived_at:      Tick,
}

impl Elevator {
    /// A new elevator, STOPPED at the lobby.
    pub fn new(id: ElevatorId, config: &BankConfig) -> Self {
        Self {
            id,
            floor:           FloorId::LOBBY,
            motion:          Motion::Stopped,
            ticks_per_floor: config.ticks_per_floor,
            dwell_ticks:     config.dwell_ticks,
            capacity:        config.capacity,
            max_floor:       config.floors,
            riders:          Vec::with_capacity(config.capacity),
            target:          None,
            arrived_at:      Tick::ZERO,
        }
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn floor(&self) -> FloorId {
        self.floor
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn state(&self) -> ElevatorState {
        self.motion.into()
    }

    pub fn riders(&self) -> &[PassengerId] {
        &self.riders
    }

    pub fn rider_count(&self) -> usize {
        self.riders.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Floor the elevator is heading for, while moving.
    pub fn target(&self) -> Option<FloorId> {
        self.target
    }

    /// `true` when STOPPED with nobody aboard.
    pub fn is_idle(&self) -> bool {
        self.motion == Motion::Stopped && self.riders.is_empty()
    }

    /// Advance this elevator by one tick.
    ///
    /// Delivered passengers are appended to `out.completed`; every transition
    /// is appended to `out.events`.
    pub fn tick(
        &mut self,
        now:        Tick,
        building:   &mut Building,
        passengers: &mut PassengerStore,
        out:        &mut TickOutput,
    ) {
        match self.motion {
            Motion::Stopping { remaining } => self.tick_stopping(remaining, out),
            Motion::Moving { direction, remaining } => {
                self.tick_moving(direction, remaining, now, building, passengers, out)
            }
            Motion::Stopped => self.tick_stopped(now, building, passengers, out),
        }
    }

    fn tick_stopping(&mut self, remaining: u32, out: &mut TickOutput) {
        let remaining = remaining.saturating_sub(1);
        if remaining > 0 {
            self.motion = Motion::Stopping { remaining };
            return;
        }
        self.motion = Motion::Stopped;
        out.events.push(ElevatorEvent::Stopped { elevator: self.id, floor: self.floor });
    }

    fn tick_moving(
        &mut self,
        direction:  Direction,
        remaining:  u32,
        now:        Tick,
        building:   &Building,
        passengers: &PassengerStore,
        out:        &mut TickOutput,
    ) {
        let remaining = remaining.saturating_sub(1);
        if remaining > 0 {
            self.motion = Motion::Moving { direction, remaining };
            return;
        }

        self.floor = match direction {
            Direction::Up => self.floor.up(self.max_floor),
            Direction::Down => self.floor.down(),
        };
        self.arrived_at = now;

        let rider_exits = self.riders.iter().any(|&p| passengers.get(p).destination == self.floor);
        if rider_exits || !building.floor(self.floor).is_empty() {
            self.motion = Motion::Stopping { remaining: self.dwell_ticks };
            self.target = None;
            out.events.push(ElevatorEvent::Stopping { elevator: self.id, floor: self.floor });
            return;
        }

        let at_extreme = match direction {
            Direction::Up => self.floor.0 >= self.max_floor,
            Direction::Down => self.floor == FloorId::LOBBY,
        };
        let direction = if at_extreme {
            let reversed = direction.reversed();
            out.events.push(ElevatorEvent::Reversed {
                elevator:  self.id,
                floor:     self.floor,
                direction: reversed,
            });
            reversed
        } else {
            direction
        };
        self.motion = Motion::Moving { direction, remaining: self.ticks_per_floor };
    }

    fn tick_stopped(
        &mut self,
        now:        Tick,
        building:   &mut Building,
        passengers: &mut PassengerStore,
        out:        &mut TickOutput,
    ) {
        let here = self.floor;

        // Discharge.
        let (leaving, staying): (Vec<PassengerId>, Vec<PassengerId>) =
            self.riders.iter().partition(|&&p| passengers.get(p).destination == here);
        self.riders = staying;
        for passenger in leaving {
            passengers.mark_exited(passenger, self.arrived_at);
            out.completed.push(passenger);
            out.events.push(ElevatorEvent::Exited { elevator: self.id, passenger, floor: here });
        }

        // Board, head of the queue first.
        let queue = building.floor_mut(here);
        while self.riders.len() < self.capacity {
            let Some(passenger) = queue.pop_front() else { break };
            passengers.mark_boarded(passenger, self.id, now);
            self.riders.push(passenger);
            out.events.push(ElevatorEvent::Boarded {
                elevator:    self.id,
                passenger,
                floor:       here,
                destination: passengers.get(passenger).destination,
            });
        }

        // Next target: the longest-aboard rider, else the nearest call.
        let target = match self.riders.first() {
            Some(&first) => Some(passengers.get(first).destination),
            None => building.nearest_waiting(here),
        };
        match target {
            Some(target) if target != here => {
                let direction = if target > here { Direction::Up } else { Direction::Down };
                self.target = Some(target);
                self.motion = Motion::Moving { direction, remaining: self.ticks_per_floor };
                out.events.push(ElevatorEvent::Departed {
                    elevator: self.id,
                    floor: here,
                    target,
                    direction,
                });
            }
            _ => self.target = None,
        }
    }
}
