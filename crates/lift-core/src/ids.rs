//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`; callers
//! should prefer the `.index()` helpers when indexing into a `Vec`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a passenger in the simulation's passenger arena.
    pub struct PassengerId(u32);
}

typed_id! {
    /// Index of an elevator in the bank.  Elevators tick in ascending order.
    pub struct ElevatorId(u16);
}

typed_id! {
    /// A 1-based floor number.  Floor 1 is the lobby; `FloorId(0)` is never
    /// a valid floor.
    pub struct FloorId(u16);
}

impl FloorId {
    /// The ground floor, where every elevator starts.
    pub const LOBBY: FloorId = FloorId(1);

    /// `true` if this floor exists in a building of `max_floor` floors.
    #[inline]
    pub fn in_building(self, max_floor: u16) -> bool {
        (1..=max_floor).contains(&self.0)
    }

    /// Absolute number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: FloorId) -> u16 {
        self.0.abs_diff(other.0)
    }

    /// One floor up, clamped to `max_floor`.
    #[inline]
    pub fn up(self, max_floor: u16) -> FloorId {
        FloorId(self.0.saturating_add(1).min(max_floor))
    }

    /// One floor down, clamped to the lobby.
    #[inline]
    pub fn down(self) -> FloorId {
        FloorId(self.0.saturating_sub(1).max(1))
    }
}
