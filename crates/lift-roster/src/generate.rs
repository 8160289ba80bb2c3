//! Seeded synthetic arrival rosters.
//!
//! Used by the demo binary when no CSV is supplied, and by load tests.  A
//! roster is a pure function of its parameters and the RNG seed.

use lift_core::{FloorId, SimRng, Tick};

use crate::ArrivalRecord;

/// Parameters for a synthetic roster.
#[derive(Clone, Debug)]
pub struct SyntheticRoster {
    /// Number of passenger requests to generate.
    pub passengers: usize,

    /// Start times are drawn uniformly from `0..horizon_ticks`.
    pub horizon_ticks: u64,

    /// Building height.  Floors are drawn from `1..=floors`.
    pub floors: u16,

    /// Probability that a request starts at the lobby; the same probability
    /// applies to a non-lobby request ending at the lobby.
    pub lobby_share: f64,
}

impl Default for SyntheticRoster {
    fn default() -> Self {
        Self {
            passengers:    500,
            horizon_ticks: 3_600,
            floors:        100,
            lobby_share:   0.3,
        }
    }
}

impl SyntheticRoster {
    /// Generate the roster, sorted by start tick (stable for equal ticks).
    ///
    /// Origin and destination always differ, except in a one-floor building
    /// where every request is a same-floor request.
    pub fn generate(&self, rng: &mut SimRng) -> Vec<ArrivalRecord> {
        let horizon = self.horizon_ticks.max(1);
        let mut records: Vec<ArrivalRecord> = (0..self.passengers)
            .map(|_| {
                let start = Tick(rng.gen_range(0..horizon));
                let (origin, destination) = self.pick_floors(rng);
                ArrivalRecord::new(start, origin, destination)
            })
            .collect();
        records.sort_by_key(|r| r.start);
        records
    }

    fn pick_floors(&self, rng: &mut SimRng) -> (FloorId, FloorId) {
        if self.floors < 2 {
            return (FloorId::LOBBY, FloorId::LOBBY);
        }
        if rng.gen_bool(self.lobby_share) {
            let dest = self.other_floor(FloorId::LOBBY, rng);
            return (FloorId::LOBBY, dest);
        }
        let origin = FloorId(rng.gen_range(1..=self.floors));
        if origin != FloorId::LOBBY && rng.gen_bool(self.lobby_share) {
            return (origin, FloorId::LOBBY);
        }
        (origin, self.other_floor(origin, rng))
    }

    /// A uniformly chosen floor different from `not`.
    fn other_floor(&self, not: FloorId, rng: &mut SimRng) -> FloorId {
        let n = rng.gen_range(1..self.floors);
        if n >= not.0 { FloorId(n + 1) } else { FloorId(n) }
    }
}
