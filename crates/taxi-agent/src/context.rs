//! World state lent to an agent for the duration of its tick.

use taxi_core::{AgentId, AgentKey, PlaceId, SimRng, Tick};
use taxi_grid::{Grid, Occupancy, Occupant, Router};

/// What every agent may know about every other agent: identity, position,
/// and visible places.  The driver refreshes an entry after that agent's
/// tick, so later agents see earlier agents' moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub id:      AgentId,
    pub key:     AgentKey,
    pub current: PlaceId,
    pub visible: Vec<PlaceId>,
}

impl RosterEntry {
    #[inline]
    pub fn occupant(&self) -> Occupant {
        Occupant { id: self.id, key: self.key }
    }
}

/// Mutable borrows for one agent tick.
///
/// Built by the driver once per agent per tick.  The grid is shared; the
/// occupancy, router scratch, and RNG are handed over exclusively.
pub struct TickContext<'a> {
    pub tick:      Tick,
    pub grid:      &'a Grid,
    pub occupancy: &'a mut Occupancy,
    pub router:    &'a mut dyn Router,
    pub rng:       &'a mut SimRng,
    /// Indexed by `AgentId`.
    pub roster:    &'a [RosterEntry],
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(
        tick:      Tick,
        grid:      &'a Grid,
        occupancy: &'a mut Occupancy,
        router:    &'a mut dyn Router,
        rng:       &'a mut SimRng,
        roster:    &'a [RosterEntry],
    ) -> Self {
        Self { tick, grid, occupancy, router, rng, roster }
    }

    /// Roster entry for `id`, if it exists.
    #[inline]
    pub fn entry(&self, id: AgentId) -> Option<&RosterEntry> {
        self.roster.get(id.index())
    }
}
