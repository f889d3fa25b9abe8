//! What one agent knows about the world.

use taxi_core::{AgentKey, PlaceId};
use taxi_grid::{Client, Occupancy};

/// Per-agent observed state.
///
/// `visible` is recomputed at the end of every tick.  `opponents` and
/// `teammates` are rebuilt during perception.  `client_locations` persists
/// across ticks and is pruned lazily when a remembered place is seen empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Belief {
    pub current:          PlaceId,
    pub visible:          Vec<PlaceId>,
    /// Places believed to hold an available client, in first-seen order.
    pub client_locations: Vec<PlaceId>,
    /// Visible places holding an opponent, one entry per opponent.
    pub opponents:        Vec<PlaceId>,
    pub teammates:        Vec<PlaceId>,
    pub on_board:         Vec<Client>,
}

impl Belief {
    pub fn new(current: PlaceId, visible: Vec<PlaceId>) -> Self {
        Self {
            current,
            visible,
            client_locations: Vec::new(),
            opponents:        Vec::new(),
            teammates:        Vec::new(),
            on_board:         Vec::new(),
        }
    }

    #[inline]
    pub fn knows_client_location(&self) -> bool {
        !self.client_locations.is_empty()
    }

    #[inline]
    pub fn opponent_visible(&self) -> bool {
        !self.opponents.is_empty()
    }

    /// Add a client location unless it is already remembered.
    pub fn remember_client_location(&mut self, place: PlaceId) {
        if !self.client_locations.contains(&place) {
            self.client_locations.push(place);
        }
    }

    /// Visible places other than the current one.
    pub fn surroundings(&self) -> impl Iterator<Item = PlaceId> + '_ {
        self.visible.iter().copied().filter(move |&p| p != self.current)
    }

    /// Refresh opponents and remembered clients from the visible places.
    /// Teammate positions come from the caller, who knows where they stand.
    pub fn observe(
        &mut self,
        me: AgentKey,
        occupancy: &Occupancy,
        teammate_places: impl IntoIterator<Item = PlaceId>,
    ) {
        self.opponents.clear();
        self.teammates.clear();

        let with_clients: Vec<PlaceId> = self
            .visible
            .iter()
            .copied()
            .filter(|&p| occupancy.has_available_client(p))
            .collect();
        for place in with_clients {
            self.remember_client_location(place);
        }
        for &place in &self.visible {
            let opposing = occupancy.agents(place).iter().filter(|o| me.opposes(o.key)).count();
            self.opponents.extend(std::iter::repeat_n(place, opposing));
        }
        self.teammates.extend(teammate_places);
    }

    /// Forget remembered places that are visible and hold no available client.
    pub fn prune_stale(&mut self, occupancy: &Occupancy) {
        let visible = &self.visible;
        self.client_locations
            .retain(|&p| !visible.contains(&p) || occupancy.has_available_client(p));
    }
}
