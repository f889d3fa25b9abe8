//! Mutable per-place occupancy.
//!
//! [`Occupancy`] stores, for every place, the clients and agents currently
//! located there.  It is the only grid-level state that changes during a run.
//! Agents mutate it through their actions and the spawner adds clients to it;
//! everything runs on one thread, so plain `&mut` access is enough.
//!
//! Per-place lists preserve insertion order.  Perception and embark both
//! depend on "first" semantics, so the order is observable.

use taxi_core::{AgentId, AgentKey, ClientId, PlaceId};

use crate::{Client, GridError, GridResult};

/// An agent as seen from a place: its arena index and its identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    pub id:  AgentId,
    pub key: AgentKey,
}

/// Clients and agents per place, indexed by `PlaceId`.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    clients: Vec<Vec<Client>>,
    agents:  Vec<Vec<Occupant>>,
}

impl Occupancy {
    /// Empty occupancy for a grid of `place_count` places.
    pub fn new(place_count: usize) -> Self {
        Self {
            clients: vec![Vec::new(); place_count],
            agents:  vec![Vec::new(); place_count],
        }
    }

    // ── Clients ───────────────────────────────────────────────────────────

    #[inline]
    pub fn clients(&self, place: PlaceId) -> &[Client] {
        &self.clients[place.index()]
    }

    /// Place a client.
    ///
    /// # Errors
    /// [`GridError::DuplicateClient`] if a client with the same id is already
    /// anywhere on the grid.
    pub fn add_client(&mut self, place: PlaceId, client: Client) -> GridResult<()> {
        if self.client_id_in_use(client.id) {
            return Err(GridError::DuplicateClient(client.id));
        }
        self.clients[place.index()].push(client);
        Ok(())
    }

    /// Remove a client from `place`.  Returns it if it was there.
    pub fn remove_client(&mut self, place: PlaceId, id: ClientId) -> Option<Client> {
        let list = &mut self.clients[place.index()];
        let pos = list.iter().position(|c| c.id == id)?;
        Some(list.remove(pos))
    }

    /// Move a client between places, keeping its `taken` flag.  Returns
    /// `false` if it was not at `from`.
    pub fn move_client(&mut self, from: PlaceId, to: PlaceId, id: ClientId) -> bool {
        match self.remove_client(from, id) {
            Some(c) => {
                self.clients[to.index()].push(c);
                true
            }
            None => false,
        }
    }

    /// First client at `place` that has not been taken.
    pub fn first_available_client(&self, place: PlaceId) -> Option<&Client> {
        self.clients[place.index()].iter().find(|c| c.is_available())
    }

    #[inline]
    pub fn has_available_client(&self, place: PlaceId) -> bool {
        self.first_available_client(place).is_some()
    }

    /// Mark the first available client at `place` as taken and return a copy.
    /// The client stays in the place's list.
    pub fn take_first_available(&mut self, place: PlaceId) -> Option<Client> {
        let client = self.clients[place.index()].iter_mut().find(|c| c.is_available())?;
        client.taken = true;
        Some(*client)
    }

    /// Every client on the grid, taken or not.
    pub fn live_clients(&self) -> usize {
        self.clients.iter().map(Vec::len).sum()
    }

    pub fn client_id_in_use(&self, id: ClientId) -> bool {
        self.clients.iter().flatten().any(|c| c.id == id)
    }

    // ── Agents ────────────────────────────────────────────────────────────

    #[inline]
    pub fn agents(&self, place: PlaceId) -> &[Occupant] {
        &self.agents[place.index()]
    }

    pub fn add_agent(&mut self, place: PlaceId, occupant: Occupant) {
        self.agents[place.index()].push(occupant);
    }

    /// Remove an agent from `place`.  Returns `false` if it was not there.
    pub fn remove_agent(&mut self, place: PlaceId, id: AgentId) -> bool {
        let list = &mut self.agents[place.index()];
        match list.iter().position(|o| o.id == id) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn has_agents(&self, place: PlaceId) -> bool {
        !self.agents[place.index()].is_empty()
    }

    /// `true` if `place` holds an agent of the team opposing `me`.
    pub fn has_opposing_agent(&self, place: PlaceId, me: AgentKey) -> bool {
        self.agents[place.index()].iter().any(|o| me.opposes(o.key))
    }

    /// `true` if `place` holds a teammate of `me` (not `me` itself).
    pub fn has_teammate(&self, place: PlaceId, me: AgentKey) -> bool {
        self.agents[place.index()].iter().any(|o| me.is_teammate(o.key))
    }

    /// Place where agent `id` currently stands.
    pub fn locate_agent(&self, id: AgentId) -> Option<PlaceId> {
        self.agents
            .iter()
            .position(|list| list.iter().any(|o| o.id == id))
            .map(|i| PlaceId(i as u8))
    }

    /// Number of places whose agent list contains `id`.
    pub fn agent_count(&self, id: AgentId) -> usize {
        self.agents.iter().filter(|list| list.iter().any(|o| o.id == id)).count()
    }
}
