//! Client spawning.
//!
//! At the start of every tick the world is refilled up to `max_clients` live
//! clients.  Each new client gets a random id not currently in use and appears
//! at a random town with no agent on it, bound for a random town.

use taxi_core::{ClientId, SimRng};
use taxi_grid::{Client, Grid, GridResult, Occupancy};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct ClientSpawner {
    max_clients: usize,
}

impl ClientSpawner {
    pub fn new(max_clients: usize) -> Self {
        Self { max_clients }
    }

    pub fn max_clients(&self) -> usize {
        self.max_clients
    }

    /// Refill the grid.  Returns the number of clients added.  Stops early if
    /// every town holds an agent.
    pub fn spawn(&self, grid: &Grid, occupancy: &mut Occupancy, rng: &mut SimRng) -> GridResult<usize> {
        let towns = grid.towns();
        if towns.is_empty() {
            return Ok(0);
        }

        let mut spawned = 0;
        let mut order: Vec<usize> = (0..towns.len()).collect();
        while occupancy.live_clients() < self.max_clients {
            let id = self.fresh_id(occupancy, rng);

            rng.shuffle(&mut order);
            let Some(home) = order.iter().map(|&i| towns[i]).find(|&t| !occupancy.has_agents(t)) else {
                break;
            };
            let destination = towns[rng.gen_range(0..towns.len())];

            occupancy.add_client(home, Client::new(id, destination))?;
            debug!(
                client = id.0,
                at = %grid.coords(home),
                destination = %grid.coords(destination),
                "spawned client"
            );
            spawned += 1;
        }
        Ok(spawned)
    }

    /// A random id in `0..max_clients` that no live client uses.  Only called
    /// while fewer than `max_clients` clients are live, so one always exists.
    fn fresh_id(&self, occupancy: &Occupancy, rng: &mut SimRng) -> ClientId {
        let bound = self.max_clients as u32;
        loop {
            let id = ClientId(rng.gen_range(0..bound));
            if !occupancy.client_id_in_use(id) {
                return id;
            }
        }
    }
}
