//! Fluent builder for constructing a [`Sim`].

use std::collections::HashMap;

use taxi_agent::{Agent, RosterEntry};
use taxi_core::{AgentId, AgentKey, ClientId, Coords, PlaceId, SimConfig, SimRng, Team, Tick};
use taxi_grid::{Client, Grid, Occupancy, Router};
use tracing::info;

use crate::{ClientSpawner, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, client cap, snapshot interval
/// - [`Grid`]: usually [`Grid::standard`]
/// - `R: Router`: the path search (e.g. [`taxi_grid::BfsRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                            |
/// |--------------------------|------------------------------------|
/// | `.team(t, n)`            | No agents                          |
/// | `.initial_positions(v)`  | Random empty places                |
/// | `.client(at, to)`        | No clients before the first spawn  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, Grid::standard()?, BfsRouter::new())
///     .team(Team::Rooster, 2)
///     .team(Team::Donkey, 2)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: Router> {
    config:    SimConfig,
    grid:      Grid,
    router:    R,
    teams:     Vec<(Team, u32)>,
    positions: Option<Vec<Coords>>,
    clients:   Vec<(Coords, Coords)>,
}

impl<R: Router> SimBuilder<R> {
    pub fn new(config: SimConfig, grid: Grid, router: R) -> Self {
        Self {
            config,
            grid,
            router,
            teams:     Vec::new(),
            positions: None,
            clients:   Vec::new(),
        }
    }

    /// Add `count` agents of `team`.  Within a team ids run from 0; across
    /// calls, agents are ticked in the order they were added.
    pub fn team(mut self, team: Team, count: u32) -> Self {
        match self.teams.iter_mut().find(|(t, _)| *t == team) {
            Some((_, n)) => *n += count,
            None => self.teams.push((team, count)),
        }
        self
    }

    /// Starting place for each agent in roster order.  Must match the total
    /// agent count.  Several agents may start on the same place.
    pub fn initial_positions(mut self, positions: Vec<Coords>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Place a waiting client before the first tick.
    pub fn client(mut self, at: Coords, destination: Coords) -> Self {
        self.clients.push((at, destination));
        self
    }

    /// Validate inputs, place agents and clients, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<R>> {
        let keys: Vec<AgentKey> = self
            .teams
            .iter()
            .flat_map(|&(team, n)| (0..n).map(move |id| AgentKey::new(team, id)))
            .collect();
        let agent_count = keys.len();

        if agent_count > self.grid.len() {
            return Err(SimError::Config(format!(
                "{agent_count} agents do not fit on {} places",
                self.grid.len()
            )));
        }

        let mut rng = SimRng::new(self.config.seed);
        let mut occupancy = Occupancy::new(self.grid.len());

        // ── Clients ───────────────────────────────────────────────────────
        for (i, &(at, to)) in self.clients.iter().enumerate() {
            let id = ClientId::try_from(i)
                .map_err(|_| SimError::Config(format!("too many initial clients ({i})")))?;
            occupancy.add_client(at.place_id(), Client::new(id, to.place_id()))?;
        }

        // ── Agent placement ───────────────────────────────────────────────
        let starts: Vec<PlaceId> = match self.positions {
            Some(p) => {
                if p.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                p.into_iter().map(Coords::place_id).collect()
            }
            None => Vec::with_capacity(agent_count),
        };

        let mut agents = Vec::with_capacity(agent_count);
        for (i, &key) in keys.iter().enumerate() {
            let id = AgentId::try_from(i)
                .map_err(|_| SimError::Config(format!("too many agents ({i})")))?;
            let start = match starts.get(i) {
                Some(&p) => p,
                None => random_empty_place(&self.grid, &occupancy, &mut rng),
            };
            let agent = Agent::new(id, key, start, &self.grid);
            occupancy.add_agent(start, agent.occupant());
            info!(agent = %key, at = %self.grid.coords(start), "placed agent");
            agents.push(agent);
        }

        for agent in &mut agents {
            let me = agent.key();
            let mates = keys
                .iter()
                .enumerate()
                .filter(|&(_, &k)| me.is_teammate(k))
                .map(|(i, _)| AgentId(i as u32))
                .collect();
            agent.set_teammates(mates);
        }

        let roster = agents
            .iter()
            .map(|a| RosterEntry {
                id:      a.id(),
                key:     a.key(),
                current: a.current(),
                visible: a.belief().visible.clone(),
            })
            .collect();

        Ok(Sim {
            spawner:       ClientSpawner::new(self.config.max_clients),
            config:        self.config,
            grid:          self.grid,
            occupancy,
            agents,
            roster,
            message_queue: HashMap::new(),
            router:        self.router,
            rng,
            tick:          Tick::ZERO,
        })
    }
}

/// Draw place indices until one without agents turns up.  The caller
/// guarantees there are fewer agents than places.
fn random_empty_place(grid: &Grid, occupancy: &Occupancy, rng: &mut SimRng) -> PlaceId {
    loop {
        let place = PlaceId(rng.gen_range(0..grid.len() as u8));
        if !occupancy.has_agents(place) {
            return place;
        }
    }
}
