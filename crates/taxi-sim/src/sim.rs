//! The `Sim` struct and its tick loop.

use std::collections::HashMap;
use std::fmt::Write as _;

use taxi_agent::{Agent, Message, RosterEntry, TickContext};
use taxi_core::{AgentId, AgentKey, SimConfig, SimRng, Team, Tick, GRID_SIZE};
use taxi_grid::{Grid, Occupancy, Router};
use tracing::debug;

use crate::{ClientSpawner, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each tick:
///
/// 1. **Spawn**: refill the grid up to `config.max_clients` live clients.
/// 2. **Agents** (sequential, roster order): for each agent,
///    - move its pending messages from the queue into its inbox,
///    - run its decision cycle against the shared occupancy,
///    - refresh its roster entry so later agents see where it went,
///    - queue its outbox by recipient.
///
/// A message sent to an agent later in the roster is read the same tick; one
/// sent to an earlier agent waits for the next tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router> {
    /// Global configuration (total ticks, seed, client cap, …).
    pub config: SimConfig,

    /// Immutable topology.
    pub grid: Grid,

    /// Clients and agents per place.
    pub occupancy: Occupancy,

    /// Agent arena, indexed by `AgentId`.
    pub agents: Vec<Agent>,

    /// Public view of every agent, kept in step with `agents`.
    pub roster: Vec<RosterEntry>,

    pub spawner: ClientSpawner,

    /// Pending messages keyed by recipient `AgentId`.
    ///
    /// Drained into the recipient's inbox right before its next tick.
    pub message_queue: HashMap<AgentId, Vec<Message>>,

    pub(crate) router: R,
    pub(crate) rng:    SimRng,
    pub(crate) tick:   Tick,
}

impl<R: Router> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// The next tick to be processed.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn agent(&self, key: AgentKey) -> Option<&Agent> {
        self.agents.iter().find(|a| a.key() == key)
    }

    /// `(agent, score)` in roster order.
    pub fn scores(&self) -> Vec<(AgentKey, i64)> {
        self.agents.iter().map(|a| (a.key(), a.score())).collect()
    }

    pub fn team_score(&self, team: Team) -> i64 {
        self.agents.iter().filter(|a| a.key().team == team).map(Agent::score).sum()
    }

    /// Plain-text grid: one row per `x`, one cell per `y`.  A cell shows the
    /// place letter, each agent with its mode marker, and `*n` for `n`
    /// clients.
    pub fn render(&self) -> String {
        let size = GRID_SIZE as usize;
        let mut out = String::new();
        for (i, place) in self.grid.place_ids().enumerate() {
            let mut cell = self.grid.state(place).to_string();
            for occupant in self.occupancy.agents(place) {
                let mode = self.agents[occupant.id.index()].mode();
                let _ = write!(cell, " {}{}", occupant.key, mode.marker());
            }
            let clients = self.occupancy.clients(place).len();
            if clients > 0 {
                let _ = write!(cell, " *{clients}");
            }
            let _ = write!(out, "{cell:<14}");
            if i % size == size - 1 {
                out.truncate(out.trim_end().len());
                out.push('\n');
            }
        }
        out
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);
        let live = self.process_tick(now)?;
        observer.on_tick_end(now, live);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.grid, &self.agents);
        }
        self.tick = now.next();
        Ok(())
    }

    /// Returns the live client count at the end of the tick.
    fn process_tick(&mut self, now: Tick) -> SimResult<usize> {
        let spawned = self.spawner.spawn(&self.grid, &mut self.occupancy, &mut self.rng)?;

        for i in 0..self.agents.len() {
            let id = self.agents[i].id();
            if let Some(pending) = self.message_queue.remove(&id) {
                for message in pending {
                    self.agents[i].deliver(message);
                }
            }

            let mut ctx = TickContext::new(
                now,
                &self.grid,
                &mut self.occupancy,
                &mut self.router,
                &mut self.rng,
                &self.roster,
            );
            let outbox = self.agents[i].tick(&mut ctx)?;

            let agent = &self.agents[i];
            let entry = &mut self.roster[i];
            entry.current = agent.current();
            entry.visible.clone_from(&agent.belief().visible);

            for message in outbox {
                self.message_queue.entry(message.recipient_id()).or_default().push(message);
            }
        }

        let live = self.occupancy.live_clients();
        debug!(tick = %now, spawned, live_clients = live, "tick done");
        Ok(live)
    }
}
