//! Plain data row types written by output backends.

use taxi_agent::Agent;
use taxi_core::Tick;
use taxi_grid::Grid;

/// One agent's standing at a snapshot tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentScoreRow {
    pub tick:     u64,
    /// Agent name, e.g. `R0`.
    pub agent:    String,
    pub team:     char,
    /// Mode name as printed by `Mode::as_str`.
    pub mode:     String,
    pub x:        i32,
    pub y:        i32,
    pub score:    i64,
    /// Clients currently riding with the agent.
    pub on_board: usize,
}

impl AgentScoreRow {
    pub fn from_agent(tick: Tick, grid: &Grid, agent: &Agent) -> Self {
        let at = grid.coords(agent.current());
        Self {
            tick:     tick.0,
            agent:    agent.name(),
            team:     agent.key().team.tag(),
            mode:     agent.mode().as_str().to_owned(),
            x:        at.x(),
            y:        at.y(),
            score:    agent.score(),
            on_board: agent.belief().on_board.len(),
        }
    }
}

/// Summary for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub live_clients: u64,
}
