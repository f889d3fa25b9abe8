use thiserror::Error;

use taxi_core::{AgentKey, Coords};

/// Internal consistency violations in the decision cycle.
///
/// Ordinary outcomes (blocked move, no client, unreachable goal) are not
/// errors; they show up as `false` plan results and action costs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("path step {from} -> {to} is not a single move")]
    InvalidStep { from: Coords, to: Coords },

    #[error("agent {0} is transferring with nobody on board")]
    NoPassenger(AgentKey),
}

pub type AgentResult<T> = Result<T, AgentError>;
