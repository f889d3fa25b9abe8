use taxi_agent::AgentError;
use taxi_core::TaxiError;
use taxi_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error(transparent)]
    Core(#[from] TaxiError),
}

pub type SimResult<T> = Result<T, SimError>;
