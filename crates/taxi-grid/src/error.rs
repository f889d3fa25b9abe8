//! Grid-subsystem error type.

use thiserror::Error;

use taxi_core::{ClientId, Coords, TaxiError};

/// Errors produced by `taxi-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("a place cannot be walled off from itself: {0}")]
    SelfWall(Coords),

    #[error("client {0} is already on the grid")]
    DuplicateClient(ClientId),

    #[error(transparent)]
    Core(#[from] TaxiError),
}

pub type GridResult<T> = Result<T, GridError>;
