//! Framework error type.
//!
//! Everything here is a programming error: a coordinate outside the grid, a
//! name that does not belong to one of the closed vocabularies (modes,
//! actions, intentions, message types, teams), or an invalid town colour.
//! Runtime conditions such as "no client here" never reach this type.

use thiserror::Error;

/// The top-level error type for `taxi-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxiError {
    #[error("coordinates ({x}, {y}) lie outside the 5x5 grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("invalid value for {what}: {name}")]
    UnknownName { what: &'static str, name: String },

    #[error("invalid value for place state: {0:?}")]
    InvalidState(char),
}

impl TaxiError {
    /// Shorthand used by the `FromStr` impls of the closed vocabularies.
    pub fn unknown(what: &'static str, name: &str) -> Self {
        TaxiError::UnknownName { what, name: name.to_owned() }
    }
}

/// Shorthand result type for all `taxi-*` crates.
pub type TaxiResult<T> = Result<T, TaxiError>;
