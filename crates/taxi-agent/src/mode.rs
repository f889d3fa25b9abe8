//! Agent operating modes.

use std::fmt;
use std::str::FromStr;

use taxi_core::{TaxiError, TaxiResult};

/// The five modes an agent switches between.  Exactly one is active per tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Wander in a random direction.
    #[default]
    Roam,
    /// Head for the nearest remembered client and pick it up.
    KnowsClientLocation,
    /// Carry the on-board client to its destination.  Locks the arbiter.
    Transfering,
    /// Move onto a place next to a visible opponent.
    Competitive,
    /// Tell visible opponents where clients are, then roam.
    OpponentCooperative,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Roam,
        Mode::KnowsClientLocation,
        Mode::Transfering,
        Mode::Competitive,
        Mode::OpponentCooperative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Roam                => "ROAM",
            Mode::KnowsClientLocation => "KNOWS_CLIENT_LOCATION",
            Mode::Transfering         => "TRANSFERING",
            Mode::Competitive         => "COMPETITIVE",
            Mode::OpponentCooperative => "OPPONENT_COOPERATIVE",
        }
    }

    /// Suffix a text renderer prints after the agent name.
    pub fn marker(self) -> &'static str {
        match self {
            Mode::Roam                => ";",
            Mode::KnowsClientLocation => "!",
            Mode::Transfering         => "",
            Mode::Competitive         => "-",
            Mode::OpponentCooperative => "+",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TaxiError;

    fn from_str(s: &str) -> TaxiResult<Self> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| TaxiError::unknown("mode", s))
    }
}
