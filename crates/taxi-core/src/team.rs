//! Team tags, agent identity, and place colour state.

use std::fmt;
use std::str::FromStr;

use crate::{TaxiError, TaxiResult};

// ── Team ──────────────────────────────────────────────────────────────────────

/// The two competing taxi companies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    /// Tag `R`.  Always obstructs a visible opponent when off cooldown.
    Rooster,
    /// Tag `D`.  Sometimes cooperates with opponents instead.
    Donkey,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Rooster, Team::Donkey];

    /// One-letter tag used in agent names.
    pub fn tag(self) -> char {
        match self {
            Team::Rooster => 'R',
            Team::Donkey  => 'D',
        }
    }

    /// The other team.
    pub fn opponent(self) -> Team {
        match self {
            Team::Rooster => Team::Donkey,
            Team::Donkey  => Team::Rooster,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Team {
    type Err = TaxiError;

    fn from_str(s: &str) -> TaxiResult<Self> {
        match s {
            "R" => Ok(Team::Rooster),
            "D" => Ok(Team::Donkey),
            other => Err(TaxiError::unknown("team", other)),
        }
    }
}

// ── AgentKey ──────────────────────────────────────────────────────────────────

/// Identity of an agent: `(team, id)`.  Equality and hashing use both parts,
/// so `R0` and `D0` are distinct agents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentKey {
    pub team: Team,
    pub id:   u32,
}

impl AgentKey {
    #[inline]
    pub fn new(team: Team, id: u32) -> Self {
        Self { team, id }
    }

    /// `true` if `other` belongs to the opposing team.
    #[inline]
    pub fn opposes(self, other: AgentKey) -> bool {
        self.team != other.team
    }

    /// `true` if `other` is on the same team but is a different agent.
    #[inline]
    pub fn is_teammate(self, other: AgentKey) -> bool {
        self.team == other.team && self.id != other.id
    }
}

impl fmt::Display for AgentKey {
    /// Formatted name: team tag followed by id, e.g. `R0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.team.tag(), self.id)
    }
}

// ── PlaceState ────────────────────────────────────────────────────────────────

/// Colour state of a place.  Only the four towns carry a colour.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceState {
    Red,
    Green,
    Blue,
    Yellow,
    /// An ordinary street cell (`-`).
    #[default]
    Empty,
}

impl PlaceState {
    pub fn as_char(self) -> char {
        match self {
            PlaceState::Red    => 'R',
            PlaceState::Green  => 'G',
            PlaceState::Blue   => 'B',
            PlaceState::Yellow => 'Y',
            PlaceState::Empty  => '-',
        }
    }

    /// `true` for the four coloured towns.
    #[inline]
    pub fn is_town(self) -> bool {
        !matches!(self, PlaceState::Empty)
    }
}

impl TryFrom<char> for PlaceState {
    type Error = TaxiError;

    fn try_from(c: char) -> TaxiResult<Self> {
        match c {
            'R' => Ok(PlaceState::Red),
            'G' => Ok(PlaceState::Green),
            'B' => Ok(PlaceState::Blue),
            'Y' => Ok(PlaceState::Yellow),
            '-' => Ok(PlaceState::Empty),
            other => Err(TaxiError::InvalidState(other)),
        }
    }
}

impl fmt::Display for PlaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
