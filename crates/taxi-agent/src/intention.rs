//! Intentions and the per-mode plans built from them.

use std::fmt;
use std::str::FromStr;

use taxi_core::{PlaceId, TaxiError, TaxiResult};

use crate::Mode;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntentionKind {
    /// The single top-level desire every agent carries.
    GetHighestScore,
    /// Take the first basic move that succeeds.
    FindClient,
    /// Search a path to the goal.
    CalculatePath,
    /// Turn the head of the path (or the current situation) into an action.
    CalculateNextAction,
    /// Run every queued action.
    ExecuteNextAction,
}

impl IntentionKind {
    pub const ALL: [IntentionKind; 5] = [
        IntentionKind::GetHighestScore,
        IntentionKind::FindClient,
        IntentionKind::CalculatePath,
        IntentionKind::CalculateNextAction,
        IntentionKind::ExecuteNextAction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IntentionKind::GetHighestScore     => "GET_HIGHEST_SCORE",
            IntentionKind::FindClient          => "FIND_CLIENT",
            IntentionKind::CalculatePath       => "CALCULATE_PATH",
            IntentionKind::CalculateNextAction => "CALCULATE_NEXT_ACTION",
            IntentionKind::ExecuteNextAction   => "EXECUTE_NEXT_ACTION",
        }
    }
}

impl fmt::Display for IntentionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentionKind {
    type Err = TaxiError;

    fn from_str(s: &str) -> TaxiResult<Self> {
        IntentionKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| TaxiError::unknown("intention", s))
    }
}

/// An intention with its optional short-term goal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intention {
    pub kind: IntentionKind,
    pub goal: Option<PlaceId>,
}

impl Intention {
    pub fn new(kind: IntentionKind, goal: Option<PlaceId>) -> Self {
        Self { kind, goal }
    }

    /// `GET_HIGHEST_SCORE` with no goal.
    pub fn desire() -> Self {
        Self::new(IntentionKind::GetHighestScore, None)
    }
}

/// Ordered intentions for `mode` aimed at `goal`.
///
/// Roaming (and the roam that follows cooperation) ignores the goal.
pub fn plan_for(mode: Mode, goal: Option<PlaceId>) -> Vec<Intention> {
    match mode {
        Mode::Roam | Mode::OpponentCooperative => {
            vec![Intention::new(IntentionKind::FindClient, None)]
        }
        Mode::KnowsClientLocation | Mode::Transfering | Mode::Competitive => vec![
            Intention::new(IntentionKind::CalculatePath, goal),
            Intention::new(IntentionKind::CalculateNextAction, goal),
            Intention::new(IntentionKind::ExecuteNextAction, goal),
        ],
    }
}
