//! The six primitive actions and their cost model.
//!
//! [`Action::evaluate`] checks feasibility and applies the side effects that
//! belong to the action itself (taking a client, dropping one off).  Moving
//! the agent between places is left to the caller, which owns the agent's
//! occupancy entry.
//!
//! | Action       | Fails when                                   | Cost on success |
//! |--------------|----------------------------------------------|-----------------|
//! | `UP`/`DOWN`  | off grid, opponent at target                 | −1              |
//! | `LEFT`/`RIGHT` | off grid, opponent at target, wall         | −1              |
//! | `EMBARK`     | no available client here (cost −11)          | −1              |
//! | `DISEMBARK`  | not at the passenger's destination (−11)     | +19             |
//!
//! Blocked moves cost nothing.

use std::fmt;
use std::str::FromStr;

use taxi_core::{AgentKey, PlaceId, TaxiError, TaxiResult};
use taxi_grid::{Grid, Occupancy};

use crate::Belief;

pub const BASE_COST: i64 = -1;
pub const PENALTY_COST: i64 = -10;
pub const REWARD_COST: i64 = 20;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Embark,
    Disembark,
}

/// Outcome of one action.  `next` is where the agent stands afterwards.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ActionResult {
    pub succeeded:  bool,
    pub total_cost: i64,
    pub next:       PlaceId,
}

impl ActionResult {
    fn ok(total_cost: i64, next: PlaceId) -> Self {
        Self { succeeded: true, total_cost, next }
    }

    fn failed(total_cost: i64, at: PlaceId) -> Self {
        Self { succeeded: false, total_cost, next: at }
    }
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Embark,
        Action::Disembark,
    ];

    /// The four movement actions in their canonical order.
    pub const BASIC: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Up        => "UP",
            Action::Down      => "DOWN",
            Action::Left      => "LEFT",
            Action::Right     => "RIGHT",
            Action::Embark    => "EMBARK",
            Action::Disembark => "DISEMBARK",
        }
    }

    /// Coordinate delta for movement actions.  `x` is the row.
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            Action::Up    => Some((-1, 0)),
            Action::Down  => Some((1, 0)),
            Action::Left  => Some((0, -1)),
            Action::Right => Some((0, 1)),
            Action::Embark | Action::Disembark => None,
        }
    }

    /// The movement that takes an agent from `from` to `to`, if they are one
    /// orthogonal step apart.
    pub fn between(grid: &Grid, from: PlaceId, to: PlaceId) -> Option<Action> {
        let (a, b) = (grid.coords(from), grid.coords(to));
        match (a.x() - b.x(), a.y() - b.y()) {
            (1, 0)  => Some(Action::Up),
            (-1, 0) => Some(Action::Down),
            (0, 1)  => Some(Action::Left),
            (0, -1) => Some(Action::Right),
            _ => None,
        }
    }

    /// Check and apply this action for agent `me` standing at
    /// `belief.current`.
    ///
    /// Only `LEFT` and `RIGHT` consult the wall set.  Every wall pair of the
    /// standard world separates horizontally adjacent places, so vertical moves
    /// never need it; a custom grid with vertical walls will let `UP`/`DOWN`
    /// pass through them.
    pub fn evaluate(
        self,
        grid: &Grid,
        occupancy: &mut Occupancy,
        me: AgentKey,
        belief: &mut Belief,
    ) -> ActionResult {
        let here = belief.current;
        match self {
            Action::Up | Action::Down | Action::Left | Action::Right => {
                let Some((dx, dy)) = self.delta() else {
                    return ActionResult::failed(0, here);
                };
                let Some(target) = grid.neighbor(here, dx, dy) else {
                    return ActionResult::failed(0, here);
                };
                if occupancy.has_opposing_agent(target, me) {
                    return ActionResult::failed(0, here);
                }
                if matches!(self, Action::Left | Action::Right) && grid.is_walled(here, target) {
                    return ActionResult::failed(0, here);
                }
                ActionResult::ok(BASE_COST, target)
            }
            // The passenger stays in the place's client list, marked taken; moves carry it along.
            Action::Embark => match occupancy.take_first_available(here) {
                Some(client) => {
                    belief.on_board.push(client);
                    ActionResult::ok(BASE_COST, here)
                }
                None => ActionResult::failed(BASE_COST + PENALTY_COST, here),
            },
            Action::Disembark => match belief.on_board.first().copied() {
                Some(client) if client.destination == here => {
                    occupancy.remove_client(here, client.id);
                    belief.on_board.remove(0);
                    ActionResult::ok(BASE_COST + REWARD_COST, here)
                }
                _ => ActionResult::failed(BASE_COST + PENALTY_COST, here),
            },
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = TaxiError;

    fn from_str(s: &str) -> TaxiResult<Self> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| TaxiError::unknown("action", s))
    }
}
