//! `taxi-agent`: the belief-desire-intention cycle of a taxi agent.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`belief`]    | `Belief`: perception results and remembered clients         |
//! | [`message`]   | `Message`, `MessageKind`                                     |
//! | [`mode`]      | `Mode`: the five operating modes                            |
//! | [`intention`] | `Intention`, `IntentionKind`, per-mode plans                 |
//! | [`action`]    | `Action`, `ActionResult`, cost constants                     |
//! | [`context`]   | `TickContext<'a>`, `RosterEntry`                             |
//! | [`agent`]     | `Agent` and its per-tick decision cycle                      |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                               |
//!
//! # Design notes
//!
//! Agents never hold references to each other.  Teammates are `AgentId`s,
//! their positions and visible places arrive through the roster in the
//! [`TickContext`], and messages leave through the returned outbox.  The
//! driver owns every agent and runs them one at a time, so each tick sees
//! the occupancy exactly as the previous agent left it.

pub mod action;
pub mod agent;
pub mod belief;
pub mod context;
pub mod error;
pub mod intention;
pub mod message;
pub mod mode;

#[cfg(test)]
mod tests;

pub use action::{Action, ActionResult, BASE_COST, PENALTY_COST, REWARD_COST};
pub use agent::{Agent, DONKEY_COMPETITIVE_MAX, MAX_COMPETITIVE_ROUNDS, MAX_COOLDOWN_ROUNDS};
pub use belief::Belief;
pub use context::{RosterEntry, TickContext};
pub use error::{AgentError, AgentResult};
pub use intention::{plan_for, Intention, IntentionKind};
pub use message::{Message, MessageKind};
pub use mode::Mode;
