//! `taxi-core`: foundational types for the two-team taxi world.
//!
//! This crate is a dependency of every other `taxi-*` crate.  It has no
//! `taxi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `PlaceId`, `ClientId`                      |
//! | [`coords`]      | `Coords`, grid bounds, distance helpers               |
//! | [`team`]        | `Team`, `AgentKey`, `PlaceState`                      |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`rng`]         | `SimRng` (the single shared random source)            |
//! | [`error`]       | `TaxiError`, `TaxiResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod coords;
pub mod error;
pub mod ids;
pub mod rng;
pub mod team;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coords::{Coords, GRID_SIZE};
pub use error::{TaxiError, TaxiResult};
pub use ids::{AgentId, ClientId, PlaceId};
pub use rng::SimRng;
pub use team::{AgentKey, PlaceState, Team};
pub use time::{SimConfig, Tick, MAX_CLIENTS};
