//! `taxi-grid`: grid topology, occupancy, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`grid`]      | `Grid` (immutable topology + visibility), `GridBuilder`   |
//! | [`client`]    | `Client`: a passenger waiting at or travelling from a town |
//! | [`occupancy`] | `Occupancy`: mutable per-place client and agent lists    |
//! | [`router`]    | `Router` trait, `Path`, `RouteQuery`, `BfsRouter`         |
//! | [`error`]     | `GridError`, `GridResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod client;
pub mod error;
pub mod grid;
pub mod occupancy;
pub mod router;


pub use client::Client;
pub use error::{GridError, GridResult};
pub use grid::{Grid, GridBuilder, Place};
pub use occupancy::{Occupancy, Occupant};
pub use router::{BfsRouter, Path, RouteQuery, Router};
