//! `taxi-sim`: the world driver for the two-team taxi simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Spawn  : refill clients up to config.max_clients at free towns.
//!   ② Agents : in roster order, for each agent:
//!                 deliver queued messages → Agent::tick → refresh roster
//!                 → queue the outbox by recipient.
//!   ③ Observe: on_tick_end, plus on_snapshot every output_interval_ticks.
//! ```
//!
//! Everything runs on one thread in a fixed order, so a run is fully
//! determined by `config.seed`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use taxi_core::{SimConfig, Team};
//! use taxi_grid::{BfsRouter, Grid};
//! use taxi_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), Grid::standard()?, BfsRouter::new())
//!     .team(Team::Rooster, 2)
//!     .team(Team::Donkey, 2)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{}", sim.render());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod spawner;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use spawner::ClientSpawner;
