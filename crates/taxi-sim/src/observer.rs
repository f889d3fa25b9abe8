//! Simulation observer trait for progress reporting and data collection.

use taxi_agent::Agent;
use taxi_core::Tick;
use taxi_grid::Grid;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: score printer
///
/// ```rust,ignore
/// struct ScorePrinter;
///
/// impl SimObserver for ScorePrinter {
///     fn on_snapshot(&mut self, tick: Tick, _grid: &Grid, agents: &[Agent]) {
///         for a in agents {
///             println!("{tick} {}: {}", a.name(), a.score());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before clients are spawned.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every agent has run.  `live_clients` counts clients on
    /// the grid, on board or waiting.
    fn on_tick_end(&mut self, _tick: Tick, _live_clients: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Agents are in roster order.
    fn on_snapshot(&mut self, _tick: Tick, _grid: &Grid, _agents: &[Agent]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
