//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use taxi_agent::Agent;
use taxi_core::Tick;
use taxi_grid::Grid;
use taxi_sim::SimObserver;
use tracing::warn;

use crate::row::{AgentScoreRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent scores and tick summaries to any
/// [`OutputWriter`].
///
/// `SimObserver` methods have no return value, so write errors are stored.
/// After `sim.run()` returns, check with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, or `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, live_clients: usize) {
        let row = TickSummaryRow {
            tick:         tick.0,
            live_clients: live_clients as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, grid: &Grid, agents: &[Agent]) {
        if agents.is_empty() {
            return;
        }
        let rows: Vec<AgentScoreRow> = agents
            .iter()
            .map(|a| AgentScoreRow::from_agent(tick, grid, a))
            .collect();
        let result = self.writer.write_scores(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
