//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentScoreRow, OutputResult, TickSummaryRow};

/// Sink for rows produced during a run.
///
/// Errors are returned here but swallowed by the observer, which keeps the
/// first one for [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent rows.
    fn write_scores(&mut self, rows: &[AgentScoreRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
