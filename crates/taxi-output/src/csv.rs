//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_scores.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{AgentScoreRow, OutputResult, TickSummaryRow};

pub const SCORES_FILE: &str = "agent_scores.csv";
pub const SUMMARIES_FILE: &str = "tick_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    scores:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, then open both CSV files and write the
    /// header rows.  Existing files are truncated.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut scores = Writer::from_path(dir.join(SCORES_FILE))?;
        scores.write_record(["tick", "agent", "team", "mode", "x", "y", "score", "on_board"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record(["tick", "live_clients"])?;

        debug!(dir = %dir.display(), "opened csv output");
        Ok(Self {
            scores,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_scores(&mut self, rows: &[AgentScoreRow]) -> OutputResult<()> {
        for row in rows {
            self.scores.write_record(&[
                row.tick.to_string(),
                row.agent.clone(),
                row.team.to_string(),
                row.mode.clone(),
                row.x.to_string(),
                row.y.to_string(),
                row.score.to_string(),
                row.on_board.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries
            .write_record(&[row.tick.to_string(), row.live_clients.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.scores.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
