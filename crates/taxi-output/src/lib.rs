//! `taxi-output`: CSV writers for taxi-sim runs.
//!
//! Two files are created in the output directory:
//!
//! | File                 | One row per                          |
//! |----------------------|--------------------------------------|
//! | `agent_scores.csv`   | agent, every snapshot tick           |
//! | `tick_summaries.csv` | tick                                 |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `taxi_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use taxi_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentScoreRow, TickSummaryRow};
pub use writer::OutputWriter;
