//! `gt-output` — frame trace writers for the rust_gt core.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `agent_frames.csv`, `plan_passes.csv`  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `gt_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gt_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { log::error!("output error: {e}"); }
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
pub use row::{AgentFrameRow, PlanPassRow};
pub use writer::OutputWriter;
