//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_frames.csv`
//! - `plan_passes.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentFrameRow, OutputResult, PlanPassRow};

/// Writes frame traces to two CSV files.
pub struct CsvWriter {
    frames:   Writer<File>,
    passes:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join("agent_frames.csv"))?;
        frames.write_record([
            "frame", "agent_id", "team", "x", "z", "yaw", "moving", "dest_col", "dest_row",
        ])?;

        let mut passes = Writer::from_path(dir.join("plan_passes.csv"))?;
        passes.write_record(["frame", "assigned", "moving", "relocated", "degraded"])?;

        Ok(Self { frames, passes, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_agent_frames(&mut self, rows: &[AgentFrameRow]) -> OutputResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.frame.to_string(),
                row.agent_id.to_string(),
                row.team.to_string(),
                format!("{:.4}", row.x),
                format!("{:.4}", row.z),
                format!("{:.4}", row.yaw),
                (row.moving as u8).to_string(),
                row.dest_col.to_string(),
                row.dest_row.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_plan_pass(&mut self, row: &PlanPassRow) -> OutputResult<()> {
        self.passes.write_record(&[
            row.frame.to_string(),
            row.assigned.to_string(),
            row.moving.to_string(),
            row.relocated.to_string(),
            row.degraded.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.passes.flush()?;
        Ok(())
    }
}
