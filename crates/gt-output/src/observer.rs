//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use gt_agent::AgentStore;
use gt_core::{Cell, Frame};
use gt_mobility::MobilityStore;
use gt_planner::PlanReport;
use gt_sim::SimObserver;

use crate::row::{AgentFrameRow, PlanPassRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes unit snapshots and planning summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
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
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_plan(&mut self, frame: Frame, report: &PlanReport) {
        let row = PlanPassRow {
            frame:     frame.0,
            assigned:  report.len() as u64,
            moving:    report.moving_count() as u64,
            relocated: report.relocated.len() as u64,
            degraded:  report.degraded_count() as u64,
        };
        let result = self.writer.write_plan_pass(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Frame, agents: &AgentStore, mobility: &MobilityStore) {
        let rows: Vec<AgentFrameRow> = agents
            .live_ids()
            .map(|a| {
                let i    = a.index();
                let pos  = agents.position[i];
                let dest = mobility.committed_dest(a).unwrap_or(Cell::NONE);
                AgentFrameRow {
                    frame:    frame.0,
                    agent_id: a.0,
                    team:     agents.team[i].0,
                    x:        pos.x,
                    z:        pos.z,
                    yaw:      agents.yaw[i],
                    moving:   mobility.is_moving(a),
                    dest_col: dest.col,
                    dest_row: dest.row,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_agent_frames(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_frame: Frame) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
