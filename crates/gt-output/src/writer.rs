//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentFrameRow, OutputResult, PlanPassRow};

/// Sink for frame traces.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of per-unit rows for one snapshot frame.
    fn write_agent_frames(&mut self, rows: &[AgentFrameRow]) -> OutputResult<()>;

    /// Write one planning-pass summary row.
    fn write_plan_pass(&mut self, row: &PlanPassRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
