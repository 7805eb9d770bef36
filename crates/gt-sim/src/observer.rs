//! Simulation observer trait for progress reporting and data collection.

use gt_agent::AgentStore;
use gt_core::Frame;
use gt_mobility::{Arrival, MobilityStore};
use gt_planner::PlanReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: degraded-hold counter
///
/// ```rust,ignore
/// struct Degraded(usize);
///
/// impl SimObserver for Degraded {
///     fn on_plan(&mut self, _frame: Frame, report: &PlanReport) {
///         self.0 += report.degraded_count();
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before any processing.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called after every planning pass the loop runs.
    fn on_plan(&mut self, _frame: Frame, _report: &PlanReport) {}

    /// Called after execution when at least one unit reached its cell.
    fn on_arrivals(&mut self, _frame: Frame, _arrivals: &[Arrival]) {}

    /// Called every `config.output_interval_frames` frames with read-only
    /// access to the roster and movement state.
    fn on_snapshot(
        &mut self,
        _frame:    Frame,
        _agents:   &AgentStore,
        _mobility: &MobilityStore,
    ) {}

    /// Called once after the final frame completes.
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
