//! The `Sim` struct: command surface and frame loop.

use gt_agent::{AgentStore, AgentView};
use gt_core::{AgentId, Cell, Frame, FrameClock, SimConfig, TeamId, WorldPos};
use gt_mobility::{Arrival, MobilityStore, MoveExecutor};
use gt_planner::{MovePlanner, PlanReport};
use gt_spatial::{CoordinateMapper, OpponentIndex, PathSearch};

use crate::{SimError, SimObserver, SimResult};

/// The movement core for one board.
///
/// `Sim<S>` owns every unit's state and exposes the query/command surface
/// used by the orchestration layer:
///
/// - queries: [`list_live_agents`](Self::list_live_agents),
///   [`nearest_opponent_position`](Self::nearest_opponent_position),
///   [`is_adjacent_to_nearest_opponent`](Self::is_adjacent_to_nearest_opponent)
/// - commands: [`request_planning_pass`](Self::request_planning_pass),
///   [`commit_direct_move`](Self::commit_direct_move),
///   [`commit_interpolated_move`](Self::commit_interpolated_move),
///   [`tick`](Self::tick) (executor only)
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: PathSearch> {
    /// Global configuration (board, planner bounds, frame timing, …).
    pub config: SimConfig,
    /// Frame counter used by [`run`](Self::run).
    pub clock: FrameClock,
    /// Roster (SoA arrays), indexed by `AgentId`.
    pub agents: AgentStore,
    /// Movement state, indexed by `AgentId`.
    pub mobility: MobilityStore,
    pub mapper: CoordinateMapper,
    pub planner: MovePlanner<S>,
    pub executor: MoveExecutor,
}

impl<S: PathSearch> Sim<S> {
    // ── Queries ───────────────────────────────────────────────────────────

    /// Every live unit in ascending id order.
    pub fn list_live_agents(&self) -> Vec<AgentView> {
        self.agents.live_views()
    }

    /// Position of the nearest live unit on another team, or `None` if
    /// `agent` is not live or has no opponents.
    pub fn nearest_opponent_position(&self, agent: AgentId) -> Option<WorldPos> {
        OpponentIndex::build(&self.agents)
            .nearest_opponent_of(&self.agents, agent)
            .map(|o| o.position)
    }

    /// `true` if `agent`'s cell is one king move from its nearest opponent's.
    pub fn is_adjacent_to_nearest_opponent(&self, agent: AgentId) -> bool {
        let Some(opp) = self.nearest_opponent_position(agent) else {
            return false;
        };
        let own = self.mapper.world_to_grid(self.agents.position[agent.index()]);
        own.is_adjacent(self.mapper.world_to_grid(opp))
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Run one planning pass now, independent of the frame cadence.
    pub fn request_planning_pass(&mut self) -> PlanReport {
        self.planner.plan(&mut self.agents, &mut self.mobility, &self.mapper)
    }

    /// Place `agent` on `cell` immediately.  Returns `false` if the unit is
    /// not live or the cell is off the board.
    pub fn commit_direct_move(&mut self, agent: AgentId, cell: Cell) -> bool {
        self.try_commit_direct_move(agent, cell).is_ok()
    }

    /// [`commit_direct_move`](Self::commit_direct_move) with the reason for
    /// a refusal.
    ///
    /// Any move in progress is abandoned.
    pub fn try_commit_direct_move(&mut self, agent: AgentId, cell: Cell) -> SimResult<()> {
        self.check_live(agent)?;
        let pos = self.mapper.checked_grid_to_world(cell)?;
        self.mobility.try_place(agent, cell)?;
        self.agents.position[agent.index()] = pos;
        Ok(())
    }

    /// Start moving `agent` toward `cell` from where it stands.  Returns
    /// `false` if the unit is not live or the cell is off the board.
    pub fn commit_interpolated_move(&mut self, agent: AgentId, cell: Cell) -> bool {
        self.try_commit_interpolated_move(agent, cell).is_ok()
    }

    /// [`commit_interpolated_move`](Self::commit_interpolated_move) with the
    /// reason for a refusal.
    ///
    /// The move is not checked against reservations; the next planning pass
    /// treats the unit as in flight toward `cell`.
    pub fn try_commit_interpolated_move(&mut self, agent: AgentId, cell: Cell) -> SimResult<()> {
        self.check_live(agent)?;
        let to   = self.mapper.checked_grid_to_world(cell)?;
        let from = self.agents.position[agent.index()];
        self.mobility.try_commit(agent, from, to, cell)?;
        Ok(())
    }

    /// Advance movement by `dt_secs` (executor only; no planning).
    pub fn tick(&mut self, dt_secs: f32) -> Vec<Arrival> {
        self.executor.tick(dt_secs, &mut self.agents, &mut self.mobility)
    }

    /// Add a unit standing idle on `cell`.
    pub fn spawn_agent(&mut self, team: TeamId, cell: Cell, movement_speed: f32) -> SimResult<AgentId> {
        let pos = self.mapper.checked_grid_to_world(cell)?;
        let id  = self.agents.spawn(team, pos, movement_speed);
        self.mobility.push(cell);
        log::debug!("spawned {id} for {team} on {cell}");
        Ok(id)
    }

    /// Take a unit off the board (death or bench transfer).  Its id is never
    /// reused.  Returns `false` if it was not live.
    pub fn remove_agent(&mut self, agent: AgentId) -> bool {
        if !self.agents.remove(agent) {
            return false;
        }
        self.mobility.place(agent, Cell::NONE);
        log::debug!("removed {agent}");
        true
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Run from the current frame to `config.end_frame()`.
    ///
    /// Calls observer hooks at every frame boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_frame < self.config.end_frame() {
            self.step_frame(observer);
        }
        observer.on_sim_end(self.clock.current_frame);
        Ok(())
    }

    /// Run exactly `n` frames from the current position (ignores
    /// `end_frame`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_frame(observer);
        }
        Ok(())
    }

    fn step_frame<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_frame;
        observer.on_frame_start(now);

        if now.is_every(self.config.plan_interval_frames) {
            let report = self.request_planning_pass();
            observer.on_plan(now, &report);
        }

        let arrivals = self.tick(self.config.frame_dt_secs);
        if !arrivals.is_empty() {
            observer.on_arrivals(now, &arrivals);
        }

        if now.is_every(self.config.output_interval_frames) {
            observer.on_snapshot(now, &self.agents, &self.mobility);
        }
        self.clock.advance(self.config.frame_dt_secs);
    }

    /// The current frame of the loop.
    #[inline]
    pub fn frame(&self) -> Frame {
        self.clock.current_frame
    }

    fn check_live(&self, agent: AgentId) -> SimResult<()> {
        if self.agents.is_live(agent) {
            Ok(())
        } else {
            Err(SimError::AgentNotLive(agent))
        }
    }
}
