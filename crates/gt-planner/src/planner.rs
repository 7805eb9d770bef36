//! The move planner: overlap resolution followed by reservation-based
//! one-step assignment.
//!
//! # Priority
//!
//! Units are planned in ascending world distance to their nearest opponent,
//! ties broken by ascending `AgentId`.  Units closest to a fight claim cells
//! first; the order is a total order, so identical inputs always produce
//! identical reservations.
//!
//! # Bounded alternates
//!
//! A unit whose preferred cell is claimed scans rings of increasing radius
//! around its own cell (row-major within each ring), spending one attempt per
//! ring.  Effort is capped by [`PlannerConfig::max_ring_radius`] and
//! [`PlannerConfig::max_attempts`], each never above 3; when both are spent
//! the unit holds its current cell and the pass reports a degraded hold.

use std::cmp::Ordering;

use gt_agent::AgentStore;
use gt_core::{AgentId, Cell, PlannerConfig};
use gt_mobility::MobilityStore;
use gt_spatial::{CoordinateMapper, GridOccupancy, OpponentIndex, PathSearch};

use crate::{Assignment, AssignmentKind, PlanReport, ReservationTable};

/// Plans one destination cell per live unit per pass.
///
/// # Type parameter
///
/// `S` is the path search used for the primary step (e.g.
/// [`gt_spatial::AStarSearch`]).
pub struct MovePlanner<S: PathSearch> {
    pub search: S,
    pub config: PlannerConfig,
}

impl<S: PathSearch> MovePlanner<S> {
    pub fn new(search: S, config: PlannerConfig) -> Self {
        Self { search, config }
    }

    /// Run a full pass: [`resolve_overlaps`](Self::resolve_overlaps) then
    /// [`assign_moves`](Self::assign_moves).
    pub fn plan(
        &self,
        agents:   &mut AgentStore,
        mobility: &mut MobilityStore,
        mapper:   &CoordinateMapper,
    ) -> PlanReport {
        let relocated  = self.resolve_overlaps(agents, mobility, mapper);
        let mut report = self.assign_moves(agents, mobility, mapper);
        report.relocated = relocated;

        log::debug!(
            "plan pass: {} planned, {} moving, {} relocated, {} degraded",
            report.len(),
            report.moving_count(),
            report.relocated.len(),
            report.degraded_count(),
        );
        report
    }

    // ── Phase 0 ──────────────────────────────────────────────────────────────

    /// Spread stationary units that share a cell.
    ///
    /// Units in flight claim both the cell they stand on and their
    /// destination, and are never moved here.
    /// Stationary units are visited in ascending id order; the first one on a
    /// cell keeps it and each later one is placed directly on the first free
    /// on-board neighbour.  Returns `(unit, new cell)` for every relocation.
    pub fn resolve_overlaps(
        &self,
        agents:   &mut AgentStore,
        mobility: &mut MobilityStore,
        mapper:   &CoordinateMapper,
    ) -> Vec<(AgentId, Cell)> {
        let live = refresh_cells(agents, mobility, mapper);

        // `occupied`: every cell a unit stands on or is heading to.
        // `kept`: cells whose first claimant has been settled.
        let mut occupied = GridOccupancy::new(mapper.dims());
        let mut kept     = GridOccupancy::new(mapper.dims());
        for &agent in &live {
            match mobility.committed_dest(agent) {
                Some(dest) => {
                    let here = mobility.grid_cell(agent);
                    occupied.set(here);
                    kept.set(here);
                    occupied.set(dest);
                    kept.set(dest);
                }
                None => {
                    occupied.set(mobility.grid_cell(agent));
                }
            }
        }

        let mut relocated = Vec::new();
        for &agent in &live {
            if mobility.is_moving(agent) {
                continue;
            }
            let cell = mobility.grid_cell(agent);
            if !mapper.is_valid(cell) {
                continue;
            }
            if !kept.test(cell) {
                kept.set(cell);
                continue;
            }

            let free = cell
                .neighbors()
                .find(|&n| mapper.is_valid(n) && !occupied.test(n));
            match free {
                Some(n) => {
                    agents.position[agent.index()] = mapper.grid_to_world(n);
                    mobility.place(agent, n);
                    occupied.set(n);
                    kept.set(n);
                    log::debug!("{agent} overlapped on {cell}, placed on {n}");
                    relocated.push((agent, n));
                }
                None => {
                    log::warn!("{agent} overlaps on {cell} with no free neighbour; leaving it");
                }
            }
        }
        relocated
    }

    // ── Phase 1 ──────────────────────────────────────────────────────────────

    /// Reserve one cell for every live unit and commit the result.
    pub fn assign_moves(
        &self,
        agents:   &mut AgentStore,
        mobility: &mut MobilityStore,
        mapper:   &CoordinateMapper,
    ) -> PlanReport {
        let live  = refresh_cells(agents, mobility, mapper);
        let index = OpponentIndex::build(agents);
        let dims  = mapper.dims();

        let mut table  = ReservationTable::new(dims);
        let mut report = PlanReport::default();

        // In-flight units are mirrored, never re-planned.
        for &agent in &live {
            if let Some(dest) = mobility.committed_dest(agent) {
                table.reserve(dest, agent);
                report.assignments.push(Assignment { agent, cell: dest, kind: AssignmentKind::InFlight });
            }
        }

        // Cells still occupied by stationary units that have not been planned.
        let mut pending = vec![0u16; dims.cell_count()];
        let mut queue: Vec<(f32, AgentId)> = Vec::new();
        for &agent in &live {
            if mobility.is_moving(agent) {
                continue;
            }
            if let Some(i) = dims.index_of(mobility.grid_cell(agent)) {
                pending[i] += 1;
            }
            let dist = index
                .nearest_opponent_of(agents, agent)
                .map_or(f32::INFINITY, |o| o.distance);
            queue.push((dist, agent));
        }
        queue.sort_by(|a, b| match a.0.total_cmp(&b.0) {
            Ordering::Equal => a.1.cmp(&b.1),
            other => other,
        });

        for (_, agent) in queue {
            let cell = mobility.grid_cell(agent);
            if let Some(i) = dims.index_of(cell) {
                pending[i] = pending[i].saturating_sub(1);
            }

            let claimed = |c: Cell, table: &ReservationTable| {
                table.is_held_by_other(c, agent)
                    || (c != cell && dims.index_of(c).is_some_and(|i| pending[i] > 0))
            };

            let opponent = index.nearest_opponent_of(agents, agent);
            let (chosen, kind) = match opponent {
                _ if !mapper.is_valid(cell) => (cell, AssignmentKind::Hold),
                None => (cell, AssignmentKind::Hold),
                Some(opp) => {
                    let target  = mapper.world_to_grid(opp.position);
                    let primary = if cell.is_adjacent(target) {
                        cell
                    } else {
                        self.search
                            .find_path(cell, target, table.obstacles())
                            .first_step()
                            .unwrap_or(cell)
                    };

                    if !claimed(primary, &table) {
                        let kind = if primary == cell { AssignmentKind::Hold } else { AssignmentKind::Step };
                        (primary, kind)
                    } else {
                        match self.find_alternate(cell, primary, mapper, |c| claimed(c, &table)) {
                            Some(alt) => (alt, AssignmentKind::Alternate),
                            None => {
                                log::warn!("{agent} found no free cell near {cell}; degraded hold");
                                (cell, AssignmentKind::DegradedHold)
                            }
                        }
                    }
                }
            };

            table.reserve(chosen, agent);
            if chosen != cell {
                let from = agents.position[agent.index()];
                mobility.commit(agent, from, mapper.grid_to_world(chosen), chosen);
            } else {
                mobility.hold(agent);
            }
            log::trace!("{agent} at {cell}: {} {chosen}", kind.as_str());
            report.assignments.push(Assignment { agent, cell: chosen, kind });
        }
        report
    }

    /// First on-board, unclaimed cell in rings `1..=max_ring_radius` around
    /// `origin`, one attempt per ring, skipping the already-rejected primary.
    /// Both bounds are clamped to 3 whatever the config holds.
    fn find_alternate(
        &self,
        origin:  Cell,
        primary: Cell,
        mapper:  &CoordinateMapper,
        claimed: impl Fn(Cell) -> bool,
    ) -> Option<Cell> {
        let max_attempts = self.config.attempts();
        let mut attempts = 0;
        for radius in 1..=self.config.ring_radius() {
            if attempts >= max_attempts {
                break;
            }
            attempts += 1;
            if let Some(c) = origin
                .ring(radius)
                .find(|&c| c != primary && mapper.is_valid(c) && !claimed(c))
            {
                return Some(c);
            }
        }
        None
    }
}

/// Recompute every live unit's cached cell from its world position.
///
/// Returns the live ids in ascending order.
fn refresh_cells(
    agents:   &AgentStore,
    mobility: &mut MobilityStore,
    mapper:   &CoordinateMapper,
) -> Vec<AgentId> {
    let live: Vec<AgentId> = agents
        .live_ids()
        .filter(|a| a.index() < mobility.len())
        .collect();
    for &agent in &live {
        mobility.set_grid_cell(agent, mapper.world_to_grid(agents.position[agent.index()]));
    }
    live
}
