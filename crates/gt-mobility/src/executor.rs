//! Frame-driven movement: interpolation toward committed cells and facing.

use gt_agent::AgentStore;
use gt_core::{AgentId, Cell, ExecutorConfig};
use gt_spatial::OpponentIndex;

use crate::{MobilityStore, MovementState};

/// A unit that reached its committed cell during a [`MoveExecutor::tick`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arrival {
    pub agent: AgentId,
    pub cell:  Cell,
}

/// Advances committed units every frame, independent of planning cadence.
///
/// World speed is `movement_speed × cell_size` per second, so a unit with
/// `movement_speed = 1.0` crosses one orthogonal cell per second whatever
/// the board scale.
#[derive(Clone, Copy, Debug)]
pub struct MoveExecutor {
    pub cell_size:       f32,
    pub arrival_epsilon: f32,
}

impl MoveExecutor {
    pub fn new(cell_size: f32, config: &ExecutorConfig) -> Self {
        Self { cell_size, arrival_epsilon: config.arrival_epsilon }
    }

    /// Advance every live committed unit by `dt_secs`, then turn every live
    /// unit toward its nearest opponent.
    ///
    /// Non-positive or non-finite `dt_secs` moves nothing (facing is still
    /// refreshed).  Returns arrivals in ascending id order.
    pub fn tick(
        &self,
        dt_secs:  f32,
        agents:   &mut AgentStore,
        mobility: &mut MobilityStore,
    ) -> Vec<Arrival> {
        let arrivals = if dt_secs.is_finite() && dt_secs > 0.0 {
            self.advance(dt_secs, agents, mobility)
        } else {
            Vec::new()
        };
        self.update_facing(agents);
        arrivals
    }

    fn advance(
        &self,
        dt_secs:  f32,
        agents:   &mut AgentStore,
        mobility: &mut MobilityStore,
    ) -> Vec<Arrival> {
        let mut arrivals = Vec::new();
        let eps = self.arrival_epsilon;

        for i in 0..mobility.states.len().min(agents.count) {
            if !agents.alive[i] {
                continue;
            }
            let MovementState::Committed { from, to, dest, .. } = mobility.states[i] else {
                continue;
            };
            let agent     = AgentId(i as u32);
            let pos       = agents.position[i];
            let remaining = pos.distance(to);
            let step      = agents.movement_speed[i].max(0.0) * self.cell_size * dt_secs;

            if remaining < eps || step + eps >= remaining {
                agents.position[i] = to;
                mobility.place(agent, dest);
                log::trace!("{agent} arrived at {dest}");
                arrivals.push(Arrival { agent, cell: dest });
                continue;
            }

            let next  = pos.step_toward(to, step);
            let total = from.distance(to);
            let done  = if total > 0.0 { 1.0 - next.distance(to) / total } else { 1.0 };
            agents.position[i] = next;
            mobility.states[i] = MovementState::Committed {
                from,
                to,
                dest,
                progress: done.clamp(0.0, 1.0),
            };
        }
        arrivals
    }

    /// Set every live unit's yaw toward its nearest opponent.
    ///
    /// Units with no opponent, or standing exactly on one, keep their yaw.
    pub fn update_facing(&self, agents: &mut AgentStore) {
        let index = OpponentIndex::build(agents);
        let ids: Vec<AgentId> = agents.live_ids().collect();
        for agent in ids {
            let Some(opp) = index.nearest_opponent_of(agents, agent) else {
                continue;
            };
            let i = agent.index();
            if let Some(yaw) = agents.position[i].yaw_toward(opp.position) {
                agents.yaw[i] = yaw;
            }
        }
    }
}
