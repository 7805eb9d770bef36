//! Core roster storage: `AgentStore` (SoA data) and `AgentView` (one row).
//!
//! `AgentId` is a plain index into every array.  Ids are never reused:
//! removing a unit (death, bench transfer) clears its `alive` flag and the
//! slot stays behind as a tombstone, so handles held by the orchestration
//! layer never alias a different unit.

use gt_core::{AgentId, TeamId, WorldPos};

// ── AgentView ─────────────────────────────────────────────────────────────────

/// Read-only copy of one roster row, returned by the query surface.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:             AgentId,
    pub position:       WorldPos,
    pub movement_speed: f32,
    pub team:           TeamId,
    pub alive:          bool,
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for every unit on the board.
///
/// Every `Vec` field has exactly `count` elements:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    /// Number of slots (live and removed).  Equals the length of every `Vec`.
    pub count: usize,

    /// Side each unit fights for.
    pub team: Vec<TeamId>,

    /// Current world-space position.  Mutated by the executor and by direct
    /// placement only.
    pub position: Vec<WorldPos>,

    /// Facing in radians about +Y; recomputed every frame by the executor.
    pub yaw: Vec<f32>,

    /// Movement rate in cells per second.
    pub movement_speed: Vec<f32>,

    /// Dead or removed units are skipped by planning and execution.
    pub alive: Vec<bool>,
}

impl AgentStore {
    /// `true` if there are no slots at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Iterator over live `AgentId`s in ascending index order.
    pub fn live_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(|&a| self.alive[a.index()])
    }

    /// `true` if `agent` names an existing slot that is still alive.
    ///
    /// Safe to call with stale or made-up ids.
    #[inline]
    pub fn is_live(&self, agent: AgentId) -> bool {
        self.alive.get(agent.index()).copied().unwrap_or(false)
    }

    /// Number of live units.
    pub fn live_count(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    /// Snapshot of one slot, or `None` for an out-of-range id.
    pub fn view(&self, agent: AgentId) -> Option<AgentView> {
        let i = agent.index();
        if i >= self.count {
            return None;
        }
        Some(AgentView {
            id:             agent,
            position:       self.position[i],
            movement_speed: self.movement_speed[i],
            team:           self.team[i],
            alive:          self.alive[i],
        })
    }

    /// Snapshots of every live unit in ascending id order.
    pub fn live_views(&self) -> Vec<AgentView> {
        self.live_ids().filter_map(|a| self.view(a)).collect()
    }

    /// Append a new live unit and return its id.
    pub fn spawn(&mut self, team: TeamId, position: WorldPos, movement_speed: f32) -> AgentId {
        let id = AgentId(self.count as u32);
        self.team.push(team);
        self.position.push(position);
        self.yaw.push(0.0);
        self.movement_speed.push(movement_speed);
        self.alive.push(true);
        self.count += 1;
        id
    }

    /// Mark a unit dead / removed.  Returns `false` if it was not live.
    pub fn remove(&mut self, agent: AgentId) -> bool {
        if !self.is_live(agent) {
            return false;
        }
        self.alive[agent.index()] = false;
        true
    }
}
