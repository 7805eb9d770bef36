//! Nearest-opponent lookup.
//!
//! An R-tree (via `rstar`) over the ground-plane `[x, z]` positions of every
//! live unit.  Rebuilt whenever positions may have changed (each planning
//! pass and each executor frame); bulk loading a few dozen points is cheap.
//! Queries walk neighbours in ascending distance and return the first unit
//! on an opposing team.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use gt_agent::AgentStore;
use gt_core::{AgentId, TeamId, WorldPos};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct UnitEntry {
    point:    [f32; 2], // [x, z]
    id:       AgentId,
    team:     TeamId,
    position: WorldPos,
}

impl RTreeObject for UnitEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for UnitEntry {
    /// Squared Euclidean distance on the ground plane.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dz = self.point[1] - point[1];
        dx * dx + dz * dz
    }
}

// ── OpponentIndex ─────────────────────────────────────────────────────────────

/// The closest opposing unit to some query point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Opponent {
    pub id:       AgentId,
    pub position: WorldPos,
    /// Ground-plane distance from the query point.
    pub distance: f32,
}

/// Spatial index of live units for nearest-opponent queries.
pub struct OpponentIndex {
    tree: RTree<UnitEntry>,
}

impl OpponentIndex {
    /// Index every live unit in `agents`.
    pub fn build(agents: &AgentStore) -> Self {
        let entries: Vec<UnitEntry> = agents
            .live_ids()
            .map(|a| {
                let pos = agents.position[a.index()];
                UnitEntry {
                    point:    [pos.x, pos.z],
                    id:       a,
                    team:     agents.team[a.index()],
                    position: pos,
                }
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Nearest unit whose team opposes `team`, measured from `from`.
    ///
    /// Returns `None` if no opposing unit is alive.
    pub fn nearest_opponent(&self, team: TeamId, from: WorldPos) -> Option<Opponent> {
        self.tree
            .nearest_neighbor_iter(&[from.x, from.z])
            .find(|e| team.opposes(e.team))
            .map(|e| Opponent {
                id:       e.id,
                position: e.position,
                distance: from.planar_distance(e.position),
            })
    }

    /// [`nearest_opponent`](Self::nearest_opponent) for a unit in `agents`.
    pub fn nearest_opponent_of(&self, agents: &AgentStore, agent: AgentId) -> Option<Opponent> {
        if !agents.is_live(agent) {
            return None;
        }
        let i = agent.index();
        self.nearest_opponent(agents.team[i], agents.position[i])
    }
}
