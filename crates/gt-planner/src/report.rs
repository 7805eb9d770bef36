//! What a planning pass decided.

use gt_core::{AgentId, Cell};

/// How a unit's cell for this pass was chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssignmentKind {
    /// Already travelling; its existing destination was carried over.
    InFlight,
    /// Stays put: adjacent to its opponent, no opponent, or no path.
    Hold,
    /// One step along the path toward its nearest opponent.
    Step,
    /// The preferred cell was taken; a free cell from the ring search.
    Alternate,
    /// Everything nearby was taken; stays put without a free reservation.
    DegradedHold,
}

impl AssignmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InFlight     => "in_flight",
            Self::Hold         => "hold",
            Self::Step         => "step",
            Self::Alternate    => "alternate",
            Self::DegradedHold => "degraded_hold",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub agent: AgentId,
    pub cell:  Cell,
    pub kind:  AssignmentKind,
}

/// Result of one pass: one assignment per live unit, in planning order, plus
/// every unit moved by overlap resolution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanReport {
    pub assignments: Vec<Assignment>,
    pub relocated:   Vec<(AgentId, Cell)>,
}

impl PlanReport {
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn get(&self, agent: AgentId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.agent == agent)
    }

    /// Cell assigned to `agent`, if it was planned this pass.
    pub fn cell_of(&self, agent: AgentId) -> Option<Cell> {
        self.get(agent).map(|a| a.cell)
    }

    pub fn count(&self, kind: AssignmentKind) -> usize {
        self.assignments.iter().filter(|a| a.kind == kind).count()
    }

    /// Units newly committed to a different cell this pass.
    pub fn moving_count(&self) -> usize {
        self.count(AssignmentKind::Step) + self.count(AssignmentKind::Alternate)
    }

    pub fn degraded_count(&self) -> usize {
        self.count(AssignmentKind::DegradedHold)
    }
}
