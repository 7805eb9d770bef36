//! The `MobilityStore` — per-unit movement state and cached grid cells.

use gt_core::{AgentId, Cell, WorldPos};

use crate::{MobilityError, MobilityResult, MovementState};

/// Movement state for every unit, indexed by `AgentId`.
///
/// Both vectors always have the same length as the roster they shadow.
/// `grid_cells` is a derived cache: the planner refreshes it from world
/// positions at the start of every pass, and the executor updates it on
/// arrival.
#[derive(Clone, Debug, Default)]
pub struct MobilityStore {
    pub states:     Vec<MovementState>,
    pub grid_cells: Vec<Cell>,
}

impl MobilityStore {
    /// `count` idle units with no known cell.
    pub fn new(count: usize) -> Self {
        Self {
            states:     vec![MovementState::Idle; count],
            grid_cells: vec![Cell::NONE; count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Append a slot for a newly spawned unit.  Returns its index as an id.
    pub fn push(&mut self, cell: Cell) -> AgentId {
        let id = AgentId(self.states.len() as u32);
        self.states.push(MovementState::Idle);
        self.grid_cells.push(cell);
        id
    }

    #[inline]
    pub fn state(&self, agent: AgentId) -> MovementState {
        self.states.get(agent.index()).copied().unwrap_or_default()
    }

    #[inline]
    pub fn is_moving(&self, agent: AgentId) -> bool {
        self.state(agent).is_moving()
    }

    #[inline]
    pub fn committed_dest(&self, agent: AgentId) -> Option<Cell> {
        self.state(agent).committed_dest()
    }

    /// Cached cell, or [`Cell::NONE`] for an unknown id.
    #[inline]
    pub fn grid_cell(&self, agent: AgentId) -> Cell {
        self.grid_cells.get(agent.index()).copied().unwrap_or(Cell::NONE)
    }

    pub fn set_grid_cell(&mut self, agent: AgentId, cell: Cell) {
        if let Some(slot) = self.grid_cells.get_mut(agent.index()) {
            *slot = cell;
        }
    }

    /// Start interpolating `agent` from `from` toward the centre `to` of `dest`.
    pub fn commit(&mut self, agent: AgentId, from: WorldPos, to: WorldPos, dest: Cell) {
        if let Some(s) = self.states.get_mut(agent.index()) {
            *s = MovementState::committed(from, to, dest);
        }
    }

    /// Drop any commitment; the unit stays where it is.
    pub fn hold(&mut self, agent: AgentId) {
        if let Some(s) = self.states.get_mut(agent.index()) {
            *s = MovementState::Idle;
        }
    }

    /// Direct placement bookkeeping: idle on `cell`, partial progress lost.
    pub fn place(&mut self, agent: AgentId, cell: Cell) {
        self.hold(agent);
        self.set_grid_cell(agent, cell);
    }

    /// [`commit`](Self::commit) that reports a missing slot.
    pub fn try_commit(
        &mut self,
        agent: AgentId,
        from:  WorldPos,
        to:    WorldPos,
        dest:  Cell,
    ) -> MobilityResult<()> {
        self.check(agent)?;
        self.commit(agent, from, to, dest);
        Ok(())
    }

    /// [`place`](Self::place) that reports a missing slot.
    pub fn try_place(&mut self, agent: AgentId, cell: Cell) -> MobilityResult<()> {
        self.check(agent)?;
        self.place(agent, cell);
        Ok(())
    }

    fn check(&self, agent: AgentId) -> MobilityResult<()> {
        if agent.index() < self.states.len() {
            Ok(())
        } else {
            Err(MobilityError::UnknownAgent(agent))
        }
    }

    /// Complete the move for `agent`, returning its destination.
    ///
    /// Returns `None` (and changes nothing) if the unit was not committed.
    pub fn arrive(&mut self, agent: AgentId) -> Option<Cell> {
        let dest = self.committed_dest(agent)?;
        self.place(agent, dest);
        Some(dest)
    }

    /// Ids of every committed unit, ascending.
    pub fn moving_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_moving())
            .map(|(i, _)| AgentId(i as u32))
    }
}
