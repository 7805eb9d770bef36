//! Per-pass cell reservations.

use gt_core::{AgentId, Cell, GridDims};
use gt_spatial::GridOccupancy;
use rustc_hash::FxHashMap;

/// Which unit holds each reserved cell during one planning pass.
///
/// Keyed by [`Cell::key`].  A bitset mirror of the reserved cells is kept
/// alongside so the table can be handed to path search as its obstacle set
/// without rebuilding one per query.
#[derive(Clone, Debug)]
pub struct ReservationTable {
    holders:  FxHashMap<u32, AgentId>,
    occupied: GridOccupancy,
}

impl ReservationTable {
    pub fn new(dims: GridDims) -> Self {
        Self {
            holders:  FxHashMap::default(),
            occupied: GridOccupancy::new(dims),
        }
    }

    /// Reserve `cell` for `agent`.
    ///
    /// The first holder keeps the cell: returns `false` if another unit
    /// already holds it or `cell` is off the board.
    pub fn reserve(&mut self, cell: Cell, agent: AgentId) -> bool {
        if !self.occupied.dims().contains(cell) {
            return false;
        }
        match self.holders.get(&cell.key()) {
            Some(&holder) => holder == agent,
            None => {
                self.holders.insert(cell.key(), agent);
                self.occupied.set(cell);
                true
            }
        }
    }

    #[inline]
    pub fn holder(&self, cell: Cell) -> Option<AgentId> {
        if !self.occupied.test(cell) {
            return None;
        }
        self.holders.get(&cell.key()).copied()
    }

    /// `true` if some unit other than `agent` holds `cell`.
    #[inline]
    pub fn is_held_by_other(&self, cell: Cell, agent: AgentId) -> bool {
        self.holder(cell).is_some_and(|h| h != agent)
    }

    /// Reserved cells as a bitset, for use as path-search obstacles.
    #[inline]
    pub fn obstacles(&self) -> &GridOccupancy {
        &self.occupied
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.holders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    /// `(cell, holder)` pairs in row-major cell order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, AgentId)> + '_ {
        self.occupied.iter().filter_map(|c| self.holders.get(&c.key()).map(|&a| (c, a)))
    }
}
