//! Per-unit movement state.

use gt_core::{Cell, WorldPos};

/// The movement state for a single unit.
///
/// A unit is either **idle** (standing on its cell, free to be planned) or
/// **committed** (travelling to `dest`).  A committed unit always carries a
/// valid destination; "moving with no destination" cannot be expressed.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum MovementState {
    #[default]
    Idle,

    Committed {
        /// World position when the move was committed.
        from:     WorldPos,
        /// Centre of `dest`; the executor snaps onto this exactly.
        to:       WorldPos,
        /// The reserved cell.
        dest:     Cell,
        /// Fraction of `from → to` covered, in `[0.0, 1.0]`.  Informational.
        progress: f32,
    },
}

impl MovementState {
    /// A fresh commitment with zero progress.
    #[inline]
    pub fn committed(from: WorldPos, to: WorldPos, dest: Cell) -> Self {
        Self::Committed { from, to, dest, progress: 0.0 }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    /// Reserved destination, or `None` while idle.
    #[inline]
    pub fn committed_dest(&self) -> Option<Cell> {
        match *self {
            Self::Committed { dest, .. } => Some(dest),
            Self::Idle => None,
        }
    }

    /// Returns `1.0` for idle units.
    pub fn progress(&self) -> f32 {
        match *self {
            Self::Committed { progress, .. } => progress,
            Self::Idle => 1.0,
        }
    }
}
