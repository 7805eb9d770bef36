//! World ↔ grid coordinate conversion.
//!
//! The board is centred on the world origin.  Cell `(0, 0)` sits at
//!
//! ```text
//! origin_x = -(columns * cell_size) / 2 + cell_size / 2
//! origin_z = -(rows    * cell_size) / 2 + cell_size / 2
//! ```
//!
//! and every other centre is an integer multiple of `cell_size` away.  Both
//! conversions are pure and total: `world_to_grid` happily returns off-board
//! cells, which callers filter with [`CoordinateMapper::is_valid`].

use gt_core::{BoardConfig, Cell, GridDims, WorldPos};

use crate::{SpatialError, SpatialResult};

/// Converts between world-space positions and board cells.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateMapper {
    dims:      GridDims,
    cell_size: f32,
    ground_y:  f32,
    origin_x:  f32,
    origin_z:  f32,
}

impl CoordinateMapper {
    pub fn new(dims: GridDims, cell_size: f32, ground_y: f32) -> SpatialResult<Self> {
        if dims.columns == 0 || dims.rows == 0 {
            return Err(SpatialError::InvalidBoard(format!("empty board {dims}")));
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(SpatialError::InvalidBoard(format!("cell size {cell_size}")));
        }
        let origin_x = -(dims.columns as f32 * cell_size) / 2.0 + cell_size / 2.0;
        let origin_z = -(dims.rows as f32 * cell_size) / 2.0 + cell_size / 2.0;
        Ok(Self { dims, cell_size, ground_y, origin_x, origin_z })
    }

    pub fn from_config(board: &BoardConfig) -> SpatialResult<Self> {
        Self::new(board.dims(), board.cell_size, board.ground_y)
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World position of cell `(0, 0)`'s centre.
    #[inline]
    pub fn origin(&self) -> WorldPos {
        WorldPos::new(self.origin_x, self.ground_y, self.origin_z)
    }

    /// Nearest cell to `pos` (may be off-board).
    #[inline]
    pub fn world_to_grid(&self, pos: WorldPos) -> Cell {
        Cell::new(
            ((pos.x - self.origin_x) / self.cell_size).round() as i32,
            ((pos.z - self.origin_z) / self.cell_size).round() as i32,
        )
    }

    /// Centre of `cell` at ground level.
    #[inline]
    pub fn grid_to_world(&self, cell: Cell) -> WorldPos {
        WorldPos::new(
            self.origin_x + cell.col as f32 * self.cell_size,
            self.ground_y,
            self.origin_z + cell.row as f32 * self.cell_size,
        )
    }

    /// `true` if `cell` lies on the board.
    #[inline]
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.dims.contains(cell)
    }

    /// [`grid_to_world`](Self::grid_to_world) restricted to on-board cells.
    pub fn checked_grid_to_world(&self, cell: Cell) -> SpatialResult<WorldPos> {
        if self.is_valid(cell) {
            Ok(self.grid_to_world(cell))
        } else {
            Err(SpatialError::CellOutOfBounds(cell))
        }
    }
}
