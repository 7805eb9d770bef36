//! Discrete board coordinates.
//!
//! A [`Cell`] is a signed `(col, row)` pair so that world positions off the
//! board still map to *some* cell; [`GridDims::contains`] decides validity.
//! Cells are packed into a `u32` key (`col | row << 16`) when used as map
//! keys, which is why board dimensions are capped at `u16::MAX`.

use std::fmt;

/// The eight neighbour offsets `(d_col, d_row)` in fixed row-major order.
///
/// Every "first free neighbour" scan in the workspace uses this order so
/// overlap resolution and alternate-cell search are reproducible.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A discrete `(column, row)` coordinate on the board.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    /// Sentinel for "no cell / uncommitted".
    pub const NONE: Cell = Cell { col: -1, row: -1 };

    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Cell::NONE
    }

    /// Packed map key `col | (row << 16)`.
    ///
    /// Only meaningful for cells inside a board of at most `u16::MAX` columns
    /// and rows; validate with [`GridDims::contains`] first.
    #[inline]
    pub fn key(self) -> u32 {
        (self.col as u32 & 0xFFFF) | ((self.row as u32 & 0xFFFF) << 16)
    }

    /// Inverse of [`key`](Self::key).
    #[inline]
    pub fn from_key(key: u32) -> Cell {
        Cell {
            col: (key & 0xFFFF) as i32,
            row: (key >> 16) as i32,
        }
    }

    #[inline]
    pub fn offset(self, d_col: i32, d_row: i32) -> Cell {
        Cell { col: self.col + d_col, row: self.row + d_row }
    }

    /// Chebyshev (king-move) distance.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.col.abs_diff(other.col).max(self.row.abs_diff(other.row))
    }

    /// `true` if the cells touch orthogonally or diagonally (and differ).
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.chebyshev(other) == 1
    }

    /// Euclidean distance in cell units.
    #[inline]
    pub fn euclidean(self, other: Cell) -> f32 {
        let dc = (self.col - other.col) as f32;
        let dr = (self.row - other.row) as f32;
        (dc * dc + dr * dr).sqrt()
    }

    /// The 8 surrounding cells in [`NEIGHBOR_OFFSETS`] order (unfiltered).
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS.into_iter().map(move |(dc, dr)| self.offset(dc, dr))
    }

    /// Cells at Chebyshev distance exactly `radius`, scanned row-major.
    ///
    /// `ring(1)` yields the same order as [`neighbors`](Self::neighbors).
    /// `ring(0)` yields only `self`.
    pub fn ring(self, radius: u32) -> impl Iterator<Item = Cell> {
        let r = radius as i32;
        (-r..=r).flat_map(move |dr| {
            (-r..=r).filter_map(move |dc| {
                if dc.abs().max(dr.abs()) == r {
                    Some(self.offset(dc, dr))
                } else {
                    None
                }
            })
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

// ── GridDims ──────────────────────────────────────────────────────────────────

/// Board dimensions in cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    pub columns: u16,
    pub rows: u16,
}

impl GridDims {
    #[inline]
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        self.columns as usize * self.rows as usize
    }

    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && cell.col < self.columns as i32
            && cell.row < self.rows as i32
    }

    /// Row-major dense index, or `None` for off-board cells.
    #[inline]
    pub fn index_of(self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row as usize * self.columns as usize + cell.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn cell_at(self, index: usize) -> Cell {
        let cols = self.columns.max(1) as usize;
        Cell::new((index % cols) as i32, (index / cols) as i32)
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
