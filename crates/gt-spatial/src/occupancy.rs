//! Fixed-size occupancy bitset.
//!
//! One bit per cell, row-major, packed into `u64` words.  Rebuilt from
//! scratch at the start of every planning pass; nothing here survives
//! between passes.  Operations on off-board cells are no-ops (`set`/`clear`)
//! or report "not occupied" (`test`), so callers never index out of range.

use gt_core::{Cell, GridDims};

const WORD_BITS: usize = 64;

/// A set of occupied cells on a `columns × rows` board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridOccupancy {
    dims:  GridDims,
    words: Vec<u64>,
}

impl GridOccupancy {
    /// An empty snapshot for `dims`.
    pub fn new(dims: GridDims) -> Self {
        let words = dims.cell_count().div_ceil(WORD_BITS);
        Self { dims, words: vec![0; words] }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Mark `cell` occupied.  Returns `false` if it was off-board.
    #[inline]
    pub fn set(&mut self, cell: Cell) -> bool {
        match self.dims.index_of(cell) {
            Some(i) => {
                self.words[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
                true
            }
            None => false,
        }
    }

    /// Mark `cell` free.
    #[inline]
    pub fn clear(&mut self, cell: Cell) {
        if let Some(i) = self.dims.index_of(cell) {
            self.words[i / WORD_BITS] &= !(1u64 << (i % WORD_BITS));
        }
    }

    /// `true` if `cell` is on the board and occupied.
    #[inline]
    pub fn test(&self, cell: Cell) -> bool {
        match self.dims.index_of(cell) {
            Some(i) => self.words[i / WORD_BITS] & (1u64 << (i % WORD_BITS)) != 0,
            None => false,
        }
    }

    /// `true` if `cell` is on the board and not occupied.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.dims.contains(cell) && !self.test(cell)
    }

    /// Free every cell, keeping the allocation.
    pub fn clear_all(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        let dims = self.dims;
        (0..dims.cell_count())
            .filter(move |&i| self.words[i / WORD_BITS] & (1u64 << (i % WORD_BITS)) != 0)
            .map(move |i| dims.cell_at(i))
    }
}
