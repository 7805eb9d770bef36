//! Deterministic scenario RNG.
//!
//! The planner and executor never draw random numbers; `SimRng` exists for
//! the code that *sets up* a skirmish (random spawn cells, speeds) and for
//! randomised tests.  The same seed always produces the same scenario.

use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Cell, GridDims};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded scenario RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, useful for
    /// giving each team its own stream.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform random cell on the board.
    ///
    /// # Panics
    /// Panics if `dims` has zero columns or rows.
    pub fn cell_in(&mut self, dims: GridDims) -> Cell {
        self.cell_in_rows(dims, 0..dims.rows as i32)
    }

    /// Uniform random cell in any column, restricted to `rows`.
    ///
    /// # Panics
    /// Panics if `dims` has zero columns or `rows` is empty.
    pub fn cell_in_rows(&mut self, dims: GridDims, rows: Range<i32>) -> Cell {
        let col = self.0.gen_range(0..dims.columns as i32);
        Cell::new(col, self.0.gen_range(rows))
    }
}
