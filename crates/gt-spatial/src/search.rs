//! Path search trait and default A* implementation.
//!
//! # Pluggability
//!
//! The planner calls path search via the [`PathSearch`] trait, so
//! applications can swap in a different algorithm (jump-point search,
//! flow fields) without touching the planner.
//!
//! # Goal condition
//!
//! Units path toward *engagement range*, not onto the target: the target
//! cell holds the opposing unit and is never a legal destination.  The
//! search therefore stops at the first popped cell at Chebyshev distance 1
//! from the target, and never expands the target itself.
//!
//! # Costs
//!
//! 8-connected grid, orthogonal step = 1, diagonal step = √2, heuristic =
//! Euclidean distance to the target.  The heuristic is admissible and
//! consistent for these costs, so the returned cost is optimal for the
//! adjacent cell it reaches.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::f32::consts::SQRT_2;

use gt_core::{Cell, NEIGHBOR_OFFSETS};

use crate::GridOccupancy;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a search: cells from the start (inclusive) to a cell
/// adjacent to the target, plus the accumulated step cost.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub cells: Vec<Cell>,
    pub cost:  f32,
}

impl Path {
    /// "No path exists".
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The cell to move into next.
    ///
    /// For a single-cell path (start already adjacent) this is the start
    /// itself, i.e. "stay".
    pub fn first_step(&self) -> Option<Cell> {
        match self.cells.len() {
            0 => None,
            1 => Some(self.cells[0]),
            _ => Some(self.cells[1]),
        }
    }

    /// The adjacent-to-target cell the path ends on.
    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

// ── PathSearch trait ──────────────────────────────────────────────────────────

/// Pluggable path search.
///
/// Implementations must be `Send + Sync` so a planner holding one can be
/// shared with read-only query threads.
pub trait PathSearch: Send + Sync {
    /// Find a path from `start` to any cell adjacent to `target`.
    ///
    /// Cells set in `obstacles` are never entered (the start is exempt).
    /// The board size is taken from `obstacles.dims()`.  Returns an empty
    /// [`Path`] when no adjacent cell is reachable or either endpoint is
    /// off-board.
    fn find_path(&self, start: Cell, target: Cell, obstacles: &GridOccupancy) -> Path;
}

// ── AStarSearch ───────────────────────────────────────────────────────────────

/// A* over the 8-connected board.
///
/// Ties on `f = g + h` are broken by insertion order (earliest pushed is
/// popped first), so identical inputs always yield identical paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStarSearch;

impl PathSearch for AStarSearch {
    fn find_path(&self, start: Cell, target: Cell, obstacles: &GridOccupancy) -> Path {
        astar(start, target, obstacles)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Open-list entry.  `BinaryHeap` is a max-heap, so `Ord` is reversed on
/// both keys: lowest `f` first, then lowest `seq`.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f:     f32,
    seq:   u64,
    index: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

const NO_PARENT: usize = usize::MAX;

fn astar(start: Cell, target: Cell, obstacles: &GridOccupancy) -> Path {
    let dims = obstacles.dims();
    let (Some(start_idx), true) = (dims.index_of(start), dims.contains(target)) else {
        return Path::empty();
    };

    let n = dims.cell_count();
    // g[v] = best known cost to reach v.
    let mut g      = vec![f32::INFINITY; n];
    let mut parent = vec![NO_PARENT; n];
    let mut closed = vec![false; n];

    let mut seq: u64 = 0;
    let mut open = BinaryHeap::new();
    g[start_idx] = 0.0;
    open.push(OpenEntry { f: start.euclidean(target), seq, index: start_idx });

    while let Some(OpenEntry { index, .. }) = open.pop() {
        // Skip stale heap entries.
        if closed[index] {
            continue;
        }
        closed[index] = true;

        let cell = dims.cell_at(index);
        if cell.is_adjacent(target) {
            return reconstruct(dims, &parent, index, g[index]);
        }

        for (dc, dr) in NEIGHBOR_OFFSETS {
            let next = cell.offset(dc, dr);
            let Some(next_idx) = dims.index_of(next) else {
                continue;
            };
            if next == target || closed[next_idx] || obstacles.test(next) {
                continue;
            }

            let step = if dc != 0 && dr != 0 { SQRT_2 } else { 1.0 };
            let tentative = g[index] + step;
            if tentative < g[next_idx] {
                g[next_idx] = tentative;
                parent[next_idx] = index;
                seq += 1;
                open.push(OpenEntry {
                    f: tentative + next.euclidean(target),
                    seq,
                    index: next_idx,
                });
            }
        }
    }

    Path::empty()
}

fn reconstruct(dims: gt_core::GridDims, parent: &[usize], end: usize, cost: f32) -> Path {
    let mut cells = Vec::new();
    let mut cur = end;
    while cur != NO_PARENT {
        cells.push(dims.cell_at(cur));
        cur = parent[cur];
    }
    cells.reverse();
    Path { cells, cost }
}
