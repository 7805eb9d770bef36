//! `gt-planner` — per-pass move planning for every unit on the board.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`reservation`] | `ReservationTable` — cell → unit claims for one pass            |
//! | [`planner`]     | `MovePlanner<S>` — overlap resolution + one-step assignment     |
//! | [`report`]      | `PlanReport`, `Assignment`, `AssignmentKind`                    |
//!
//! # A planning pass
//!
//! 1. **Overlap resolution** ([`MovePlanner::resolve_overlaps`]): stationary
//!    units sharing a cell are spread onto free neighbours by direct
//!    placement, in ascending id order.
//! 2. **Assignment** ([`MovePlanner::assign_moves`]): in-flight units keep
//!    their destination; every other unit, closest-to-an-opponent first,
//!    reserves either one step toward its nearest opponent, an alternate
//!    cell from a bounded ring search, or its own cell.
//!
//! No two units ever reserve the same cell within a pass.  The only shared
//! outcome is a *degraded hold*, where a unit with no free alternate stays
//! on its current cell and the pass reports it.

pub mod planner;
pub mod report;
pub mod reservation;


pub use planner::MovePlanner;
pub use report::{Assignment, AssignmentKind, PlanReport};
pub use reservation::ReservationTable;
