//! `gt-mobility` — per-unit movement state and the frame-driven executor.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`state`]    | `MovementState` — `Idle` or `Committed` to one destination cell  |
//! | [`store`]    | `MobilityStore` — `Vec<MovementState>` + cached grid cells       |
//! | [`executor`] | `MoveExecutor` — per-frame interpolation, snapping, facing       |
//! | [`error`]    | `MobilityError`, `MobilityResult<T>`                             |
//!
//! # Movement model (continuous interpolation)
//!
//! 1. The planner commits a unit to one neighbouring cell:
//!    `MovementState::Committed { from, to, dest, progress }`.
//! 2. Every frame, `MoveExecutor::tick(dt)` moves the unit
//!    `movement_speed × cell_size × dt` world units toward `to`.
//! 3. When the remaining distance is covered the unit snaps exactly onto the
//!    cell centre, returns to `Idle`, and an [`Arrival`] is reported.
//!
//! Direct placement (`MobilityStore::place`) bypasses interpolation and
//! drops any partial progress.

pub mod error;
pub mod executor;
pub mod state;
pub mod store;


pub use error::{MobilityError, MobilityResult};
pub use executor::{Arrival, MoveExecutor};
pub use state::MovementState;
pub use store::MobilityStore;
