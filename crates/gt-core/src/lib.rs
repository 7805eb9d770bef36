//! `gt-core` — foundational types for the `rust_gt` tactics movement core.
//!
//! This crate is a dependency of every other `gt-*` crate.  It intentionally
//! has no `gt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TeamId`                                   |
//! | [`cell`]        | `Cell`, `GridDims`, neighbour and ring iteration      |
//! | [`geo`]         | `WorldPos` (x, y, z world-space point)                |
//! | [`time`]        | `Frame`, `FrameClock`                                 |
//! | [`config`]      | `SimConfig`, `BoardConfig`, `PlannerConfig`, …        |
//! | [`rng`]         | `SimRng` (seeded scenario RNG)                        |
//! | [`error`]       | `GtError`, `GtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load a `SimConfig` from JSON.                  |

pub mod cell;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, GridDims, NEIGHBOR_OFFSETS};
pub use config::{BoardConfig, ExecutorConfig, PlannerConfig, SimConfig};
pub use error::{GtError, GtResult};
pub use geo::WorldPos;
pub use ids::{AgentId, TeamId};
pub use rng::SimRng;
pub use time::{Frame, FrameClock};
