//! `gt-spatial` — board occupancy, coordinate mapping, and path search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`occupancy`] | `GridOccupancy` — fixed-size bitset over the board          |
//! | [`mapper`]    | `CoordinateMapper` — world ↔ grid conversions               |
//! | [`search`]    | `PathSearch` trait, `Path`, `AStarSearch`                   |
//! | [`proximity`] | `OpponentIndex` (R-tree), `Opponent`                        |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Path`; propagates down. |

pub mod error;
pub mod mapper;
pub mod occupancy;
pub mod proximity;
pub mod search;


pub use error::{SpatialError, SpatialResult};
pub use mapper::CoordinateMapper;
pub use occupancy::GridOccupancy;
pub use proximity::{Opponent, OpponentIndex};
pub use search::{AStarSearch, Path, PathSearch};
