//! `gt-agent` — Structure-of-Arrays unit roster for the `rust_gt` core.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA arrays), `AgentView` (read-only record) |
//! | [`builder`]     | `AgentStoreBuilder` (fluent construction)                 |
//!
//! Movement state (grid cell cache, committed destination) lives in
//! `gt-mobility::MobilityStore`, indexed by the same `AgentId`.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `AgentView`.          |

pub mod builder;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use store::{AgentStore, AgentView};
