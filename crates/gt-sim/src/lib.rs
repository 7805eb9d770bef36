//! `gt-sim` — frame loop orchestrator and command surface for the rust_gt core.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① Plan     — every `plan_interval_frames`: overlap resolution, then one
//!                reserved destination per live unit (MovePlanner).
//!   ② Execute  — advance committed units by `frame_dt_secs`, snap arrivals,
//!                turn everyone toward their nearest opponent (MoveExecutor).
//!   ③ Observe  — observer hooks; snapshots every `output_interval_frames`.
//! ```
//!
//! The orchestration layer of a game can skip [`Sim::run`] and drive the
//! same steps itself through [`Sim::request_planning_pass`] and
//! [`Sim::tick`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gt_agent::AgentStoreBuilder;
//! use gt_core::SimConfig;
//! use gt_sim::{NoopObserver, SimBuilder};
//! use gt_spatial::AStarSearch;
//!
//! let agents = AgentStoreBuilder::new().agent(team, pos, 1.0).build();
//! let mut sim = SimBuilder::new(SimConfig::default(), agents, AStarSearch).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
