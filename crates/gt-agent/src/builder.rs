//! Fluent builder for constructing an `AgentStore` in one step.
//!
//! # Usage
//!
//! ```rust
//! use gt_agent::AgentStoreBuilder;
//! use gt_core::{TeamId, WorldPos};
//!
//! let store = AgentStoreBuilder::with_capacity(2)
//!     .agent(TeamId(0), WorldPos::new(0.0, 0.0, 0.0), 1.0)
//!     .agent(TeamId(1), WorldPos::new(2.4, 0.0, 0.0), 1.5)
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(store.live_count(), 2);
//! ```

use gt_core::{TeamId, WorldPos};

use crate::AgentStore;

/// Fluent builder for [`AgentStore`].
#[derive(Default)]
pub struct AgentStoreBuilder {
    store: AgentStore,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate every SoA array for `n` units.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            store: AgentStore {
                count:          0,
                team:           Vec::with_capacity(n),
                position:       Vec::with_capacity(n),
                yaw:            Vec::with_capacity(n),
                movement_speed: Vec::with_capacity(n),
                alive:          Vec::with_capacity(n),
            },
        }
    }

    /// Add one live unit.  Ids are assigned sequentially from 0.
    pub fn agent(mut self, team: TeamId, position: WorldPos, movement_speed: f32) -> Self {
        self.store.spawn(team, position, movement_speed);
        self
    }

    pub fn build(self) -> AgentStore {
        self.store
    }
}
