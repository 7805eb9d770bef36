//! Builder for constructing a [`Sim`].

use gt_agent::AgentStore;
use gt_core::{FrameClock, SimConfig};
use gt_mobility::{MobilityStore, MoveExecutor};
use gt_planner::MovePlanner;
use gt_spatial::{CoordinateMapper, PathSearch};

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: board geometry, planner bounds, frame timing, …
/// - [`AgentStore`]: from [`gt_agent::AgentStoreBuilder`]
/// - `S: PathSearch`: the search algorithm (e.g. [`gt_spatial::AStarSearch`])
///
/// # Optional inputs
///
/// | Method          | Default                           |
/// |-----------------|-----------------------------------|
/// | `.mobility(m)`  | `MobilityStore::new(agent_count)` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, agents, AStarSearch).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: PathSearch> {
    config:   SimConfig,
    agents:   AgentStore,
    mobility: Option<MobilityStore>,
    search:   S,
}

impl<S: PathSearch> SimBuilder<S> {
    pub fn new(config: SimConfig, agents: AgentStore, search: S) -> Self {
        Self { config, agents, mobility: None, search }
    }

    /// Supply pre-existing movement state (must be length `agent_count`),
    /// e.g. to resume units that were mid-move.
    pub fn mobility(mut self, mobility: MobilityStore) -> Self {
        self.mobility = Some(mobility);
        self
    }

    /// Validate inputs, derive the board mapping, and return a ready-to-run
    /// [`Sim`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Core`] if `config` fails validation.
    /// - [`SimError::Spatial`] if the board geometry is unusable.
    /// - [`SimError::AgentCountMismatch`] if supplied movement state does not
    ///   cover every unit.
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;
        let mapper = CoordinateMapper::from_config(&self.config.board)?;

        let agent_count = self.agents.count;
        let mut mobility = match self.mobility {
            Some(m) if m.len() != agent_count => {
                return Err(SimError::AgentCountMismatch {
                    expected: agent_count,
                    got:      m.len(),
                    what:     "mobility store",
                });
            }
            Some(m) => m,
            None => MobilityStore::new(agent_count),
        };
        for agent in self.agents.agent_ids() {
            mobility.set_grid_cell(agent, mapper.world_to_grid(self.agents.position[agent.index()]));
        }

        let planner  = MovePlanner::new(self.search, self.config.planner.clone());
        let executor = MoveExecutor::new(self.config.board.cell_size, &self.config.executor);

        log::debug!(
            "sim built: {} units on {} board, cell {}",
            agent_count,
            mapper.dims(),
            mapper.cell_size(),
        );

        Ok(Sim {
            config: self.config,
            clock: FrameClock::new(),
            agents: self.agents,
            mobility,
            mapper,
            planner,
            executor,
        })
    }
}
