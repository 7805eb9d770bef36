//! Typed configuration consumed at construction.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to the simulation builder.  Every struct has a
//! `Default` matching the stock 8×8 board, so partial JSON documents work.

use crate::{GridDims, GtError, GtResult};

// ── BoardConfig ───────────────────────────────────────────────────────────────

/// Board geometry: dimensions and world-space cell size.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub columns: u16,
    pub rows: u16,
    /// Side length of one square cell in world units.
    pub cell_size: f32,
    /// World Y of cell centres.
    pub ground_y: f32,
}

impl BoardConfig {
    #[inline]
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.columns, self.rows)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns:   8,
            rows:      8,
            cell_size: 1.2,
            ground_y:  0.0,
        }
    }
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

/// Bounds on the alternate-cell search run when a candidate cell is claimed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Largest ring radius examined around the agent's cell.
    pub max_ring_radius: u32,
    /// Ring expansions allowed before falling back to a degraded hold.
    pub max_attempts: u32,
}

impl PlannerConfig {
    /// Upper bound on both the ring radius and the attempt count.
    pub const MAX_ALTERNATE_BOUND: u32 = 3;

    /// `max_ring_radius`, clamped to [`Self::MAX_ALTERNATE_BOUND`].
    #[inline]
    pub fn ring_radius(&self) -> u32 {
        self.max_ring_radius.min(Self::MAX_ALTERNATE_BOUND)
    }

    /// `max_attempts`, clamped to [`Self::MAX_ALTERNATE_BOUND`].
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.max_attempts.min(Self::MAX_ALTERNATE_BOUND)
    }

    pub fn validate(&self) -> GtResult<()> {
        let cap = Self::MAX_ALTERNATE_BOUND;
        if self.max_ring_radius > cap || self.max_attempts > cap {
            return Err(GtError::Config(format!(
                "alternate search is capped at radius {cap} and {cap} attempts, got radius {} and {} attempts",
                self.max_ring_radius, self.max_attempts
            )));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_ring_radius: 3,
            max_attempts:    3,
        }
    }
}

// ── ExecutorConfig ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExecutorConfig {
    /// Remaining distance (world units) below which an agent snaps to its
    /// destination.
    pub arrival_epsilon: f32,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self { arrival_epsilon: 1e-3 }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub board: BoardConfig,
    pub planner: PlannerConfig,
    pub executor: ExecutorConfig,

    /// Simulated seconds per frame used by `Sim::run`.
    pub frame_dt_secs: f32,

    /// Run a planning pass every N frames.  1 = every frame.
    pub plan_interval_frames: u64,

    /// Total frames to simulate with `Sim::run`.
    pub total_frames: u64,

    /// Emit an observer snapshot every N frames.  0 disables snapshots.
    pub output_interval_frames: u64,

    /// Seed for scenario generation.  The planner itself is deterministic.
    pub seed: u64,
}

impl SimConfig {
    /// The frame at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_frame(&self) -> crate::Frame {
        crate::Frame(self.total_frames)
    }

    /// Reject configurations the core cannot run with.
    pub fn validate(&self) -> GtResult<()> {
        let b = &self.board;
        if b.columns == 0 || b.rows == 0 {
            return Err(GtError::Config(format!(
                "board must have at least one column and row, got {}x{}",
                b.columns, b.rows
            )));
        }
        if !(b.cell_size.is_finite() && b.cell_size > 0.0) {
            return Err(GtError::Config(format!(
                "cell_size must be positive and finite, got {}",
                b.cell_size
            )));
        }
        if !b.ground_y.is_finite() {
            return Err(GtError::Config("ground_y must be finite".into()));
        }
        self.planner.validate()?;
        if !(self.executor.arrival_epsilon.is_finite() && self.executor.arrival_epsilon >= 0.0) {
            return Err(GtError::Config(format!(
                "arrival_epsilon must be non-negative, got {}",
                self.executor.arrival_epsilon
            )));
        }
        if !(self.frame_dt_secs.is_finite() && self.frame_dt_secs > 0.0) {
            return Err(GtError::Config(format!(
                "frame_dt_secs must be positive, got {}",
                self.frame_dt_secs
            )));
        }
        if self.plan_interval_frames == 0 {
            return Err(GtError::Config("plan_interval_frames must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board:                  BoardConfig::default(),
            planner:                PlannerConfig::default(),
            executor:               ExecutorConfig::default(),
            frame_dt_secs:          1.0 / 60.0,
            plan_interval_frames:   15,
            total_frames:           60 * 30,
            output_interval_frames: 15,
            seed:                   42,
        }
    }
}
