//! Simulation time model.
//!
//! # Design
//!
//! The loop is frame-driven: every frame advances a monotonically increasing
//! [`Frame`] counter and a floating-point elapsed-seconds total.  Planning
//! passes happen on a subset of frames (every `plan_interval_frames`);
//! interpolation runs on all of them.  Frame numbers are the canonical
//! ordering key for output rows, so they stay integral.

use std::fmt;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }

    /// `true` if this frame lands on a multiple of `interval` (0 never matches).
    #[inline]
    pub fn is_every(self, interval: u64) -> bool {
        interval > 0 && self.0.is_multiple_of(interval)
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl std::ops::Sub for Frame {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Frame) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current frame and accumulated simulated seconds.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// The current frame, advanced by [`FrameClock::advance`].
    pub current_frame: Frame,
    /// Simulated seconds elapsed since frame 0.  `f64` so long runs don't drift.
    pub elapsed_secs: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame that lasted `dt_secs`.
    #[inline]
    pub fn advance(&mut self, dt_secs: f32) {
        self.current_frame = self.current_frame + 1;
        if dt_secs.is_finite() && dt_secs > 0.0 {
            self.elapsed_secs += dt_secs as f64;
        }
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_frame, self.elapsed_secs)
    }
}
