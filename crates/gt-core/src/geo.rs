//! World-space point type.
//!
//! The board lies on the XZ plane; `y` is height and stays at the configured
//! ground level for every position this crate produces.

/// A world-space position stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPos {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance in 3-D.
    #[inline]
    pub fn distance(self, other: WorldPos) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance projected onto the ground plane (ignores `y`).
    #[inline]
    pub fn planar_distance(self, other: WorldPos) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Move `step` units toward `target` along the straight line.
    ///
    /// The caller guarantees `0 < step < self.distance(target)`.
    #[inline]
    pub fn step_toward(self, target: WorldPos, step: f32) -> WorldPos {
        let d = self.distance(target);
        if d <= f32::EPSILON {
            return target;
        }
        let k = step / d;
        WorldPos {
            x: self.x + (target.x - self.x) * k,
            y: self.y + (target.y - self.y) * k,
            z: self.z + (target.z - self.z) * k,
        }
    }

    /// Yaw (radians about +Y) that faces from `self` toward `target`.
    ///
    /// Zero faces +Z.  Returns `None` when the two points coincide on the
    /// ground plane.
    #[inline]
    pub fn yaw_toward(self, target: WorldPos) -> Option<f32> {
        let dx = target.x - self.x;
        let dz = target.z - self.z;
        if dx.abs() <= f32::EPSILON && dz.abs() <= f32::EPSILON {
            return None;
        }
        Some(dx.atan2(dz))
    }
}

impl std::fmt::Display for WorldPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
