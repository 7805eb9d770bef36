//! Plain data row types written by output backends.

/// One live unit at a snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentFrameRow {
    pub frame:    u64,
    pub agent_id: u32,
    pub team:     u8,
    pub x:        f32,
    pub z:        f32,
    pub yaw:      f32,
    pub moving:   bool,
    /// Committed destination; `-1` for both while idle.
    pub dest_col: i32,
    pub dest_row: i32,
}

/// Summary of one planning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanPassRow {
    pub frame:     u64,
    pub assigned:  u64,
    pub moving:    u64,
    pub relocated: u64,
    pub degraded:  u64,
}
