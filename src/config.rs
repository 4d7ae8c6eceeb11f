use std::time::Duration;

pub const WINDOW_TITLE: &str = "BREAKOUT";

pub const FRAMES_PER_SECOND: u32 = 60;

/// Nominal simulation step. The simulation always advances by exactly this amount per tick,
/// independent of the time that really passed.
pub const DELTA_TIME_SEC: f32 = 1.0 / FRAMES_PER_SECOND as f32;

/// Wall-clock pacing of the frame loop
pub const TIME_GRANULARITY: Duration = Duration::from_nanos(1_000_000_000 / FRAMES_PER_SECOND as u64);

/// Runtime switches of the game rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakoutConfig {
    /// A new round starts paused, waiting for the player to resume
    pub pause_after_reset: bool,
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self {
            pause_after_reset: true,
        }
    }
}
