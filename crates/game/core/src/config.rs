use crate::action::MovementPolicy;
use crate::engine::TerminationMode;

/// Simulation constants and tunable episode parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Grid width in cells.
    pub width: i32,
    /// Grid height in cells.
    pub height: i32,
    /// Tick budget of one episode.
    pub num_steps: u64,
    /// What the episode loop does after the first win.
    pub termination: TerminationMode,
    /// How mobile entities choose their next cell.
    pub policy: MovementPolicy,
}

impl SimConfig {
    // ===== rendering symbols =====
    pub const EMPTY_SYMBOL: u8 = 0;
    pub const ACTOR_SYMBOL: u8 = 1;
    pub const TARGET_SYMBOL: u8 = 9;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WIDTH: i32 = 6;
    pub const DEFAULT_HEIGHT: i32 = 6;
    pub const DEFAULT_NUM_STEPS: u64 = 1000;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            num_steps: Self::DEFAULT_NUM_STEPS,
            termination: TerminationMode::default(),
            policy: MovementPolicy::default(),
        }
    }

    pub fn with_dimensions(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_num_steps(mut self, num_steps: u64) -> Self {
        self.num_steps = num_steps;
        self
    }

    pub fn with_termination(mut self, termination: TerminationMode) -> Self {
        self.termination = termination;
        self
    }

    pub fn with_policy(mut self, policy: MovementPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
