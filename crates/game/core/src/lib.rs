//! Discrete-time grid simulation of an actor searching for a target.
//!
//! `gridworld-core` holds the rules: the entity model and [`state::Grid`],
//! legal-move enumeration in [`action`], the reward signal in [`reward`], and
//! the episode state machine in [`engine`]. It performs no I/O; rendering and
//! pacing are supplied by the caller through [`engine::Renderer`] and
//! [`engine::Pacer`], and all randomness comes from a caller-provided
//! [`rand::Rng`].
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod reward;
pub mod scenario;
pub mod state;

pub use action::{LegalMoves, MovementPolicy, random_step, valid_moves};
pub use config::SimConfig;
pub use engine::{
    EpisodeEngine, EpisodePhase, EpisodeReport, NoPacing, NoopRenderer, Outcome, Pacer,
    PacingPoint, Renderer, StatusLabel, TerminationMode, run_episode,
};
pub use error::{ErrorSeverity, SimError};
pub use reward::{Reward, evaluate_reward};
pub use state::{
    Entity, EntityId, EntityKind, Grid, GridDimensions, GridError, GridSnapshot, Position, Symbol,
    Tick,
};
