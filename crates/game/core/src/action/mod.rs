//! Movement rules for mobile entities.
//!
//! [`valid_moves`] is the single source of truth for what a step may do;
//! [`MovementPolicy`] decides which legal move is taken.
mod movement;

pub use movement::{
    LegalMoves, MAX_LEGAL_MOVES, MovementPolicy, random_step, sweep_right, valid_moves,
};
