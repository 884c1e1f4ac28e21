use std::fmt;

use crate::reward::Reward;
use crate::state::Tick;

/// Episode state machine: `Init → Running → Won | Lost`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EpisodePhase {
    #[default]
    Init,
    Running,
    Won,
    Lost,
}

impl EpisodePhase {
    pub fn can_transition_to(self, next: EpisodePhase) -> bool {
        matches!(
            (self, next),
            (EpisodePhase::Init, EpisodePhase::Running)
                | (EpisodePhase::Running, EpisodePhase::Won)
                | (EpisodePhase::Running, EpisodePhase::Lost)
        )
    }

    /// Terminal outcome, if the phase is terminal.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            EpisodePhase::Won => Some(Outcome::Win),
            EpisodePhase::Lost => Some(Outcome::Lose),
            EpisodePhase::Init | EpisodePhase::Running => None,
        }
    }
}

/// Terminal result of an episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Win,
    Lose,
}

/// What the loop does once the target has been reached.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum TerminationMode {
    /// Keep counting ticks until the budget is spent, re-announcing the win
    /// on each remaining tick without simulating anything.
    #[default]
    FreezeOnWin,
    /// End the loop on the tick that produced the win.
    StopOnWin,
}

/// Status shown alongside each rendered frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusLabel {
    Init,
    Tick(Tick),
    Win,
    Lose,
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLabel::Init => f.write_str("INIT"),
            StatusLabel::Tick(tick) => write!(f, "{tick}"),
            StatusLabel::Win => f.write_str("WIN"),
            StatusLabel::Lose => f.write_str("LOSE"),
        }
    }
}

/// Result of [`super::EpisodeEngine::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpisodeReport {
    pub outcome: Outcome,
    /// One reward per simulated tick; frozen ticks after a win add nothing.
    pub rewards: Vec<Reward>,
    /// Ticks the loop went through, simulated or frozen.
    pub ticks_elapsed: u64,
}

impl EpisodeReport {
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }

    pub fn ticks_simulated(&self) -> usize {
        self.rewards.len()
    }

    /// Tick on which the target was first reached.
    pub fn winning_tick(&self) -> Option<Tick> {
        self.rewards
            .iter()
            .position(|reward| reward.is_reached())
            .map(|index| Tick(index as u64))
    }

    /// Reward trace as plain integers.
    pub fn reward_values(&self) -> Vec<u8> {
        self.rewards.iter().map(|reward| reward.value()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_forward_transitions_are_allowed() {
        assert!(EpisodePhase::Init.can_transition_to(EpisodePhase::Running));
        assert!(EpisodePhase::Running.can_transition_to(EpisodePhase::Won));
        assert!(EpisodePhase::Running.can_transition_to(EpisodePhase::Lost));
        assert!(!EpisodePhase::Init.can_transition_to(EpisodePhase::Won));
        assert!(!EpisodePhase::Won.can_transition_to(EpisodePhase::Lost));
    }

    #[test]
    fn labels_render_like_the_status_line() {
        assert_eq!(StatusLabel::Init.to_string(), "INIT");
        assert_eq!(StatusLabel::Tick(Tick(12)).to_string(), "12");
        assert_eq!(StatusLabel::Win.to_string(), "WIN");
        assert_eq!(Outcome::Lose.to_string(), "LOSE");
    }

    #[test]
    fn termination_mode_parses() {
        assert_eq!(
            "stop-on-win".parse::<TerminationMode>().ok(),
            Some(TerminationMode::StopOnWin)
        );
    }
}
