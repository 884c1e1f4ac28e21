//! Episode loop.
//!
//! The [`EpisodeEngine`] borrows a [`Grid`] for the duration of one episode,
//! steps every entity once per tick, scores the result with
//! [`evaluate_reward`] and walks the [`EpisodePhase`] state machine. Frames and
//! pauses go out through the [`Renderer`] and [`Pacer`] hooks; nothing they do
//! feeds back into the simulation.

mod hook;
mod phase;

pub use hook::{NoPacing, NoopRenderer, Pacer, PacingPoint, Renderer};
pub use phase::{EpisodePhase, EpisodeReport, Outcome, StatusLabel, TerminationMode};

use rand::Rng;
use tracing::{debug, info, trace};

use crate::action::MovementPolicy;
use crate::config::SimConfig;
use crate::reward::{Reward, evaluate_reward};
use crate::state::{Grid, Tick};

/// Drives one episode over a borrowed grid.
pub struct EpisodeEngine<'a> {
    grid: &'a mut Grid,
    policy: MovementPolicy,
    termination: TerminationMode,
    phase: EpisodePhase,
}

impl<'a> EpisodeEngine<'a> {
    /// Creates an engine with the default policy and termination mode.
    pub fn new(grid: &'a mut Grid) -> Self {
        Self {
            grid,
            policy: MovementPolicy::default(),
            termination: TerminationMode::default(),
            phase: EpisodePhase::Init,
        }
    }

    /// Creates an engine using the policy and termination mode of `config`.
    pub fn from_config(grid: &'a mut Grid, config: &SimConfig) -> Self {
        Self::new(grid)
            .with_policy(config.policy)
            .with_termination(config.termination)
    }

    pub fn with_policy(mut self, policy: MovementPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_termination(mut self, termination: TerminationMode) -> Self {
        self.termination = termination;
        self
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Runs the episode for at most `num_steps` ticks.
    ///
    /// Every tick before the first win steps all entities, records a reward
    /// and renders a frame labelled with the tick. Once the target is reached
    /// the grid is frozen: under [`TerminationMode::FreezeOnWin`] each remaining
    /// tick only renders a `WIN` frame; under [`TerminationMode::StopOnWin`]
    /// one `WIN` frame is rendered and the loop ends. An exhausted budget
    /// renders a `LOSE` frame.
    pub fn run<R>(
        &mut self,
        num_steps: u64,
        rng: &mut R,
        renderer: &mut dyn Renderer,
        pacer: &mut dyn Pacer,
    ) -> EpisodeReport
    where
        R: Rng + ?Sized,
    {
        self.phase = EpisodePhase::Init;
        info!(
            num_steps,
            policy = %self.policy,
            termination = %self.termination,
            entities = self.grid.len(),
            "episode started"
        );

        renderer.render(self.grid(), StatusLabel::Init);
        pacer.pause(PacingPoint::Startup);
        self.transition(EpisodePhase::Running);

        let mut rewards = Vec::new();
        let mut ticks_elapsed = 0;

        for index in 0..num_steps {
            ticks_elapsed += 1;

            if self.phase == EpisodePhase::Won {
                renderer.render(self.grid(), StatusLabel::Win);
                continue;
            }

            let tick = Tick(index);
            renderer.clear();
            let reward = self.tick(tick, rng);
            rewards.push(reward);
            renderer.render(self.grid(), StatusLabel::Tick(tick));
            pacer.pause(PacingPoint::Tick);

            if reward.is_reached() {
                info!(%tick, "target reached");
                self.transition(EpisodePhase::Won);

                if self.termination == TerminationMode::StopOnWin {
                    renderer.render(self.grid(), StatusLabel::Win);
                    break;
                }
            }
        }

        if self.phase == EpisodePhase::Running {
            info!(ticks = ticks_elapsed, "step budget exhausted");
            self.transition(EpisodePhase::Lost);
            renderer.render(self.grid(), StatusLabel::Lose);
        }
        pacer.pause(PacingPoint::Finish);

        let outcome = match self.phase.outcome() {
            Some(outcome) => outcome,
            None => unreachable!("episode loop ended in non-terminal phase {:?}", self.phase),
        };

        EpisodeReport {
            outcome,
            rewards,
            ticks_elapsed,
        }
    }

    /// Advances every entity once and scores the result.
    fn tick<R>(&mut self, tick: Tick, rng: &mut R) -> Reward
    where
        R: Rng + ?Sized,
    {
        self.grid.step_all(self.policy, rng);
        let reward = evaluate_reward(&*self.grid);
        trace!(%tick, %reward, "tick simulated");
        reward
    }

    fn transition(&mut self, next: EpisodePhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "illegal episode transition {:?} -> {:?}",
            self.phase,
            next
        );
        debug!(from = ?self.phase, to = ?next, "episode phase changed");
        self.phase = next;
    }
}

/// Runs a headless episode with the default policy and termination mode.
///
/// `num_steps = 0` yields [`Outcome::Lose`] with an empty trace.
pub fn run_episode<R>(grid: &mut Grid, num_steps: u64, rng: &mut R) -> EpisodeReport
where
    R: Rng + ?Sized,
{
    EpisodeEngine::new(grid).run(num_steps, rng, &mut NoopRenderer, &mut NoPacing)
}
