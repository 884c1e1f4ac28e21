//! Wall-clock pacing for the animation.
use std::thread;
use std::time::Duration;

use gridworld_core::{Pacer, PacingPoint};

use crate::config::PacingConfig;

/// Sleeps the current thread for the configured delay at each pacing point.
#[derive(Clone, Copy, Debug)]
pub struct SleepPacer {
    config: PacingConfig,
}

impl SleepPacer {
    pub fn new(config: PacingConfig) -> Self {
        Self { config }
    }

    pub fn delay(&self, point: PacingPoint) -> Duration {
        match point {
            PacingPoint::Startup => self.config.startup,
            PacingPoint::Tick => self.config.tick,
            PacingPoint::Finish => self.config.finish,
        }
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self, point: PacingPoint) {
        let delay = self.delay(point);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}
