//! CLI configuration loaded from environment variables.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use gridworld_core::{MovementPolicy, SimConfig, TerminationMode};

/// Where frames go.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DisplayMode {
    /// Full-screen redraw in the alternate terminal screen.
    #[default]
    Tui,
    /// Frames appended to stdout one after another.
    Plain,
    /// No frames and no pacing.
    Headless,
}

/// How the episode summary is printed once the run is over.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Cosmetic delays around the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacingConfig {
    pub startup: Duration,
    pub tick: Duration,
    pub finish: Duration,
}

impl PacingConfig {
    pub const NONE: Self = Self {
        startup: Duration::ZERO,
        tick: Duration::ZERO,
        finish: Duration::ZERO,
    };
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            startup: Duration::from_millis(3000),
            tick: Duration::from_millis(10),
            finish: Duration::from_millis(5000),
        }
    }
}

/// Complete configuration of one CLI run.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub sim: SimConfig,
    /// Fixed RNG seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    pub display: DisplayMode,
    pub pacing: PacingConfig,
    pub report: ReportFormat,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    /// Variables that were set but could not be parsed; defaults were kept.
    pub rejected: Vec<&'static str>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GRIDWORLD_WIDTH` / `GRIDWORLD_HEIGHT` - Grid size (default: 6x6)
    /// - `GRIDWORLD_STEPS` - Tick budget (default: 1000)
    /// - `GRIDWORLD_SEED` - RNG seed (default: random)
    /// - `GRIDWORLD_POLICY` - `random` or `sweep-right` (default: random)
    /// - `GRIDWORLD_TERMINATION` - `freeze-on-win` or `stop-on-win` (default: freeze-on-win)
    /// - `GRIDWORLD_DISPLAY` - `tui`, `plain` or `headless` (default: tui)
    /// - `GRIDWORLD_STARTUP_MS` / `GRIDWORLD_TICK_MS` / `GRIDWORLD_FINISH_MS` - Delays (default: 3000 / 10 / 5000)
    /// - `GRIDWORLD_REPORT` - `text` or `json` (default: text)
    /// - `GRIDWORLD_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let mut reader = EnvReader::default();

        if let Some(width) = reader.read::<i32>("GRIDWORLD_WIDTH") {
            config.sim.width = width;
        }
        if let Some(height) = reader.read::<i32>("GRIDWORLD_HEIGHT") {
            config.sim.height = height;
        }
        if let Some(num_steps) = reader.read::<u64>("GRIDWORLD_STEPS") {
            config.sim.num_steps = num_steps;
        }
        if let Some(policy) = reader.read::<MovementPolicy>("GRIDWORLD_POLICY") {
            config.sim.policy = policy;
        }
        if let Some(termination) = reader.read::<TerminationMode>("GRIDWORLD_TERMINATION") {
            config.sim.termination = termination;
        }

        config.seed = reader.read::<u64>("GRIDWORLD_SEED");

        if let Some(display) = reader.read::<DisplayMode>("GRIDWORLD_DISPLAY") {
            config.display = display;
        }
        if let Some(report) = reader.read::<ReportFormat>("GRIDWORLD_REPORT") {
            config.report = report;
        }

        if config.display == DisplayMode::Headless {
            config.pacing = PacingConfig::NONE;
        } else {
            if let Some(ms) = reader.read::<u64>("GRIDWORLD_STARTUP_MS") {
                config.pacing.startup = Duration::from_millis(ms);
            }
            if let Some(ms) = reader.read::<u64>("GRIDWORLD_TICK_MS") {
                config.pacing.tick = Duration::from_millis(ms);
            }
            if let Some(ms) = reader.read::<u64>("GRIDWORLD_FINISH_MS") {
                config.pacing.finish = Duration::from_millis(ms);
            }
        }

        config.log_dir = env::var_os("GRIDWORLD_LOG_DIR").map(PathBuf::from);
        config.rejected = reader.rejected;

        config
    }
}

/// Reads typed variables and remembers the ones that failed to parse.
#[derive(Default)]
struct EnvReader {
    rejected: Vec<&'static str>,
}

impl EnvReader {
    fn read<T>(&mut self, key: &'static str) -> Option<T>
    where
        T: FromStr,
    {
        let raw = env::var(key).ok()?;
        let parsed = raw.trim().parse().ok();
        if parsed.is_none() {
            self.rejected.push(key);
        }
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_report_names_parse() {
        assert_eq!("Headless".parse::<DisplayMode>().ok(), Some(DisplayMode::Headless));
        assert_eq!("json".parse::<ReportFormat>().ok(), Some(ReportFormat::Json));
        assert!("window".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn default_pacing_matches_animation_timing() {
        let pacing = PacingConfig::default();
        assert_eq!(pacing.startup, Duration::from_secs(3));
        assert_eq!(pacing.tick, Duration::from_millis(10));
        assert_eq!(pacing.finish, Duration::from_secs(5));
    }

    #[test]
    fn unset_variables_are_not_rejected() {
        let mut reader = EnvReader::default();
        assert_eq!(reader.read::<u64>("GRIDWORLD_TEST_SURELY_UNSET_VARIABLE"), None);
        assert!(reader.rejected.is_empty());
    }
}
