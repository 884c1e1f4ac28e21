//! End-of-run episode summary.
use std::io::Write;

use anyhow::{Context, Result};
use gridworld_core::{EpisodeReport, Outcome, Tick};
use serde::Serialize;

use crate::config::ReportFormat;

/// Serializable summary printed after the episode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EpisodeSummary {
    pub seed: u64,
    pub outcome: Outcome,
    pub ticks_elapsed: u64,
    pub ticks_simulated: usize,
    pub winning_tick: Option<Tick>,
    pub rewards: Vec<u8>,
}

impl EpisodeSummary {
    pub fn new(seed: u64, report: &EpisodeReport) -> Self {
        Self {
            seed,
            outcome: report.outcome,
            ticks_elapsed: report.ticks_elapsed,
            ticks_simulated: report.ticks_simulated(),
            winning_tick: report.winning_tick(),
            rewards: report.reward_values(),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W, format: ReportFormat) -> Result<()> {
        match format {
            ReportFormat::Text => {
                writeln!(out, "outcome: {}", self.outcome)?;
                writeln!(out, "seed: {}", self.seed)?;
                match self.winning_tick {
                    Some(tick) => writeln!(out, "target reached on tick {tick}")?,
                    None => writeln!(out, "target not reached")?,
                }
                writeln!(
                    out,
                    "ticks: {} elapsed, {} simulated",
                    self.ticks_elapsed, self.ticks_simulated
                )?;
            }
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)
                    .context("failed to serialize episode summary")?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridworld_core::Reward;

    fn summary() -> EpisodeSummary {
        let report = EpisodeReport {
            outcome: Outcome::Win,
            rewards: vec![Reward::NONE, Reward::NONE, Reward::REACHED],
            ticks_elapsed: 10,
        };
        EpisodeSummary::new(42, &report)
    }

    #[test]
    fn text_report_lists_outcome_and_ticks() {
        let mut out = Vec::new();
        summary().write_to(&mut out, ReportFormat::Text).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("outcome: WIN\n"));
        assert!(text.contains("target reached on tick 2"));
        assert!(text.contains("ticks: 10 elapsed, 3 simulated"));
    }

    #[test]
    fn json_report_carries_trace() {
        let mut out = Vec::new();
        summary().write_to(&mut out, ReportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["outcome"], "WIN");
        assert_eq!(value["outcome"], summary().outcome.to_string());
        assert_eq!(value["winning_tick"], 2);
        assert_eq!(value["rewards"], serde_json::json!([0, 0, 1]));
    }
}
