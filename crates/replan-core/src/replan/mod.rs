//! Replan engine for drifted days.
//!
//! This module provides:
//! - Keep-priorities packing of flexible blocks around fixed commitments
//! - Salvage-streak relabeling (shrink instead of skip)
//! - Hard-reset clearing down to fixed, protected and completed work
//! - Drift detection to decide whether a replan is worth offering
//!
//! Every entry point is a pure function of the block snapshot and a clock
//! reading. Inputs are never mutated; results are new block values.

mod config;
mod drift;
mod hard_reset;
mod pack;
mod result;
mod salvage;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use config::{
    ReplanConfig, BUFFER_MINUTES, DAY_END_MINUTES, DRIFT_THRESHOLD_MINUTES,
    HARD_RESET_OFFSET_MINUTES, PROTECTED_FALLBACK_RATIO, QUANTUM_MINUTES, SALVAGE_FALLBACK_RATIO,
};
pub use result::{ActionRecord, ActionSummary, ReplanAction, ReplanResult};

use crate::error::ValidationError;
use crate::schedule::{Block, TimeOfDay};

/// Replan policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReplanMode {
    /// Re-seat by priority, shrink protected work, skip the rest
    #[default]
    KeepPriorities,
    /// As keep-priorities, but report skipped work as shrunk
    SalvageStreak,
    /// Keep only fixed, protected and completed blocks
    HardReset,
}

impl ReplanMode {
    pub const ALL: [ReplanMode; 3] = [
        ReplanMode::KeepPriorities,
        ReplanMode::SalvageStreak,
        ReplanMode::HardReset,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReplanMode::KeepPriorities => "keep-priorities",
            ReplanMode::SalvageStreak => "salvage-streak",
            ReplanMode::HardReset => "hard-reset",
        }
    }
}

impl fmt::Display for ReplanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplanMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReplanMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| ValidationError::UnknownMode(s.to_string()))
    }
}

/// Stateless replan engine holding only its tuning.
#[derive(Debug, Clone, Default)]
pub struct ReplanEngine {
    config: ReplanConfig,
}

impl ReplanEngine {
    /// Create an engine with the default constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: ReplanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReplanConfig {
        &self.config
    }

    /// Replan the rest of the day under `mode`.
    pub fn replan(&self, mode: ReplanMode, blocks: &[Block], now: TimeOfDay) -> ReplanResult {
        let result = match mode {
            ReplanMode::KeepPriorities => pack::keep_priorities(&self.config, blocks, now),
            ReplanMode::SalvageStreak => salvage::salvage_streak(&self.config, blocks, now),
            ReplanMode::HardReset => hard_reset::hard_reset(&self.config, blocks, now),
        };

        let summary = result.summary();
        info!(
            %mode,
            %now,
            blocks = blocks.len(),
            moved = summary.moved,
            shrunk = summary.shrunk,
            skipped = summary.skipped,
            minutes_behind = result.minutes_behind,
            "replan generated"
        );

        result
    }

    pub fn keep_priorities(&self, blocks: &[Block], now: TimeOfDay) -> ReplanResult {
        self.replan(ReplanMode::KeepPriorities, blocks, now)
    }

    pub fn salvage_streak(&self, blocks: &[Block], now: TimeOfDay) -> ReplanResult {
        self.replan(ReplanMode::SalvageStreak, blocks, now)
    }

    pub fn hard_reset(&self, blocks: &[Block], now: TimeOfDay) -> ReplanResult {
        self.replan(ReplanMode::HardReset, blocks, now)
    }

    /// Identifier of the first flexible block running late, if any.
    pub fn detect_drift<'a>(&self, blocks: &'a [Block], now: TimeOfDay) -> Option<&'a str> {
        drift::first_drifting(&self.config, blocks, now).map(|b| b.id.as_str())
    }
}

/// Keep-priorities replan with default tuning. `None` reads the local clock.
pub fn generate_replan(blocks: &[Block], now: Option<TimeOfDay>) -> ReplanResult {
    ReplanEngine::new().keep_priorities(blocks, now.unwrap_or_else(TimeOfDay::now))
}

/// Salvage-streak replan with default tuning. `None` reads the local clock.
pub fn generate_salvage_streak_replan(blocks: &[Block], now: Option<TimeOfDay>) -> ReplanResult {
    ReplanEngine::new().salvage_streak(blocks, now.unwrap_or_else(TimeOfDay::now))
}

/// Hard-reset replan with default tuning. `None` reads the local clock.
pub fn generate_hard_reset_replan(blocks: &[Block], now: Option<TimeOfDay>) -> ReplanResult {
    ReplanEngine::new().hard_reset(blocks, now.unwrap_or_else(TimeOfDay::now))
}

/// Drift check with default tuning. `None` reads the local clock.
pub fn check_for_drift(blocks: &[Block], now: Option<TimeOfDay>) -> Option<String> {
    ReplanEngine::new()
        .detect_drift(blocks, now.unwrap_or_else(TimeOfDay::now))
        .map(str::to_string)
}
