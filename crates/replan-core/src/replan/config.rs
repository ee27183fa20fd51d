//! Tuning constants for the replan engine.

use serde::{Deserialize, Serialize};

use crate::schedule::MINUTES_PER_DAY;

/// Gap left after every placed block before the next may start.
pub const BUFFER_MINUTES: u32 = 5;
/// Placement granularity; `now` is rounded up to this boundary.
pub const QUANTUM_MINUTES: u32 = 15;
/// Share of the duration a protected block keeps when no explicit fallback is set.
pub const PROTECTED_FALLBACK_RATIO: f64 = 0.6;
/// Share of the duration kept by salvage-streak and hard-reset shrinking.
pub const SALVAGE_FALLBACK_RATIO: f64 = 0.5;
/// A block must be strictly later than this to count as drifting.
pub const DRIFT_THRESHOLD_MINUTES: u32 = 10;
/// Hard reset relocates protected work this far past `now`.
pub const HARD_RESET_OFFSET_MINUTES: u32 = 30;
/// End of the packing window.
pub const DAY_END_MINUTES: u32 = MINUTES_PER_DAY;

/// Engine configuration.
///
/// Defaults come from the constants above. Stored under `[engine]` in the
/// TOML config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplanConfig {
    #[serde(default = "default_buffer_minutes")]
    pub buffer_minutes: u32,
    #[serde(default = "default_quantum_minutes")]
    pub quantum_minutes: u32,
    #[serde(default = "default_protected_fallback_ratio")]
    pub protected_fallback_ratio: f64,
    #[serde(default = "default_salvage_fallback_ratio")]
    pub salvage_fallback_ratio: f64,
    #[serde(default = "default_drift_threshold_minutes")]
    pub drift_threshold_minutes: u32,
    #[serde(default = "default_hard_reset_offset_minutes")]
    pub hard_reset_offset_minutes: u32,
}

fn default_buffer_minutes() -> u32 {
    BUFFER_MINUTES
}
fn default_quantum_minutes() -> u32 {
    QUANTUM_MINUTES
}
fn default_protected_fallback_ratio() -> f64 {
    PROTECTED_FALLBACK_RATIO
}
fn default_salvage_fallback_ratio() -> f64 {
    SALVAGE_FALLBACK_RATIO
}
fn default_drift_threshold_minutes() -> u32 {
    DRIFT_THRESHOLD_MINUTES
}
fn default_hard_reset_offset_minutes() -> u32 {
    HARD_RESET_OFFSET_MINUTES
}

impl Default for ReplanConfig {
    fn default() -> Self {
        Self {
            buffer_minutes: BUFFER_MINUTES,
            quantum_minutes: QUANTUM_MINUTES,
            protected_fallback_ratio: PROTECTED_FALLBACK_RATIO,
            salvage_fallback_ratio: SALVAGE_FALLBACK_RATIO,
            drift_threshold_minutes: DRIFT_THRESHOLD_MINUTES,
            hard_reset_offset_minutes: HARD_RESET_OFFSET_MINUTES,
        }
    }
}
