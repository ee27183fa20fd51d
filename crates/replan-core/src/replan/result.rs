//! Replan output: revised blocks plus a per-block action log.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schedule::{Block, TimeOfDay};

/// What the engine did with a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplanAction {
    /// Re-seated at a different start time
    Moved,
    /// Re-seated at a shorter duration
    Shrunk,
    /// Dropped from the day
    Skipped,
    /// Re-seated exactly where it was
    Unchanged,
    /// Protected block kept in place at its fallback length because no free
    /// slot could hold it
    Protected,
}

impl ReplanAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplanAction::Moved => "moved",
            ReplanAction::Shrunk => "shrunk",
            ReplanAction::Skipped => "skipped",
            ReplanAction::Unchanged => "unchanged",
            ReplanAction::Protected => "protected",
        }
    }
}

impl fmt::Display for ReplanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the action log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub block_id: String,
    pub action: ReplanAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_start_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_start_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_duration: Option<u32>,
}

impl ActionRecord {
    /// Full-length placement: `unchanged` when the start is the same, else `moved`.
    pub fn placed(block: &Block, new_start: TimeOfDay) -> Self {
        let action = if new_start == block.start_time {
            ReplanAction::Unchanged
        } else {
            ReplanAction::Moved
        };
        Self {
            block_id: block.id.clone(),
            action,
            original_start_time: Some(block.start_time),
            new_start_time: Some(new_start),
            original_duration: None,
            new_duration: None,
        }
    }

    pub fn shrunk(block: &Block, new_start: TimeOfDay, new_duration: u32) -> Self {
        Self {
            block_id: block.id.clone(),
            action: ReplanAction::Shrunk,
            original_start_time: Some(block.start_time),
            new_start_time: Some(new_start),
            original_duration: Some(block.duration),
            new_duration: Some(new_duration),
        }
    }

    pub fn skipped(block: &Block) -> Self {
        Self {
            block_id: block.id.clone(),
            action: ReplanAction::Skipped,
            original_start_time: Some(block.start_time),
            new_start_time: None,
            original_duration: None,
            new_duration: None,
        }
    }

    pub fn pinned(block: &Block, new_duration: u32) -> Self {
        Self {
            block_id: block.id.clone(),
            action: ReplanAction::Protected,
            original_start_time: Some(block.start_time),
            new_start_time: Some(block.start_time),
            original_duration: Some(block.duration),
            new_duration: Some(new_duration),
        }
    }
}

/// Counts per action kind, as shown before the user confirms a replan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSummary {
    pub moved: usize,
    pub shrunk: usize,
    pub skipped: usize,
    pub unchanged: usize,
    pub protected: usize,
}

/// The engine's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplanResult {
    /// Fixed blocks plus placed flexible blocks, sorted by start time.
    pub blocks: Vec<Block>,
    pub actions: Vec<ActionRecord>,
    /// Total lateness of blocks whose original start preceded `now`.
    pub minutes_behind: u32,
}

impl ReplanResult {
    pub fn summary(&self) -> ActionSummary {
        let mut summary = ActionSummary::default();
        for record in &self.actions {
            match record.action {
                ReplanAction::Moved => summary.moved += 1,
                ReplanAction::Shrunk => summary.shrunk += 1,
                ReplanAction::Skipped => summary.skipped += 1,
                ReplanAction::Unchanged => summary.unchanged += 1,
                ReplanAction::Protected => summary.protected += 1,
            }
        }
        summary
    }

    /// The logged action for `block_id`, if any.
    pub fn action_for(&self, block_id: &str) -> Option<&ActionRecord> {
        self.actions.iter().find(|record| record.block_id == block_id)
    }

    pub fn block(&self, block_id: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == block_id)
    }
}
