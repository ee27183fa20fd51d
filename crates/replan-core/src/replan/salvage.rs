//! Salvage-streak mode: prefer shrinking over dropping.

use super::config::ReplanConfig;
use super::pack::keep_priorities;
use super::result::{ReplanAction, ReplanResult};
use crate::schedule::{Block, TimeOfDay};

/// Run the default packing, then relabel every skipped, unprotected block as
/// shrunk to its salvage fallback.
///
/// Placement is not re-run: the relabeled blocks stay out of the block list,
/// and no free slot is checked for the shorter duration. Callers that need
/// the shrunk blocks seated must add them themselves.
pub(crate) fn salvage_streak(config: &ReplanConfig, blocks: &[Block], now: TimeOfDay) -> ReplanResult {
    let mut result = keep_priorities(config, blocks, now);

    for record in result
        .actions
        .iter_mut()
        .filter(|r| r.action == ReplanAction::Skipped)
    {
        let Some(block) = blocks.iter().find(|b| b.id == record.block_id) else {
            continue;
        };
        if block.protected {
            continue;
        }

        record.action = ReplanAction::Shrunk;
        record.original_duration = Some(block.duration);
        record.new_duration = Some(block.fallback_or(config.salvage_fallback_ratio));
    }

    result
}
