//! Hard-reset mode: clear the day down to what cannot go.

use tracing::{debug, warn};

use super::config::{ReplanConfig, DAY_END_MINUTES};
use super::result::{ActionRecord, ReplanResult};
use crate::schedule::{round_up_to_quantum, Block, TimeOfDay};
use crate::timeline::{FreeSlots, TimeSlot};

/// Keep fixed, protected and completed blocks; drop the rest.
///
/// Incomplete protected blocks are shrunk to their salvage fallback and
/// re-seated first-fit, in input order, in the free time that starts
/// `hard_reset_offset_minutes` after the rounded `now`. Fixed and completed
/// blocks stay where they are and are kept clear by the usual buffer.
///
/// When the rest of the day cannot hold a relocated block it is chained
/// after the offset regardless, wrapping past midnight, and may then overlap
/// other blocks. Every relocation is logged as `shrunk`. Lateness is not
/// reported.
pub(crate) fn hard_reset(config: &ReplanConfig, blocks: &[Block], now: TimeOfDay) -> ReplanResult {
    let now = round_up_to_quantum(now.minutes(), config.quantum_minutes);
    let restart = now.saturating_add(config.hard_reset_offset_minutes);

    let occupied: Vec<TimeSlot> = blocks
        .iter()
        .filter(|b| b.fixed || b.completed)
        .map(|b| TimeSlot::new(b.start_minutes(), b.end_minutes()))
        .collect();
    let mut free = FreeSlots::detect(&occupied, restart, DAY_END_MINUTES, config.buffer_minutes);
    let mut overflow_start = restart;

    let mut kept = Vec::new();
    let mut actions = Vec::new();

    for block in blocks {
        if block.fixed || block.completed {
            kept.push(block.clone());
        } else if block.protected {
            let duration = block.fallback_or(config.salvage_fallback_ratio);
            let start = match free.claim(duration) {
                Some(start) => start,
                None => {
                    let start = overflow_start;
                    warn!(
                        block_id = %block.id,
                        start = %TimeOfDay::from_minutes_wrapping(start),
                        "no free slot left today, relocating regardless"
                    );
                    overflow_start = overflow_start
                        .saturating_add(duration)
                        .saturating_add(config.buffer_minutes);
                    start
                }
            };
            let start = TimeOfDay::from_minutes_wrapping(start);
            debug!(block_id = %block.id, to = %start, to_minutes = duration, "protected block relocated");

            actions.push(ActionRecord::shrunk(block, start, duration));
            kept.push(Block {
                start_time: start,
                duration,
                ..block.clone()
            });
        } else {
            actions.push(ActionRecord::skipped(block));
        }
    }

    kept.sort_by_key(|b| b.start_time);

    ReplanResult {
        blocks: kept,
        actions,
        minutes_behind: 0,
    }
}
