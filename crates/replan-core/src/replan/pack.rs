//! Keep-priorities packing: the default replan mode.
//!
//! Fixed blocks stay where they are. Incomplete flexible blocks are re-seated
//! into the free time left after `now`, most important first, using
//! chronological first-fit.

use std::cmp::Ordering;

use tracing::{debug, warn};

use super::config::{ReplanConfig, DAY_END_MINUTES};
use super::result::{ActionRecord, ReplanResult};
use crate::schedule::{round_up_to_quantum, Block, TimeOfDay};
use crate::timeline::{FreeSlots, TimeSlot};

pub(crate) fn keep_priorities(config: &ReplanConfig, blocks: &[Block], now: TimeOfDay) -> ReplanResult {
    let now = round_up_to_quantum(now.minutes(), config.quantum_minutes);

    let mut minutes_behind = 0;
    let mut placed = Vec::with_capacity(blocks.len());
    let mut actions = Vec::new();

    let fixed: Vec<&Block> = blocks.iter().filter(|b| b.fixed).collect();
    for block in &fixed {
        minutes_behind += lateness(block, now);
        placed.push((*block).clone());
    }

    let occupied: Vec<TimeSlot> = fixed
        .iter()
        .map(|b| TimeSlot::new(b.start_minutes(), b.end_minutes()))
        .collect();
    let mut free = FreeSlots::detect(&occupied, now, DAY_END_MINUTES, config.buffer_minutes);

    let mut flexible: Vec<&Block> = blocks.iter().filter(|b| b.is_flexible()).collect();
    flexible.sort_by(|a, b| placement_order(a, b));

    for block in flexible {
        minutes_behind += lateness(block, now);

        if let Some(start) = free.claim(block.duration) {
            let start = TimeOfDay::from_minutes_wrapping(start);
            debug!(block_id = %block.id, from = %block.start_time, to = %start, "block placed");
            actions.push(ActionRecord::placed(block, start));
            placed.push(Block {
                start_time: start,
                ..block.clone()
            });
            continue;
        }

        if !block.protected {
            debug!(block_id = %block.id, duration = block.duration, "no slot fits, skipping");
            actions.push(ActionRecord::skipped(block));
            continue;
        }

        let fallback = block.fallback_or(config.protected_fallback_ratio);
        match free.claim(fallback) {
            Some(start) => {
                let start = TimeOfDay::from_minutes_wrapping(start);
                debug!(
                    block_id = %block.id,
                    to = %start,
                    from_minutes = block.duration,
                    to_minutes = fallback,
                    "protected block shrunk"
                );
                actions.push(ActionRecord::shrunk(block, start, fallback));
                placed.push(Block {
                    start_time: start,
                    duration: fallback,
                    ..block.clone()
                });
            }
            None => {
                // Day is saturated; a protected block is never dropped.
                warn!(
                    block_id = %block.id,
                    fallback,
                    free_minutes = free.total_minutes(),
                    "no slot for protected block, keeping it in place"
                );
                actions.push(ActionRecord::pinned(block, fallback));
                placed.push(Block {
                    duration: fallback,
                    ..block.clone()
                });
            }
        }
    }

    placed.sort_by_key(|b| b.start_time);

    ReplanResult {
        blocks: placed,
        actions,
        minutes_behind,
    }
}

/// Priority ordinal, then intended start, then shortest first.
pub(crate) fn placement_order(a: &Block, b: &Block) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.start_time.cmp(&b.start_time))
        .then_with(|| a.duration.cmp(&b.duration))
}

pub(crate) fn lateness(block: &Block, now: u32) -> u32 {
    now.saturating_sub(block.start_minutes())
}
