//! Property tests for the replan engine over generated days.

use std::collections::HashSet;

use proptest::prelude::*;
use replan_core::replan::BUFFER_MINUTES;
use replan_core::schedule::MINUTES_PER_DAY;
use replan_core::{
    Block, Category, Priority, ReplanAction, ReplanEngine, ReplanResult, TimeOfDay,
};

/// Non-overlapping fixed commitments laid out from 06:00.
fn arb_fixed() -> impl Strategy<Value = Vec<Block>> {
    prop::collection::vec((0u32..180, 15u32..120), 0..5).prop_map(|specs| {
        let mut cursor = 6 * 60;
        let mut out = Vec::new();
        for (i, (gap, duration)) in specs.into_iter().enumerate() {
            let start = cursor + gap;
            if start + duration > MINUTES_PER_DAY {
                break;
            }
            out.push(
                Block::new(
                    format!("Fixed {i}"),
                    Category::Social,
                    TimeOfDay::from_minutes(start).unwrap(),
                    duration,
                )
                .with_id(format!("fixed-{i}"))
                .as_fixed(),
            );
            cursor = start + duration;
        }
        out
    })
}

fn arb_flexible() -> impl Strategy<Value = Vec<Block>> {
    let spec = (
        0u32..96,
        1u32..9,
        1u8..=3,
        any::<bool>(),
        any::<bool>(),
        prop::option::of(5u32..60),
    );
    prop::collection::vec(spec, 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (quarter, quarters, ordinal, protected, completed, fallback))| {
                let duration = quarters * 15;
                let start = (quarter * 15).min(MINUTES_PER_DAY - duration);
                let mut block = Block::new(
                    format!("Task {i}"),
                    Category::Deep,
                    TimeOfDay::from_minutes(start).unwrap(),
                    duration,
                )
                .with_id(format!("flex-{i}"))
                .with_priority(Priority::try_from(ordinal).unwrap());
                if protected {
                    block = block.as_protected();
                }
                if completed {
                    block = block.mark_completed();
                }
                if let Some(fallback) = fallback.filter(|f| *f < duration) {
                    block = block.with_fallback(fallback);
                }
                block
            })
            .collect()
    })
}

fn arb_day() -> impl Strategy<Value = (Vec<Block>, TimeOfDay)> {
    (arb_fixed(), arb_flexible(), 0u32..MINUTES_PER_DAY).prop_map(|(mut blocks, flexible, now)| {
        blocks.extend(flexible);
        (blocks, TimeOfDay::from_minutes(now).unwrap())
    })
}

fn pinned_ids(result: &ReplanResult) -> HashSet<&str> {
    result
        .actions
        .iter()
        .filter(|r| r.action == ReplanAction::Protected)
        .map(|r| r.block_id.as_str())
        .collect()
}

proptest! {
    #[test]
    fn seated_blocks_never_overlap((blocks, now) in arb_day()) {
        let result = ReplanEngine::new().keep_priorities(&blocks, now);
        let pinned = pinned_ids(&result);

        let seated: Vec<&Block> = result
            .blocks
            .iter()
            .filter(|b| !pinned.contains(b.id.as_str()))
            .collect();

        for (i, a) in seated.iter().enumerate() {
            prop_assert!(a.end_minutes() <= MINUTES_PER_DAY);
            for b in &seated[i + 1..] {
                prop_assert!(!a.overlaps(b), "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn seated_blocks_keep_the_buffer((blocks, now) in arb_day()) {
        let result = ReplanEngine::new().keep_priorities(&blocks, now);
        let pinned = pinned_ids(&result);

        let mut seated: Vec<&Block> = result
            .blocks
            .iter()
            .filter(|b| !pinned.contains(b.id.as_str()))
            .collect();
        seated.sort_by_key(|b| b.start_time);

        for (i, a) in seated.iter().enumerate() {
            for b in &seated[i + 1..] {
                // Fixed commitments are taken as given
                if a.fixed && b.fixed {
                    continue;
                }
                prop_assert!(
                    b.start_minutes() >= a.end_minutes() + BUFFER_MINUTES,
                    "{} ends at {} but {} starts at {}",
                    a.id,
                    a.end_minutes(),
                    b.id,
                    b.start_minutes()
                );
            }
        }
    }

    #[test]
    fn fixed_blocks_preserved_exactly((blocks, now) in arb_day()) {
        let engine = ReplanEngine::new();
        for result in [
            engine.keep_priorities(&blocks, now),
            engine.salvage_streak(&blocks, now),
            engine.hard_reset(&blocks, now),
        ] {
            for block in blocks.iter().filter(|b| b.fixed) {
                prop_assert!(result.blocks.contains(block));
            }
        }
    }

    #[test]
    fn protected_blocks_never_skipped((blocks, now) in arb_day()) {
        let engine = ReplanEngine::new();
        for result in [
            engine.keep_priorities(&blocks, now),
            engine.salvage_streak(&blocks, now),
        ] {
            for block in blocks.iter().filter(|b| b.protected && b.is_flexible()) {
                let record = result.action_for(&block.id);
                prop_assert!(record.is_some());
                prop_assert_ne!(record.unwrap().action, ReplanAction::Skipped);
                prop_assert!(result.block(&block.id).is_some());
            }
        }
    }

    #[test]
    fn every_flexible_block_gets_one_action((blocks, now) in arb_day()) {
        let result = ReplanEngine::new().keep_priorities(&blocks, now);

        let flexible: Vec<&Block> = blocks.iter().filter(|b| b.is_flexible()).collect();
        prop_assert_eq!(result.actions.len(), flexible.len());

        let fixed = blocks.iter().filter(|b| b.fixed).count();
        let skipped = result.summary().skipped;
        prop_assert_eq!(result.blocks.len(), fixed + flexible.len() - skipped);

        let sorted = result.blocks.windows(2).all(|w| w[0].start_time <= w[1].start_time);
        prop_assert!(sorted);
    }

    #[test]
    fn salvage_streak_keeps_base_schedule((blocks, now) in arb_day()) {
        let engine = ReplanEngine::new();
        let base = engine.keep_priorities(&blocks, now);
        let salvaged = engine.salvage_streak(&blocks, now);

        prop_assert_eq!(&salvaged.blocks, &base.blocks);
        prop_assert_eq!(salvaged.minutes_behind, base.minutes_behind);
        prop_assert_eq!(salvaged.summary().skipped, 0);
    }

    #[test]
    fn hard_reset_keeps_subset_and_reports_no_lateness((blocks, now) in arb_day()) {
        let result = ReplanEngine::new().hard_reset(&blocks, now);
        prop_assert_eq!(result.minutes_behind, 0);

        for kept in &result.blocks {
            let original = blocks.iter().find(|b| b.id == kept.id);
            prop_assert!(original.is_some());
            let original = original.unwrap();
            prop_assert!(original.fixed || original.protected || original.completed);
        }

        let expected = blocks
            .iter()
            .filter(|b| b.fixed || b.protected || b.completed)
            .count();
        prop_assert_eq!(result.blocks.len(), expected);

        let relocated = blocks
            .iter()
            .filter(|b| b.protected && b.is_flexible())
            .count();
        prop_assert_eq!(result.actions.len(), blocks.len() - expected + relocated);
        prop_assert_eq!(result.summary().shrunk, relocated);
    }

    #[test]
    fn replanning_own_output_changes_nothing((blocks, now) in arb_day()) {
        let engine = ReplanEngine::new();
        let first = engine.keep_priorities(&blocks, now);
        prop_assume!(pinned_ids(&first).is_empty());

        let second = engine.keep_priorities(&first.blocks, now);
        prop_assert_eq!(&second.blocks, &first.blocks);
        for record in &second.actions {
            prop_assert_eq!(record.action, ReplanAction::Unchanged, "{} changed", record.block_id);
        }
    }

    #[test]
    fn replan_is_deterministic((blocks, now) in arb_day()) {
        let engine = ReplanEngine::new();
        prop_assert_eq!(engine.keep_priorities(&blocks, now), engine.keep_priorities(&blocks, now));
    }
}
