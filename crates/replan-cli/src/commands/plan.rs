//! Replan and drift commands.

use clap::Subcommand;
use replan_core::{
    validate_blocks, Block, BlockFile, Config, ReplanEngine, ReplanMode, ReplanResult, TimeOfDay,
};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Replan the rest of the day
    Run {
        /// keep-priorities, salvage-streak or hard-reset (default from config)
        #[arg(long)]
        mode: Option<ReplanMode>,
        /// Clock override as HH:MM (default: now)
        #[arg(long)]
        at: Option<TimeOfDay>,
        /// Replace the stored blocks with the replanned day
        #[arg(long)]
        apply: bool,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report the first flexible block running late
    Drift {
        /// Clock override as HH:MM (default: now)
        #[arg(long)]
        at: Option<TimeOfDay>,
    },
}

pub fn run(action: PlanAction, store: &BlockFile) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let engine = ReplanEngine::with_config(config.engine.clone());

    match action {
        PlanAction::Run {
            mode,
            at,
            apply,
            json,
        } => {
            let blocks = store.load()?;
            validate_blocks(&blocks)?;

            let mode = mode.unwrap_or(config.default_mode);
            let now = at.unwrap_or_else(TimeOfDay::now);
            let result = engine.replan(mode, &blocks, now);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(mode, now, &blocks, &result);
            }

            if apply {
                store.save(&result.blocks)?;
                if !json {
                    println!("schedule updated");
                }
            }
        }
        PlanAction::Drift { at } => {
            let blocks = store.load()?;
            let now = at.unwrap_or_else(TimeOfDay::now);
            match engine.detect_drift(&blocks, now) {
                Some(id) => println!("{id}"),
                None => println!("on track"),
            }
        }
    }
    Ok(())
}

fn print_result(mode: ReplanMode, now: TimeOfDay, original: &[Block], result: &ReplanResult) {
    let summary = result.summary();
    println!("{mode} at {now}: {} min behind", result.minutes_behind);
    println!(
        "moved {} | shrunk {} | skipped {} | unchanged {} | protected {}",
        summary.moved, summary.shrunk, summary.skipped, summary.unchanged, summary.protected
    );

    for record in &result.actions {
        let title = original
            .iter()
            .find(|b| b.id == record.block_id)
            .map(|b| b.title.as_str())
            .unwrap_or(&record.block_id);

        let when = match (record.original_start_time, record.new_start_time) {
            (Some(from), Some(to)) if from != to => format!("{from} -> {to}"),
            (_, Some(to)) => to.to_string(),
            (Some(from), None) => from.to_string(),
            (None, None) => String::new(),
        };
        let length = match (record.original_duration, record.new_duration) {
            (Some(from), Some(to)) => format!(" ({from}m -> {to}m)"),
            (None, Some(to)) => format!(" ({to}m)"),
            _ => String::new(),
        };

        println!("  {:<10} {title} {when}{length}", record.action.as_str());
    }

    println!("day:");
    for block in &result.blocks {
        let end = TimeOfDay::from_minutes_wrapping(block.end_minutes());
        let marker = if block.fixed { " [fixed]" } else { "" };
        println!("  {}-{} {}{marker}", block.start_time, end, block.title);
    }
}
