use clap::Subcommand;
use replan_core::{
    validate_blocks, Block, BlockFile, Category, Priority, TimeOfDay, ValidationError,
};

#[derive(Subcommand)]
pub enum BlockAction {
    /// List the day's blocks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a block
    Add {
        /// Block title
        title: String,
        /// Start time (HH:MM)
        #[arg(long)]
        start: TimeOfDay,
        /// Duration in minutes
        #[arg(long)]
        duration: u32,
        /// deep, admin, health, learning, social, errand or other
        #[arg(long, default_value = "other")]
        category: Category,
        /// Priority (1 = high, 3 = low)
        #[arg(long, default_value = "2", value_parser = clap::value_parser!(u8).range(1..=3))]
        priority: u8,
        /// Immovable commitment
        #[arg(long)]
        fixed: bool,
        /// Never dropped, only shrunk
        #[arg(long)]
        protected: bool,
        /// Minimum minutes to keep when shrinking
        #[arg(long)]
        fallback: Option<u32>,
        /// Explicit identifier (default: generated)
        #[arg(long)]
        id: Option<String>,
    },
    /// Mark a block completed
    Complete {
        /// Block ID
        id: String,
    },
    /// Remove a block
    Remove {
        /// Block ID
        id: String,
    },
}

pub fn run(action: BlockAction, store: &BlockFile) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BlockAction::List { json } => {
            let mut blocks = store.load()?;
            blocks.sort_by_key(|b| b.start_time);

            if json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            } else if blocks.is_empty() {
                println!("No blocks.");
            } else {
                for block in &blocks {
                    let end = TimeOfDay::from_minutes_wrapping(block.end_minutes());
                    let mut flags = Vec::new();
                    if block.fixed {
                        flags.push("fixed");
                    }
                    if block.protected {
                        flags.push("protected");
                    }
                    if block.completed {
                        flags.push("done");
                    }
                    let flags = if flags.is_empty() {
                        String::new()
                    } else {
                        format!(" [{}]", flags.join(", "))
                    };
                    println!(
                        "{}-{} P{} {:<8} {}{flags}  ({})",
                        block.start_time,
                        end,
                        block.priority.ordinal(),
                        block.category,
                        block.title,
                        block.id
                    );
                }
            }
        }
        BlockAction::Add {
            title,
            start,
            duration,
            category,
            priority,
            fixed,
            protected,
            fallback,
            id,
        } => {
            let mut block = Block::new(title, category, start, duration)
                .with_priority(Priority::try_from(priority)?);
            if let Some(id) = id {
                block = block.with_id(id);
            }
            if let Some(minutes) = fallback {
                block = block.with_fallback(minutes);
            }
            if fixed {
                block = block.as_fixed();
            }
            if protected {
                block = block.as_protected();
            }
            block.validate()?;

            let mut blocks = store.load()?;
            if blocks.iter().any(|b| b.id == block.id) {
                return Err(ValidationError::DuplicateId(block.id).into());
            }
            blocks.push(block.clone());
            validate_blocks(&blocks)?;
            store.save(&blocks)?;

            println!("Block added: {}", block.id);
            println!("  {} at {} for {}m", block.title, block.start_time, block.duration);
        }
        BlockAction::Complete { id } => {
            let block = store.update(&id, |b| b.completed = true)?;
            println!("Block completed: {}", block.title);
        }
        BlockAction::Remove { id } => {
            let block = store.remove(&id)?;
            println!("Block removed: {}", block.title);
        }
    }
    Ok(())
}
