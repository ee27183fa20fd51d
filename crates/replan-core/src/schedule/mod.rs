//! Schedule types: blocks and time of day.
//!
//! Blocks are authored by the data-entry layer and handed to the replan
//! engine as an immutable snapshot. Time of day crosses the wire as
//! `HH:MM` and is held internally as minutes since midnight.

mod block;
mod time;

pub use block::{validate_blocks, Block, Category, Priority};
pub use time::{round_up_to_quantum, TimeOfDay, MINUTES_PER_DAY};
