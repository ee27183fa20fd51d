//! Timeline working state for replanning.
//!
//! This module provides:
//! - Half-open minute intervals within a single day
//! - Free-slot detection around occupied intervals
//! - Chronological first-fit slot claiming

mod slot;

pub use slot::{FreeSlots, TimeSlot};
