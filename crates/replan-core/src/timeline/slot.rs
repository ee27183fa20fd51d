//! Free-slot detection between occupied intervals.
//!
//! Finds the unscheduled spans of a day that flexible blocks can be packed
//! into, and hands them out first-fit in chronological order.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` interval in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: u32,
    pub end: u32,
}

impl TimeSlot {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Length in minutes; zero for an exhausted slot.
    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if this slot can hold a block of the given length
    pub fn can_fit(&self, minutes: u32) -> bool {
        self.duration() >= minutes
    }

    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Chronologically ordered free time remaining in a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeSlots {
    slots: Vec<TimeSlot>,
    buffer: u32,
}

impl FreeSlots {
    /// Find the complement of `occupied` within `[window_start, window_end)`.
    ///
    /// Every occupied interval is padded by `buffer` minutes on both sides,
    /// so anything seated in a free slot stays clear of it.
    pub fn detect(occupied: &[TimeSlot], window_start: u32, window_end: u32, buffer: u32) -> Self {
        let mut sorted: Vec<TimeSlot> = occupied.to_vec();
        sorted.sort_by_key(|slot| slot.start);

        let mut slots = Vec::new();
        let mut cursor = window_start;

        for busy in &sorted {
            let gap_end = busy.start.saturating_sub(buffer).min(window_end);
            if cursor < gap_end {
                slots.push(TimeSlot::new(cursor, gap_end));
            }
            cursor = cursor.max(busy.end.saturating_add(buffer));
        }

        if cursor < window_end {
            slots.push(TimeSlot::new(cursor, window_end));
        }

        Self { slots, buffer }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total free minutes left across all slots.
    pub fn total_minutes(&self) -> u32 {
        self.slots.iter().map(TimeSlot::duration).sum()
    }

    /// Seat `minutes` in the earliest slot long enough to hold it.
    ///
    /// Returns the placement start. The chosen slot is consumed from the
    /// front, including the trailing buffer.
    pub fn claim(&mut self, minutes: u32) -> Option<u32> {
        let index = self.slots.iter().position(|slot| slot.can_fit(minutes))?;

        let start = self.slots[index].start;
        self.slots[index].start = start.saturating_add(minutes).saturating_add(self.buffer);

        self.slots.retain(|slot| slot.start < slot.end);
        self.slots.sort_by_key(|slot| slot.start);

        Some(start)
    }
}
