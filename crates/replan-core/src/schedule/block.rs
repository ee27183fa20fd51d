//! The planned-activity block and its attributes.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::time::{TimeOfDay, MINUTES_PER_DAY};
use crate::error::ValidationError;

/// What kind of activity a block holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Deep,
    Admin,
    Health,
    Learning,
    Social,
    Errand,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Deep,
        Category::Admin,
        Category::Health,
        Category::Learning,
        Category::Social,
        Category::Errand,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Deep => "Deep",
            Category::Admin => "Admin",
            Category::Health => "Health",
            Category::Learning => "Learning",
            Category::Social => "Social",
            Category::Errand => "Errand",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// Importance ordinal. Lower numbers are more important and are seated first
/// when the day is repacked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High = 1,
    #[default]
    Medium = 2,
    Low = 3,
}

impl Priority {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Priority {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(ValidationError::InvalidPriority(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.ordinal()
    }
}

/// A contiguous planned activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Category,
    pub start_time: TimeOfDay,
    /// Length in minutes.
    pub duration: u32,
    /// Immovable external commitment.
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Minimum acceptable length when the block has to shrink.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_minutes: Option<u32>,
    /// May shrink but is never dropped.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub protected: bool,
}

impl Block {
    /// Create a flexible, medium-priority block with a fresh identifier.
    pub fn new(
        title: impl Into<String>,
        category: Category,
        start_time: TimeOfDay,
        duration: u32,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            category,
            start_time,
            duration,
            fixed: false,
            completed: false,
            priority: Priority::default(),
            fallback_minutes: None,
            protected: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_fallback(mut self, minutes: u32) -> Self {
        self.fallback_minutes = Some(minutes);
        self
    }

    pub fn as_fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    pub fn as_protected(mut self) -> Self {
        self.protected = true;
        self
    }

    pub fn mark_completed(mut self) -> Self {
        self.completed = true;
        self
    }

    pub fn start_minutes(&self) -> u32 {
        self.start_time.minutes()
    }

    /// Exclusive end, in minutes since midnight.
    pub fn end_minutes(&self) -> u32 {
        self.start_minutes().saturating_add(self.duration)
    }

    /// Neither fixed nor completed, so the engine may move, shrink or drop it.
    pub fn is_flexible(&self) -> bool {
        !self.fixed && !self.completed
    }

    /// Check if this block shares at least one minute with `other`.
    pub fn overlaps(&self, other: &Block) -> bool {
        self.start_minutes() < other.end_minutes() && other.start_minutes() < self.end_minutes()
    }

    /// The duration to shrink to: the explicit fallback when set and non-zero,
    /// otherwise `ratio` of the full duration, rounded half away from zero.
    pub fn fallback_or(&self, ratio: f64) -> u32 {
        self.fallback_minutes
            .filter(|minutes| *minutes > 0)
            .unwrap_or_else(|| (f64::from(self.duration) * ratio).round() as u32)
    }

    /// Validate the invariants the engine assumes about a single block.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyField("id".into()));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title".into()));
        }
        if self.duration == 0 {
            return Err(ValidationError::ZeroDuration {
                id: self.id.clone(),
            });
        }
        if self.end_minutes() > MINUTES_PER_DAY {
            return Err(ValidationError::PastEndOfDay {
                id: self.id.clone(),
                end: self.end_minutes(),
            });
        }
        if let Some(fallback) = self.fallback_minutes {
            if fallback >= self.duration {
                return Err(ValidationError::FallbackTooLong {
                    id: self.id.clone(),
                    fallback,
                    duration: self.duration,
                });
            }
        }
        Ok(())
    }
}

/// Validate every block plus the collection-level rule that ids are unique.
pub fn validate_blocks(blocks: &[Block]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for block in blocks {
        block.validate()?;
        if !seen.insert(block.id.as_str()) {
            return Err(ValidationError::DuplicateId(block.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn block_serialization_uses_wire_format() {
        let block = Block::new("Write report", Category::Deep, at("09:30"), 45)
            .with_id("b1")
            .with_priority(Priority::High)
            .with_fallback(20)
            .as_protected();

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["start_time"], "09:30");
        assert_eq!(json["priority"], 1);
        assert_eq!(json["category"], "Deep");
        assert_eq!(json["fallback_minutes"], 20);
        assert_eq!(json["protected"], true);

        let decoded: Block = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, block);
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let json = r#"{"id":"x","title":"Walk","start_time":"07:00","duration":30}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert!(!block.fixed);
        assert!(!block.completed);
        assert!(!block.protected);
        assert_eq!(block.priority, Priority::Medium);
        assert_eq!(block.category, Category::Other);
        assert_eq!(block.fallback_minutes, None);
    }

    #[test]
    fn priority_rejects_out_of_range_ordinal() {
        let json = r#"{"id":"x","title":"Walk","start_time":"07:00","duration":30,"priority":4}"#;
        assert!(serde_json::from_str::<Block>(json).is_err());
        assert!(Priority::High < Priority::Low);
    }

    #[test]
    fn fallback_defaults_to_ratio_of_duration() {
        let block = Block::new("Gym", Category::Health, at("18:00"), 60);
        assert_eq!(block.fallback_or(0.6), 36);
        assert_eq!(block.fallback_or(0.5), 30);

        let odd = Block::new("Read", Category::Learning, at("20:00"), 45);
        assert_eq!(odd.fallback_or(0.5), 23);

        let explicit = block.clone().with_fallback(15);
        assert_eq!(explicit.fallback_or(0.6), 15);

        let zero = block.with_fallback(0);
        assert_eq!(zero.fallback_or(0.6), 36);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("errand".parse::<Category>().unwrap(), Category::Errand);
        assert!("nap".parse::<Category>().is_err());
    }

    #[test]
    fn validate_catches_bad_blocks() {
        let ok = Block::new("Email", Category::Admin, at("10:00"), 30).with_id("a");
        assert!(ok.validate().is_ok());

        let zero = Block { duration: 0, ..ok.clone() };
        assert!(matches!(zero.validate(), Err(ValidationError::ZeroDuration { .. })));

        let late = Block { start_time: at("23:30"), duration: 60, ..ok.clone() };
        assert!(matches!(late.validate(), Err(ValidationError::PastEndOfDay { .. })));

        let huge = Block { duration: u32::MAX, ..ok.clone() };
        assert!(matches!(
            huge.validate(),
            Err(ValidationError::PastEndOfDay { end: u32::MAX, .. })
        ));
        assert_eq!(huge.end_minutes(), u32::MAX);

        let fallback = ok.clone().with_fallback(30);
        assert!(matches!(fallback.validate(), Err(ValidationError::FallbackTooLong { .. })));

        let untitled = Block { title: "  ".into(), ..ok.clone() };
        assert!(matches!(untitled.validate(), Err(ValidationError::EmptyField(_))));

        let dup = vec![ok.clone(), ok];
        assert_eq!(validate_blocks(&dup), Err(ValidationError::DuplicateId("a".into())));
    }

    #[test]
    fn overlap_is_half_open() {
        let a = Block::new("A", Category::Deep, at("09:00"), 60);
        let b = Block::new("B", Category::Deep, at("10:00"), 30);
        let c = Block::new("C", Category::Deep, at("09:30"), 60);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }
}
