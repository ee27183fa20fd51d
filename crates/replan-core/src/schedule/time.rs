//! Minute-resolution time of day.
//!
//! Everything inside the engine works on integer minutes since midnight.
//! `TimeOfDay` is the boundary type: it parses and prints the zero-padded
//! 24-hour `HH:MM` strings used on the wire and converts from chrono clock
//! readings.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Minutes in one day; also the exclusive upper bound of any slot.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time within a single day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Build from minutes since midnight; `None` at or past 24:00.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes as u16))
    }

    /// Build from minutes since midnight, wrapping past 24:00.
    pub fn from_minutes_wrapping(minutes: u32) -> Self {
        Self((minutes % MINUTES_PER_DAY) as u16)
    }

    /// Convert a chrono time, dropping seconds.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    /// The local wall clock, to the minute.
    pub fn now() -> Self {
        Self::from_naive_time(Local::now().time())
    }

    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }
}

/// Round `minutes` up to the next multiple of `quantum`.
///
/// Values already on a boundary are returned as-is. A zero quantum disables
/// rounding.
pub fn round_up_to_quantum(minutes: u32, quantum: u32) -> u32 {
    if quantum == 0 {
        return minutes;
    }
    minutes.div_ceil(quantum) * quantum
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTime(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;

        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_zero_padded() {
        let t: TimeOfDay = "09:05".parse().unwrap();
        assert_eq!(t.minutes(), 545);
        assert_eq!(t.to_string(), "09:05");

        let lenient: TimeOfDay = "9:05".parse().unwrap();
        assert_eq!(lenient, t);
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        for bad in ["24:00", "12:60", "1200", "ab:cd", "12:5", ":30", ""] {
            assert!(bad.parse::<TimeOfDay>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn wrapping_past_midnight() {
        assert_eq!(TimeOfDay::from_minutes(MINUTES_PER_DAY), None);
        assert_eq!(
            TimeOfDay::from_minutes_wrapping(MINUTES_PER_DAY + 30).to_string(),
            "00:30"
        );
    }

    #[test]
    fn quarter_hour_rounding() {
        assert_eq!(round_up_to_quantum(555, 15), 555);
        assert_eq!(round_up_to_quantum(556, 15), 570);
        assert_eq!(round_up_to_quantum(0, 15), 0);
        assert_eq!(round_up_to_quantum(1439, 15), 1440);
        assert_eq!(round_up_to_quantum(7, 0), 7);
    }

    #[test]
    fn serde_uses_hh_mm_strings() {
        let t = TimeOfDay::from_hm(14, 30).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"14:30\"");
        let back: TimeOfDay = serde_json::from_str("\"14:30\"").unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    }

    #[test]
    fn from_naive_time_drops_seconds() {
        let t = NaiveTime::from_hms_opt(8, 7, 59).unwrap();
        assert_eq!(TimeOfDay::from_naive_time(t).to_string(), "08:07");
    }
}
