//! Time-of-day utilities: parsing HH:MM, minute offsets, military labels.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use std::fmt;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Every time value read from a schedule document ends up here, whether it
/// was written as `"HH:MM"` or as an integer minute offset, so that all
/// layout arithmetic runs on one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayTime(u32);

impl DayTime {
    pub fn from_hm(hour: u32, minute: u32) -> AppResult<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(AppError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Minutes since midnight, `0..1440`.
    pub fn from_minutes(minutes: i64) -> AppResult<Self> {
        if !(0..MINUTES_PER_DAY).contains(&minutes) {
            return Err(AppError::InvalidTime(format!(
                "{minutes} minutes is outside of a day"
            )));
        }
        Ok(Self(minutes as u32))
    }

    /// Parse `HH:MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| AppError::InvalidTime(s.to_string()))?;
        Self::from_hm(t.hour(), t.minute())
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    pub fn minute(self) -> u32 {
        self.0 % 60
    }

    /// Signed minutes from `self` to `later`.
    pub fn minutes_until(self, later: DayTime) -> i64 {
        later.0 as i64 - self.0 as i64
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// 14:30 -> "1430"
pub fn military_time(hour: u32, minute: u32) -> String {
    format!("{:02}{:02}", hour, minute)
}
