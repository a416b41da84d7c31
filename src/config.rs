//! Fixed scheduling constants for the operating theatre.
//!
//! Session windows, room pools, the duration table and the lead surgeon are
//! ward policy rather than user settings, so they live here as constants.

use crate::error::{Result, SurgiplanError};
use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Minutes from midnight.
pub type Minute = u32;

pub const MORNING_START: Minute = 8 * 60;
pub const MORNING_END: Minute = 11 * 60 + 30;
pub const AFTERNOON_START: Minute = 13 * 60 + 30;
pub const AFTERNOON_END: Minute = 17 * 60;

pub const LONG_CASE_MINUTES: u32 = 90;
pub const FLAP_CASE_MINUTES: u32 = 60;
pub const SHORT_CASE_MINUTES: u32 = 30;

pub const SEPTIC_ROOMS: &[&str] = &["1"];
pub const ARTHROPLASTY_ROOMS: &[&str] = &["7"];
pub const ARTHROPLASTY_FALLBACK_ROOMS: &[&str] = &["8"];
pub const GENERAL_ROOMS: &[&str] = &["7", "8"];
pub const OVERFLOW_ROOMS: &[&str] = &["9", "10"];

/// Surgeon assigned to arthroscopic reconstruction and hip arthroplasty.
pub const LEAD_SURGEON: &str = "TS Minh";

/// Operating sessions of one workday, separated by the lunch gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Session {
    Morning,
    Afternoon,
}

impl Session {
    /// Sessions in the order they are tried.
    pub const ALL: [Session; 2] = [Session::Morning, Session::Afternoon];

    pub fn start(self) -> Minute {
        match self {
            Session::Morning => MORNING_START,
            Session::Afternoon => AFTERNOON_START,
        }
    }

    pub fn end(self) -> Minute {
        match self {
            Session::Morning => MORNING_END,
            Session::Afternoon => AFTERNOON_END,
        }
    }

    /// True if `[start, start + duration)` fits inside this session.
    pub fn contains(self, start: Minute, duration: u32) -> bool {
        start >= self.start() && start + duration <= self.end()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Session::Morning => write!(f, "morning"),
            Session::Afternoon => write!(f, "afternoon"),
        }
    }
}

/// Parse an `HH:mm` wall-clock string into minutes from midnight.
pub fn parse_clock_time(value: &str) -> Result<Minute> {
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| SurgiplanError::InvalidTime(value.to_string()))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Format minutes from midnight as `HH:mm`.
pub fn format_clock_time(minute: Minute) -> String {
    format!("{:02}:{:02}", (minute / 60) % 24, minute % 60)
}
