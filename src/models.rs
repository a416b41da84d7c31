//! Data models for the operating-room scheduler.
//!
//! This module defines the core data structures used throughout the engine:
//! - PriorityTag: global scheduling order of case categories
//! - PendingCase / ScheduledCase: engine inputs
//! - Interval: busy time inside one room
//! - ClassifiedCase: a pending case with its derived label, duration and rooms
//! - SurgerySuggestion: engine output
//!
//! Input and output types serialize with the camelCase field names used by
//! the ward application.

use crate::config::{format_clock_time, Minute};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Case categories in global scheduling order.
///
/// Lower variants are scheduled first: septic cases open the day in the
/// dedicated room, then arthroplasty/arthroscopy, fixations, and so on down
/// to minor procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriorityTag {
    Infection,
    ThaOrArthroscopy,
    KhxHighRisk,
    KhxOther,
    Tumor,
    RemoveImplant,
    OtherMajor,
    Minor,
}

impl PriorityTag {
    pub fn name(&self) -> &'static str {
        match self {
            PriorityTag::Infection => "infection",
            PriorityTag::ThaOrArthroscopy => "thaOrArthroscopy",
            PriorityTag::KhxHighRisk => "khxHighRisk",
            PriorityTag::KhxOther => "khxOther",
            PriorityTag::Tumor => "tumor",
            PriorityTag::RemoveImplant => "removeImplant",
            PriorityTag::OtherMajor => "otherMajor",
            PriorityTag::Minor => "minor",
        }
    }
}

impl fmt::Display for PriorityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A patient awaiting surgery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCase {
    pub id: String,
    #[serde(default)]
    pub diagnosis: String,
    /// Age in years, 0 when unknown.
    #[serde(default)]
    pub age: u32,
}

impl PendingCase {
    pub fn new(id: impl Into<String>, diagnosis: impl Into<String>, age: u32) -> Self {
        PendingCase {
            id: id.into(),
            diagnosis: diagnosis.into(),
            age,
        }
    }
}

/// A case already placed on the theatre list, used only to block time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledCase {
    pub id: String,
    pub operating_room: String,
    /// Start time as `HH:mm`.
    pub surgery_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procedure_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
}

impl ScheduledCase {
    pub fn new(
        id: impl Into<String>,
        operating_room: impl Into<String>,
        surgery_time: impl Into<String>,
    ) -> Self {
        ScheduledCase {
            id: id.into(),
            operating_room: operating_room.into(),
            surgery_time: surgery_time.into(),
            procedure_label: None,
            diagnosis: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.procedure_label = Some(label.into());
        self
    }

    pub fn with_diagnosis(mut self, diagnosis: impl Into<String>) -> Self {
        self.diagnosis = Some(diagnosis.into());
        self
    }
}

/// Busy time for one case inside one room, `[start, end)` in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    pub case_id: String,
    pub start: Minute,
    pub end: Minute,
}

impl Interval {
    pub fn new(case_id: impl Into<String>, start: Minute, duration: u32) -> Self {
        Interval {
            case_id: case_id.into(),
            start,
            end: start + duration,
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// Check if this interval overlaps the half-open range `[start, end)`.
    pub fn overlaps(&self, start: Minute, end: Minute) -> bool {
        self.start < end && self.end > start
    }

    /// Check if this interval overlaps with another.
    pub fn overlaps_with(&self, other: &Interval) -> bool {
        self.overlaps(other.start, other.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.case_id,
            format_clock_time(self.start),
            format_clock_time(self.end)
        )
    }
}

/// A pending case after label derivation and classification.
#[derive(Debug, Clone)]
pub struct ClassifiedCase {
    pub case: PendingCase,
    pub procedure_label: String,
    pub duration_minutes: u32,
    pub priority: PriorityTag,
    pub primary_rooms: Vec<String>,
    pub fallback_rooms: Option<Vec<String>>,
    /// Position in the input list, used to keep equal tags in input order.
    pub sequence: usize,
}

impl PartialEq for ClassifiedCase {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for ClassifiedCase {}

impl PartialOrd for ClassifiedCase {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassifiedCase {
    /// Compare cases for max-heap ordering.
    ///
    /// The case that must be placed first compares greatest: earlier
    /// priority tag, then earlier input position.
    fn cmp(&self, other: &Self) -> Ordering {
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            other_ordering => other_ordering,
        }
    }
}

/// Engine output for one pending case.
///
/// An empty `operating_room` and `surgery_time` means the case could not be
/// placed and is left for manual scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgerySuggestion {
    pub id: String,
    pub procedure_label: String,
    pub operating_room: String,
    pub surgery_time: String,
    pub surgeon_name: String,
}

impl SurgerySuggestion {
    pub fn is_placed(&self) -> bool {
        !self.operating_room.is_empty()
    }
}

/// JSON envelope accepted by the command-line front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    #[serde(default)]
    pub pending: Vec<PendingCase>,
    #[serde(default)]
    pub already_scheduled: Vec<ScheduledCase>,
}
