//! Operating-room calendar for one scheduling run.
//!
//! This module provides `RoomOccupancy`, which tracks the busy intervals of
//! every room, together with the slot search used to place new cases:
//! `find_free_slot` scans a single room within one session and
//! `RoomOccupancy::select_best_slot` compares candidate rooms.

use crate::config::{format_clock_time, Minute, Session};
use crate::error::{Result, SurgiplanError};
use crate::models::Interval;
use std::collections::BTreeMap;

/// Earliest start inside `[session_start, session_end)` that fits `duration`.
///
/// `intervals` must be sorted by start. Overlapping intervals are tolerated
/// and treated as one busy block.
pub fn find_free_slot(
    intervals: &[Interval],
    duration: u32,
    session_start: Minute,
    session_end: Minute,
) -> Option<Minute> {
    let mut cursor = session_start;

    for interval in intervals {
        if cursor + duration <= interval.start && cursor + duration <= session_end {
            return Some(cursor);
        }
        cursor = cursor.max(interval.end);
    }

    (cursor + duration <= session_end).then_some(cursor)
}

/// A chosen room and start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotChoice {
    pub room: String,
    pub start: Minute,
    pub session: Session,
}

impl SlotChoice {
    pub fn start_time(&self) -> String {
        format_clock_time(self.start)
    }
}

/// Busy intervals per room, each list sorted by start.
#[derive(Debug, Clone, Default)]
pub struct RoomOccupancy {
    rooms: BTreeMap<String, Vec<Interval>>,
}

impl RoomOccupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pre-existing booking without an overlap check.
    ///
    /// Already-booked cases are immovable even when they collide with each
    /// other; the list stays sorted by start.
    pub fn add_existing(&mut self, room: &str, interval: Interval) {
        let intervals = self.rooms.entry(room.to_string()).or_default();
        let position = intervals.partition_point(|existing| existing.start <= interval.start);
        intervals.insert(position, interval);
    }

    /// Book a new interval, refusing any overlap with existing bookings.
    pub fn book(&mut self, room: &str, interval: Interval) -> Result<()> {
        if self
            .intervals(room)
            .iter()
            .any(|existing| existing.overlaps_with(&interval))
        {
            return Err(SurgiplanError::SlotConflict {
                room: room.to_string(),
                case_id: interval.case_id,
            });
        }
        self.add_existing(room, interval);
        Ok(())
    }

    /// Busy intervals of a room, sorted by start. Unknown rooms are empty.
    pub fn intervals(&self, room: &str) -> &[Interval] {
        self.rooms.get(room).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of bookings across all rooms.
    pub fn len(&self) -> usize {
        self.rooms.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bookings in `room` that overlap `session`.
    pub fn cases_in_session(&self, room: &str, session: Session) -> usize {
        self.intervals(room)
            .iter()
            .filter(|interval| interval.overlaps(session.start(), session.end()))
            .count()
    }

    /// Earliest start in `room` during `session` for a case of `duration`.
    pub fn find_slot(&self, room: &str, duration: u32, session: Session) -> Option<Minute> {
        find_free_slot(self.intervals(room), duration, session.start(), session.end())
    }

    /// Best room and start among `candidates`, morning before afternoon.
    ///
    /// Within a session the slot ending earliest wins, then the room with
    /// fewer bookings in that session, then the earlier candidate. The
    /// afternoon is only considered when no candidate has a morning slot.
    pub fn select_best_slot(&self, candidates: &[String], duration: u32) -> Option<SlotChoice> {
        Session::ALL.into_iter().find_map(|session| {
            candidates
                .iter()
                .enumerate()
                .filter_map(|(position, room)| {
                    let start = self.find_slot(room, duration, session)?;
                    let load = self.cases_in_session(room, session);
                    Some((start + duration, load, position, start, room))
                })
                .min_by_key(|&(end, load, position, _, _)| (end, load, position))
                .map(|(_, _, _, start, room)| SlotChoice {
                    room: room.clone(),
                    start,
                    session,
                })
        })
    }
}

impl std::fmt::Display for RoomOccupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RoomOccupancy(rooms={}, bookings={})",
            self.rooms.len(),
            self.len()
        )
    }
}
