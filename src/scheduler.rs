//! Operating-list scheduling with priority-ordered greedy placement.
//!
//! This module provides the `ScheduleEngine`, which seeds room occupancy from
//! cases already on the list, classifies pending cases, and places them one
//! by one in priority order. Placement is first-fit and irrevocable: a case
//! placed early is never moved to make room for a later one.

use crate::calendar::{RoomOccupancy, SlotChoice};
use crate::classifier::classify_case;
use crate::config::{parse_clock_time, LEAD_SURGEON};
use crate::duration::estimate_duration;
use crate::models::{ClassifiedCase, Interval, PendingCase, ScheduledCase, SurgerySuggestion};
use crate::procedure::derive_procedure;
use std::collections::BinaryHeap;
use tracing::{debug, error, info, info_span, warn};
use uuid::Uuid;

/// Label keywords that call for the lead surgeon.
const LEAD_SURGEON_KEYWORDS: &[&str] = &["ptns tái tạo", "tái tạo dây chằng", "thay khớp háng"];

/// Surgeon for a procedure label, empty when unassigned.
pub fn assign_surgeon(procedure_label: &str) -> &'static str {
    let label = procedure_label.to_lowercase();
    if LEAD_SURGEON_KEYWORDS
        .iter()
        .any(|keyword| label.contains(keyword))
    {
        LEAD_SURGEON
    } else {
        ""
    }
}

/// Result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleReport {
    /// One suggestion per pending case, in placement order.
    pub suggestions: Vec<SurgerySuggestion>,
    pub placed: usize,
    pub unplaced: usize,
}

impl ScheduleReport {
    pub fn total_cases(&self) -> usize {
        self.placed + self.unplaced
    }

    /// Calculate the placement rate as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.total_cases() == 0 {
            return 0.0;
        }
        (self.placed as f64 / self.total_cases() as f64) * 100.0
    }
}

/// Rule-based operating-room scheduler.
///
/// The engine keeps no state between runs: each call to [`run`](Self::run)
/// builds its own occupancy, so one engine may serve concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleEngine;

impl ScheduleEngine {
    pub fn new() -> Self {
        ScheduleEngine
    }

    /// Build room occupancy from cases already on the list.
    ///
    /// Cases with a malformed start time or no room are skipped.
    pub fn seed_occupancy(&self, scheduled: &[ScheduledCase]) -> RoomOccupancy {
        let mut occupancy = RoomOccupancy::new();

        for case in scheduled {
            if case.operating_room.trim().is_empty() {
                warn!(case_id = %case.id, "skipping scheduled case without a room");
                continue;
            }
            let start = match parse_clock_time(&case.surgery_time) {
                Ok(start) => start,
                Err(e) => {
                    warn!(case_id = %case.id, error = %e, "skipping scheduled case");
                    continue;
                }
            };

            let label = match case.procedure_label.as_deref() {
                Some(label) if !label.trim().is_empty() => label.to_string(),
                _ => derive_procedure(case.diagnosis.as_deref().unwrap_or_default()),
            };
            let duration = estimate_duration(&label);

            occupancy.add_existing(
                case.operating_room.trim(),
                Interval::new(case.id.clone(), start, duration),
            );
        }

        occupancy
    }

    /// Find a slot in the primary rooms, then in the fallback rooms.
    fn find_slot_for_case(
        &self,
        occupancy: &RoomOccupancy,
        case: &ClassifiedCase,
    ) -> Option<SlotChoice> {
        let mut slot = occupancy.select_best_slot(&case.primary_rooms, case.duration_minutes);

        if slot.is_none() {
            if let Some(fallback) = &case.fallback_rooms {
                slot = occupancy.select_best_slot(fallback, case.duration_minutes);
            }
        }

        slot
    }

    /// Place a single classified case and commit it to `occupancy`.
    pub fn schedule_single(
        &self,
        occupancy: &mut RoomOccupancy,
        case: &ClassifiedCase,
    ) -> SurgerySuggestion {
        let mut suggestion = SurgerySuggestion {
            id: case.case.id.clone(),
            procedure_label: case.procedure_label.clone(),
            operating_room: String::new(),
            surgery_time: String::new(),
            surgeon_name: assign_surgeon(&case.procedure_label).to_string(),
        };

        let Some(slot) = self.find_slot_for_case(occupancy, case) else {
            warn!(
                case_id = %case.case.id,
                priority = %case.priority,
                "no free slot in candidate rooms"
            );
            return suggestion;
        };

        let interval = Interval::new(case.case.id.clone(), slot.start, case.duration_minutes);
        if let Err(e) = occupancy.book(&slot.room, interval) {
            error!(case_id = %case.case.id, error = %e, "selected slot could not be booked");
            return suggestion;
        }

        debug!(
            case_id = %case.case.id,
            room = %slot.room,
            start = %slot.start_time(),
            session = %slot.session,
            "placed case"
        );
        suggestion.operating_room = slot.room.clone();
        suggestion.surgery_time = slot.start_time();
        suggestion
    }

    /// Schedule all pending cases around the already-scheduled ones.
    pub fn run(&self, pending: &[PendingCase], scheduled: &[ScheduledCase]) -> ScheduleReport {
        let span = info_span!("schedule", run_id = %Uuid::new_v4(), pending = pending.len());
        let _guard = span.enter();

        let mut occupancy = self.seed_occupancy(scheduled);
        debug!(%occupancy, "seeded occupancy");

        let mut queue: BinaryHeap<ClassifiedCase> = pending
            .iter()
            .enumerate()
            .map(|(sequence, case)| classify_case(case, sequence))
            .collect();

        let mut suggestions = Vec::with_capacity(queue.len());
        while let Some(case) = queue.pop() {
            suggestions.push(self.schedule_single(&mut occupancy, &case));
        }

        let placed = suggestions.iter().filter(|s| s.is_placed()).count();
        let report = ScheduleReport {
            unplaced: suggestions.len() - placed,
            placed,
            suggestions,
        };
        info!(
            placed = report.placed,
            unplaced = report.unplaced,
            "scheduling run finished"
        );
        report
    }
}

/// Schedule pending cases and return one suggestion per case.
pub fn schedule(pending: &[PendingCase], scheduled: &[ScheduledCase]) -> Vec<SurgerySuggestion> {
    ScheduleEngine::new().run(pending, scheduled).suggestions
}
