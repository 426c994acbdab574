//! # Agenda Grid Builder
//!
//! Lays a day's reservations out into a renderable grid: one shared vertical
//! axis of fixed-size time slots, and per court an ordered sequence of cells
//! that are each empty, the start of a reservation (annotated with how many
//! consecutive slots it spans), or a spacer continuing a reservation placed
//! in an earlier row.
//!
//! The slot axis spans the range touched by any reservation on any court,
//! widened to the business-hours defaults so a quiet day still shows a full
//! grid, and is shared across courts so columns stay vertically aligned.
//!
//! Overlapping reservations on one court are not expected; when they occur
//! the first match in scan order is placed and the conflict goes unreported,
//! preserving the behavior callers already render.

use std::collections::HashSet;

use courtside_core::errors::{EngineError, EngineResult};
use courtside_core::models::{
    agenda::{AgendaOptions, CourtColumn, DayAgenda, GridSegment, MINUTES_PER_DAY, TimeSlot},
    reservation::Reservation,
    time::TimeOfDay,
};
use tracing::debug;

fn validate_options(options: &AgendaOptions) -> EngineResult<()> {
    if options.slot_minutes == 0 || options.slot_minutes > MINUTES_PER_DAY {
        return Err(EngineError::Validation(format!(
            "slot size must be between 1 and {MINUTES_PER_DAY} minutes, got {}",
            options.slot_minutes
        )));
    }
    if options.day_start_minute >= options.day_end_minute
        || options.day_end_minute > MINUTES_PER_DAY
    {
        return Err(EngineError::Validation(format!(
            "invalid business-hours range {}..{}",
            options.day_start_minute, options.day_end_minute
        )));
    }
    Ok(())
}

/// A reservation's minute-of-day interval, if both times parse.
fn reservation_interval(reservation: &Reservation) -> Option<(u32, u32)> {
    let start = reservation
        .start_time
        .as_deref()
        .and_then(TimeOfDay::parse)?;
    let end = reservation.end_time.as_deref().and_then(TimeOfDay::parse)?;
    Some((start.minute_of_day(), end.minute_of_day()))
}

/// Discretizes the day into fixed-size slots covering every reservation.
///
/// The visible range starts from the business-hours defaults and widens to
/// include any reservation outside them, never narrows. Bounds are rounded
/// outward to slot multiples; labels are `HH:MM` of each slot's start.
pub fn build_time_slots(
    reservations: &[Reservation],
    options: &AgendaOptions,
) -> EngineResult<Vec<TimeSlot>> {
    validate_options(options)?;
    let slot_minutes = options.slot_minutes;

    let mut lower = options.day_start_minute;
    let mut upper = options.day_end_minute;
    for reservation in reservations {
        if let Some((start, end)) = reservation_interval(reservation) {
            lower = lower.min(start).min(end);
            upper = upper.max(start).max(end);
        }
    }

    let lower = lower - lower % slot_minutes;
    let upper = upper.div_ceil(slot_minutes) * slot_minutes;

    let mut slots = Vec::with_capacity(((upper - lower) / slot_minutes) as usize);
    let mut start = lower;
    while start < upper {
        slots.push(TimeSlot {
            start_minute: start,
            end_minute: start + slot_minutes,
            label: format!("{:02}:{:02}", start / 60, start % 60),
        });
        start += slot_minutes;
    }
    Ok(slots)
}

/// Builds one court's column of grid cells against a shared slot axis.
///
/// Walks the slots in order keeping a skip set of indices already consumed
/// by a multi-slot reservation. A reservation covers a slot when its
/// `[start, end)` interval contains the slot's start minute; the span uses
/// the actual end relative to the slot boundary, so a reservation ending
/// mid-slot still reserves that whole slot. Reservations with unparseable
/// times are invisible: they neither occupy nor block slots.
pub fn court_segments(
    reservations: &[Reservation],
    slots: &[TimeSlot],
    slot_minutes: u32,
) -> EngineResult<Vec<GridSegment>> {
    if slot_minutes == 0 {
        return Err(EngineError::Validation(
            "slot size must be at least 1 minute".to_string(),
        ));
    }

    let mut placeable = Vec::with_capacity(reservations.len());
    for reservation in reservations {
        match reservation_interval(reservation) {
            Some(interval) => placeable.push((interval, reservation)),
            None => {
                debug!(
                    court_id = %reservation.court_id,
                    start = ?reservation.start_time,
                    end = ?reservation.end_time,
                    "skipping reservation with unparseable times"
                );
            }
        }
    }

    let mut segments = Vec::with_capacity(slots.len());
    let mut skipped: HashSet<usize> = HashSet::new();

    for (index, slot) in slots.iter().enumerate() {
        if skipped.contains(&index) {
            segments.push(GridSegment::Spacer);
            continue;
        }

        let found = placeable
            .iter()
            .find(|((start, end), _)| *start <= slot.start_minute && slot.start_minute < *end);

        match found {
            Some(((_, end), reservation)) => {
                let covered = end - slot.start_minute;
                let span = covered.div_ceil(slot_minutes).max(1);
                for offset in 1..span as usize {
                    skipped.insert(index + offset);
                }
                segments.push(GridSegment::Reservation {
                    reservation: (*reservation).clone(),
                    span,
                });
            }
            None => segments.push(GridSegment::Empty),
        }
    }

    Ok(segments)
}

/// Builds the full day agenda: one shared slot axis plus one column per
/// court, in the order courts first appear in the input.
pub fn build_day_agenda(
    reservations: &[Reservation],
    options: &AgendaOptions,
) -> EngineResult<DayAgenda> {
    let slots = build_time_slots(reservations, options)?;

    let mut grouped: Vec<(String, Vec<Reservation>)> = Vec::new();
    for reservation in reservations {
        match grouped.iter_mut().find(|(id, _)| *id == reservation.court_id) {
            Some((_, group)) => group.push(reservation.clone()),
            None => grouped.push((reservation.court_id.clone(), vec![reservation.clone()])),
        }
    }

    let mut columns = Vec::with_capacity(grouped.len());
    for (court_id, group) in grouped {
        let segments = court_segments(&group, &slots, options.slot_minutes)?;
        columns.push(CourtColumn { court_id, segments });
    }

    Ok(DayAgenda { slots, columns })
}
