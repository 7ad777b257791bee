use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::WeeklySchedule;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid booking date `{input}`: {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },
}

/// A half-open occupied interval: an existing booking or an
/// externally-sourced calendar block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BusyInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && self.end > start
    }
}

/// A fixed-width candidate appointment interval within business hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub available: bool,
}

/// Parse the `YYYY-MM-DD` date format used by the booking API.
pub fn parse_day(input: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| ScheduleError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Generate the ordered slot list for `date`.
///
/// Slots are laid out back to back from opening to closing at fixed
/// `slot_minutes` boundaries; a trailing remainder shorter than one slot is
/// not offered. A slot is unavailable when its interval intersects any busy
/// interval - partial overlap blocks the whole slot, there is no
/// partial-slot booking.
///
/// A day disabled in the schedule, a zero slot width, or inverted hours
/// yield an empty list.
pub fn day_slots(
    date: NaiveDate,
    schedule: &WeeklySchedule,
    slot_minutes: u32,
    busy: &[BusyInterval],
) -> Vec<TimeSlot> {
    let hours = schedule.day(date.weekday());
    if !hours.enabled || slot_minutes == 0 || hours.start_hour >= hours.end_hour {
        return Vec::new();
    }

    // Anchor on midnight so an end hour of 24 lands on the next midnight.
    let midnight = date.and_time(NaiveTime::MIN);
    let open = midnight + Duration::hours(i64::from(hours.start_hour));
    let close = midnight + Duration::hours(i64::from(hours.end_hour));
    let width = Duration::minutes(i64::from(slot_minutes));

    let mut slots = Vec::new();
    let mut start = open;
    while start + width <= close {
        let end = start + width;
        let available = !busy.iter().any(|b| b.overlaps(start, end));
        slots.push(TimeSlot {
            start,
            end,
            available,
        });
        start = end;
    }
    slots
}
