/*!
 * # Booking Slot Generation
 *
 * Computes the bookable time slots for a calendar day from a weekly
 * business-hours schedule and the intervals already taken by bookings or
 * external calendar blocks.
 *
 * The computation is a pure function over its inputs: the surrounding
 * booking layer fetches events and persists appointments, this crate only
 * turns "hours + busy intervals" into an ordered, flagged slot list.
 *
 * - **`schedule`**: weekly business hours keyed by day of week
 * - **`slots`**: fixed-width slot generation and availability flagging
 */

pub mod schedule;
pub mod slots;

// Re-export key types for easier usage
pub use schedule::{DayHours, WeeklySchedule};
pub use slots::{BusyInterval, ScheduleError, TimeSlot, day_slots, parse_day};
