//! Shift definitions.
//!
//! A shift definition is master data supplied by a collaborator: the
//! expected in/out windows for a day, the worked-hour thresholds that
//! separate full days from half days, and the weekly rest day. Split
//! shifts carry two slots (e.g. a morning and an evening window).

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One in/out window within a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSlot {
    /// The scheduled start of the slot.
    pub start: NaiveTime,
    /// The scheduled end of the slot.
    pub end: NaiveTime,
}

/// The shift master data for an employee on a given date.
///
/// The full-day/half-day worked-hour cutoffs are deliberately part of this
/// struct rather than engine constants: they are sourced from shift master
/// data and vary per shift pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// The configured in/out windows, one for a plain shift, two for a
    /// split shift. Slots are ordered by start time.
    pub slots: Vec<ShiftSlot>,
    /// Expected worked hours for a full day under this shift.
    pub expected_hours: Decimal,
    /// Worked hours at or above which a day counts as a full day.
    pub full_day_hours: Decimal,
    /// Worked hours at or above which a day counts as a half day.
    pub half_day_hours: Decimal,
    /// Minutes past shift start at which an entry counts as late.
    pub late_threshold_minutes: i64,
    /// The fixed weekly rest day for this shift pattern.
    pub weekly_off: Weekday,
}

impl ShiftDefinition {
    /// The scheduled start of the working day (first slot).
    pub fn start_time(&self) -> Option<NaiveTime> {
        self.slots.first().map(|s| s.start)
    }

    /// The scheduled end of the working day (last slot).
    pub fn end_time(&self) -> Option<NaiveTime> {
        self.slots.last().map(|s| s.end)
    }

    /// Returns true when the shift has two configured in/out windows.
    pub fn is_split(&self) -> bool {
        self.slots.len() > 1
    }
}
