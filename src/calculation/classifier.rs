//! Daily attendance classification.
//!
//! Converts one day's raw punches into a [`DailyAttendanceRecord`]. The
//! classification is a pure function of the day's punches, the shift
//! definition, the holiday calendar, and the employment window; it never
//! reflects overlays.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{
    DailyAttendanceRecord, DayState, DayStatus, EmployeeMaster, HolidayCalendar, RawPunchEvent,
    ShiftDefinition,
};

/// A full period of classified base records, in date order.
///
/// This is the only input the overlay stage accepts, so the pipeline
/// cannot be invoked out of order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedDays(Vec<DailyAttendanceRecord>);

impl ClassifiedDays {
    /// Wraps classified records, sorting them into date order.
    pub fn new(mut records: Vec<DailyAttendanceRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self(records)
    }

    /// The classified records in date order.
    pub fn records(&self) -> &[DailyAttendanceRecord] {
        &self.0
    }

    pub(crate) fn into_inner(self) -> Vec<DailyAttendanceRecord> {
        self.0
    }
}

/// Classifies one employee-day.
///
/// Punch arrival order is not guaranteed; timestamps are sorted here.
/// Status precedence: not-active (outside the joining/exit window, so a
/// pre-joining holiday earns nothing), then a holiday-calendar match, then
/// the weekly rest day, then a derivation from worked hours against the
/// shift's full-day/half-day thresholds.
pub fn classify_day(
    date: NaiveDate,
    punches: &[RawPunchEvent],
    shift: &ShiftDefinition,
    calendar: &HolidayCalendar,
    master: &EmployeeMaster,
) -> DailyAttendanceRecord {
    let mut timestamps: Vec<NaiveDateTime> = punches
        .iter()
        .filter(|p| p.date() == date)
        .map(|p| p.timestamp)
        .collect();
    timestamps.sort();

    let first_entry = timestamps.first().copied();
    let last_exit = timestamps.last().copied();
    let log_count = timestamps.len() as u32;
    let total_hours = worked_hours(date, &timestamps, shift);

    let status = if !master.is_active_on(date) {
        DayStatus::NotActive
    } else if calendar.is_holiday(date) {
        DayStatus::Holiday
    } else if date.weekday() == shift.weekly_off {
        DayStatus::Weekoff
    } else if total_hours >= shift.full_day_hours {
        DayStatus::FullDay
    } else if total_hours >= shift.half_day_hours {
        DayStatus::HalfDay
    } else {
        DayStatus::Absent
    };

    let working_day = matches!(status, DayStatus::FullDay | DayStatus::HalfDay);

    let minutes_late = match (first_entry, shift.start_time()) {
        (Some(first), Some(start)) if working_day => {
            (first - date.and_time(start)).num_minutes().max(0)
        }
        _ => 0,
    };
    let is_late = minutes_late >= shift.late_threshold_minutes && minutes_late > 0;

    let is_early_exit = match (last_exit, shift.end_time()) {
        (Some(last), Some(end)) if working_day => last < date.and_time(end),
        _ => false,
    };

    DailyAttendanceRecord {
        date,
        first_entry,
        last_exit,
        total_hours,
        is_late,
        minutes_late,
        is_early_exit,
        log_count,
        state: DayState::Base { status },
        weekoff_type: None,
    }
}

/// The worked span for the day.
///
/// A plain shift spans earliest to latest punch. A split shift sums each
/// configured slot's worked span, with punches clipped to the slot window,
/// so a long midday gap is not counted as worked time.
fn worked_hours(date: NaiveDate, timestamps: &[NaiveDateTime], shift: &ShiftDefinition) -> Decimal {
    if timestamps.len() < 2 {
        return Decimal::ZERO;
    }

    if !shift.is_split() {
        let span_minutes = (timestamps[timestamps.len() - 1] - timestamps[0]).num_minutes();
        return minutes_to_hours(span_minutes);
    }

    let mut total_minutes = 0i64;
    for slot in &shift.slots {
        let slot_start = date.and_time(slot.start);
        let slot_end = date.and_time(slot.end);
        let in_slot: Vec<NaiveDateTime> = timestamps
            .iter()
            .copied()
            .filter(|t| *t >= slot_start && *t <= slot_end)
            .collect();
        if in_slot.len() >= 2 {
            total_minutes += (in_slot[in_slot.len() - 1] - in_slot[0]).num_minutes();
        }
    }
    minutes_to_hours(total_minutes)
}

fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}
