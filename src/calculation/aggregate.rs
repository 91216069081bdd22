//! Monthly aggregation.
//!
//! Rolls the resolved daily records up into the period totals the salary
//! breakdown runs on. Days classified not-active (outside the employee's
//! joining/exit window) are excluded from every count. Expected working
//! days are always measured over the full salary cycle, not a truncated
//! preview window, because they are the per-day-rate denominator.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::config::LatenessPolicy;
use crate::models::{
    AttendanceInfo, BillingMonth, DayStatus, HolidayCalendar, ShiftDefinition, WeekoffType,
};

use super::weekoff::ResolvedDays;

/// Rolls resolved records up into [`AttendanceInfo`] for the billing month.
pub fn aggregate(
    month: BillingMonth,
    days: &ResolvedDays,
    shift: &ShiftDefinition,
    calendar: &HolidayCalendar,
    lateness: &LatenessPolicy,
) -> AttendanceInfo {
    let expected_working_days = expected_working_days(month, shift, calendar);

    let mut info = AttendanceInfo {
        total_days: 0,
        expected_working_days,
        full_days: 0,
        half_days: 0,
        absent_days: 0,
        late_days: 0,
        minor_late_count: 0,
        major_late_count: 0,
        early_exit_days: 0,
        paid_weekoffs: 0,
        unpaid_weekoffs: 0,
        holidays: 0,
        total_hours: Decimal::ZERO,
        expected_hours: Decimal::from(expected_working_days) * shift.expected_hours,
        overtime_hours: Decimal::ZERO,
        days_worked: 0,
        payable_days: Decimal::ZERO,
    };

    for record in days.records() {
        let status = record.status();
        if status == DayStatus::NotActive {
            continue;
        }

        info.total_days += 1;
        info.total_hours += record.total_hours;
        info.payable_days += record.attendance_value();

        match status {
            DayStatus::FullDay => {
                info.full_days += 1;
                let overage = record.total_hours - shift.expected_hours;
                if overage > Decimal::ZERO {
                    info.overtime_hours += overage;
                }
            }
            DayStatus::HalfDay => info.half_days += 1,
            DayStatus::Absent => info.absent_days += 1,
            DayStatus::Weekoff => {
                match record.weekoff_type {
                    Some(WeekoffType::Paid) => info.paid_weekoffs += 1,
                    Some(WeekoffType::Unpaid) | None => info.unpaid_weekoffs += 1,
                }
                // Any hours on a rest day are overtime in full.
                info.overtime_hours += record.total_hours;
            }
            DayStatus::Holiday => {
                info.holidays += 1;
                info.overtime_hours += record.total_hours;
            }
            DayStatus::NotActive => unreachable!("filtered above"),
        }

        if record.is_late {
            info.late_days += 1;
            if record.minutes_late >= lateness.major_minutes {
                info.major_late_count += 1;
            } else if record.minutes_late >= lateness.minor_minutes {
                info.minor_late_count += 1;
            }
        }
        if record.is_early_exit {
            info.early_exit_days += 1;
        }
    }

    info.days_worked = info.full_days + info.half_days;
    info
}

/// Counts the non-rest-day, non-holiday days in the full salary cycle.
fn expected_working_days(
    month: BillingMonth,
    shift: &ShiftDefinition,
    calendar: &HolidayCalendar,
) -> u32 {
    month
        .cycle_start()
        .iter_days()
        .take_while(|date| *date <= month.cycle_end())
        .filter(|date| date.weekday() != shift.weekly_off && !calendar.is_holiday(*date))
        .count() as u32
}
