//! Weekoff pay resolution.
//!
//! Decides, for every weekly rest day in the period, whether it is paid.
//! Two rules apply, in order:
//!
//! 1. Absence override: once the period carries at least the configured
//!    number of absences, every weekoff in the period is unpaid.
//! 2. Sandwich rule: a weekoff is unpaid only when the day immediately
//!    before and the day immediately after are both absent. Any other
//!    neighbour (worked, holiday, another rest day, or outside the
//!    period) keeps the weekoff paid.

use crate::models::{DailyAttendanceRecord, DayStatus, WeekoffType};

use super::overlay::OverlaidDays;

/// Fully resolved records, ready for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDays(Vec<DailyAttendanceRecord>);

impl ResolvedDays {
    /// The resolved records in date order.
    pub fn records(&self) -> &[DailyAttendanceRecord] {
        &self.0
    }

    /// Consumes the wrapper, yielding the records.
    pub fn into_records(self) -> Vec<DailyAttendanceRecord> {
        self.0
    }
}

/// Marks every weekoff in the period as paid or unpaid.
///
/// `absent_threshold` is the absence count at which all weekoffs flip to
/// unpaid regardless of their neighbours.
pub fn resolve_weekoffs(days: OverlaidDays, absent_threshold: u32) -> ResolvedDays {
    let mut records = days.into_inner();

    let absences = records
        .iter()
        .filter(|r| r.status() == DayStatus::Absent)
        .count() as u32;
    let override_all = absences >= absent_threshold;

    for idx in 0..records.len() {
        if records[idx].status() != DayStatus::Weekoff {
            continue;
        }
        let weekoff_type = if override_all || is_sandwiched(&records, idx) {
            WeekoffType::Unpaid
        } else {
            WeekoffType::Paid
        };
        records[idx].weekoff_type = Some(weekoff_type);
    }

    ResolvedDays(records)
}

/// True when the days immediately before and after `idx` are both absent.
fn is_sandwiched(records: &[DailyAttendanceRecord], idx: usize) -> bool {
    let before = idx.checked_sub(1).and_then(|i| records.get(i));
    let after = records.get(idx + 1);

    matches!(
        (before.map(|r| r.status()), after.map(|r| r.status())),
        (Some(DayStatus::Absent), Some(DayStatus::Absent))
    )
}
