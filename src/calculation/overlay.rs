//! Leave and regularization overlay.
//!
//! Rewrites classified days with the administrator-authored overlay set,
//! producing the effective per-day attendance value. A leave entry wins
//! over a regularization on the same date. The overlay trusts its input
//! set: eligibility (regularizations only on absent/half days) is enforced
//! by the writer, not re-checked here.

use rust_decimal::Decimal;

use crate::models::{
    DailyAttendanceRecord, DayState, DayStatus, LeaveCategory, OverlaySnapshot, OverlaySource,
};

use super::classifier::ClassifiedDays;

/// Overlaid records in date order, ready for weekoff resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaidDays(Vec<DailyAttendanceRecord>);

impl OverlaidDays {
    /// The overlaid records in date order.
    pub fn records(&self) -> &[DailyAttendanceRecord] {
        &self.0
    }

    pub(crate) fn into_inner(self) -> Vec<DailyAttendanceRecord> {
        self.0
    }
}

/// Applies the overlay snapshot to every classified day.
pub fn apply_overlays(days: ClassifiedDays, snapshot: &OverlaySnapshot) -> OverlaidDays {
    let records = days
        .into_inner()
        .into_iter()
        .map(|record| overlay_day(record, snapshot))
        .collect();
    OverlaidDays(records)
}

fn overlay_day(record: DailyAttendanceRecord, snapshot: &OverlaySnapshot) -> DailyAttendanceRecord {
    let base = record.state.status();

    // Overlays only rewrite expected working days; rest days, holidays and
    // inactive days pass through for the later stages.
    let worked_fraction = match base {
        DayStatus::FullDay => Decimal::ONE,
        DayStatus::HalfDay => Decimal::new(5, 1),
        DayStatus::Absent => Decimal::ZERO,
        DayStatus::NotActive | DayStatus::Weekoff | DayStatus::Holiday => return record,
    };

    let (source, granted) = if let Some(leave) = snapshot.leave_for(record.date) {
        let source = match leave.category {
            LeaveCategory::Paid => OverlaySource::PaidLeave,
            LeaveCategory::Casual => OverlaySource::CasualLeave,
        };
        (source, leave.value)
    } else if let Some(reg) = snapshot.regularization_for(record.date) {
        (OverlaySource::Regularization, reg.value)
    } else {
        return record;
    };

    let value = (worked_fraction + granted).min(Decimal::ONE);
    DailyAttendanceRecord {
        state: DayState::Overlaid {
            status: status_for_value(value),
            source,
            original: base,
            value,
        },
        ..record
    }
}

/// The effective status implied by a settled attendance value.
fn status_for_value(value: Decimal) -> DayStatus {
    if value >= Decimal::ONE {
        DayStatus::FullDay
    } else if value >= Decimal::new(5, 1) {
        DayStatus::HalfDay
    } else {
        DayStatus::Absent
    }
}
