//! Per-day attendance records and their overlay state.
//!
//! The classifier produces a [`DailyAttendanceRecord`] with a base
//! [`DayStatus`] derived solely from that day's punches and shift
//! definition. The overlay stage replaces the base state with an
//! [`DayState::Overlaid`] variant that preserves the original status, so
//! every consumer pattern-matches instead of probing optional flags.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The classification of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Worked hours met the full-day threshold.
    FullDay,
    /// Worked hours met the half-day threshold only.
    HalfDay,
    /// No qualifying hours on an expected working day.
    Absent,
    /// The employee was not yet joined or already exited.
    NotActive,
    /// The weekly rest day.
    Weekoff,
    /// A holiday-calendar match.
    Holiday,
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::FullDay => write!(f, "full-day"),
            DayStatus::HalfDay => write!(f, "half-day"),
            DayStatus::Absent => write!(f, "absent"),
            DayStatus::NotActive => write!(f, "not-active"),
            DayStatus::Weekoff => write!(f, "weekoff"),
            DayStatus::Holiday => write!(f, "holiday"),
        }
    }
}

/// Whether a rest day is paid or unpaid, decided by the weekoff resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekoffType {
    /// The rest day contributes a full attendance value.
    Paid,
    /// The rest day contributes nothing (sandwich rule or absence override).
    Unpaid,
}

/// The administrative overlay that changed a day's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlaySource {
    /// An approved paid-leave entry.
    PaidLeave,
    /// An approved casual-leave entry.
    CasualLeave,
    /// An administrative regularization of an absence or half day.
    Regularization,
}

/// The day's state: as classified, or as rewritten by an overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayState {
    /// The status derived from punches and shift definition alone.
    Base {
        /// The classified status.
        status: DayStatus,
    },
    /// The status after an administrative overlay.
    Overlaid {
        /// The effective status after the overlay.
        status: DayStatus,
        /// What kind of overlay rewrote the day.
        source: OverlaySource,
        /// The pre-overlay status, retained for reporting.
        original: DayStatus,
        /// The attendance value the overlay settled on, in [0, 1].
        value: Decimal,
    },
}

impl DayState {
    /// The effective status of the day.
    pub fn status(&self) -> DayStatus {
        match self {
            DayState::Base { status } => *status,
            DayState::Overlaid { status, .. } => *status,
        }
    }

    /// The pre-overlay status (the status itself for base days).
    pub fn original_status(&self) -> DayStatus {
        match self {
            DayState::Base { status } => *status,
            DayState::Overlaid { original, .. } => *original,
        }
    }
}

/// One day of attendance for one employee.
///
/// Invariant: the base classification never reflects overlays; overlays
/// only ever appear in [`DayState::Overlaid`] with the original retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAttendanceRecord {
    /// The calendar date.
    pub date: NaiveDate,
    /// The earliest punch of the day, if any.
    pub first_entry: Option<NaiveDateTime>,
    /// The latest punch of the day, if any.
    pub last_exit: Option<NaiveDateTime>,
    /// The worked span in hours (per-slot for split shifts).
    pub total_hours: Decimal,
    /// True when the first entry exceeded shift start by the late threshold.
    pub is_late: bool,
    /// Minutes past shift start, zero when on time.
    pub minutes_late: i64,
    /// True when the last exit preceded shift end.
    pub is_early_exit: bool,
    /// Number of punches recorded for the day.
    pub log_count: u32,
    /// Base or overlaid day state.
    pub state: DayState,
    /// Paid/unpaid decision for weekoff days, set by the resolver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekoff_type: Option<WeekoffType>,
}

impl DailyAttendanceRecord {
    /// The effective status of the day.
    pub fn status(&self) -> DayStatus {
        self.state.status()
    }

    /// True when the day carries a paid-leave overlay.
    pub fn is_paid_leave(&self) -> bool {
        matches!(
            self.state,
            DayState::Overlaid {
                source: OverlaySource::PaidLeave,
                ..
            }
        )
    }

    /// True when the day carries a casual-leave overlay.
    pub fn is_casual_leave(&self) -> bool {
        matches!(
            self.state,
            DayState::Overlaid {
                source: OverlaySource::CasualLeave,
                ..
            }
        )
    }

    /// True when the day carries a regularization overlay.
    pub fn is_regularized(&self) -> bool {
        matches!(
            self.state,
            DayState::Overlaid {
                source: OverlaySource::Regularization,
                ..
            }
        )
    }

    /// The fractional day credit this date contributes toward payable days.
    ///
    /// Weekoff days contribute 1.0 only once the resolver marked them paid.
    /// The result is always within [0, 1].
    pub fn attendance_value(&self) -> Decimal {
        let value = match &self.state {
            DayState::Overlaid { value, .. } => *value,
            DayState::Base { status } => match status {
                DayStatus::FullDay => Decimal::ONE,
                DayStatus::HalfDay => Decimal::new(5, 1),
                DayStatus::Absent | DayStatus::NotActive => Decimal::ZERO,
                DayStatus::Holiday => Decimal::ONE,
                DayStatus::Weekoff => match self.weekoff_type {
                    Some(WeekoffType::Paid) => Decimal::ONE,
                    Some(WeekoffType::Unpaid) | None => Decimal::ZERO,
                },
            },
        };
        value.clamp(Decimal::ZERO, Decimal::ONE)
    }
}
