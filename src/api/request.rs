//! Request types for the attendance engine API.
//!
//! The engine reads no ambient state, so request bodies carry the complete
//! data snapshot: employee master, shift definition, holidays, punches,
//! and the overlay snapshot. The handlers adapt these into an in-memory
//! provider before invoking the engine.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::SalaryOverrides;
use crate::models::{
    EmployeeMaster, Holiday, HolidayCalendar, OverlaySnapshot, RawPunchEvent, ShiftDefinition,
    ShiftSlot,
};

/// Request body for the `/attendance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The employee master record.
    pub employee: EmployeeRequest,
    /// The billing month, "YYYY-MM".
    pub month: String,
    /// Optional cutoff date truncating the window for a mid-cycle view.
    #[serde(default)]
    pub cutoff_date: Option<NaiveDate>,
    /// The shift definition covering the cycle.
    pub shift: ShiftRequest,
    /// Holidays falling in the cycle.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
    /// Raw punches for the cycle.
    #[serde(default)]
    pub punches: Vec<PunchRequest>,
    /// Leave and regularization overlays.
    #[serde(default)]
    pub overlays: OverlaySnapshot,
}

/// Request body for the `/salary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The employee master record.
    pub employee: EmployeeRequest,
    /// The billing month, "YYYY-MM".
    pub month: String,
    /// The shift definition covering the cycle.
    pub shift: ShiftRequest,
    /// Holidays falling in the cycle.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
    /// Raw punches for the cycle.
    #[serde(default)]
    pub punches: Vec<PunchRequest>,
    /// Leave, regularization, adjustment, and hold overlays.
    #[serde(default)]
    pub overlays: OverlaySnapshot,
    /// What-if overrides for previews.
    #[serde(default)]
    pub overrides: SalaryOverrides,
}

/// Employee master data in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique employee code.
    pub employee_code: String,
    /// Monthly contractual basic salary.
    pub base_salary: Decimal,
    /// Joining date, if the employee joined mid-history.
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    /// Exit date, if the employee has exited.
    #[serde(default)]
    pub exit_date: Option<NaiveDate>,
}

/// Shift master data in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// The in/out windows, one for a plain shift, two for a split shift.
    pub slots: Vec<SlotRequest>,
    /// Expected worked hours for a full day.
    pub expected_hours: Decimal,
    /// Worked hours at or above which a day is a full day.
    pub full_day_hours: Decimal,
    /// Worked hours at or above which a day is a half day.
    pub half_day_hours: Decimal,
    /// Minutes past shift start at which an entry counts as late.
    #[serde(default = "default_late_threshold")]
    pub late_threshold_minutes: i64,
    /// The weekly rest day.
    #[serde(default = "default_weekly_off")]
    pub weekly_off: Weekday,
}

fn default_late_threshold() -> i64 {
    10
}

fn default_weekly_off() -> Weekday {
    Weekday::Sun
}

/// One in/out window in a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlotRequest {
    /// The scheduled start of the slot.
    pub start: NaiveTime,
    /// The scheduled end of the slot.
    pub end: NaiveTime,
}

/// A holiday entry in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// One biometric punch in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// The punch timestamp (local, naive).
    pub timestamp: NaiveDateTime,
}

impl From<EmployeeRequest> for EmployeeMaster {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeMaster {
            employee_code: req.employee_code,
            base_salary: req.base_salary,
            joining_date: req.joining_date,
            exit_date: req.exit_date,
        }
    }
}

impl From<ShiftRequest> for ShiftDefinition {
    fn from(req: ShiftRequest) -> Self {
        ShiftDefinition {
            slots: req
                .slots
                .into_iter()
                .map(|s| ShiftSlot {
                    start: s.start,
                    end: s.end,
                })
                .collect(),
            expected_hours: req.expected_hours,
            full_day_hours: req.full_day_hours,
            half_day_hours: req.half_day_hours,
            late_threshold_minutes: req.late_threshold_minutes,
            weekly_off: req.weekly_off,
        }
    }
}

impl From<Vec<HolidayRequest>> for HolidayCalendar {
    fn from(holidays: Vec<HolidayRequest>) -> Self {
        HolidayCalendar {
            holidays: holidays
                .into_iter()
                .map(|h| Holiday {
                    date: h.date,
                    name: h.name,
                })
                .collect(),
        }
    }
}

impl PunchRequest {
    /// Converts the punch into a domain event for the given employee.
    pub fn into_event(self, employee_code: &str) -> RawPunchEvent {
        RawPunchEvent {
            employee_code: employee_code.to_string(),
            timestamp: self.timestamp,
        }
    }
}
