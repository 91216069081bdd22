//! Core data models for the Attendance-to-Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod adjustment;
mod attendance;
mod employee;
mod leave;
mod period;
mod punch;
mod salary;
mod shift;

pub use adjustment::{AdjustmentCategory, AdjustmentType, SalaryAdjustment};
pub use attendance::{
    DailyAttendanceRecord, DayState, DayStatus, OverlaySource, WeekoffType,
};
pub use employee::EmployeeMaster;
pub use leave::{LeaveCategory, LeaveDate, OverlaySnapshot, RegularizationEntry};
pub use period::{BillingMonth, CYCLE_BOUNDARY_DAY, Holiday, HolidayCalendar};
pub use punch::RawPunchEvent;
pub use salary::{
    AttendanceInfo, HoldState, MonthlyAttendanceSummary, SalaryBreakdown,
    SalaryCalculationResult, SalaryHoldStatus, SalaryLifecycle,
};
pub use shift::{ShiftDefinition, ShiftSlot};
