//! Salary computation outputs and the salary lifecycle state machines.
//!
//! This module contains the [`SalaryCalculationResult`] type and its
//! associated structures: the period aggregates ([`AttendanceInfo`]), the
//! itemized breakdown ([`SalaryBreakdown`]), and the draft/finalize and
//! hold/release state machines gating payslip visibility.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::attendance::DailyAttendanceRecord;
use super::period::BillingMonth;

/// Period aggregates rolled up from overlaid, weekoff-resolved days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceInfo {
    /// Total calendar days in the (possibly cutoff-truncated) window.
    pub total_days: u32,
    /// Expected working days over the full salary cycle; this is the
    /// denominator for the per-day rate.
    pub expected_working_days: u32,
    /// Days with effective status full-day.
    pub full_days: u32,
    /// Days with effective status half-day.
    pub half_days: u32,
    /// Days with effective status absent, after overlay.
    pub absent_days: u32,
    /// Days flagged late.
    pub late_days: u32,
    /// Late occurrences in the 10-29 minute tier.
    pub minor_late_count: u32,
    /// Late occurrences in the >= 30 minute tier.
    pub major_late_count: u32,
    /// Days flagged as early exits.
    pub early_exit_days: u32,
    /// Rest days resolved as paid.
    pub paid_weekoffs: u32,
    /// Rest days resolved as unpaid.
    pub unpaid_weekoffs: u32,
    /// Holiday-calendar days in the window.
    pub holidays: u32,
    /// Total worked hours across the window.
    pub total_hours: Decimal,
    /// Expected worked hours (expected working days x shift hours).
    pub expected_hours: Decimal,
    /// Hours worked beyond expectation, plus rest-day/holiday hours.
    pub overtime_hours: Decimal,
    /// Days with any qualifying attendance (full or half).
    pub days_worked: u32,
    /// Sum of per-day attendance values; the authoritative basis for the
    /// per-day-rate salary computation.
    pub payable_days: Decimal,
}

/// The itemized monthly breakdown.
///
/// Every component is computed independently and is individually
/// non-negative; `total_deductions` is their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Base salary divided by expected working days in the cycle.
    pub per_day_rate: Decimal,
    /// Per-day rate divided by expected hours per day.
    pub hourly_rate: Decimal,
    /// Absent days x per-day rate.
    pub absent_deduction: Decimal,
    /// Half days x per-day rate x 0.5.
    pub half_day_deduction: Decimal,
    /// Two-tier lateness deduction (graced 10-29 tier plus >= 30 tier).
    pub late_deduction: Decimal,
    /// Ad-hoc deductions (t-shirt, advance, others) applied verbatim.
    pub adjustment_deductions: Decimal,
    /// 10% of gross after prior deductions; only below the TDS band.
    pub tds: Decimal,
    /// Flat professional tax; only at or above the TDS band.
    pub professional_tax: Decimal,
    /// Sum of all deduction components.
    pub total_deductions: Decimal,
    /// Paid weekoffs x per-day rate.
    pub sunday_pay: Decimal,
    /// Overtime hours x hourly rate x multiplier, when enabled.
    pub overtime_amount: Decimal,
    /// Incentive additions applied verbatim.
    pub incentive_amount: Decimal,
    /// Reimbursement additions applied verbatim.
    pub reimbursement_amount: Decimal,
    /// Any other ad-hoc additions applied verbatim.
    pub other_additions: Decimal,
}

/// The one-way draft/finalize lifecycle of a computed salary.
///
/// Finalizing is the only transition and makes the result visible to the
/// employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SalaryLifecycle {
    /// Computed but not yet released for employee viewing.
    #[default]
    Draft,
    /// Released; the transition cannot be undone.
    Finalized,
}

/// The orthogonal hold gate blocking payslip visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HoldState {
    /// No hold in effect.
    #[default]
    NotHeld,
    /// Held; blocks visibility and export regardless of lifecycle.
    Held,
}

/// The hold gate as reported by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SalaryHoldStatus {
    /// Whether the salary is currently held.
    #[serde(default)]
    pub is_held: bool,
    /// When the hold was last released, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released_at: Option<chrono::NaiveDate>,
}

/// The complete result of a monthly salary computation.
///
/// Carries no timestamps or generated ids: identical inputs must yield
/// bit-identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryCalculationResult {
    /// The employee the computation is for.
    pub employee_code: String,
    /// The billing month.
    pub month: BillingMonth,
    /// The monthly contractual basic salary.
    pub base_salary: Decimal,
    /// Payable-day earnings plus all additions.
    pub gross_salary: Decimal,
    /// Gross salary minus total deductions.
    pub net_salary: Decimal,
    /// The period aggregates behind the numbers.
    pub attendance: AttendanceInfo,
    /// The itemized breakdown.
    pub breakdown: SalaryBreakdown,
    /// Draft/finalized lifecycle state.
    pub lifecycle: SalaryLifecycle,
    /// Hold gate state.
    pub hold: HoldState,
}

impl SalaryCalculationResult {
    /// Finalizes the salary. One-way; finalizing twice is a no-op.
    pub fn finalize(&mut self) {
        self.lifecycle = SalaryLifecycle::Finalized;
    }

    /// Places the salary on hold.
    pub fn hold(&mut self) {
        self.hold = HoldState::Held;
    }

    /// Releases a held salary. Release is the only exit from held.
    pub fn release(&mut self) {
        self.hold = HoldState::NotHeld;
    }

    /// True when downstream consumers may show the payslip: finalized and
    /// not held. A held salary is computed but never released for viewing.
    pub fn is_releasable(&self) -> bool {
        self.lifecycle == SalaryLifecycle::Finalized && self.hold == HoldState::NotHeld
    }
}

/// The per-month attendance view: overlaid daily records plus aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAttendanceSummary {
    /// The billing month.
    pub month: BillingMonth,
    /// Overlaid, weekoff-resolved records in date order.
    pub daily_breakdown: Vec<DailyAttendanceRecord>,
    /// Aggregate counts for the window.
    pub summary: AttendanceInfo,
}
