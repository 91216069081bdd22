//! The engine facade: collaborator seam and the two pure queries.
//!
//! The engine owns no persistent state. Every computation fetches its
//! inputs through an [`AttendanceProvider`] up front, then runs the five
//! pipeline stages as pure functions of that snapshot. Identical inputs
//! therefore yield identical results; nothing in the output carries a
//! generated id or timestamp.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculation::{
    ClassifiedDays, ResolvedDays, aggregate, apply_overlays, calculate_salary, classify_day,
    resolve_weekoffs,
};
use crate::config::PayrollPolicy;
use crate::error::EngineResult;
use crate::models::{
    BillingMonth, EmployeeMaster, HolidayCalendar, LeaveCategory, LeaveDate,
    MonthlyAttendanceSummary, OverlaySnapshot, RawPunchEvent, RegularizationEntry,
    SalaryAdjustment, SalaryCalculationResult, SalaryHoldStatus, ShiftDefinition,
};

/// The seam to external persistence.
///
/// Every fetch happens before the pipeline runs, so a computation never
/// observes a torn read across overlay sources.
pub trait AttendanceProvider {
    /// Raw punches for an employee over a date range (inclusive).
    fn punches(
        &self,
        employee: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<RawPunchEvent>>;

    /// The shift master data for an employee as of a date.
    fn shift_definition(&self, employee: &str, date: NaiveDate) -> EngineResult<ShiftDefinition>;

    /// The holiday calendar covering a date range.
    fn holiday_calendar(&self, from: NaiveDate, to: NaiveDate) -> EngineResult<HolidayCalendar>;

    /// Approved leave entries for the billing month.
    fn approved_leave(&self, employee: &str, month: BillingMonth) -> EngineResult<Vec<LeaveDate>>;

    /// Regularization entries for the billing month.
    fn regularizations(
        &self,
        employee: &str,
        month: BillingMonth,
    ) -> EngineResult<Vec<RegularizationEntry>>;

    /// Ad-hoc salary adjustments for the billing month.
    fn adjustments(
        &self,
        employee: &str,
        month: BillingMonth,
    ) -> EngineResult<Vec<SalaryAdjustment>>;

    /// Whether overtime pay is enabled for the employee/month.
    fn overtime_enabled(&self, employee: &str, month: BillingMonth) -> EngineResult<bool>;

    /// The salary hold gate for the employee/month.
    fn salary_hold(&self, employee: &str, month: BillingMonth) -> EngineResult<SalaryHoldStatus>;

    /// The employee master record.
    fn employee_master(&self, employee: &str) -> EngineResult<EmployeeMaster>;
}

/// What-if overrides for a salary preview.
///
/// Callers can recompute with hypothetical joining/exit dates, a cutoff,
/// or leave dates that have not been persisted yet. An override leave date
/// replaces any persisted leave entry on the same date.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalaryOverrides {
    /// Overrides the master joining date.
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    /// Overrides the master exit date.
    #[serde(default)]
    pub exit_date: Option<NaiveDate>,
    /// Truncates the cycle window for a mid-cycle preview.
    #[serde(default)]
    pub cutoff_date: Option<NaiveDate>,
    /// Full-value paid-leave dates applied on top of persisted leave.
    #[serde(default)]
    pub paid_leave_dates: Vec<NaiveDate>,
    /// Full-value casual-leave dates applied on top of persisted leave.
    #[serde(default)]
    pub casual_leave_dates: Vec<NaiveDate>,
}

/// Computes the per-day attendance view for one employee-month.
///
/// `cutoff` truncates the cycle window for a mid-cycle preview; the
/// per-day-rate denominator still spans the full cycle.
pub fn compute_monthly_attendance<P: AttendanceProvider>(
    provider: &P,
    policy: &PayrollPolicy,
    employee: &str,
    month: BillingMonth,
    cutoff: Option<NaiveDate>,
) -> EngineResult<MonthlyAttendanceSummary> {
    let master = provider.employee_master(employee)?;
    let snapshot = OverlaySnapshot {
        leave: fetch_leave(provider, employee, month),
        regularizations: provider.regularizations(employee, month)?,
        ..Default::default()
    };
    snapshot.validate(employee)?;

    let (resolved, shift, calendar) =
        run_attendance_pipeline(provider, policy, &master, month, cutoff, &snapshot)?;
    let summary = aggregate(month, &resolved, &shift, &calendar, &policy.lateness);

    Ok(MonthlyAttendanceSummary {
        month,
        daily_breakdown: resolved.into_records(),
        summary,
    })
}

/// Computes the full monthly salary result for one employee-month.
pub fn compute_salary<P: AttendanceProvider>(
    provider: &P,
    policy: &PayrollPolicy,
    employee: &str,
    month: BillingMonth,
    overrides: &SalaryOverrides,
) -> EngineResult<SalaryCalculationResult> {
    let mut master = provider.employee_master(employee)?;
    if overrides.join_date.is_some() {
        master.joining_date = overrides.join_date;
    }
    if overrides.exit_date.is_some() {
        master.exit_date = overrides.exit_date;
    }

    let mut leave = fetch_leave(provider, employee, month);
    apply_leave_overrides(&mut leave, &overrides.paid_leave_dates, LeaveCategory::Paid);
    apply_leave_overrides(
        &mut leave,
        &overrides.casual_leave_dates,
        LeaveCategory::Casual,
    );

    let snapshot = OverlaySnapshot {
        leave,
        regularizations: provider.regularizations(employee, month)?,
        adjustments: provider.adjustments(employee, month)?,
        overtime_enabled: provider.overtime_enabled(employee, month)?,
        hold: provider.salary_hold(employee, month)?,
    };
    snapshot.validate(employee)?;

    let (resolved, shift, calendar) = run_attendance_pipeline(
        provider,
        policy,
        &master,
        month,
        overrides.cutoff_date,
        &snapshot,
    )?;
    let attendance = aggregate(month, &resolved, &shift, &calendar, &policy.lateness);

    Ok(calculate_salary(
        employee,
        month,
        master.base_salary,
        attendance,
        snapshot.overtime_enabled,
        &snapshot.adjustments,
        &snapshot.hold,
        policy,
    ))
}

/// Classifies every day of the (possibly truncated) window and runs the
/// overlay and weekoff stages.
fn run_attendance_pipeline<P: AttendanceProvider>(
    provider: &P,
    policy: &PayrollPolicy,
    master: &EmployeeMaster,
    month: BillingMonth,
    cutoff: Option<NaiveDate>,
    snapshot: &OverlaySnapshot,
) -> EngineResult<(ResolvedDays, ShiftDefinition, HolidayCalendar)> {
    let start = month.cycle_start();
    let end = month.effective_end(cutoff);

    // The shift pattern is taken as stable across one cycle.
    let shift = provider.shift_definition(&master.employee_code, start)?;
    let calendar = provider.holiday_calendar(start, month.cycle_end())?;
    let punches = provider.punches(&master.employee_code, start, end)?;

    let records = start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| classify_day(date, &punches, &shift, &calendar, master))
        .collect();

    let overlaid = apply_overlays(ClassifiedDays::new(records), snapshot);
    let resolved = resolve_weekoffs(overlaid, policy.weekoff_absent_threshold);
    Ok((resolved, shift, calendar))
}

/// Leave tables are optional in older deployments; an unreachable leave
/// store degrades to an empty set instead of failing the whole computation.
fn fetch_leave<P: AttendanceProvider>(
    provider: &P,
    employee: &str,
    month: BillingMonth,
) -> Vec<LeaveDate> {
    match provider.approved_leave(employee, month) {
        Ok(leave) => leave,
        Err(err) => {
            warn!(
                employee_code = %employee,
                month = %month,
                error = %err,
                "leave store unavailable, continuing with an empty leave set"
            );
            Vec::new()
        }
    }
}

fn apply_leave_overrides(leave: &mut Vec<LeaveDate>, dates: &[NaiveDate], category: LeaveCategory) {
    for &date in dates {
        leave.retain(|entry| entry.date != date);
        leave.push(LeaveDate {
            date,
            value: rust_decimal::Decimal::ONE,
            category,
        });
    }
}

/// An [`AttendanceProvider`] over data already held in memory.
///
/// Used by the HTTP handlers, whose request bodies carry the complete data
/// snapshot, and convenient for tests.
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    /// The employee master record.
    pub master: EmployeeMaster,
    /// The shift definition applied to every date.
    pub shift: ShiftDefinition,
    /// The holiday calendar.
    pub calendar: HolidayCalendar,
    /// Raw punches for the period.
    pub punches: Vec<RawPunchEvent>,
    /// The overlay snapshot (leave, regularizations, adjustments, flags).
    pub snapshot: OverlaySnapshot,
}

impl AttendanceProvider for SnapshotProvider {
    fn punches(
        &self,
        _employee: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<RawPunchEvent>> {
        Ok(self
            .punches
            .iter()
            .filter(|p| p.date() >= from && p.date() <= to)
            .cloned()
            .collect())
    }

    fn shift_definition(&self, _employee: &str, _date: NaiveDate) -> EngineResult<ShiftDefinition> {
        Ok(self.shift.clone())
    }

    fn holiday_calendar(&self, _from: NaiveDate, _to: NaiveDate) -> EngineResult<HolidayCalendar> {
        Ok(self.calendar.clone())
    }

    fn approved_leave(&self, _employee: &str, _month: BillingMonth) -> EngineResult<Vec<LeaveDate>> {
        Ok(self.snapshot.leave.clone())
    }

    fn regularizations(
        &self,
        _employee: &str,
        _month: BillingMonth,
    ) -> EngineResult<Vec<RegularizationEntry>> {
        Ok(self.snapshot.regularizations.clone())
    }

    fn adjustments(
        &self,
        _employee: &str,
        _month: BillingMonth,
    ) -> EngineResult<Vec<SalaryAdjustment>> {
        Ok(self.snapshot.adjustments.clone())
    }

    fn overtime_enabled(&self, _employee: &str, _month: BillingMonth) -> EngineResult<bool> {
        Ok(self.snapshot.overtime_enabled)
    }

    fn salary_hold(&self, _employee: &str, _month: BillingMonth) -> EngineResult<SalaryHoldStatus> {
        Ok(self.snapshot.hold.clone())
    }

    fn employee_master(&self, _employee: &str) -> EngineResult<EmployeeMaster> {
        Ok(self.master.clone())
    }
}
