//! Salary breakdown calculation.
//!
//! Combines the period aggregates, the rate parameters, overtime
//! enablement, and the ad-hoc adjustment set into the itemized monthly
//! breakdown. Earnings flow from payable days at the per-day rate;
//! deductions are each computed independently and summed. The statutory
//! line is banded: TDS below the salary ceiling, flat professional tax at
//! or above it, and both suppressed when the period grosses zero.

use rust_decimal::Decimal;

use crate::config::PayrollPolicy;
use crate::models::{
    AdjustmentCategory, AdjustmentType, AttendanceInfo, BillingMonth, HoldState, SalaryAdjustment,
    SalaryBreakdown, SalaryCalculationResult, SalaryHoldStatus, SalaryLifecycle,
};

/// Computes the full monthly salary result from the period aggregates.
///
/// The result is born in the draft lifecycle state; the hold gate is
/// carried over from the persistence collaborator but never changes the
/// numbers.
#[allow(clippy::too_many_arguments)]
pub fn calculate_salary(
    employee_code: &str,
    month: BillingMonth,
    base_salary: Decimal,
    attendance: AttendanceInfo,
    overtime_enabled: bool,
    adjustments: &[SalaryAdjustment],
    hold: &SalaryHoldStatus,
    policy: &PayrollPolicy,
) -> SalaryCalculationResult {
    let per_day_rate = if attendance.expected_working_days == 0 {
        Decimal::ZERO
    } else {
        base_salary / Decimal::from(attendance.expected_working_days)
    };
    let expected_hours_per_day = if attendance.expected_working_days == 0 {
        Decimal::ZERO
    } else {
        attendance.expected_hours / Decimal::from(attendance.expected_working_days)
    };
    let hourly_rate = if expected_hours_per_day.is_zero() {
        Decimal::ZERO
    } else {
        per_day_rate / expected_hours_per_day
    };

    let absent_deduction = Decimal::from(attendance.absent_days) * per_day_rate;
    let half_day_deduction =
        Decimal::from(attendance.half_days) * per_day_rate * Decimal::new(5, 1);
    let late_deduction = late_deduction(&attendance, per_day_rate, policy);
    let adjustment_deductions = sum_adjustments(adjustments, |a| {
        a.adjustment_type == AdjustmentType::Deduction
    });

    let incentive_amount = sum_additions(adjustments, AdjustmentCategory::Incentive);
    let reimbursement_amount = sum_additions(adjustments, AdjustmentCategory::Reimbursement);
    let other_additions = sum_adjustments(adjustments, |a| {
        a.adjustment_type == AdjustmentType::Addition
            && a.category != AdjustmentCategory::Incentive
            && a.category != AdjustmentCategory::Reimbursement
    });

    let sunday_pay = Decimal::from(attendance.paid_weekoffs) * per_day_rate;
    let overtime_amount = if overtime_enabled {
        attendance.overtime_hours * hourly_rate * policy.overtime_multiplier
    } else {
        Decimal::ZERO
    };

    let gross_salary = attendance.payable_days * per_day_rate
        + sunday_pay
        + overtime_amount
        + incentive_amount
        + reimbursement_amount
        + other_additions;

    let prior_deductions =
        absent_deduction + half_day_deduction + late_deduction + adjustment_deductions;
    let (tds, professional_tax) = statutory_line(base_salary, gross_salary, prior_deductions, policy);

    let total_deductions = prior_deductions + tds + professional_tax;
    let net_salary = gross_salary - total_deductions;

    SalaryCalculationResult {
        employee_code: employee_code.to_string(),
        month,
        base_salary,
        gross_salary,
        net_salary,
        attendance,
        breakdown: SalaryBreakdown {
            per_day_rate,
            hourly_rate,
            absent_deduction,
            half_day_deduction,
            late_deduction,
            adjustment_deductions,
            tds,
            professional_tax,
            total_deductions,
            sunday_pay,
            overtime_amount,
            incentive_amount,
            reimbursement_amount,
            other_additions,
        },
        lifecycle: SalaryLifecycle::Draft,
        hold: if hold.is_held {
            HoldState::Held
        } else {
            HoldState::NotHeld
        },
    }
}

/// Two-tier lateness: the minor tier carries a per-period grace allowance,
/// the major tier does not.
fn late_deduction(
    attendance: &AttendanceInfo,
    per_day_rate: Decimal,
    policy: &PayrollPolicy,
) -> Decimal {
    let chargeable_minor = attendance
        .minor_late_count
        .saturating_sub(policy.lateness.grace_occurrences);
    let minor = Decimal::from(chargeable_minor) * policy.lateness.minor_fraction * per_day_rate;
    let major =
        Decimal::from(attendance.major_late_count) * policy.lateness.major_fraction * per_day_rate;
    minor + major
}

/// The banded statutory deduction: TDS or professional tax, never both,
/// and neither when the period grossed nothing.
fn statutory_line(
    base_salary: Decimal,
    gross_salary: Decimal,
    prior_deductions: Decimal,
    policy: &PayrollPolicy,
) -> (Decimal, Decimal) {
    if gross_salary.is_zero() {
        return (Decimal::ZERO, Decimal::ZERO);
    }
    if base_salary < policy.statutory.tds_salary_ceiling {
        let taxable = (gross_salary - prior_deductions).max(Decimal::ZERO);
        (policy.statutory.tds_rate * taxable, Decimal::ZERO)
    } else {
        (Decimal::ZERO, policy.statutory.professional_tax)
    }
}

fn sum_adjustments<F>(adjustments: &[SalaryAdjustment], keep: F) -> Decimal
where
    F: Fn(&SalaryAdjustment) -> bool,
{
    adjustments
        .iter()
        .filter(|a| keep(a))
        .map(|a| a.amount)
        .sum()
}

fn sum_additions(adjustments: &[SalaryAdjustment], category: AdjustmentCategory) -> Decimal {
    sum_adjustments(adjustments, |a| {
        a.adjustment_type == AdjustmentType::Addition && a.category == category
    })
}
