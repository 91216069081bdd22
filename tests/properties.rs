//! Property-based tests over the calculation pipeline.
//!
//! Punch patterns are generated per-day over the 2026-02 salary cycle
//! (2026-01-26..2026-02-25) and the invariants that must hold for any
//! input are checked on the result: day values stay within [0, 1],
//! deduction components never go negative, net reconciles with gross,
//! and recomputation is bit-identical.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use attendance_engine::config::PayrollPolicy;
use attendance_engine::engine::{SalaryOverrides, SnapshotProvider, compute_salary};
use attendance_engine::models::{
    BillingMonth, EmployeeMaster, HolidayCalendar, OverlaySnapshot, RawPunchEvent, ShiftDefinition,
    ShiftSlot,
};

/// How one generated day is worked.
#[derive(Debug, Clone, Copy)]
enum DayPlan {
    Skip,
    Half,
    Full,
    FullLate,
}

fn day_plan() -> impl Strategy<Value = DayPlan> {
    prop_oneof![
        Just(DayPlan::Skip),
        Just(DayPlan::Half),
        Just(DayPlan::Full),
        Just(DayPlan::FullLate),
    ]
}

fn general_shift() -> ShiftDefinition {
    ShiftDefinition {
        slots: vec![ShiftSlot {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        }],
        expected_hours: Decimal::from_str("9").unwrap(),
        full_day_hours: Decimal::from_str("8").unwrap(),
        half_day_hours: Decimal::from_str("4").unwrap(),
        late_threshold_minutes: 10,
        weekly_off: Weekday::Sun,
    }
}

fn punch(date: NaiveDate, time: NaiveTime) -> RawPunchEvent {
    RawPunchEvent {
        employee_code: "EMP001".to_string(),
        timestamp: NaiveDateTime::new(date, time),
    }
}

/// Expands per-day plans into punches over the cycle. Sundays get no
/// punches regardless of the plan.
fn build_provider(base_salary: u32, plans: &[DayPlan]) -> SnapshotProvider {
    let month = BillingMonth::new(2026, 2).unwrap();
    let mut punches = Vec::new();
    let mut date = month.cycle_start();
    let mut idx = 0;
    while date <= month.cycle_end() {
        if date.weekday() != Weekday::Sun {
            match plans[idx % plans.len()] {
                DayPlan::Skip => {}
                DayPlan::Half => {
                    punches.push(punch(date, NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
                    punches.push(punch(date, NaiveTime::from_hms_opt(13, 30, 0).unwrap()));
                }
                DayPlan::Full => {
                    punches.push(punch(date, NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
                    punches.push(punch(date, NaiveTime::from_hms_opt(18, 0, 0).unwrap()));
                }
                DayPlan::FullLate => {
                    punches.push(punch(date, NaiveTime::from_hms_opt(9, 45, 0).unwrap()));
                    punches.push(punch(date, NaiveTime::from_hms_opt(18, 45, 0).unwrap()));
                }
            }
            idx += 1;
        }
        date = date.succ_opt().unwrap();
    }
    SnapshotProvider {
        master: EmployeeMaster {
            employee_code: "EMP001".to_string(),
            base_salary: Decimal::from(base_salary),
            joining_date: None,
            exit_date: None,
        },
        shift: general_shift(),
        calendar: HolidayCalendar::default(),
        punches,
        snapshot: OverlaySnapshot::default(),
    }
}

fn compute(base_salary: u32, plans: &[DayPlan]) -> attendance_engine::models::SalaryCalculationResult {
    let provider = build_provider(base_salary, plans);
    compute_salary(
        &provider,
        &PayrollPolicy::default(),
        "EMP001",
        BillingMonth::new(2026, 2).unwrap(),
        &SalaryOverrides::default(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn prop_payable_days_bounded_by_window(
        base in 8000u32..40000,
        plans in proptest::collection::vec(day_plan(), 27),
    ) {
        let result = compute(base, &plans);
        prop_assert!(result.attendance.payable_days >= Decimal::ZERO);
        prop_assert!(
            result.attendance.payable_days <= Decimal::from(result.attendance.total_days)
        );
    }

    #[test]
    fn prop_deduction_components_never_negative(
        base in 8000u32..40000,
        plans in proptest::collection::vec(day_plan(), 27),
    ) {
        let result = compute(base, &plans);
        let b = &result.breakdown;
        prop_assert!(b.absent_deduction >= Decimal::ZERO);
        prop_assert!(b.half_day_deduction >= Decimal::ZERO);
        prop_assert!(b.late_deduction >= Decimal::ZERO);
        prop_assert!(b.tds >= Decimal::ZERO);
        prop_assert!(b.professional_tax >= Decimal::ZERO);
        prop_assert!(b.total_deductions >= Decimal::ZERO);
    }

    #[test]
    fn prop_net_reconciles_with_gross(
        base in 8000u32..40000,
        plans in proptest::collection::vec(day_plan(), 27),
    ) {
        let result = compute(base, &plans);
        prop_assert_eq!(
            result.net_salary,
            result.gross_salary - result.breakdown.total_deductions
        );
    }

    #[test]
    fn prop_statutory_deductions_suppressed_at_zero_gross(
        base in 8000u32..40000,
    ) {
        // Nobody punched all month: every working day absent, every
        // weekoff unpaid by the absence override.
        let result = compute(base, &[DayPlan::Skip]);
        prop_assert_eq!(result.gross_salary, Decimal::ZERO);
        prop_assert_eq!(result.breakdown.tds, Decimal::ZERO);
        prop_assert_eq!(result.breakdown.professional_tax, Decimal::ZERO);
    }

    #[test]
    fn prop_exactly_one_statutory_regime_applies(
        base in 8000u32..40000,
        plans in proptest::collection::vec(day_plan(), 27),
    ) {
        let result = compute(base, &plans);
        let b = &result.breakdown;
        prop_assert!(
            b.tds == Decimal::ZERO || b.professional_tax == Decimal::ZERO,
            "tds {} and professional tax {} both charged",
            b.tds,
            b.professional_tax
        );
    }

    #[test]
    fn prop_recomputation_is_bit_identical(
        base in 8000u32..40000,
        plans in proptest::collection::vec(day_plan(), 27),
    ) {
        let first = compute(base, &plans);
        let second = compute(base, &plans);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn prop_day_counts_partition_the_window(
        base in 8000u32..40000,
        plans in proptest::collection::vec(day_plan(), 27),
    ) {
        let result = compute(base, &plans);
        let a = &result.attendance;
        let counted = a.full_days
            + a.half_days
            + a.absent_days
            + a.paid_weekoffs
            + a.unpaid_weekoffs
            + a.holidays;
        prop_assert_eq!(counted, a.total_days);
    }
}
