//! Payroll policy types.
//!
//! The policy holds every band, rate, and threshold the breakdown
//! calculator and weekoff resolver apply. Values are deserialized from
//! YAML; [`PayrollPolicy::default`] carries the production constants.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The lateness deduction policy.
#[derive(Debug, Clone, Deserialize)]
pub struct LatenessPolicy {
    /// Minutes past shift start at which the 10-29 minute tier begins.
    pub minor_minutes: i64,
    /// Minutes past shift start at which the no-grace tier begins.
    pub major_minutes: i64,
    /// Free occurrences in the minor tier per period.
    pub grace_occurrences: u32,
    /// Per-day-rate fraction charged per minor occurrence beyond grace.
    pub minor_fraction: Decimal,
    /// Per-day-rate fraction charged per major occurrence.
    pub major_fraction: Decimal,
}

/// The statutory deduction policy (TDS vs professional tax bands).
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryPolicy {
    /// TDS rate applied below the band boundary.
    pub tds_rate: Decimal,
    /// Base salaries below this amount attract TDS; at or above it,
    /// professional tax applies instead.
    pub tds_salary_ceiling: Decimal,
    /// Flat professional tax amount.
    pub professional_tax: Decimal,
}

/// The complete payroll policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollPolicy {
    /// Lateness tiers and grace.
    pub lateness: LatenessPolicy,
    /// Statutory deduction bands.
    pub statutory: StatutoryPolicy,
    /// Multiplier applied to the hourly rate for overtime pay.
    pub overtime_multiplier: Decimal,
    /// Overlaid absences at or above which every weekoff is unpaid.
    pub weekoff_absent_threshold: u32,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            lateness: LatenessPolicy {
                minor_minutes: 10,
                major_minutes: 30,
                grace_occurrences: 3,
                minor_fraction: Decimal::new(25, 2),
                major_fraction: Decimal::new(5, 1),
            },
            statutory: StatutoryPolicy {
                tds_rate: Decimal::new(1, 1),
                tds_salary_ceiling: Decimal::new(15_000, 0),
                professional_tax: Decimal::new(200, 0),
            },
            overtime_multiplier: Decimal::ONE,
            weekoff_absent_threshold: 5,
        }
    }
}
