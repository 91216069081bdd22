//! Administrator-authored overlays: leave, regularization, and the
//! snapshot bundle the engine computes from.
//!
//! Overlays are persisted by an external store and fetched fresh before
//! each computation; the engine never re-fetches mid-calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::adjustment::SalaryAdjustment;
use super::attendance::DayStatus;
use super::salary::SalaryHoldStatus;

/// The category of an approved leave entry.
///
/// Selecting one category on a date evicts the other; the writer enforces
/// this, and [`OverlaySnapshot::validate`] rejects snapshots that slipped
/// through with both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    /// Paid leave.
    Paid,
    /// Casual leave.
    Casual,
}

/// An approved leave entry for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveDate {
    /// The date the leave applies to.
    pub date: NaiveDate,
    /// The day credit the leave grants (0.5 or 1.0).
    pub value: Decimal,
    /// The leave category.
    pub category: LeaveCategory,
}

/// An administrative override converting a recorded absence or half day
/// into a paid full/half day.
///
/// Only dates whose base status is absent or half-day are eligible; the
/// writer enforces eligibility, the overlay trusts its input set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularizationEntry {
    /// The date being regularized.
    pub date: NaiveDate,
    /// The status recorded before regularization.
    pub original_status: DayStatus,
    /// The status granted by the regularization.
    pub regularized_status: DayStatus,
    /// The day credit the regularization adds (0.5 or 1.0).
    pub value: Decimal,
    /// Optional administrative reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Everything administrator-authored that a single computation reads.
///
/// Fetched from external persistence before invoking the engine, so a
/// calculation never observes a torn read across overlay sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OverlaySnapshot {
    /// Approved leave entries for the period.
    #[serde(default)]
    pub leave: Vec<LeaveDate>,
    /// Regularization entries for the period.
    #[serde(default)]
    pub regularizations: Vec<RegularizationEntry>,
    /// Ad-hoc salary adjustments for the period.
    #[serde(default)]
    pub adjustments: Vec<SalaryAdjustment>,
    /// Whether overtime pay is enabled for this employee/month.
    #[serde(default)]
    pub overtime_enabled: bool,
    /// The salary hold gate for this employee/month.
    #[serde(default)]
    pub hold: SalaryHoldStatus,
}

impl OverlaySnapshot {
    /// Rejects snapshots carrying more than one leave entry per date.
    ///
    /// At most one `LeaveDate` may exist per (employee, date); two entries
    /// on one date would mean both categories were selected at once.
    pub fn validate(&self, employee_code: &str) -> EngineResult<()> {
        let mut seen: Vec<NaiveDate> = Vec::with_capacity(self.leave.len());
        for entry in &self.leave {
            if seen.contains(&entry.date) {
                return Err(EngineError::LeaveConflict {
                    employee_code: employee_code.to_string(),
                    date: entry.date,
                });
            }
            seen.push(entry.date);
        }
        Ok(())
    }

    /// Looks up the leave entry for a date, if any.
    pub fn leave_for(&self, date: NaiveDate) -> Option<&LeaveDate> {
        self.leave.iter().find(|l| l.date == date)
    }

    /// Looks up the regularization entry for a date, if any.
    pub fn regularization_for(&self, date: NaiveDate) -> Option<&RegularizationEntry> {
        self.regularizations.iter().find(|r| r.date == date)
    }
}
