//! Ad-hoc salary adjustments.
//!
//! Adjustments are administrator-authored one-off deductions or additions
//! (uniform charges, advances, reimbursements, incentives) applied
//! verbatim to the monthly breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether an adjustment is taken from or added to the salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentType {
    /// Subtracted from the salary.
    Deduction,
    /// Added to the salary.
    Addition,
}

/// The business category of an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentCategory {
    /// Uniform t-shirt charge.
    TShirt,
    /// Salary advance recovery.
    Advance,
    /// Expense reimbursement.
    Reimbursement,
    /// Performance incentive.
    Incentive,
    /// Anything else; itemized only by description.
    Other,
}

/// One ad-hoc deduction or addition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryAdjustment {
    /// Deduction or addition.
    #[serde(rename = "type")]
    pub adjustment_type: AdjustmentType,
    /// The business category.
    pub category: AdjustmentCategory,
    /// The amount, always non-negative.
    pub amount: Decimal,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
