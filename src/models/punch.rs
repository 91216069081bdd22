//! Raw biometric punch events.
//!
//! A punch is one scan from a biometric device. Arrival order is not
//! guaranteed, so consumers must sort before deriving entry/exit times.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One biometric scan for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPunchEvent {
    /// The employee the scan belongs to.
    pub employee_code: String,
    /// When the scan happened (device-local naive time).
    pub timestamp: NaiveDateTime,
}

impl RawPunchEvent {
    /// Returns the calendar date of the punch.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
