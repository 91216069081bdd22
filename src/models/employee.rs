//! Employee master data.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The master record the salary computation is anchored on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeMaster {
    /// Unique employee code.
    pub employee_code: String,
    /// Monthly contractual basic salary.
    pub base_salary: Decimal,
    /// Joining date; days before it are excluded from every count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    /// Exit date; days after it are excluded from every count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<NaiveDate>,
}

impl EmployeeMaster {
    /// True when `date` falls inside the employment window.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        if let Some(joined) = self.joining_date {
            if date < joined {
                return false;
            }
        }
        if let Some(exited) = self.exit_date {
            if date > exited {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn master() -> EmployeeMaster {
        EmployeeMaster {
            employee_code: "EMP001".to_string(),
            base_salary: Decimal::from_str("18000").unwrap(),
            joining_date: Some(make_date("2026-02-05")),
            exit_date: Some(make_date("2026-02-20")),
        }
    }

    #[test]
    fn test_active_inside_window() {
        assert!(master().is_active_on(make_date("2026-02-10")));
        assert!(master().is_active_on(make_date("2026-02-05")));
        assert!(master().is_active_on(make_date("2026-02-20")));
    }

    #[test]
    fn test_inactive_outside_window() {
        assert!(!master().is_active_on(make_date("2026-02-04")));
        assert!(!master().is_active_on(make_date("2026-02-21")));
    }

    #[test]
    fn test_open_window_is_always_active() {
        let master = EmployeeMaster {
            employee_code: "EMP002".to_string(),
            base_salary: Decimal::from_str("12000").unwrap(),
            joining_date: None,
            exit_date: None,
        };
        assert!(master.is_active_on(make_date("1999-01-01")));
        assert!(master.is_active_on(make_date("2099-12-31")));
    }

    #[test]
    fn test_master_deserialization() {
        let json = r#"{
            "employee_code": "EMP003",
            "base_salary": "12000"
        }"#;
        let master: EmployeeMaster = serde_json::from_str(json).unwrap();
        assert_eq!(master.employee_code, "EMP003");
        assert!(master.joining_date.is_none());
        assert!(master.exit_date.is_none());
    }
}
