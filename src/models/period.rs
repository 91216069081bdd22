//! Billing month and holiday calendar models.
//!
//! The salary cycle is a fixed billing window from the 26th of the
//! previous month through the 25th of the target month. A caller-supplied
//! cutoff date can truncate the window for mid-cycle previews.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The day of month on which the salary cycle rolls over.
pub const CYCLE_BOUNDARY_DAY: u32 = 26;

/// A target billing month (e.g. February 2026 bills 2026-01-26..2026-02-25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillingMonth {
    /// The calendar year.
    pub year: i32,
    /// The calendar month, 1-12.
    pub month: u32,
}

impl BillingMonth {
    /// Creates a billing month, rejecting out-of-range months.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidMonth {
                value: format!("{:04}-{:02}", year, month),
                message: "month must be 1-12".to_string(),
            });
        }
        Ok(Self { year, month })
    }

    /// The first day of the salary cycle (26th of the previous month).
    pub fn cycle_start(&self) -> NaiveDate {
        let month = self.month.clamp(1, 12);
        let (year, month) = if month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, month - 1)
        };
        boundary_date(year, month, CYCLE_BOUNDARY_DAY)
    }

    /// The last day of the salary cycle (25th of the target month).
    pub fn cycle_end(&self) -> NaiveDate {
        boundary_date(self.year, self.month.clamp(1, 12), CYCLE_BOUNDARY_DAY - 1)
    }

    /// The cycle end, truncated by an optional cutoff date.
    ///
    /// A cutoff before the cycle start clamps to the start; a cutoff past
    /// the cycle end is ignored.
    pub fn effective_end(&self, cutoff: Option<NaiveDate>) -> NaiveDate {
        match cutoff {
            Some(cutoff) => cutoff.clamp(self.cycle_start(), self.cycle_end()),
            None => self.cycle_end(),
        }
    }

    /// Checks if a date falls inside the full salary cycle (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.cycle_start() && date <= self.cycle_end()
    }

    /// The billing month a given date belongs to.
    pub fn of_date(date: NaiveDate) -> Self {
        if date.day() >= CYCLE_BOUNDARY_DAY {
            let (year, month) = if date.month() == 12 {
                (date.year() + 1, 1)
            } else {
                (date.year(), date.month() + 1)
            };
            Self { year, month }
        } else {
            Self {
                year: date.year(),
                month: date.month(),
            }
        }
    }
}

/// The boundary day exists in every month 1-12; the month is clamped by
/// the callers, so the fallback is unreachable.
fn boundary_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

impl FromStr for BillingMonth {
    type Err = EngineError;

    /// Parses "YYYY-MM".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| EngineError::InvalidMonth {
            value: s.to_string(),
            message: message.to_string(),
        };

        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| invalid("expected YYYY-MM"))?;
        let year: i32 = year_str
            .parse()
            .map_err(|_| invalid("year is not a number"))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| invalid("month is not a number"))?;
        Self::new(year, month)
    }
}

impl std::fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A named holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// The holiday calendar consulted during classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HolidayCalendar {
    /// Holidays known to the calendar.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Checks if a given date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_cycle_window_regular_month() {
        let month = BillingMonth::new(2026, 2).unwrap();
        assert_eq!(month.cycle_start(), make_date("2026-01-26"));
        assert_eq!(month.cycle_end(), make_date("2026-02-25"));
    }

    #[test]
    fn test_cycle_window_january_crosses_year() {
        let month = BillingMonth::new(2026, 1).unwrap();
        assert_eq!(month.cycle_start(), make_date("2025-12-26"));
        assert_eq!(month.cycle_end(), make_date("2026-01-25"));
    }

    #[test]
    fn test_cycle_window_never_panics_on_hand_built_month() {
        // Months normally come through new()/FromStr; a struct literal
        // with an out-of-range month must still not panic.
        let month = BillingMonth { year: 2026, month: 0 };
        assert!(month.cycle_start() <= month.cycle_end());
        let month = BillingMonth { year: 2026, month: 13 };
        assert!(month.cycle_start() <= month.cycle_end());
    }

    #[test]
    fn test_new_rejects_month_13() {
        match BillingMonth::new(2026, 13) {
            Err(EngineError::InvalidMonth { value, .. }) => assert_eq!(value, "2026-13"),
            other => panic!("Expected InvalidMonth, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_valid_month() {
        let month: BillingMonth = "2026-02".parse().unwrap();
        assert_eq!(month, BillingMonth { year: 2026, month: 2 });
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("2026".parse::<BillingMonth>().is_err());
        assert!("2026-xx".parse::<BillingMonth>().is_err());
        assert!("abcd-02".parse::<BillingMonth>().is_err());
        assert!("2026-00".parse::<BillingMonth>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let month = BillingMonth::new(2026, 7).unwrap();
        assert_eq!(month.to_string(), "2026-07");
        assert_eq!(month.to_string().parse::<BillingMonth>().unwrap(), month);
    }

    #[test]
    fn test_effective_end_without_cutoff() {
        let month = BillingMonth::new(2026, 2).unwrap();
        assert_eq!(month.effective_end(None), make_date("2026-02-25"));
    }

    #[test]
    fn test_effective_end_with_mid_cycle_cutoff() {
        let month = BillingMonth::new(2026, 2).unwrap();
        assert_eq!(
            month.effective_end(Some(make_date("2026-02-10"))),
            make_date("2026-02-10")
        );
    }

    #[test]
    fn test_effective_end_clamps_out_of_window_cutoffs() {
        let month = BillingMonth::new(2026, 2).unwrap();
        assert_eq!(
            month.effective_end(Some(make_date("2026-03-10"))),
            make_date("2026-02-25")
        );
        assert_eq!(
            month.effective_end(Some(make_date("2026-01-01"))),
            make_date("2026-01-26")
        );
    }

    #[test]
    fn test_contains_date() {
        let month = BillingMonth::new(2026, 2).unwrap();
        assert!(month.contains_date(make_date("2026-01-26")));
        assert!(month.contains_date(make_date("2026-02-25")));
        assert!(!month.contains_date(make_date("2026-01-25")));
        assert!(!month.contains_date(make_date("2026-02-26")));
    }

    #[test]
    fn test_of_date_respects_cycle_boundary() {
        assert_eq!(
            BillingMonth::of_date(make_date("2026-01-25")),
            BillingMonth { year: 2026, month: 1 }
        );
        assert_eq!(
            BillingMonth::of_date(make_date("2026-01-26")),
            BillingMonth { year: 2026, month: 2 }
        );
        assert_eq!(
            BillingMonth::of_date(make_date("2026-12-28")),
            BillingMonth { year: 2027, month: 1 }
        );
    }

    #[test]
    fn test_holiday_calendar_lookup() {
        let calendar = HolidayCalendar {
            holidays: vec![Holiday {
                date: make_date("2026-01-26"),
                name: "Republic Day".to_string(),
            }],
        };
        assert!(calendar.is_holiday(make_date("2026-01-26")));
        assert!(!calendar.is_holiday(make_date("2026-01-27")));
    }

    #[test]
    fn test_holiday_calendar_deserialization() {
        let json = r#"{
            "holidays": [
                {"date": "2026-03-04", "name": "Holi"}
            ]
        }"#;
        let calendar: HolidayCalendar = serde_json::from_str(json).unwrap();
        assert_eq!(calendar.holidays.len(), 1);
        assert_eq!(calendar.holidays[0].name, "Holi");
    }
}
