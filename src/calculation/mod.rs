//! The attendance-to-payroll calculation pipeline.
//!
//! Five pure stages, each a function of its explicit inputs:
//!
//! 1. [`classify_day`] derives a base status from punches and shift data.
//! 2. [`apply_overlays`] rewrites days with leave and regularizations.
//! 3. [`resolve_weekoffs`] decides paid/unpaid for every rest day.
//! 4. [`aggregate`] rolls the days up into period totals.
//! 5. [`calculate_salary`] turns the totals into the monthly breakdown.
//!
//! The stage outputs are distinct wrapper types ([`ClassifiedDays`] →
//! [`OverlaidDays`] → [`ResolvedDays`]), so invoking the stages out of
//! order does not compile.

pub mod aggregate;
pub mod breakdown;
pub mod classifier;
pub mod overlay;
pub mod weekoff;

pub use aggregate::aggregate;
pub use breakdown::calculate_salary;
pub use classifier::{ClassifiedDays, classify_day};
pub use overlay::{OverlaidDays, apply_overlays};
pub use weekoff::{ResolvedDays, resolve_weekoffs};
