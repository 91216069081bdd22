//! Payroll policy configuration.
//!
//! This module provides the [`PayrollPolicy`] applied by the breakdown
//! calculator and weekoff resolver, loadable from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::PayrollPolicy;
//!
//! let policy = PayrollPolicy::load("./config/payroll.yaml").unwrap();
//! println!("TDS ceiling: {}", policy.statutory.tds_salary_ceiling);
//! ```

mod loader;
mod types;

pub use types::{LatenessPolicy, PayrollPolicy, StatutoryPolicy};
