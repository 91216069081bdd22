//! Attendance-to-Payroll Calculation Engine.
//!
//! This crate turns raw biometric punch data plus administrative overlays
//! (approved leave, regularizations, overtime toggles, manual adjustments,
//! salary holds) into a canonical per-day attendance classification for a
//! billing period and a fully itemized monthly salary breakdown.

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
