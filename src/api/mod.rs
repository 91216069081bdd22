//! HTTP API module for the attendance engine.
//!
//! This module provides the REST preview endpoints: `/attendance` for the
//! per-day attendance view and `/salary` for the monthly salary result.
//! Request bodies carry the complete data snapshot, keeping the engine
//! free of ambient state.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRequest, SalaryRequest};
pub use response::ApiError;
pub use state::AppState;
