//! Application state for the attendance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PayrollPolicy;

/// Shared application state.
///
/// The engine itself is stateless; the only shared resource is the loaded
/// payroll policy.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<PayrollPolicy>,
}

impl AppState {
    /// Creates a new application state with the given payroll policy.
    pub fn new(policy: PayrollPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
