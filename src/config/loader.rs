//! Payroll policy loading.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollPolicy;

impl PayrollPolicy {
    /// Loads a payroll policy from a YAML file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::PayrollPolicy;
    ///
    /// let policy = PayrollPolicy::load("./config/payroll.yaml")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
