//! Batch salary runs.
//!
//! Computes salaries for a list of employees in bounded chunks so a
//! month-end run does not hammer the collaborators all at once. Each
//! employee is computed on its own tokio task; a failure is captured in
//! that employee's slot and never aborts the rest of the batch.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::PayrollPolicy;
use crate::engine::{AttendanceProvider, SalaryOverrides, compute_salary};
use crate::error::{EngineError, EngineResult};
use crate::models::{BillingMonth, SalaryCalculationResult};

/// Pacing options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Employees computed concurrently per chunk. Clamped to at least 1.
    pub batch_size: usize,
    /// Stagger between task starts within a chunk.
    pub item_delay: Duration,
    /// Pause between chunks.
    pub batch_delay: Duration,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            batch_size: 4,
            item_delay: Duration::ZERO,
            batch_delay: Duration::ZERO,
        }
    }
}

/// One employee's slot in the batch outcome, in input order.
#[derive(Debug)]
pub struct BatchItem {
    /// The employee the slot belongs to.
    pub employee_code: String,
    /// The computation outcome for that employee.
    pub outcome: EngineResult<SalaryCalculationResult>,
}

/// Runs the salary computation for every employee code, in input order.
pub async fn run_batch<P>(
    provider: Arc<P>,
    policy: Arc<PayrollPolicy>,
    codes: Vec<String>,
    month: BillingMonth,
    options: BatchOptions,
) -> Vec<BatchItem>
where
    P: AttendanceProvider + Send + Sync + 'static,
{
    let batch_size = options.batch_size.max(1);
    let batch_id = uuid::Uuid::new_v4();
    info!(
        %batch_id,
        %month,
        employees = codes.len(),
        batch_size,
        "starting batch salary run"
    );

    let mut items = Vec::with_capacity(codes.len());
    let chunks: Vec<&[String]> = codes.chunks(batch_size).collect();
    let chunk_count = chunks.len();

    for (chunk_index, chunk) in chunks.into_iter().enumerate() {
        let mut handles = Vec::with_capacity(chunk.len());
        for (item_index, code) in chunk.iter().cloned().enumerate() {
            let provider = Arc::clone(&provider);
            let policy = Arc::clone(&policy);
            let stagger = options.item_delay * item_index as u32;
            handles.push(tokio::spawn(async move {
                if !stagger.is_zero() {
                    tokio::time::sleep(stagger).await;
                }
                let outcome = compute_salary(
                    provider.as_ref(),
                    &policy,
                    &code,
                    month,
                    &SalaryOverrides::default(),
                );
                BatchItem {
                    employee_code: code,
                    outcome,
                }
            }));
        }

        for (handle, code) in handles.into_iter().zip(chunk.iter()) {
            let item = match handle.await {
                Ok(item) => item,
                Err(join_err) => BatchItem {
                    employee_code: code.clone(),
                    outcome: Err(EngineError::CalculationError {
                        message: format!("batch task failed: {join_err}"),
                    }),
                },
            };
            if let Err(err) = &item.outcome {
                warn!(
                    %batch_id,
                    employee_code = %item.employee_code,
                    error = %err,
                    "batch item failed"
                );
            }
            items.push(item);
        }

        if chunk_index + 1 < chunk_count && !options.batch_delay.is_zero() {
            tokio::time::sleep(options.batch_delay).await;
        }
    }

    let failures = items.iter().filter(|i| i.outcome.is_err()).count();
    info!(%batch_id, total = items.len(), failures, "batch salary run finished");
    items
}
