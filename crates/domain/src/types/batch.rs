//! Per-item outcome of a batch invoice creation

use super::invoice::Invoice;
use crate::errors::{AccountingError, Result};

/// Result slot for `inputs[index]` of a batch.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub index: usize,
    pub outcome: Result<Invoice>,
}

impl BatchResult {
    pub fn new(index: usize, outcome: Result<Invoice>) -> Self {
        Self { index, outcome }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn invoice(&self) -> Option<&Invoice> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&AccountingError> {
        self.outcome.as_ref().err()
    }
}

/// Count of successful and failed slots in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[BatchResult]) -> Self {
        let succeeded = results.iter().filter(|result| result.is_ok()).count();
        Self { succeeded, failed: results.len() - succeeded }
    }
}
