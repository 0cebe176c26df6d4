//! Concurrency control primitives

pub mod admission;

pub use admission::{AdmissionGate, AdmissionMetrics};

/// Why an operation was not admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    #[error("admission capacity must be at least 1")]
    InvalidCapacity,

    #[error("admission gate is closed")]
    Closed,
}
