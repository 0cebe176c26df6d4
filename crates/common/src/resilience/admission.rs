//! Admission gate for bounding in-flight operations
//!
//! A fixed number of permits guards a section of work. Callers beyond the
//! capacity wait for a permit instead of being rejected, so every admitted
//! operation eventually runs. The gate also tracks how many operations are in
//! flight and the highest concurrency observed, which lets callers and tests
//! verify the bound actually held.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{debug, instrument};

use super::AdmissionError;

/// Point-in-time view of an [`AdmissionGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionMetrics {
    /// Maximum operations allowed in flight
    pub capacity: usize,
    /// Operations currently holding a permit
    pub in_flight: usize,
    /// Highest `in_flight` value seen since creation or last reset
    pub peak_in_flight: usize,
    /// Total operations admitted
    pub admitted: u64,
}

/// Fixed-capacity concurrency limiter.
///
/// Cloning shares the permits and counters.
///
/// ```rust
/// use ledgerbridge_common::resilience::AdmissionGate;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let gate = AdmissionGate::new(5)?;
/// let value = gate.run(|| async { 42 }).await?;
/// assert_eq!(value, 42);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AdmissionGate {
    capacity: usize,
    semaphore: Arc<Semaphore>,
    in_flight: Arc<AtomicUsize>,
    peak_in_flight: Arc<AtomicUsize>,
    admitted: Arc<AtomicU64>,
}

impl AdmissionGate {
    /// Create a gate admitting at most `capacity` operations at once.
    ///
    /// # Errors
    /// [`AdmissionError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, AdmissionError> {
        if capacity == 0 {
            return Err(AdmissionError::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            semaphore: Arc::new(Semaphore::new(capacity)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            peak_in_flight: Arc::new(AtomicUsize::new(0)),
            admitted: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Wait for a permit, then run `operation` while holding it.
    ///
    /// The permit is released when the operation completes or when the
    /// returned future is dropped.
    ///
    /// # Errors
    /// [`AdmissionError::Closed`] if the gate was closed before a permit was
    /// granted. Errors of the operation itself are part of `T`.
    #[instrument(level = "debug", skip(self, operation), fields(capacity = self.capacity))]
    pub async fn run<F, Fut, T>(&self, operation: F) -> Result<T, AdmissionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let _permit = self.semaphore.acquire().await.map_err(|_| AdmissionError::Closed)?;
        let _slot = InFlightSlot::enter(self);
        debug!(in_flight = self.in_flight(), "admitted operation");

        Ok(operation().await)
    }

    /// Refuse all further admissions; waiting callers fail with `Closed`.
    ///
    /// Operations that already hold a permit run to completion.
    pub fn close(&self) {
        self.semaphore.close();
    }

    pub fn is_closed(&self) -> bool {
        self.semaphore.is_closed()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn metrics(&self) -> AdmissionMetrics {
        AdmissionMetrics {
            capacity: self.capacity,
            in_flight: self.in_flight(),
            peak_in_flight: self.peak_in_flight.load(Ordering::Acquire),
            admitted: self.admitted.load(Ordering::Acquire),
        }
    }
}

impl fmt::Debug for AdmissionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdmissionGate")
            .field("capacity", &self.capacity)
            .field("in_flight", &self.in_flight())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Keeps the in-flight counter accurate even if the operation is dropped.
struct InFlightSlot<'a> {
    gate: &'a AdmissionGate,
}

impl<'a> InFlightSlot<'a> {
    fn enter(gate: &'a AdmissionGate) -> Self {
        let now = gate.in_flight.fetch_add(1, Ordering::AcqRel) + 1;
        gate.peak_in_flight.fetch_max(now, Ordering::AcqRel);
        gate.admitted.fetch_add(1, Ordering::Relaxed);
        Self { gate }
    }
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}
