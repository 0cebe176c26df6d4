//! Cooperative cancellation for provider calls

use std::future::Future;

use ledgerbridge_domain::{AccountingError, Result};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Race `future` against `token`.
///
/// When the token fires first the future is dropped, which aborts any HTTP
/// request it had in flight, and `AccountingError::Cancelled` is returned.
/// An already-cancelled token never polls the future.
pub async fn run_cancellable<F, T>(token: &CancellationToken, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if token.is_cancelled() {
        return Err(AccountingError::Cancelled);
    }

    tokio::select! {
        biased;
        () = token.cancelled() => {
            debug!("operation cancelled before completion");
            Err(AccountingError::Cancelled)
        }
        outcome = future => outcome,
    }
}
