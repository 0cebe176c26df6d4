//! Sales invoice service and bounded batch creation

use std::sync::Arc;

use futures::future::join_all;
use ledgerbridge_common::resilience::{AdmissionError, AdmissionGate};
use ledgerbridge_domain::constants::BATCH_CONCURRENCY;
use ledgerbridge_domain::{
    AccountingError, BatchResult, BatchSummary, CreateCreditNoteInput, CreateInvoiceInput,
    Invoice, InvoicePdf, ListInvoicesInput, Result,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::cancellation::run_cancellable;
use crate::provider_ports::AccountingProvider;

/// Invoice operations on top of an [`AccountingProvider`]
pub struct InvoiceService {
    provider: Arc<dyn AccountingProvider>,
    batch_concurrency: usize,
}

impl InvoiceService {
    pub fn new(provider: Arc<dyn AccountingProvider>) -> Self {
        Self { provider, batch_concurrency: BATCH_CONCURRENCY }
    }

    /// Override how many create calls a batch keeps in flight.
    ///
    /// A limit of 0 admits nothing: every slot of a batch fails with `Config`.
    pub fn with_batch_concurrency(mut self, limit: usize) -> Self {
        self.batch_concurrency = limit;
        self
    }

    pub fn batch_concurrency(&self) -> usize {
        self.batch_concurrency
    }

    pub async fn create(&self, input: &CreateInvoiceInput) -> Result<Invoice> {
        self.provider.create_invoice(input).await
    }

    pub async fn get(&self, id: &str) -> Result<Invoice> {
        self.provider.get_invoice(id).await
    }

    /// Rendered PDF; `delivery_note` requests the variant without prices.
    pub async fn get_pdf(&self, id: &str, delivery_note: bool) -> Result<InvoicePdf> {
        self.provider.get_invoice_pdf(id, delivery_note).await
    }

    pub async fn list(&self, input: &ListInvoicesInput) -> Result<Vec<Invoice>> {
        self.provider.list_invoices(input).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.provider.delete_invoice(id).await
    }

    pub async fn create_credit_note(&self, input: &CreateCreditNoteInput) -> Result<Invoice> {
        self.provider.create_credit_note(input).await
    }

    /// Create every invoice in `inputs`, at most `batch_concurrency` at a time.
    ///
    /// The returned vector has one slot per input, in input order. A failed
    /// create only fills its own slot; the remaining creates still run.
    #[instrument(skip(self, inputs), fields(count = inputs.len(), limit = self.batch_concurrency))]
    pub async fn batch_create(&self, inputs: Vec<CreateInvoiceInput>) -> Vec<BatchResult> {
        self.run_batch(&inputs, None).await
    }

    /// Like [`batch_create`](Self::batch_create), but every slot still
    /// waiting or in flight when `token` fires resolves to `Cancelled`.
    ///
    /// Cancellation closes the admission gate, so waiting slots never reach
    /// the provider.
    #[instrument(skip(self, inputs, token), fields(count = inputs.len(), limit = self.batch_concurrency))]
    pub async fn batch_create_cancellable(
        &self,
        inputs: Vec<CreateInvoiceInput>,
        token: &CancellationToken,
    ) -> Vec<BatchResult> {
        self.run_batch(&inputs, Some(token)).await
    }

    async fn run_batch(
        &self,
        inputs: &[CreateInvoiceInput],
        token: Option<&CancellationToken>,
    ) -> Vec<BatchResult> {
        let gate = match AdmissionGate::new(self.batch_concurrency) {
            Ok(gate) => gate,
            Err(err) => {
                let error = admission_failure(err);
                return (0..inputs.len())
                    .map(|index| BatchResult::new(index, Err(error.clone())))
                    .collect();
            }
        };

        let slots = inputs.iter().enumerate().map(|(index, input)| {
            let gate = &gate;
            async move {
                let outcome = gate
                    .run(|| async {
                        let create = self.provider.create_invoice(input);
                        match token {
                            Some(token) => run_cancellable(token, create).await,
                            None => create.await,
                        }
                    })
                    .await
                    .unwrap_or_else(|err| Err(admission_failure(err)));
                BatchResult::new(index, outcome)
            }
        });

        // join_all yields in input order, so slot i always holds inputs[i]
        let batch = join_all(slots);
        let results = match token {
            Some(token) => {
                tokio::pin!(batch);
                let finished = tokio::select! {
                    biased;
                    () = token.cancelled() => None,
                    results = &mut batch => Some(results),
                };
                match finished {
                    Some(results) => results,
                    None => {
                        debug!("batch cancelled, closing admission");
                        gate.close();
                        batch.await
                    }
                }
            }
            None => batch.await,
        };

        let summary = BatchSummary::from_results(&results);
        info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            peak_in_flight = gate.metrics().peak_in_flight,
            "batch invoice creation finished"
        );
        results
    }
}

fn admission_failure(err: AdmissionError) -> AccountingError {
    match err {
        AdmissionError::Closed => AccountingError::Cancelled,
        AdmissionError::InvalidCapacity => AccountingError::Config(err.to_string()),
    }
}
