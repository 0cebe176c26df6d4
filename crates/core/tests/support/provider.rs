//! Scriptable in-memory `AccountingProvider`
//!
//! Records every call by operation name and tracks how many invoice creates
//! overlap, so batch tests can assert the concurrency bound.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use ledgerbridge_core::AccountingProvider;
use ledgerbridge_domain::{
    normalize_email, Account, AccountingError, CreateCreditNoteInput, CreateCustomerInput,
    CreateInvoiceInput, CreateItemInput, CreatePaymentInput, CreatePurchaseInput,
    CreatePurchasePaymentInput, CreateVendorInput, Customer, CustomerDebt, CustomerDebtsQuery,
    FinancialReport, FinancialReportQuery, Invoice, InvoicePdf, InvoiceStatus, Item,
    ListCustomersInput, ListInvoicesInput, ListItemsInput, ListPaymentsInput, ListPurchasesInput,
    ListVendorsInput, Payment, PurchaseInvoice, Result, Tax, UpdateCustomerInput,
    UpdateItemInput, Vendor,
};
use parking_lot::Mutex;

#[derive(Default)]
pub struct MockProvider {
    create_delay: Duration,
    failing_invoices: HashSet<String>,
    customers: Vec<Customer>,
    lookup_error: Option<AccountingError>,
    taxes: Vec<Tax>,
    changed_invoices: Vec<Invoice>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `create_invoice` sleeps this long before answering.
    pub fn with_create_delay(mut self, delay: Duration) -> Self {
        self.create_delay = delay;
        self
    }

    /// `create_invoice` fails with a 500 for this invoice number.
    pub fn failing_invoice(mut self, number: &str) -> Self {
        self.failing_invoices.insert(number.to_string());
        self
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customers.push(customer);
        self
    }

    /// `find_customer_by_email` returns this error instead of searching.
    pub fn with_lookup_error(mut self, error: AccountingError) -> Self {
        self.lookup_error = Some(error);
        self
    }

    pub fn with_tax(mut self, tax: Tax) -> Self {
        self.taxes.push(tax);
        self
    }

    pub fn with_changed_invoice(mut self, invoice: Invoice) -> Self {
        self.changed_invoices.push(invoice);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls.lock().iter().filter(|call| call.as_str() == operation).count()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, operation: &str) {
        self.calls.lock().push(operation.to_string());
    }
}

fn wrap(operation: &str, source: AccountingError) -> AccountingError {
    AccountingError::in_operation("mock", operation, source)
}

#[async_trait]
impl AccountingProvider for MockProvider {
    async fn test_connection(&self) -> Result<()> {
        self.record("test_connection");
        Ok(())
    }

    async fn create_invoice(&self, input: &CreateInvoiceInput) -> Result<Invoice> {
        self.record("create_invoice");
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(self.create_delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.failing_invoices.contains(&input.invoice_no) {
            return Err(wrap(
                "create_invoice",
                AccountingError::Api { status: 500, body: "rejected".into() },
            ));
        }
        Ok(Invoice {
            id: format!("id-{}", input.invoice_no),
            number: input.invoice_no.clone(),
            customer_name: input.customer_name.clone(),
            status: InvoiceStatus::Unpaid,
            ..Invoice::default()
        })
    }

    async fn get_invoice(&self, id: &str) -> Result<Invoice> {
        self.record("get_invoice");
        Ok(Invoice { id: id.to_string(), ..Invoice::default() })
    }

    async fn get_invoice_pdf(&self, id: &str, _delivery_note: bool) -> Result<InvoicePdf> {
        self.record("get_invoice_pdf");
        Ok(InvoicePdf { file_name: format!("{id}.pdf"), content: b"%PDF".to_vec() })
    }

    async fn list_invoices(&self, _input: &ListInvoicesInput) -> Result<Vec<Invoice>> {
        self.record("list_invoices");
        Ok(Vec::new())
    }

    async fn delete_invoice(&self, _id: &str) -> Result<()> {
        self.record("delete_invoice");
        Ok(())
    }

    async fn create_credit_note(&self, input: &CreateCreditNoteInput) -> Result<Invoice> {
        self.record("create_credit_note");
        Ok(Invoice { number: input.document.invoice_no.clone(), ..Invoice::default() })
    }

    async fn create_customer(&self, input: &CreateCustomerInput) -> Result<Customer> {
        self.record("create_customer");
        Ok(Customer {
            id: "new-customer".into(),
            name: input.name.clone(),
            email: input.email.clone().unwrap_or_default(),
            ..Customer::default()
        })
    }

    async fn update_customer(&self, _input: &UpdateCustomerInput) -> Result<()> {
        self.record("update_customer");
        Ok(())
    }

    async fn list_customers(&self, _input: &ListCustomersInput) -> Result<Vec<Customer>> {
        self.record("list_customers");
        Ok(self.customers.clone())
    }

    async fn find_customer_by_email(&self, email: &str) -> Result<Customer> {
        self.record("find_customer_by_email");
        if let Some(error) = &self.lookup_error {
            return Err(error.clone());
        }
        self.customers
            .iter()
            .find(|customer| customer.email_matches(email))
            .cloned()
            .ok_or_else(|| {
                wrap(
                    "find_customer_by_email",
                    AccountingError::NotFound(format!("customer {}", normalize_email(email))),
                )
            })
    }

    async fn create_payment(&self, _input: &CreatePaymentInput) -> Result<()> {
        self.record("create_payment");
        Ok(())
    }

    async fn create_purchase_payment(&self, _input: &CreatePurchasePaymentInput) -> Result<()> {
        self.record("create_purchase_payment");
        Ok(())
    }

    async fn list_payments(&self, _input: &ListPaymentsInput) -> Result<Vec<Payment>> {
        self.record("list_payments");
        Ok(Vec::new())
    }

    async fn delete_payment(&self, _id: &str) -> Result<()> {
        self.record("delete_payment");
        Ok(())
    }

    async fn create_item(&self, input: &CreateItemInput) -> Result<Item> {
        self.record("create_item");
        Ok(Item { code: input.code.clone(), ..Item::default() })
    }

    async fn list_items(&self, _input: &ListItemsInput) -> Result<Vec<Item>> {
        self.record("list_items");
        Ok(Vec::new())
    }

    async fn update_item(&self, _input: &UpdateItemInput) -> Result<()> {
        self.record("update_item");
        Ok(())
    }

    async fn create_purchase(&self, input: &CreatePurchaseInput) -> Result<PurchaseInvoice> {
        self.record("create_purchase");
        Ok(PurchaseInvoice { number: input.bill_no.clone(), ..PurchaseInvoice::default() })
    }

    async fn get_purchase(&self, id: &str) -> Result<PurchaseInvoice> {
        self.record("get_purchase");
        Ok(PurchaseInvoice { id: id.to_string(), ..PurchaseInvoice::default() })
    }

    async fn list_purchases(&self, _input: &ListPurchasesInput) -> Result<Vec<PurchaseInvoice>> {
        self.record("list_purchases");
        Ok(Vec::new())
    }

    async fn delete_purchase(&self, _id: &str) -> Result<()> {
        self.record("delete_purchase");
        Ok(())
    }

    async fn list_taxes(&self) -> Result<Vec<Tax>> {
        self.record("list_taxes");
        Ok(self.taxes.clone())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.record("list_accounts");
        Ok(Vec::new())
    }

    async fn customer_debts(&self, _query: &CustomerDebtsQuery) -> Result<Vec<CustomerDebt>> {
        self.record("customer_debts");
        Ok(Vec::new())
    }

    async fn profit_and_loss(&self, _query: &FinancialReportQuery) -> Result<FinancialReport> {
        self.record("profit_and_loss");
        Ok(FinancialReport::default())
    }

    async fn balance_sheet(&self, _query: &FinancialReportQuery) -> Result<FinancialReport> {
        self.record("balance_sheet");
        Ok(FinancialReport::default())
    }

    async fn list_vendors(&self, _input: &ListVendorsInput) -> Result<Vec<Vendor>> {
        self.record("list_vendors");
        Ok(Vec::new())
    }

    async fn create_vendor(&self, input: &CreateVendorInput) -> Result<Vendor> {
        self.record("create_vendor");
        Ok(Vendor { name: input.name.clone(), ..Vendor::default() })
    }

    async fn list_invoices_since(
        &self,
        _since: NaiveDate,
        _until: NaiveDate,
    ) -> Result<Vec<Invoice>> {
        self.record("list_invoices_since");
        Ok(self.changed_invoices.clone())
    }

    async fn list_payments_since(
        &self,
        _since: NaiveDate,
        _until: NaiveDate,
    ) -> Result<Vec<Payment>> {
        self.record("list_payments_since");
        Ok(Vec::new())
    }
}
