//! Accounting backend port
//!
//! Every backend adapter implements [`AccountingProvider`]. Services only see
//! this trait, so they never touch wire shapes, signing or sentinel codes.

use async_trait::async_trait;
use chrono::NaiveDate;
use ledgerbridge_domain::{
    Account, CreateCreditNoteInput, CreateCustomerInput, CreateInvoiceInput, CreateItemInput,
    CreatePaymentInput, CreatePurchaseInput, CreatePurchasePaymentInput, CreateVendorInput,
    Customer, CustomerDebt, CustomerDebtsQuery, FinancialReport, FinancialReportQuery, Invoice,
    InvoicePdf, Item, ListCustomersInput, ListInvoicesInput, ListItemsInput, ListPaymentsInput,
    ListPurchasesInput, ListVendorsInput, Payment, PurchaseInvoice, Result, Tax,
    UpdateCustomerInput, UpdateItemInput, Vendor,
};

/// Provider-neutral accounting backend.
///
/// Errors raised by an implementation are wrapped with the provider and
/// operation name (`AccountingError::Provider`); use
/// `AccountingError::kind` to match on the underlying category.
#[async_trait]
pub trait AccountingProvider: Send + Sync {
    /// Cheap authenticated call proving the credentials work.
    async fn test_connection(&self) -> Result<()>;

    // Invoices
    async fn create_invoice(&self, input: &CreateInvoiceInput) -> Result<Invoice>;
    async fn get_invoice(&self, id: &str) -> Result<Invoice>;
    async fn get_invoice_pdf(&self, id: &str, delivery_note: bool) -> Result<InvoicePdf>;
    async fn list_invoices(&self, input: &ListInvoicesInput) -> Result<Vec<Invoice>>;
    async fn delete_invoice(&self, id: &str) -> Result<()>;
    async fn create_credit_note(&self, input: &CreateCreditNoteInput) -> Result<Invoice>;

    // Customers
    async fn create_customer(&self, input: &CreateCustomerInput) -> Result<Customer>;
    async fn update_customer(&self, input: &UpdateCustomerInput) -> Result<()>;
    async fn list_customers(&self, input: &ListCustomersInput) -> Result<Vec<Customer>>;

    /// Case-insensitive lookup by email; `NotFound` when nobody matches.
    async fn find_customer_by_email(&self, email: &str) -> Result<Customer>;

    // Payments
    async fn create_payment(&self, input: &CreatePaymentInput) -> Result<()>;
    async fn create_purchase_payment(&self, input: &CreatePurchasePaymentInput) -> Result<()>;
    async fn list_payments(&self, input: &ListPaymentsInput) -> Result<Vec<Payment>>;
    async fn delete_payment(&self, id: &str) -> Result<()>;

    // Items
    async fn create_item(&self, input: &CreateItemInput) -> Result<Item>;
    async fn list_items(&self, input: &ListItemsInput) -> Result<Vec<Item>>;
    async fn update_item(&self, input: &UpdateItemInput) -> Result<()>;

    // Purchases
    async fn create_purchase(&self, input: &CreatePurchaseInput) -> Result<PurchaseInvoice>;
    async fn get_purchase(&self, id: &str) -> Result<PurchaseInvoice>;
    async fn list_purchases(&self, input: &ListPurchasesInput) -> Result<Vec<PurchaseInvoice>>;
    async fn delete_purchase(&self, id: &str) -> Result<()>;

    // Reference data
    async fn list_taxes(&self) -> Result<Vec<Tax>>;
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    // Reports
    async fn customer_debts(&self, query: &CustomerDebtsQuery) -> Result<Vec<CustomerDebt>>;
    async fn profit_and_loss(&self, query: &FinancialReportQuery) -> Result<FinancialReport>;
    async fn balance_sheet(&self, query: &FinancialReportQuery) -> Result<FinancialReport>;

    // Vendors
    async fn list_vendors(&self, input: &ListVendorsInput) -> Result<Vec<Vendor>>;
    async fn create_vendor(&self, input: &CreateVendorInput) -> Result<Vendor>;

    // Incremental sync, filtered by change date rather than document date
    async fn list_invoices_since(&self, since: NaiveDate, until: NaiveDate)
        -> Result<Vec<Invoice>>;
    async fn list_payments_since(&self, since: NaiveDate, until: NaiveDate)
        -> Result<Vec<Payment>>;
}
