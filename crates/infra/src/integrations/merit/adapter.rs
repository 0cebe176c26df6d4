//! [`AccountingProvider`] implementation backed by Merit Aktiva

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;
use ledgerbridge_core::AccountingProvider;
use ledgerbridge_domain::{
    Account, AccountingError, CreateCreditNoteInput, CreateCustomerInput, CreateInvoiceInput,
    CreateItemInput, CreatePaymentInput, CreatePurchaseInput, CreatePurchasePaymentInput,
    CreateVendorInput, Customer, CustomerDebt, CustomerDebtsQuery, FinancialReport,
    FinancialReportQuery, GatewayConfig, Invoice, InvoicePdf, InvoiceStatus, Item,
    ListCustomersInput, ListInvoicesInput, ListItemsInput, ListPaymentsInput, ListPurchasesInput,
    ListVendorsInput, Payment, PurchaseInvoice, Result, Tax, UpdateCustomerInput, UpdateItemInput,
    Vendor,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::errors::{in_operation, wrap_error};
use super::mapping;
use super::region::resolve_base_url;
use super::transport::MeritTransport;
use super::wire::catalog::{
    AccountItem, CreateItemRequest, CreateItemsBody, CreatedItem, ItemListItem, ListItemsParams,
    TaxItem, UpdateItemRequest, ITEM_USAGE_BOTH,
};
use super::wire::invoices::{
    Attachment, CreateInvoiceResponse, GetInvoicePdfParams, InvoiceDetail, InvoiceListItem,
    DOC_CREDIT_NOTE, DOC_INVOICE,
};
use super::wire::parties::{
    CreateCustomerRequest, CreateVendorRequest, CreatedParty, CustomerListItem, PartyFilter,
    UpdateCustomerRequest, VendorListItem,
};
use super::wire::payments::{CreatePaymentRequest, CreatePurchasePaymentRequest, PaymentListItem};
use super::wire::purchases::{CreatePurchaseResponse, PurchaseListItem};
use super::wire::reports::{
    CustomerDebtItem, CustomerDebtsParams, FinancialReportBody, FinancialReportParams,
};
use super::wire::{Empty, IdParams, PeriodParams};
use crate::http::HttpClient;

/// `DateType` selecting the change date instead of the document date.
const DATE_TYPE_CHANGED: u8 = 1;

mod endpoint {
    pub const LIST_INVOICES: &str = "v2/getinvoices";
    pub const GET_INVOICE: &str = "v2/getinvoice";
    pub const SEND_INVOICE: &str = "v2/sendinvoice";
    pub const DELETE_INVOICE: &str = "v1/deleteinvoice";
    pub const INVOICE_PDF: &str = "v2/getsalesinvpdf";
    pub const LIST_CUSTOMERS: &str = "v1/getcustomers";
    pub const SEND_CUSTOMER: &str = "v2/sendcustomer";
    pub const UPDATE_CUSTOMER: &str = "v1/updatecustomer";
    pub const LIST_PAYMENTS: &str = "v2/getpayments";
    pub const SEND_PAYMENT: &str = "v2/sendpayment";
    pub const SEND_VENDOR_PAYMENT: &str = "v2/sendPaymentV";
    pub const DELETE_PAYMENT: &str = "v1/deletepayment";
    pub const LIST_PURCHASES: &str = "v2/getpurchorders";
    pub const GET_PURCHASE: &str = "v2/getpurchorder";
    pub const SEND_PURCHASE: &str = "v2/sendpurchinvoice";
    pub const DELETE_PURCHASE: &str = "v1/deletepurchinvoice";
    pub const LIST_ITEMS: &str = "v1/getitems";
    pub const SEND_ITEMS: &str = "v2/senditems";
    pub const UPDATE_ITEM: &str = "v1/updateitem";
    pub const LIST_TAXES: &str = "v1/gettaxes";
    pub const LIST_ACCOUNTS: &str = "v1/getaccounts";
    pub const CUSTOMER_DEBTS: &str = "v1/getcustdebtrep";
    pub const PROFIT_AND_LOSS: &str = "v1/getprofitrep";
    pub const BALANCE_SHEET: &str = "v1/getbalancerep";
    pub const LIST_VENDORS: &str = "v1/getvendors";
    pub const SEND_VENDOR: &str = "v2/sendvendor";
}

/// Merit Aktiva backend.
///
/// Holds nothing but an immutable transport, so it is `Send + Sync` and can
/// be shared behind an `Arc` by any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct MeritProvider {
    transport: MeritTransport,
}

impl MeritProvider {
    /// Build a provider with its own HTTP client using the configured timeout.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| AccountingError::Config(format!("failed to build HTTP client: {err}")))?;
        Self::with_http(config, http)
    }

    /// Build a provider on a caller-supplied `reqwest::Client`.
    pub fn with_http_client(config: &GatewayConfig, client: reqwest::Client) -> Result<Self> {
        Self::with_http(config, HttpClient::from_reqwest(client))
    }

    fn with_http(config: &GatewayConfig, http: HttpClient) -> Result<Self> {
        config.validate()?;
        let base_url = resolve_base_url(config.base_url.as_deref(), &config.region)?;
        debug!(%base_url, "configured merit provider");
        Ok(Self::from_transport(MeritTransport::new(
            http,
            base_url,
            config.api_id.clone(),
            config.api_secret.clone(),
        )))
    }

    pub fn from_transport(transport: MeritTransport) -> Self {
        Self { transport }
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// POST and decode; a missing body is a decode failure.
    async fn fetch<P, R>(&self, operation: &str, endpoint: &str, payload: &P) -> Result<R>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.transport
            .post(endpoint, payload)
            .await
            .map_err(|err| wrap_error(operation, err))?
            .ok_or_else(|| {
                in_operation(operation, AccountingError::Decode("empty response body".into()))
            })
    }

    /// POST and decode a list; a missing body is an empty list.
    async fn fetch_list<P, R>(&self, operation: &str, endpoint: &str, payload: &P) -> Result<Vec<R>>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let items: Option<Vec<R>> =
            self.transport.post(endpoint, payload).await.map_err(|err| wrap_error(operation, err))?;
        Ok(items.unwrap_or_default())
    }

    /// POST and ignore the answer.
    async fn send<P>(&self, operation: &str, endpoint: &str, payload: &P) -> Result<()>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.transport
            .post_discarding(endpoint, payload)
            .await
            .map_err(|err| wrap_error(operation, err))
    }

    async fn send_document(
        &self,
        operation: &str,
        input: &CreateInvoiceInput,
        accounting_doc: u8,
    ) -> Result<Invoice> {
        let request = mapping::create_invoice_request(input, accounting_doc);
        let created: CreateInvoiceResponse =
            self.fetch(operation, endpoint::SEND_INVOICE, &request).await?;

        Ok(Invoice {
            id: created.invoice_id,
            number: created.invoice_no,
            customer_name: input.customer_name.clone(),
            customer_id: created.customer_id,
            doc_date: input.doc_date,
            due_date: input.due_date,
            currency: input.currency.clone().unwrap_or_default(),
            status: InvoiceStatus::Unpaid,
            reference_no: created.ref_no,
            ..Invoice::default()
        })
    }

    async fn invoices_in(&self, operation: &str, params: PeriodParams) -> Result<Vec<Invoice>> {
        let items: Vec<InvoiceListItem> =
            self.fetch_list(operation, endpoint::LIST_INVOICES, &params).await?;
        Ok(items.into_iter().map(mapping::invoice_from_list_item).collect())
    }

    async fn payments_in(&self, operation: &str, params: PeriodParams) -> Result<Vec<Payment>> {
        let items: Vec<PaymentListItem> =
            self.fetch_list(operation, endpoint::LIST_PAYMENTS, &params).await?;
        Ok(items.into_iter().map(mapping::payment_from_list_item).collect())
    }

    async fn report(
        &self,
        operation: &str,
        endpoint: &str,
        params: FinancialReportParams,
    ) -> Result<FinancialReport> {
        let body: FinancialReportBody = self.fetch(operation, endpoint, &params).await?;
        if !body.error_msg.is_empty() {
            return Err(in_operation(
                operation,
                AccountingError::Api { status: 200, body: body.error_msg },
            ));
        }
        Ok(mapping::financial_report(body))
    }

    async fn customers(&self, operation: &str, filter: PartyFilter) -> Result<Vec<Customer>> {
        let items: Vec<CustomerListItem> =
            self.fetch_list(operation, endpoint::LIST_CUSTOMERS, &filter).await?;
        Ok(items.into_iter().map(mapping::customer_from_list_item).collect())
    }
}

fn period(start: NaiveDate, end: NaiveDate, date_type: Option<u8>) -> PeriodParams {
    PeriodParams {
        period_start: mapping::format_date(start),
        period_end: mapping::format_date(end),
        date_type,
    }
}

#[async_trait]
impl AccountingProvider for MeritProvider {
    #[instrument(skip(self))]
    async fn test_connection(&self) -> Result<()> {
        let _: Vec<TaxItem> =
            self.fetch_list("test_connection", endpoint::LIST_TAXES, &Empty {}).await?;
        Ok(())
    }

    /* ------------------------------------------------------------------ */
    /* Invoices */
    /* ------------------------------------------------------------------ */

    #[instrument(skip(self, input), fields(invoice_no = %input.invoice_no))]
    async fn create_invoice(&self, input: &CreateInvoiceInput) -> Result<Invoice> {
        self.send_document("create_invoice", input, DOC_INVOICE).await
    }

    #[instrument(skip(self))]
    async fn get_invoice(&self, id: &str) -> Result<Invoice> {
        let detail: InvoiceDetail =
            self.fetch("get_invoice", endpoint::GET_INVOICE, &IdParams { id }).await?;
        Ok(mapping::invoice_from_detail(detail))
    }

    #[instrument(skip(self))]
    async fn get_invoice_pdf(&self, id: &str, delivery_note: bool) -> Result<InvoicePdf> {
        const OPERATION: &str = "get_invoice_pdf";

        let params = GetInvoicePdfParams { id, deliv_note: delivery_note };
        let attachment: Attachment = self.fetch(OPERATION, endpoint::INVOICE_PDF, &params).await?;
        let content = STANDARD.decode(attachment.file_content.trim()).map_err(|err| {
            in_operation(OPERATION, AccountingError::Decode(format!("invalid PDF content: {err}")))
        })?;

        Ok(InvoicePdf { file_name: attachment.file_name, content })
    }

    #[instrument(skip(self))]
    async fn list_invoices(&self, input: &ListInvoicesInput) -> Result<Vec<Invoice>> {
        self.invoices_in("list_invoices", period(input.start, input.end, None)).await
    }

    #[instrument(skip(self))]
    async fn delete_invoice(&self, id: &str) -> Result<()> {
        self.send("delete_invoice", endpoint::DELETE_INVOICE, &IdParams { id }).await
    }

    #[instrument(skip(self, input), fields(invoice_no = %input.document.invoice_no))]
    async fn create_credit_note(&self, input: &CreateCreditNoteInput) -> Result<Invoice> {
        self.send_document("create_credit_note", &input.document, DOC_CREDIT_NOTE).await
    }

    /* ------------------------------------------------------------------ */
    /* Customers */
    /* ------------------------------------------------------------------ */

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_customer(&self, input: &CreateCustomerInput) -> Result<Customer> {
        let request = CreateCustomerRequest {
            name: input.name.clone(),
            reg_no: input.reg_no.clone(),
            not_td_customer: false,
            vat_reg_no: input.vat_reg_no.clone(),
            currency_code: input.currency.clone(),
            payment_dead_line: input.payment_days,
            address: input.address.clone(),
            country_code: input.country_code.clone(),
            county: input.county.clone(),
            city: input.city.clone(),
            postal_code: input.postal_code.clone(),
            phone_no: input.phone.clone(),
            email: input.email.clone(),
            contact: input.contact.clone(),
        };
        let created: CreatedParty =
            self.fetch("create_customer", endpoint::SEND_CUSTOMER, &request).await?;

        Ok(Customer {
            id: created.id,
            name: created.name,
            reg_no: input.reg_no.clone().unwrap_or_default(),
            vat_reg_no: input.vat_reg_no.clone().unwrap_or_default(),
            email: input.email.clone().unwrap_or_default(),
            phone: input.phone.clone().unwrap_or_default(),
            address: input.address.clone().unwrap_or_default(),
            city: input.city.clone().unwrap_or_default(),
            county: input.county.clone().unwrap_or_default(),
            postal_code: input.postal_code.clone().unwrap_or_default(),
            country_code: input.country_code.clone().unwrap_or_default(),
            currency: input.currency.clone().unwrap_or_default(),
            payment_days: input.payment_days.unwrap_or_default(),
            contact: input.contact.clone().unwrap_or_default(),
            home_page: String::new(),
        })
    }

    #[instrument(skip(self, input), fields(id = %input.id))]
    async fn update_customer(&self, input: &UpdateCustomerInput) -> Result<()> {
        let request = UpdateCustomerRequest {
            id: input.id.clone(),
            name: input.name.clone(),
            country_code: input.country_code.clone(),
            address: input.address.clone(),
            city: input.city.clone(),
            postal_code: input.postal_code.clone(),
            phone_no: input.phone.clone(),
            email: input.email.clone(),
            reg_no: input.reg_no.clone(),
            vat_reg_no: input.vat_reg_no.clone(),
        };
        self.send("update_customer", endpoint::UPDATE_CUSTOMER, &request).await
    }

    #[instrument(skip(self))]
    async fn list_customers(&self, input: &ListCustomersInput) -> Result<Vec<Customer>> {
        let filter = PartyFilter {
            id: None,
            reg_no: input.reg_no.clone(),
            vat_reg_no: input.vat_reg_no.clone(),
            name: input.name.clone(),
        };
        self.customers("list_customers", filter).await
    }

    // Merit has no email filter; this scans every customer.
    #[instrument(skip(self, email))]
    async fn find_customer_by_email(&self, email: &str) -> Result<Customer> {
        const OPERATION: &str = "find_customer_by_email";

        if email.trim().is_empty() {
            return Err(in_operation(
                OPERATION,
                AccountingError::InvalidInput("email must not be blank".into()),
            ));
        }

        let customers = self.customers(OPERATION, PartyFilter::default()).await?;
        debug!(scanned = customers.len(), "searching customers by email");
        customers.into_iter().find(|customer| customer.email_matches(email)).ok_or_else(|| {
            in_operation(
                OPERATION,
                AccountingError::NotFound(format!("no customer with email '{}'", email.trim())),
            )
        })
    }

    /* ------------------------------------------------------------------ */
    /* Payments */
    /* ------------------------------------------------------------------ */

    #[instrument(skip(self, input), fields(invoice_no = %input.invoice_no))]
    async fn create_payment(&self, input: &CreatePaymentInput) -> Result<()> {
        let request = CreatePaymentRequest {
            bank_id: input.bank_id.clone(),
            customer_name: input.customer_name.clone(),
            invoice_no: input.invoice_no.clone(),
            payment_date: mapping::format_date(input.payment_date),
            ref_no: input.ref_no.clone(),
            amount: input.amount,
            currency_code: input.currency.clone(),
        };
        self.send("create_payment", endpoint::SEND_PAYMENT, &request).await
    }

    #[instrument(skip(self, input), fields(bill_no = %input.bill_no))]
    async fn create_purchase_payment(&self, input: &CreatePurchasePaymentInput) -> Result<()> {
        let request = CreatePurchasePaymentRequest {
            bank_id: input.bank_id.clone(),
            vendor_name: input.vendor_name.clone(),
            payment_date: mapping::format_date(input.payment_date),
            bill_no: input.bill_no.clone(),
            ref_no: input.ref_no.clone(),
            amount: input.amount,
            currency_code: input.currency.clone(),
        };
        self.send("create_purchase_payment", endpoint::SEND_VENDOR_PAYMENT, &request).await
    }

    #[instrument(skip(self))]
    async fn list_payments(&self, input: &ListPaymentsInput) -> Result<Vec<Payment>> {
        self.payments_in("list_payments", period(input.start, input.end, None)).await
    }

    #[instrument(skip(self))]
    async fn delete_payment(&self, id: &str) -> Result<()> {
        self.send("delete_payment", endpoint::DELETE_PAYMENT, &IdParams { id }).await
    }

    /* ------------------------------------------------------------------ */
    /* Items */
    /* ------------------------------------------------------------------ */

    #[instrument(skip(self, input), fields(code = %input.code))]
    async fn create_item(&self, input: &CreateItemInput) -> Result<Item> {
        const OPERATION: &str = "create_item";

        let body = CreateItemsBody {
            items: vec![CreateItemRequest {
                r#type: mapping::item_type_code(input.item_type),
                usage: ITEM_USAGE_BOTH,
                code: input.code.clone(),
                description: input.description.clone(),
                uom_name: input.unit_of_measure.clone(),
                tax_id: input.tax_id.clone(),
                sales_acc_code: input.sales_account_code.clone(),
                purchase_acc_code: input.purchase_account_code.clone(),
            }],
        };
        let created: Vec<CreatedItem> = self.fetch_list(OPERATION, endpoint::SEND_ITEMS, &body).await?;
        let Some(first) = created.into_iter().next() else {
            return Err(in_operation(
                OPERATION,
                AccountingError::Decode("no item in response".into()),
            ));
        };

        Ok(Item {
            id: first.item_id,
            code: first.code,
            name: input.description.clone(),
            description: input.description.clone(),
            item_type: input.item_type,
            unit_of_measure: input.unit_of_measure.clone().unwrap_or_default(),
            sales_price: input.sales_price,
            tax_id: input.tax_id.clone().unwrap_or_default(),
        })
    }

    #[instrument(skip(self))]
    async fn list_items(&self, input: &ListItemsInput) -> Result<Vec<Item>> {
        let params = ListItemsParams {
            code: input.code.clone(),
            description: input.description.clone(),
            r#type: input.item_type.map(mapping::item_type_code),
        };
        let items: Vec<ItemListItem> =
            self.fetch_list("list_items", endpoint::LIST_ITEMS, &params).await?;
        Ok(items.into_iter().map(mapping::item_from_list_item).collect())
    }

    #[instrument(skip(self, input), fields(id = %input.id))]
    async fn update_item(&self, input: &UpdateItemInput) -> Result<()> {
        let request = UpdateItemRequest {
            id: input.id.clone(),
            code: input.code.clone(),
            description: input.description.clone(),
            sales_price: input.sales_price,
            tax_id: input.tax_id.clone(),
        };
        self.send("update_item", endpoint::UPDATE_ITEM, &request).await
    }

    /* ------------------------------------------------------------------ */
    /* Purchases */
    /* ------------------------------------------------------------------ */

    #[instrument(skip(self, input), fields(bill_no = %input.bill_no))]
    async fn create_purchase(&self, input: &CreatePurchaseInput) -> Result<PurchaseInvoice> {
        let request = mapping::create_purchase_request(input);
        let created: CreatePurchaseResponse =
            self.fetch("create_purchase", endpoint::SEND_PURCHASE, &request).await?;

        Ok(PurchaseInvoice {
            id: created.bill_id,
            number: created.bill_no,
            vendor_name: input.vendor_name.clone(),
            vendor_id: created.vendor_id,
            doc_date: input.doc_date,
            due_date: input.due_date,
            currency: input.currency.clone().unwrap_or_default(),
            status: InvoiceStatus::Unpaid,
            reference_no: created.ref_no,
            ..PurchaseInvoice::default()
        })
    }

    #[instrument(skip(self))]
    async fn get_purchase(&self, id: &str) -> Result<PurchaseInvoice> {
        let detail: InvoiceDetail =
            self.fetch("get_purchase", endpoint::GET_PURCHASE, &IdParams { id }).await?;
        Ok(mapping::purchase_from_detail(detail))
    }

    #[instrument(skip(self))]
    async fn list_purchases(&self, input: &ListPurchasesInput) -> Result<Vec<PurchaseInvoice>> {
        let params = period(input.start, input.end, None);
        let items: Vec<PurchaseListItem> =
            self.fetch_list("list_purchases", endpoint::LIST_PURCHASES, &params).await?;
        Ok(items.into_iter().map(mapping::purchase_from_list_item).collect())
    }

    #[instrument(skip(self))]
    async fn delete_purchase(&self, id: &str) -> Result<()> {
        self.send("delete_purchase", endpoint::DELETE_PURCHASE, &IdParams { id }).await
    }

    /* ------------------------------------------------------------------ */
    /* Reference data */
    /* ------------------------------------------------------------------ */

    #[instrument(skip(self))]
    async fn list_taxes(&self) -> Result<Vec<Tax>> {
        let items: Vec<TaxItem> =
            self.fetch_list("list_taxes", endpoint::LIST_TAXES, &Empty {}).await?;
        Ok(items.into_iter().map(mapping::tax_from_item).collect())
    }

    #[instrument(skip(self))]
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        let items: Vec<AccountItem> =
            self.fetch_list("list_accounts", endpoint::LIST_ACCOUNTS, &Empty {}).await?;
        Ok(items.into_iter().map(mapping::account_from_item).collect())
    }

    /* ------------------------------------------------------------------ */
    /* Reports */
    /* ------------------------------------------------------------------ */

    #[instrument(skip(self))]
    async fn customer_debts(&self, query: &CustomerDebtsQuery) -> Result<Vec<CustomerDebt>> {
        let params = CustomerDebtsParams {
            cust_name: query.customer_name.clone().filter(|name| !name.is_empty()),
            over_due_days: query.overdue_days,
            debt_date: mapping::format_opt_date(query.debt_date),
        };
        let items: Vec<CustomerDebtItem> =
            self.fetch_list("customer_debts", endpoint::CUSTOMER_DEBTS, &params).await?;
        Ok(items.into_iter().map(mapping::debt_from_item).collect())
    }

    #[instrument(skip(self))]
    async fn profit_and_loss(&self, query: &FinancialReportQuery) -> Result<FinancialReport> {
        let params = FinancialReportParams {
            end_date: mapping::format_date(query.end_date),
            per_count: query.period_count,
            dep_filter: query.department.clone(),
        };
        self.report("profit_and_loss", endpoint::PROFIT_AND_LOSS, params).await
    }

    #[instrument(skip(self))]
    async fn balance_sheet(&self, query: &FinancialReportQuery) -> Result<FinancialReport> {
        let params = FinancialReportParams {
            end_date: mapping::format_date(query.end_date),
            per_count: query.period_count,
            dep_filter: None,
        };
        self.report("balance_sheet", endpoint::BALANCE_SHEET, params).await
    }

    /* ------------------------------------------------------------------ */
    /* Vendors */
    /* ------------------------------------------------------------------ */

    #[instrument(skip(self))]
    async fn list_vendors(&self, input: &ListVendorsInput) -> Result<Vec<Vendor>> {
        let filter = PartyFilter {
            id: None,
            reg_no: input.reg_no.clone(),
            vat_reg_no: input.vat_reg_no.clone(),
            name: input.name.clone(),
        };
        let items: Vec<VendorListItem> =
            self.fetch_list("list_vendors", endpoint::LIST_VENDORS, &filter).await?;
        Ok(items.into_iter().map(mapping::vendor_from_list_item).collect())
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_vendor(&self, input: &CreateVendorInput) -> Result<Vendor> {
        let request = CreateVendorRequest {
            name: input.name.clone(),
            reg_no: input.reg_no.clone(),
            vat_accountable: input.vat_accountable,
            vat_reg_no: input.vat_reg_no.clone(),
            currency_code: input.currency.clone(),
            payment_dead_line: input.payment_days,
            address: input.address.clone(),
            country_code: input.country_code.clone(),
            county: input.county.clone(),
            city: input.city.clone(),
            postal_code: input.postal_code.clone(),
            phone_no: input.phone.clone(),
            email: input.email.clone(),
        };
        let created: CreatedParty =
            self.fetch("create_vendor", endpoint::SEND_VENDOR, &request).await?;

        Ok(Vendor {
            id: created.id,
            name: created.name,
            reg_no: input.reg_no.clone().unwrap_or_default(),
            vat_reg_no: input.vat_reg_no.clone().unwrap_or_default(),
            email: input.email.clone().unwrap_or_default(),
            phone: input.phone.clone().unwrap_or_default(),
            address: input.address.clone().unwrap_or_default(),
            city: input.city.clone().unwrap_or_default(),
            county: input.county.clone().unwrap_or_default(),
            postal_code: input.postal_code.clone().unwrap_or_default(),
            country_code: input.country_code.clone().unwrap_or_default(),
            currency: input.currency.clone().unwrap_or_default(),
            payment_days: input.payment_days.unwrap_or_default(),
            bank_account: String::new(),
            vat_accountable: input.vat_accountable,
        })
    }

    /* ------------------------------------------------------------------ */
    /* Incremental sync */
    /* ------------------------------------------------------------------ */

    #[instrument(skip(self))]
    async fn list_invoices_since(&self, since: NaiveDate, until: NaiveDate) -> Result<Vec<Invoice>> {
        self.invoices_in("list_invoices_since", period(since, until, Some(DATE_TYPE_CHANGED)))
            .await
    }

    #[instrument(skip(self))]
    async fn list_payments_since(&self, since: NaiveDate, until: NaiveDate) -> Result<Vec<Payment>> {
        self.payments_in("list_payments_since", period(since, until, Some(DATE_TYPE_CHANGED)))
            .await
    }
}
