//! Translation between neutral domain shapes and Merit wire shapes

use chrono::NaiveDate;
use ledgerbridge_domain::{
    Account, AccountClass, CreateInvoiceInput, CreateInvoiceLineInput, CreatePurchaseInput,
    Customer, CustomerDebt, FinancialReport, FinancialReportDetail, FinancialReportRow, Invoice,
    InvoiceLine, InvoicePayment, InvoiceStatus, Item, ItemType, Payment, PaymentDirection,
    PaymentInvoiceLink, PurchaseInvoice, ReportRowKind, Tax, Vendor,
};

use super::wire::catalog::{
    AccountItem, ItemListItem, TaxItem, ITEM_TYPE_ITEM, ITEM_TYPE_SERVICE, ITEM_TYPE_STOCK,
};
use super::wire::invoices::{
    CreateInvoiceRequest, CustomerRef, InvoiceDetail, InvoiceListItem, InvoiceRow, ItemRef,
    TaxAmountEntry,
};
use super::wire::parties::{CustomerListItem, VendorListItem};
use super::wire::payments::{
    PaymentListItem, DIRECTION_OTHER_EXPENSES, DIRECTION_OTHER_INCOME, DIRECTION_VENDORS,
};
use super::wire::purchases::{CreatePurchaseRequest, PurchaseListItem, VendorRef};
use super::wire::reports::{
    self, CustomerDebtItem, FinancialReportBody, CLASS_ASSETS, CLASS_EXPENSES, CLASS_LIABILITIES,
    CLASS_REVENUE, ROW_BALANCE, ROW_FORMULA, ROW_TURNOVER,
};

const WIRE_DATE: &str = "%Y%m%d";
const ISO_DATE: &str = "%Y-%m-%d";

/* -------------------------------------------------------------------------- */
/* Dates */
/* -------------------------------------------------------------------------- */

pub fn format_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE).to_string()
}

pub fn format_opt_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(format_date)
}

/// Lenient read: `YYYYMMDD`, or anything starting with `YYYY-MM-DD`
/// (dates and datetimes). Empty or unparsable input yields `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, WIRE_DATE) {
        return Some(date);
    }
    raw.get(..10).and_then(|prefix| NaiveDate::parse_from_str(prefix, ISO_DATE).ok())
}

/* -------------------------------------------------------------------------- */
/* Codes */
/* -------------------------------------------------------------------------- */

pub fn item_type_code(item_type: ItemType) -> i32 {
    match item_type {
        ItemType::Stock => ITEM_TYPE_STOCK,
        ItemType::Service => ITEM_TYPE_SERVICE,
        ItemType::Item => ITEM_TYPE_ITEM,
    }
}

pub fn item_type_from_code(code: i32) -> ItemType {
    match code {
        ITEM_TYPE_STOCK => ItemType::Stock,
        ITEM_TYPE_SERVICE => ItemType::Service,
        _ => ItemType::Item,
    }
}

pub fn payment_direction(code: i32) -> PaymentDirection {
    match code {
        DIRECTION_VENDORS => PaymentDirection::Vendor,
        DIRECTION_OTHER_INCOME => PaymentDirection::OtherIncome,
        DIRECTION_OTHER_EXPENSES => PaymentDirection::OtherExpense,
        _ => PaymentDirection::Customer,
    }
}

fn row_kind(code: i32) -> ReportRowKind {
    match code {
        ROW_BALANCE => ReportRowKind::Balance,
        ROW_TURNOVER => ReportRowKind::Turnover,
        ROW_FORMULA => ReportRowKind::Formula,
        _ => ReportRowKind::Heading,
    }
}

fn account_class(code: i32) -> AccountClass {
    match code {
        CLASS_ASSETS => AccountClass::Assets,
        CLASS_LIABILITIES => AccountClass::Liabilities,
        CLASS_REVENUE => AccountClass::Revenue,
        CLASS_EXPENSES => AccountClass::Expenses,
        _ => AccountClass::Other,
    }
}

/* -------------------------------------------------------------------------- */
/* Document rows */
/* -------------------------------------------------------------------------- */

/// Net amount per tax id, in order of first appearance.
pub fn aggregate_taxes(lines: &[CreateInvoiceLineInput]) -> Vec<TaxAmountEntry> {
    let mut totals: Vec<TaxAmountEntry> = Vec::new();
    for line in lines {
        let amount = line.net_amount();
        match totals.iter_mut().find(|entry| entry.tax_id == line.tax_id) {
            Some(entry) => entry.amount += amount,
            None => totals.push(TaxAmountEntry { tax_id: line.tax_id.clone(), amount }),
        }
    }
    totals
}

fn invoice_row(line: &CreateInvoiceLineInput) -> InvoiceRow {
    InvoiceRow {
        item: ItemRef {
            code: line.code.clone(),
            description: line.description.clone(),
            r#type: line.item_type.map(item_type_code),
            uom_name: line.unit_of_measure.clone(),
            sales_acc_code: None,
            purchase_acc_code: None,
        },
        quantity: line.quantity,
        price: line.unit_price,
        tax_id: line.tax_id.clone(),
        gl_account_code: line.account_code.clone(),
    }
}

/// Rows plus the per-tax summary Merit expects next to them.
pub fn rows_and_taxes(lines: &[CreateInvoiceLineInput]) -> (Vec<InvoiceRow>, Vec<TaxAmountEntry>) {
    (lines.iter().map(invoice_row).collect(), aggregate_taxes(lines))
}

pub fn create_invoice_request(input: &CreateInvoiceInput, accounting_doc: u8) -> CreateInvoiceRequest {
    let (invoice_row, tax_amount) = rows_and_taxes(&input.lines);
    CreateInvoiceRequest {
        customer: CustomerRef {
            id: input.customer_id.clone(),
            name: input.customer_name.clone(),
            reg_no: input.customer_reg_no.clone(),
            email: input.customer_email.clone(),
            address: input.customer_address.clone(),
            country_code: input.customer_country_code.clone(),
        },
        accounting_doc,
        doc_date: format_opt_date(input.doc_date),
        due_date: format_opt_date(input.due_date),
        invoice_no: input.invoice_no.clone(),
        ref_no: input.ref_no.clone(),
        currency_code: input.currency.clone(),
        invoice_row,
        tax_amount,
        total_amount: input.total_amount,
        hcomment: input.comment.clone(),
        fcomment: input.footer_comment.clone(),
    }
}

pub fn create_purchase_request(input: &CreatePurchaseInput) -> CreatePurchaseRequest {
    let (invoice_row, tax_amount) = rows_and_taxes(&input.lines);
    CreatePurchaseRequest {
        vendor: VendorRef {
            id: input.vendor_id.clone(),
            name: input.vendor_name.clone(),
            reg_no: input.vendor_reg_no.clone(),
            email: input.vendor_email.clone(),
            address: input.vendor_address.clone(),
            country_code: input.vendor_country_code.clone(),
        },
        doc_date: format_opt_date(input.doc_date),
        due_date: format_opt_date(input.due_date),
        bill_no: input.bill_no.clone(),
        ref_no: input.ref_no.clone(),
        currency_code: input.currency.clone(),
        invoice_row,
        tax_amount,
        hcomment: input.comment.clone(),
        fcomment: input.footer_comment.clone(),
    }
}

/* -------------------------------------------------------------------------- */
/* Entities */
/* -------------------------------------------------------------------------- */

pub fn invoice_from_list_item(item: InvoiceListItem) -> Invoice {
    Invoice {
        id: item.sih_id,
        number: item.invoice_no,
        customer_name: item.customer_name,
        customer_id: item.customer_id,
        doc_date: parse_date(&item.document_date),
        due_date: parse_date(&item.due_date),
        total_amount: item.total_amount,
        tax_amount: item.tax_amount,
        paid_amount: item.paid_amount,
        currency: item.currency_code,
        paid: item.paid,
        status: InvoiceStatus::derive(item.paid, item.paid_amount),
        reference_no: item.reference_no,
        lines: Vec::new(),
        payments: Vec::new(),
    }
}

pub fn invoice_from_detail(detail: InvoiceDetail) -> Invoice {
    let lines = detail
        .lines
        .into_iter()
        .map(|row| InvoiceLine {
            id: row.sil_id,
            description: row.description,
            quantity: row.quantity,
            unit_price: row.price,
            tax_id: row.tax_id,
            tax_name: row.tax_name,
            tax_pct: row.tax_pct,
            amount_excl_vat: row.amount_excl_vat,
            amount_incl_vat: row.amount_incl_vat,
            vat_amount: row.vat_amount,
            account_code: row.account_code,
        })
        .collect();
    let payments = detail
        .payments
        .into_iter()
        .map(|payment| InvoicePayment {
            date: parse_date(&payment.paym_date),
            amount: payment.amount,
            method: payment.payment_method,
            payment_id: payment.payment_id,
        })
        .collect();

    Invoice {
        id: detail.sih_id,
        number: detail.invoice_no,
        customer_name: detail.customer_name,
        customer_id: detail.customer_id,
        doc_date: parse_date(&detail.document_date),
        due_date: parse_date(&detail.due_date),
        total_amount: detail.total_amount,
        tax_amount: detail.tax_amount,
        paid_amount: detail.paid_amount,
        currency: detail.currency_code,
        paid: detail.paid,
        status: InvoiceStatus::derive(detail.paid, detail.paid_amount),
        reference_no: detail.reference_no,
        lines,
        payments,
    }
}

pub fn purchase_from_list_item(item: PurchaseListItem) -> PurchaseInvoice {
    PurchaseInvoice {
        id: item.pih_id,
        number: item.bill_no,
        vendor_name: item.vendor_name,
        vendor_id: item.vendor_id,
        doc_date: parse_date(&item.document_date),
        due_date: parse_date(&item.due_date),
        total_amount: item.total_amount,
        tax_amount: item.tax_amount,
        paid_amount: item.paid_amount,
        currency: item.currency_code,
        paid: item.paid,
        status: InvoiceStatus::derive(item.paid, item.paid_amount),
        reference_no: item.reference_no,
    }
}

/// Purchase detail arrives in the sales invoice shape; its customer
/// fields describe the vendor.
pub fn purchase_from_detail(detail: InvoiceDetail) -> PurchaseInvoice {
    PurchaseInvoice {
        id: detail.sih_id,
        number: detail.invoice_no,
        vendor_name: detail.customer_name,
        vendor_id: detail.customer_id,
        doc_date: parse_date(&detail.document_date),
        due_date: parse_date(&detail.due_date),
        total_amount: detail.total_amount,
        tax_amount: detail.tax_amount,
        paid_amount: detail.paid_amount,
        currency: detail.currency_code,
        paid: detail.paid,
        status: InvoiceStatus::derive(detail.paid, detail.paid_amount),
        reference_no: detail.reference_no,
    }
}

pub fn customer_from_list_item(item: CustomerListItem) -> Customer {
    Customer {
        id: item.customer_id,
        name: item.name,
        reg_no: item.reg_no,
        vat_reg_no: item.vat_reg_no,
        email: item.email,
        phone: item.phone_no,
        address: item.address,
        city: item.city,
        county: item.county,
        postal_code: item.postal_code,
        country_code: item.country_code,
        currency: item.currency_code,
        payment_days: item.payment_dead_line,
        contact: item.contact,
        home_page: item.home_page,
    }
}

pub fn vendor_from_list_item(item: VendorListItem) -> Vendor {
    Vendor {
        id: item.vendor_id,
        name: item.name,
        reg_no: item.reg_no,
        vat_reg_no: item.vat_reg_no,
        email: item.email,
        phone: item.phone_no,
        address: item.address,
        city: item.city,
        county: item.county,
        postal_code: item.postal_code,
        country_code: item.country_code,
        currency: item.currency_code,
        payment_days: item.payment_dead_line,
        bank_account: item.bank_account,
        vat_accountable: item.vat_accountable,
    }
}

pub fn payment_from_list_item(item: PaymentListItem) -> Payment {
    let invoice_links = item
        .paym_api_details
        .into_iter()
        .map(|detail| PaymentInvoiceLink {
            invoice_id: detail.doc_id,
            invoice_no: detail.doc_no,
            amount: detail.paid_amount,
        })
        .collect();

    Payment {
        id: item.pih_id,
        document_no: item.document_no,
        document_date: parse_date(&item.document_date),
        amount: item.amount,
        currency: item.currency_code,
        direction: payment_direction(item.direction),
        counterpart_id: item.counter_part_id,
        counterpart_name: item.counter_part_name,
        invoice_links,
    }
}

/// Merit lists only carry the article name, so it doubles as description.
pub fn item_from_list_item(item: ItemListItem) -> Item {
    Item {
        id: item.item_id,
        code: item.code,
        description: item.name.clone(),
        name: item.name,
        item_type: item_type_from_code(item.r#type),
        unit_of_measure: item.unit_of_measure_name,
        sales_price: item.sales_price,
        tax_id: String::new(),
    }
}

pub fn tax_from_item(item: TaxItem) -> Tax {
    Tax { id: item.id, code: item.code, name: item.name, pct: item.tax_pct }
}

pub fn account_from_item(item: AccountItem) -> Account {
    Account {
        active: item.non_active != "1",
        id: item.account_id,
        code: item.code,
        name: item.name,
    }
}

pub fn debt_from_item(item: CustomerDebtItem) -> CustomerDebt {
    CustomerDebt {
        customer_name: item.partner_name,
        customer_id: item.partner_id,
        doc_type: item.doc_type,
        doc_date: parse_date(&item.doc_date),
        doc_no: item.doc_no,
        reference_no: item.ref_no,
        due_date: parse_date(&item.due_date),
        total_amount: item.total_amount,
        paid_amount: item.paid_amount,
        unpaid_amount: item.un_paid_amount,
        currency: item.currency_code,
    }
}

pub fn financial_report(body: FinancialReportBody) -> FinancialReport {
    let rows = body.data.into_iter().map(report_row).collect();
    FinancialReport { rows }
}

fn report_row(row: reports::FinancialReportRow) -> FinancialReportRow {
    FinancialReportRow {
        id: row.rd_id,
        description: row.description,
        kind: row_kind(row.row_type),
        balances: row.balance,
        details: row
            .details
            .into_iter()
            .map(|detail| FinancialReportDetail {
                account_id: detail.account_id,
                account_code: detail.account_code,
                account_name: detail.account_name,
                account_class: account_class(detail.type_id),
                balances: detail.balance,
            })
            .collect(),
    }
}
