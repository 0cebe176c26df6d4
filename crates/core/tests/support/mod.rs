//! Shared test helpers for `ledgerbridge-core` integration tests.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

pub mod provider;

use chrono::NaiveDate;
use ledgerbridge_domain::{CreateCustomerInput, CreateInvoiceInput, CreateInvoiceLineInput};
use rust_decimal_macros::dec;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Single-line invoice numbered `number`.
pub fn invoice_input(number: &str) -> CreateInvoiceInput {
    CreateInvoiceInput {
        customer_name: "Acme OÜ".into(),
        invoice_no: number.into(),
        doc_date: Some(date(2024, 3, 1)),
        due_date: Some(date(2024, 3, 15)),
        currency: Some("EUR".into()),
        lines: vec![CreateInvoiceLineInput {
            code: "SRV".into(),
            description: "Consulting".into(),
            quantity: dec!(2),
            unit_price: dec!(50),
            tax_id: "tax-22".into(),
            ..CreateInvoiceLineInput::default()
        }],
        ..CreateInvoiceInput::default()
    }
}

pub fn customer_input(name: &str, email: &str) -> CreateCustomerInput {
    CreateCustomerInput {
        name: name.into(),
        email: Some(email.into()),
        ..CreateCustomerInput::default()
    }
}
