//! Bank payments and their settlement links

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// Which side of the ledger a payment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentDirection {
    #[default]
    Customer,
    Vendor,
    OtherIncome,
    OtherExpense,
}

impl_domain_enum_conversions!(PaymentDirection {
    Customer => "customer",
    Vendor => "vendor",
    OtherIncome => "other_income",
    OtherExpense => "other_expense",
});

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub document_no: String,
    pub document_date: Option<NaiveDate>,
    pub amount: Decimal,
    pub currency: String,
    pub direction: PaymentDirection,
    pub counterpart_id: String,
    pub counterpart_name: String,
    /// Documents this payment settles, one entry per document.
    pub invoice_links: Vec<PaymentInvoiceLink>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentInvoiceLink {
    pub invoice_id: String,
    pub invoice_no: String,
    pub amount: Decimal,
}

impl Payment {
    /// Sum of the amounts applied to linked documents.
    pub fn linked_total(&self) -> Decimal {
        self.invoice_links.iter().map(|link| link.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn linked_total_sums_links() {
        let payment = Payment {
            amount: dec!(150),
            invoice_links: vec![
                PaymentInvoiceLink { amount: dec!(100.25), ..PaymentInvoiceLink::default() },
                PaymentInvoiceLink { amount: dec!(49.75), ..PaymentInvoiceLink::default() },
            ],
            ..Payment::default()
        };

        assert_eq!(payment.linked_total(), dec!(150.00));
    }

    #[test]
    fn direction_labels() {
        assert_eq!(PaymentDirection::OtherExpense.to_string(), "other_expense");
        assert_eq!("vendor".parse::<PaymentDirection>(), Ok(PaymentDirection::Vendor));
    }
}
