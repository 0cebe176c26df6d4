//! Customers and vendors

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub reg_no: String,
    pub vat_reg_no: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub county: String,
    pub postal_code: String,
    pub country_code: String,
    pub currency: String,
    /// Payment term in days.
    pub payment_days: i32,
    pub contact: String,
    pub home_page: String,
}

impl Customer {
    /// Case-insensitive email comparison ignoring surrounding whitespace.
    /// A blank email never matches.
    pub fn email_matches(&self, email: &str) -> bool {
        let wanted = normalize_email(email);
        !wanted.is_empty() && normalize_email(&self.email) == wanted
    }
}

/// Lowercased, trimmed email used for lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub reg_no: String,
    pub vat_reg_no: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub county: String,
    pub postal_code: String,
    pub country_code: String,
    pub currency: String,
    pub payment_days: i32,
    pub bank_account: String,
    pub vat_accountable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_match_ignores_case_and_padding() {
        let customer = Customer { email: "Alice@Example.com".into(), ..Customer::default() };

        assert!(customer.email_matches("  alice@example.COM "));
        assert!(!customer.email_matches("alice@example.org"));
    }

    #[test]
    fn blank_email_matches_nobody() {
        let customer = Customer::default();
        assert!(!customer.email_matches("   "));
        assert!(!customer.email_matches(""));
        assert!(!customer.email_matches("bob@example.com"));
    }
}
