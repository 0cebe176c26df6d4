//! Accounting backend integrations

pub mod merit;
