//! Pure helpers with no I/O

pub mod reference;

pub use reference::{generate_reference, validate_reference};
