//! Macro for implementing Display and FromStr for neutral domain enums
//!
//! Status, item type and payment direction enums all share the same string
//! form: a fixed lowercase label per variant, parsed case-insensitively.
//!
//! # Example
//!
//! ```rust
//! use ledgerbridge_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum DocumentKind {
//!     Invoice,
//!     CreditNote,
//! }
//!
//! impl_domain_enum_conversions!(DocumentKind {
//!     Invoice => "invoice",
//!     CreditNote => "credit_note",
//! });
//!
//! assert_eq!(DocumentKind::CreditNote.to_string(), "credit_note");
//! assert_eq!("INVOICE".parse::<DocumentKind>(), Ok(DocumentKind::Invoice));
//! ```

/// Implements Display and FromStr for a fieldless enum
///
/// * `Display` writes the label given for the variant.
/// * `FromStr` lowercases the input before matching, and reports the enum
///   name in the error for anything unknown.
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
