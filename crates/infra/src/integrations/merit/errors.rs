//! Merit error classification
//!
//! Maps transport failures onto domain sentinels and tags every error with
//! the provider operation that raised it.

use ledgerbridge_domain::constants::PROVIDER_MERIT;
use ledgerbridge_domain::AccountingError;

use crate::errors::TransportError;

/// Classify a transport failure and wrap it with `operation`.
///
/// | HTTP status | Sentinel     |
/// |-------------|--------------|
/// | 401, 403    | `AuthFailed` |
/// | 404         | `NotFound`   |
/// | 429         | `RateLimit`  |
/// | other       | `Api`        |
pub fn wrap_error(operation: &str, err: TransportError) -> AccountingError {
    in_operation(operation, classify(err))
}

/// Tag an already-classified error with `operation`.
pub fn in_operation(operation: &str, err: AccountingError) -> AccountingError {
    AccountingError::in_operation(PROVIDER_MERIT, operation, err)
}

fn classify(err: TransportError) -> AccountingError {
    match err {
        TransportError::Status { status: 401 | 403, body } => AccountingError::AuthFailed(body),
        TransportError::Status { status: 404, body } => AccountingError::NotFound(body),
        TransportError::Status { status: 429, body } => AccountingError::RateLimit(body),
        TransportError::Status { status, body } => AccountingError::Api { status, body },
        TransportError::Network(message) => AccountingError::Network(message),
        TransportError::Timeout => AccountingError::Timeout(TransportError::Timeout.to_string()),
        TransportError::Encode(message) => {
            AccountingError::Internal(format!("failed to encode request: {message}"))
        }
        TransportError::Decode(message) => AccountingError::Decode(message),
    }
}

#[cfg(test)]
mod tests {
    use ledgerbridge_domain::ErrorKind;

    use super::*;

    fn status(code: u16) -> TransportError {
        TransportError::Status { status: code, body: format!("body {code}") }
    }

    #[test]
    fn status_codes_map_to_sentinels() {
        assert_eq!(wrap_error("op", status(401)).kind(), ErrorKind::AuthFailed);
        assert_eq!(wrap_error("op", status(403)).kind(), ErrorKind::AuthFailed);
        assert_eq!(wrap_error("op", status(404)).kind(), ErrorKind::NotFound);
        assert_eq!(wrap_error("op", status(429)).kind(), ErrorKind::RateLimit);
    }

    #[test]
    fn other_statuses_keep_code_and_body() {
        let err = wrap_error("list_invoices", status(500));

        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.root(),
            &AccountingError::Api { status: 500, body: "body 500".into() }
        );
    }

    #[test]
    fn always_tagged_with_provider_and_operation() {
        let err = wrap_error("get_invoice", TransportError::Timeout);

        assert_eq!(err.provider(), Some("merit"));
        assert_eq!(err.operation(), Some("get_invoice"));
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert!(err.to_string().starts_with("merit: get_invoice: "));
    }

    #[test]
    fn non_status_failures_keep_their_kind() {
        assert_eq!(
            wrap_error("op", TransportError::Network("refused".into())).kind(),
            ErrorKind::Network
        );
        assert_eq!(
            wrap_error("op", TransportError::Decode("eof".into())).kind(),
            ErrorKind::Decode
        );
        assert_eq!(
            wrap_error("op", TransportError::Encode("nan".into())).kind(),
            ErrorKind::Internal
        );
    }
}
