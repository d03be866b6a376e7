//! JSON body extractor whose rejections are JSON error responses.
//!
//! Axum's own `Json` extractor answers 415/422 with plain text and insists on
//! a `Content-Type` header. Here the raw body is parsed as JSON whatever the
//! header says, and any failure becomes [`GatewayError::InvalidBody`].

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::GatewayError;

/// Request body decoded from JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| GatewayError::InvalidBody(e.body_text()))?;
        parse(&bytes).map(Self)
    }
}

/// Decode `bytes` as `T`, mapping parser errors to [`GatewayError::InvalidBody`].
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] with the parser's message.
pub fn parse<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(bytes).map_err(|e| GatewayError::InvalidBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use egresos_core::{DeleteExpense, NewExpense};

    use super::*;

    #[test]
    fn parse_reports_position_of_syntax_error() {
        let err = match parse::<NewExpense>(b"{\"monto\": ") {
            Ok(v) => panic!("parsed truncated body: {v:?}"),
            Err(e) => e,
        };
        assert!(
            matches!(&err, GatewayError::InvalidBody(msg) if msg.contains("line 1")),
            "got {err:?}"
        );
    }

    #[test]
    fn parse_rejects_wrong_id_type() {
        assert!(parse::<DeleteExpense>(br#"{"id":"abc"}"#).is_err());
    }

    proptest::proptest! {
        #[test]
        fn proptest_parse_arbitrary_bytes_never_panics(
            bytes in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..512usize),
        ) {
            let _ = parse::<NewExpense>(&bytes);
            let _ = parse::<DeleteExpense>(&bytes);
        }
    }
}
