//! PostgREST client for a Supabase-hosted expenses table.
//!
//! Speaks plain HTTP/1.1 through hyper's pooled client. Every call returns
//! the affected rows (`Prefer: return=representation`) so inserts report the
//! generated id and deletes report what was removed.

use async_trait::async_trait;
use egresos_core::{Expense, ExpenseId, NewExpense};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{header, Method, Request, StatusCode, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde::Deserialize;

use crate::{ExpenseStore, StoreConfig, StoreError};

/// Error object PostgREST returns on any non-2xx answer.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
    hint: Option<String>,
    details: Option<String>,
    code: Option<String>,
}

/// [`ExpenseStore`] backed by a PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct PostgrestStore {
    client: Client<HttpConnector, Full<Bytes>>,
    endpoint: String,
    api_key: String,
    table: String,
}

impl PostgrestStore {
    /// Build a client for the table described by `config`.
    ///
    /// No connection is made until the first call.
    ///
    /// # Errors
    /// Returns [`StoreError::Config`] if the URL or table name is unusable.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let endpoint = config.endpoint()?;
        endpoint
            .parse::<Uri>()
            .map_err(|e| StoreError::Config(format!("invalid store URL {endpoint}: {e}")))?;

        Ok(Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
            endpoint,
            api_key: config.api_key.clone(),
            table: config.table.clone(),
        })
    }

    /// Issue one request against the table and decode the returned rows.
    async fn send(
        &self,
        method: Method,
        query: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<Expense>, StoreError> {
        let uri: Uri = format!("{}?{query}", self.endpoint)
            .parse()
            .map_err(|e| StoreError::Config(format!("invalid request URI for query {query}: {e}")))?;

        let mut builder = Request::builder()
            .method(method.clone())
            .uri(uri)
            .header(header::ACCEPT, "application/json");

        // An empty bearer token is an invalid JWT to PostgREST; without the
        // header the request runs as the anonymous role instead.
        if !self.api_key.is_empty() {
            builder = builder
                .header("apikey", &self.api_key)
                .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key));
        }
        if method != Method::GET {
            builder = builder.header("Prefer", "return=representation");
        }
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }

        let req = builder
            .body(Full::new(body.map(Bytes::from).unwrap_or_default()))
            .map_err(|e| StoreError::Transport(format!("build request: {e}")))?;

        let resp = self
            .client
            .request(req)
            .await
            .map_err(|e| StoreError::Transport(format!("send {method} to {}: {e}", self.endpoint)))?;

        let status = resp.status();
        let bytes = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| StoreError::Transport(format!("read response body: {e}")))?
            .to_bytes();

        if !status.is_success() {
            return Err(parse_rejection(status, &bytes));
        }

        decode_rows(&bytes)
    }
}

#[async_trait]
impl ExpenseStore for PostgrestStore {
    fn table(&self) -> &str {
        &self.table
    }

    async fn select(&self) -> Result<Vec<Expense>, StoreError> {
        let rows = self.send(Method::GET, "select=*&order=id.asc", None).await?;
        tracing::debug!(table = %self.table, rows = rows.len(), "select");
        Ok(rows)
    }

    async fn insert(&self, expense: NewExpense) -> Result<Vec<Expense>, StoreError> {
        let body = serde_json::to_vec(&[expense])
            .map_err(|e| StoreError::Decode(format!("encode insert body: {e}")))?;
        let rows = self.send(Method::POST, "select=*", Some(body)).await?;
        tracing::debug!(table = %self.table, rows = rows.len(), "insert");
        Ok(rows)
    }

    async fn delete(&self, id: ExpenseId) -> Result<Vec<Expense>, StoreError> {
        let rows = self
            .send(Method::DELETE, &format!("id=eq.{id}"), None)
            .await?;
        tracing::debug!(table = %self.table, %id, rows = rows.len(), "delete");
        Ok(rows)
    }
}

/// Decode a 2xx body as a list of rows. An empty body means no rows.
fn decode_rows(bytes: &[u8]) -> Result<Vec<Expense>, StoreError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(bytes).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Turn a non-2xx answer into [`StoreError::Rejected`].
///
/// Bodies that are not PostgREST error objects keep their raw text (or the
/// status reason when empty) as the message.
pub(crate) fn parse_rejection(status: StatusCode, bytes: &[u8]) -> StoreError {
    if let Ok(PostgrestErrorBody {
        message: Some(message),
        hint,
        details,
        code,
    }) = serde_json::from_slice::<PostgrestErrorBody>(bytes)
    {
        return StoreError::Rejected {
            status: status.as_u16(),
            message,
            hint,
            details,
            code,
        };
    }

    let text = String::from_utf8_lossy(bytes).trim().to_owned();
    let message = if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown store error")
            .to_owned()
    } else {
        text
    };
    StoreError::Rejected {
        status: status.as_u16(),
        message,
        hint: None,
        details: None,
        code: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejection_reads_postgrest_error_object() {
        let body = br#"{"code":"23502","details":null,"hint":"Check the column","message":"null value in column \"monto\""}"#;
        let err = parse_rejection(StatusCode::BAD_REQUEST, body);
        assert_eq!(
            err,
            StoreError::Rejected {
                status: 400,
                message: "null value in column \"monto\"".to_owned(),
                hint: Some("Check the column".to_owned()),
                details: None,
                code: Some("23502".to_owned()),
            }
        );
        assert!(err.is_client_error());
        assert_eq!(err.hint(), Some("Check the column"));
    }

    #[test]
    fn parse_rejection_falls_back_to_raw_text() {
        let err = parse_rejection(StatusCode::BAD_GATEWAY, b"upstream down");
        match err {
            StoreError::Rejected { status, message, .. } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejection_empty_body_uses_status_reason() {
        let err = parse_rejection(StatusCode::SERVICE_UNAVAILABLE, b"");
        assert!(!err.is_client_error(), "5xx is the store's fault");
        assert!(err.to_string().contains("Service Unavailable"), "got {err}");
    }

    #[test]
    fn decode_rows_treats_empty_body_as_no_rows() {
        assert_eq!(decode_rows(b""), Ok(Vec::new()));
        assert_eq!(decode_rows(b"[]"), Ok(Vec::new()));
    }

    #[test]
    fn decode_rows_rejects_non_list() {
        assert!(matches!(
            decode_rows(br#"{"id":1}"#),
            Err(StoreError::Decode(_))
        ));
    }

    #[test]
    fn new_rejects_unsupported_scheme() {
        let config = StoreConfig::new("https://project.supabase.co", "anon");
        assert!(matches!(
            PostgrestStore::new(&config),
            Err(StoreError::Config(_))
        ));
    }

    proptest::proptest! {
        #[test]
        fn proptest_parse_rejection_never_panics(
            code in 400_u16..600,
            body in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..256usize),
        ) {
            let status = match StatusCode::from_u16(code) {
                Ok(s) => s,
                Err(e) => panic!("status out of range: {e}"),
            };
            let err = parse_rejection(status, &body);
            let is_rejected = matches!(err, StoreError::Rejected { .. });
            proptest::prop_assert!(is_rejected);
        }
    }
}
