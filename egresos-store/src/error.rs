//! Error types for the store crate.

/// Errors reported by an [`ExpenseStore`](crate::ExpenseStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The store answered with an error object (constraint violation,
    /// unknown column, server-side failure).
    #[error("store rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status returned by the store.
        status: u16,
        message: String,
        hint: Option<String>,
        details: Option<String>,
        /// Postgres SQLSTATE or PostgREST error code, e.g. `23505`.
        code: Option<String>,
    },

    /// The store could not be reached or the exchange broke mid-flight.
    #[error("store transport error: {0}")]
    Transport(String),

    /// The store answered 2xx with a body that is not a list of expenses.
    #[error("store response could not be decoded: {0}")]
    Decode(String),

    /// The store client was configured with an unusable URL or table.
    #[error("invalid store configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// `true` when the store blamed the request rather than itself.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Rejected { status, .. } if (400..500).contains(status))
    }

    /// The store-provided hint, if any.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Rejected { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }
}
