//! Store connection settings.

use serde::{Deserialize, Serialize};

use crate::StoreError;

/// Table used when none is configured.
pub const DEFAULT_TABLE: &str = "egresos";

/// Where the expenses table lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct StoreConfig {
    /// Project base URL, e.g. `http://127.0.0.1:54321`.
    pub url: String,

    /// API key, sent both as `apikey` and as a bearer token.
    pub api_key: String,

    /// Table name appended to `/rest/v1/`.
    pub table: String,
}

impl StoreConfig {
    /// Create a config targeting the default `egresos` table.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_owned(),
        }
    }

    /// Override the table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Resource URL for the configured table, without query string.
    ///
    /// # Errors
    /// Returns [`StoreError::Config`] if the URL is not plain `http` or the
    /// table name contains anything but ASCII alphanumerics and `_`.
    pub fn endpoint(&self) -> Result<String, StoreError> {
        let base = self.url.trim_end_matches('/');
        let Some(rest) = base.strip_prefix("http://") else {
            return Err(StoreError::Config(format!(
                "unsupported store URL '{}'; expected an http:// base URL",
                self.url
            )));
        };
        if rest.is_empty() {
            return Err(StoreError::Config("store URL has no host".to_owned()));
        }
        if self.table.is_empty()
            || !self
                .table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(StoreError::Config(format!(
                "invalid table name '{}'",
                self.table
            )));
        }
        Ok(format!("{base}/rest/v1/{}", self.table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_table() {
        let config = StoreConfig::new("http://127.0.0.1:54321/", "key");
        assert_eq!(
            config.endpoint(),
            Ok("http://127.0.0.1:54321/rest/v1/egresos".to_owned())
        );
    }

    #[test]
    fn endpoint_rejects_https() {
        let config = StoreConfig::new("https://abc.supabase.co", "key");
        assert!(matches!(config.endpoint(), Err(StoreError::Config(_))));
    }

    #[test]
    fn endpoint_rejects_path_like_table() {
        let config = StoreConfig::new("http://localhost:3000", "key").with_table("egresos/../x");
        assert!(matches!(config.endpoint(), Err(StoreError::Config(_))));
    }
}
