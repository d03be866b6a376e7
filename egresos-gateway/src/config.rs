//! Gateway settings read from the environment.

use std::{net::SocketAddr, sync::Arc};

use egresos_store::{config::DEFAULT_TABLE, ExpenseStore, MemoryStore, PostgrestStore, StoreConfig};

use crate::error::GatewayError;

/// Address used when `EGRESOS_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8787";

pub const LISTEN_ADDR_VAR: &str = "EGRESOS_LISTEN_ADDR";
pub const STORE_URL_VAR: &str = "SUPABASE_URL";
pub const STORE_KEY_VAR: &str = "SUPABASE_KEY";
pub const TABLE_VAR: &str = "EGRESOS_TABLE";

/// Everything the binary needs to start serving.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// Hosted store to forward to; `None` selects the in-memory table.
    pub store: Option<StoreConfig>,
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`GatewayError::Config`] if the listen address does not parse.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    /// Returns [`GatewayError::Config`] if the listen address does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr = raw_addr
            .parse()
            .map_err(|e| GatewayError::Config(format!("{LISTEN_ADDR_VAR}='{raw_addr}': {e}")))?;

        let store = get(STORE_URL_VAR).map(|url| {
            StoreConfig::new(url, get(STORE_KEY_VAR).unwrap_or_default())
                .with_table(get(TABLE_VAR).unwrap_or_else(|| DEFAULT_TABLE.to_owned()))
        });

        Ok(Self { listen_addr, store })
    }

    /// Construct the store the router will forward to.
    ///
    /// # Errors
    /// Returns [`GatewayError::Store`] if the store URL or table is unusable.
    pub fn build_store(&self) -> Result<Arc<dyn ExpenseStore>, GatewayError> {
        match &self.store {
            Some(config) => {
                let store = PostgrestStore::new(config)?;
                tracing::info!(url = %config.url, table = %config.table, "forwarding to PostgREST store");
                Ok(Arc::new(store))
            }
            None => {
                tracing::warn!(
                    "{STORE_URL_VAR} not set; using an in-memory table that is lost on exit"
                );
                Ok(Arc::new(MemoryStore::new()))
            }
        }
    }
}
