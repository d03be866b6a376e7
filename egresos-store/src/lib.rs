//! Data-store seam for the egresos gateway.
//!
//! [`ExpenseStore`] is the only thing the HTTP layer knows about. Two
//! implementations ship here: [`PostgrestStore`], which forwards to a
//! Supabase/PostgREST table, and [`MemoryStore`], a local table for
//! development and tests.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod memory;
pub mod postgrest;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgrest::PostgrestStore;
pub use store::ExpenseStore;
