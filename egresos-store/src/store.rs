//! Store abstraction trait.
//!
//! The gateway only ever talks to this trait, so the PostgREST client and
//! the in-memory store are interchangeable.

use async_trait::async_trait;
use egresos_core::{Expense, ExpenseId, NewExpense};

use crate::StoreError;

/// A single expenses table supporting list, insert and delete.
///
/// Implementations must be `Send + Sync` to be shared across requests.
///
/// # Cancel Safety
/// Dropping a returned future abandons the call; whether the store applied
/// the write is then unknown.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Name of the table this store is scoped to.
    fn table(&self) -> &str;

    /// Fetch every row, ordered by id.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the store fails or answers with an error.
    async fn select(&self) -> Result<Vec<Expense>, StoreError>;

    /// Insert one row and return the inserted representation.
    ///
    /// # Errors
    /// Returns [`StoreError::Rejected`] on constraint violations.
    async fn insert(&self, expense: NewExpense) -> Result<Vec<Expense>, StoreError>;

    /// Delete the row with `id`, returning the deleted rows.
    ///
    /// An unknown id is not an error: the result is simply empty.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the store fails or answers with an error.
    async fn delete(&self, id: ExpenseId) -> Result<Vec<Expense>, StoreError>;
}
