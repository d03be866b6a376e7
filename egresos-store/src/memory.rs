//! Process-local expenses table.
//!
//! Stands in for the hosted store when no URL is configured, and backs the
//! gateway tests. Rows live in a `BTreeMap` so listings come out ordered by
//! id, matching the PostgREST client's `order=id.asc`.

use std::{collections::BTreeMap, sync::RwLock};

use async_trait::async_trait;
use egresos_core::{Expense, ExpenseId, NewExpense};

use crate::{config::DEFAULT_TABLE, ExpenseStore, StoreError};

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug)]
struct Table {
    rows: BTreeMap<ExpenseId, Expense>,
    next_id: i64,
}

/// Thread-safe in-memory [`ExpenseStore`].
#[derive(Debug)]
pub struct MemoryStore {
    table: String,
    inner: RwLock<Table>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty `egresos` table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(DEFAULT_TABLE)
    }

    /// Create an empty table under a custom name.
    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            inner: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored rows.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let table = self.inner.read().expect("memory store read lock poisoned");
        table.rows.len()
    }

    /// `true` if no rows are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ExpenseStore for MemoryStore {
    fn table(&self) -> &str {
        &self.table
    }

    async fn select(&self) -> Result<Vec<Expense>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let table = self.inner.read().expect("memory store read lock poisoned");
        Ok(table.rows.values().cloned().collect())
    }

    async fn insert(&self, expense: NewExpense) -> Result<Vec<Expense>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut table = self.inner.write().expect("memory store write lock poisoned");

        let id = match expense.id {
            Some(id) if table.rows.contains_key(&id) => {
                return Err(StoreError::Rejected {
                    status: 409,
                    message: format!(
                        "duplicate key value violates unique constraint \"{}_pkey\"",
                        self.table
                    ),
                    hint: Some("Omit id to let the store generate one.".to_owned()),
                    details: Some(format!("Key (id)=({id}) already exists.")),
                    code: Some(UNIQUE_VIOLATION.to_owned()),
                });
            }
            Some(id) => id,
            None => {
                while table.rows.contains_key(&ExpenseId(table.next_id)) {
                    table.next_id += 1;
                }
                let id = ExpenseId(table.next_id);
                table.next_id += 1;
                id
            }
        };

        let row = Expense::from_new(id, expense);
        table.rows.insert(id, row.clone());
        tracing::debug!(table = %self.table, %id, "insert");
        Ok(vec![row])
    }

    async fn delete(&self, id: ExpenseId) -> Result<Vec<Expense>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut table = self.inner.write().expect("memory store write lock poisoned");
        let removed: Vec<Expense> = table.rows.remove(&id).into_iter().collect();
        tracing::debug!(table = %self.table, %id, rows = removed.len(), "delete");
        Ok(removed)
    }
}
