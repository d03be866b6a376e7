use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::ExpenseId;

/// A stored expense row.
///
/// Columns the store returns beyond these (e.g. `created_at`) are ignored on
/// decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Expense {
    /// Row identifier.
    pub id: ExpenseId,
    /// Amount spent.
    pub monto: f64,
    /// Free-text label.
    pub descripcion: String,
    /// Day the expense was incurred.
    pub fecha: NaiveDate,
    /// Optional category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
}

impl Expense {
    /// Materialise a row from an insert payload and the id assigned to it.
    ///
    /// A caller-supplied `new.id` is ignored in favour of `id`.
    #[must_use]
    pub fn from_new(id: ExpenseId, new: NewExpense) -> Self {
        Self {
            id,
            monto: new.monto,
            descripcion: new.descripcion,
            fecha: new.fecha,
            tipo: new.tipo,
        }
    }
}

/// Insert payload for a single expense.
///
/// `id` is normally left out so the store generates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NewExpense {
    /// Caller-chosen identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExpenseId>,
    pub monto: f64,
    pub descripcion: String,
    pub fecha: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
}

impl NewExpense {
    /// Creates a payload without id or category.
    pub fn new(monto: f64, descripcion: impl Into<String>, fecha: NaiveDate) -> Self {
        Self {
            id: None,
            monto,
            descripcion: descripcion.into(),
            fecha,
            tipo: None,
        }
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_tipo(mut self, tipo: impl Into<String>) -> Self {
        self.tipo = Some(tipo.into());
        self
    }

    /// Sets a caller-chosen identifier.
    #[must_use]
    pub fn with_id(mut self, id: ExpenseId) -> Self {
        self.id = Some(id);
        self
    }

    /// Checks the constraints the store cannot express on its own.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidAmount`] if `monto` is not finite, or
    /// [`CoreError::EmptyDescription`] if `descripcion` is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.monto.is_finite() {
            return Err(CoreError::InvalidAmount { value: self.monto });
        }
        if self.descripcion.trim().is_empty() {
            return Err(CoreError::EmptyDescription);
        }
        Ok(())
    }
}

/// Body of a delete request: `{"id": <id>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct DeleteExpense {
    pub id: ExpenseId,
}

impl DeleteExpense {
    #[must_use]
    pub const fn new(id: ExpenseId) -> Self {
        Self { id }
    }
}
