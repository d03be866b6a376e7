//! Core types for the egresos gateway.
//!
//! Defines the expense record as stored, the insert and delete payloads
//! accepted over HTTP, and the local validation applied before anything is
//! forwarded to the store.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod expense;
pub mod id;

pub use error::CoreError;
pub use expense::{DeleteExpense, Expense, NewExpense};
pub use id::ExpenseId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_id_display_is_bare_integer() {
        assert_eq!(ExpenseId(42).to_string(), "42");
        assert_eq!(ExpenseId::from(-1).get(), -1);
    }

    #[test]
    fn expense_id_serializes_transparently() {
        let json = match serde_json::to_string(&ExpenseId(5)) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, "5");
    }

    #[test]
    fn core_error_display_includes_value() {
        let err = CoreError::InvalidAmount { value: f64::NAN };
        assert!(err.to_string().contains("NaN"), "got {err}");
        assert_eq!(CoreError::EmptyDescription.to_string(), "descripcion must not be empty");
    }
}
