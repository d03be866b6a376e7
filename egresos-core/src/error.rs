/// Errors produced by the `egresos-core` crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The amount is NaN or infinite.
    #[error("invalid monto {value}: must be a finite number")]
    InvalidAmount { value: f64 },

    /// The description is empty or whitespace only.
    #[error("descripcion must not be empty")]
    EmptyDescription,
}
