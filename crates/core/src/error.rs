//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type ScmResult<T> = Result<T, ScmError>;

/// Domain-level error.
///
/// All of these are deterministic input errors surfaced directly to the
/// caller. The engine has no transient I/O, so there is no retryable or
/// fatal class distinct from these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScmError {
    /// A value failed validation (e.g. malformed input, out-of-range field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced batch does not exist (or is of the wrong kind for the
    /// requested operation).
    #[error("not found: {0}")]
    NotFound(String),

    /// A quantity was zero, negative, or exceeded available stock.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// No BOM rule is registered for the given input item.
    #[error("no recipe registered for item: {0}")]
    RecipeNotFound(String),

    /// A decrement asked for more than the batch holds.
    #[error("insufficient stock on {batch_id}: requested {requested}, available {available}")]
    InsufficientStock {
        batch_id: String,
        requested: f64,
        available: f64,
    },
}

impl ScmError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn recipe_not_found(item: impl Into<String>) -> Self {
        Self::RecipeNotFound(item.into())
    }
}
