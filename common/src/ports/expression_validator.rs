use crate::error::ValidationError;

/// Defines the contract for checking a where-expression before it is used.
pub trait ExpressionValidator: Send + Sync {
    /// Validates an expression.
    ///
    /// # Returns
    /// * `Ok(String)` - The validated, possibly normalized, expression.
    /// * `Err(ValidationError)` - If the expression is malformed.
    fn validate(&self, expression: &str) -> Result<String, ValidationError>;
}
