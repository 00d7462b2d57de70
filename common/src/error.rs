//! # Error Taxonomy
//!
//! * [`ValidationError`]: an expression was rejected by the validator.
//! * [`ConstructionError`]: geometry text or an area token was rejected by its factory.
//! * [`ConditionError`]: what the construction pipeline returns. The rejected
//!   [`ValidationError`] or [`ConstructionError`] is kept unchanged as its `source()`.
//!
//! Dispatch, enrichment and rendering never fail and have no error type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid expression '{expression}': {reason}")]
pub struct ValidationError {
    pub expression: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(expression: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// Malformed geometry text.
    #[error("invalid geometry '{input}': {reason}")]
    Geometry { input: String, reason: String },
    /// Unknown or malformed area token.
    #[error("area lookup failed for '{token}': {reason}")]
    Lookup { token: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("expression rejected")]
    Validation(#[from] ValidationError),
    #[error("geometry could not be built")]
    Construction(#[from] ConstructionError),
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
