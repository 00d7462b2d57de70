//! # Where Condition Model
//!
//! [`WhereCondition`] is the decoded, validated form of a [`ConditionInput`].
//! It is immutable: "changing" a field builds a new value.

use crate::domain::geometry::GeometryRequest;

/// Untyped input for a where condition, as received from outside.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConditionInput {
    pub expression: Option<String>,
    pub geometry: Option<String>,
}

impl ConditionInput {
    pub fn new(expression: Option<String>, geometry: Option<String>) -> Self {
        Self {
            expression,
            geometry,
        }
    }
}

/// A validated expression and a geometry request, either of which may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WhereCondition {
    expression: Option<String>,
    geometry: Option<GeometryRequest>,
}

impl WhereCondition {
    pub fn new(expression: Option<String>, geometry: Option<GeometryRequest>) -> Self {
        Self {
            expression,
            geometry,
        }
    }

    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    pub fn geometry(&self) -> Option<&GeometryRequest> {
        self.geometry.as_ref()
    }

    /// Returns a copy with the geometry replaced and the expression kept.
    pub fn with_geometry(&self, geometry: impl Into<GeometryRequest>) -> Self {
        Self {
            expression: self.expression.clone(),
            geometry: Some(geometry.into()),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
