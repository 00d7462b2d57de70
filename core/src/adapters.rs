//! # Default Adapters
//!
//! Minimal implementations of the outbound ports so the pipeline can run
//! without a real validator or geometry backend. They check shape only:
//! nothing here parses WKT or looks areas up in a database.

use geoquery_common::domain::geometry::{AREA_MARKER, AreaReference, RawGeometry};
use geoquery_common::error::{ConstructionError, ValidationError};
use geoquery_common::ports::{AreaNameFactory, ExpressionValidator, GeometryFactory};

/// Trims the expression and rejects blank or multi-statement input.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrimmingExpressionValidator;

impl ExpressionValidator for TrimmingExpressionValidator {
    fn validate(&self, expression: &str) -> Result<String, ValidationError> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(expression, "expression is blank"));
        }
        if trimmed.contains(';') {
            return Err(ValidationError::new(
                expression,
                "statement separators are not allowed",
            ));
        }
        Ok(trimmed.to_string())
    }
}

/// Accepts any non-blank geometry text, trimmed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextGeometryFactory;

impl GeometryFactory for TextGeometryFactory {
    fn create(&self, geometry: &str) -> Result<RawGeometry, ConstructionError> {
        let trimmed = geometry.trim();
        if trimmed.is_empty() {
            return Err(ConstructionError::Geometry {
                input: geometry.to_string(),
                reason: "geometry text is blank".to_string(),
            });
        }
        Ok(RawGeometry::new(trimmed))
    }
}

/// Keeps the area token verbatim, marker included.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkedAreaNameFactory;

impl AreaNameFactory for MarkedAreaNameFactory {
    fn create(&self, area_token: &str) -> Result<AreaReference, ConstructionError> {
        let has_name = area_token
            .chars()
            .any(|c| c != AREA_MARKER && !c.is_whitespace());
        if !has_name {
            return Err(ConstructionError::Lookup {
                token: area_token.to_string(),
                reason: "area name is empty".to_string(),
            });
        }
        Ok(AreaReference::new(area_token))
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
