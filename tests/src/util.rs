use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use geoquery_common::domain::geometry::{AreaReference, RawGeometry};
use geoquery_common::error::{ConstructionError, ValidationError};
use geoquery_common::ports::{AreaNameFactory, ExpressionValidator, GeometryFactory};
use geoquery_core::adapters::{
    MarkedAreaNameFactory, TextGeometryFactory, TrimmingExpressionValidator,
};
use geoquery_core::factory::WhereConditionFactory;

pub fn default_factory() -> WhereConditionFactory {
    WhereConditionFactory::new(
        Box::new(TrimmingExpressionValidator),
        Box::new(TextGeometryFactory),
        Box::new(MarkedAreaNameFactory),
    )
}

/// Shared counters for how often each collaborator ran.
#[derive(Clone, Default)]
pub struct Counters {
    pub validations: Arc<AtomicUsize>,
    pub geometries: Arc<AtomicUsize>,
    pub areas: Arc<AtomicUsize>,
}

impl Counters {
    pub fn snapshot(&self) -> (usize, usize, usize) {
        (
            self.validations.load(Ordering::SeqCst),
            self.geometries.load(Ordering::SeqCst),
            self.areas.load(Ordering::SeqCst),
        )
    }
}

pub struct IdentityValidator {
    counters: Counters,
    rejected: Vec<String>,
}

impl ExpressionValidator for IdentityValidator {
    fn validate(&self, expression: &str) -> Result<String, ValidationError> {
        self.counters.validations.fetch_add(1, Ordering::SeqCst);
        if self.rejected.iter().any(|r| r == expression) {
            return Err(ValidationError::new(expression, "rejected by test validator"));
        }
        Ok(expression.to_string())
    }
}

pub struct IdentityGeometryFactory {
    counters: Counters,
}

impl GeometryFactory for IdentityGeometryFactory {
    fn create(&self, geometry: &str) -> Result<RawGeometry, ConstructionError> {
        self.counters.geometries.fetch_add(1, Ordering::SeqCst);
        Ok(RawGeometry::new(geometry))
    }
}

pub struct IdentityAreaNameFactory {
    counters: Counters,
}

impl AreaNameFactory for IdentityAreaNameFactory {
    fn create(&self, area_token: &str) -> Result<AreaReference, ConstructionError> {
        self.counters.areas.fetch_add(1, Ordering::SeqCst);
        Ok(AreaReference::new(area_token))
    }
}

/// Factory over identity collaborators; `rejected` expressions fail validation.
pub fn counting_factory(rejected: &[&str]) -> (WhereConditionFactory, Counters) {
    let counters = Counters::default();
    let factory = WhereConditionFactory::new(
        Box::new(IdentityValidator {
            counters: counters.clone(),
            rejected: rejected.iter().map(|r| r.to_string()).collect(),
        }),
        Box::new(IdentityGeometryFactory {
            counters: counters.clone(),
        }),
        Box::new(IdentityAreaNameFactory {
            counters: counters.clone(),
        }),
    );
    (factory, counters)
}
