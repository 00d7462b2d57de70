use geoquery_common::domain::condition::{ConditionInput, WhereCondition};
use geoquery_common::domain::geometry::{AREA_MARKER, GeometryRequest};
use geoquery_common::error::ConditionError;
use geoquery_common::ports::{AreaNameFactory, ExpressionValidator, GeometryFactory};
use tracing::debug;

/// Builds [`WhereCondition`]s from untyped input through the injected collaborators.
pub struct WhereConditionFactory {
    expression_validator: Box<dyn ExpressionValidator>,
    geometry_factory: Box<dyn GeometryFactory>,
    area_name_factory: Box<dyn AreaNameFactory>,
}

impl WhereConditionFactory {
    pub fn new(
        expression_validator: Box<dyn ExpressionValidator>,
        geometry_factory: Box<dyn GeometryFactory>,
        area_name_factory: Box<dyn AreaNameFactory>,
    ) -> Self {
        Self {
            expression_validator,
            geometry_factory,
            area_name_factory,
        }
    }

    /// Validates the expression, then builds the geometry request.
    ///
    /// Absent fields stay absent and their collaborator is not called.
    /// Any collaborator failure aborts the whole call.
    pub fn create(&self, dto: &ConditionInput) -> Result<WhereCondition, ConditionError> {
        let expression = match dto.expression.as_deref() {
            Some(expression) => Some(self.expression_validator.validate(expression)?),
            None => None,
        };

        let geometry = match dto.geometry.as_deref() {
            Some(geometry) => Some(self.geometry_request(geometry)?),
            None => None,
        };

        Ok(WhereCondition::new(expression, geometry))
    }

    fn geometry_request(&self, geometry: &str) -> Result<GeometryRequest, ConditionError> {
        if geometry.contains(AREA_MARKER) {
            debug!("Geometry input '{geometry}' carries the area marker, resolving area name");
            Ok(self.area_name_factory.create(geometry)?.into())
        } else {
            debug!("Geometry input '{geometry}' treated as geometry text");
            Ok(self.geometry_factory.create(geometry)?.into())
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
