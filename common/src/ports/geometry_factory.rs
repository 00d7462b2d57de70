use crate::domain::geometry::RawGeometry;
use crate::error::ConstructionError;

/// Builds [`RawGeometry`] from user-supplied geometry text.
pub trait GeometryFactory: Send + Sync {
    /// Fails with [`ConstructionError::Geometry`] on malformed text.
    fn create(&self, geometry: &str) -> Result<RawGeometry, ConstructionError>;
}
