use crate::domain::geometry::AreaReference;
use crate::error::ConstructionError;

/// Resolves an area token (one containing the area marker) to an [`AreaReference`].
pub trait AreaNameFactory: Send + Sync {
    /// Fails with [`ConstructionError::Lookup`] when the token is invalid.
    fn create(&self, area_token: &str) -> Result<AreaReference, ConstructionError>;
}
