//! # Geometry Request Model
//!
//! A geometry request is exactly one of three things:
//! * [`RawGeometry`]: geometry text supplied by the user (e.g. WKT).
//! * [`AreaReference`]: the name of a stored area, marked with [`AREA_MARKER`].
//! * [`ServerQuery`]: a SQL fragment generated on the server side.
//!
//! [`GeometryRequest`] closes over these three. Consumers either `match` on it
//! directly or go through [`GeometryRequest::dispatch`], both of which force
//! every variant to be handled.

use std::fmt;

/// Marks a geometry input as an area name rather than geometry text.
pub const AREA_MARKER: char = '$';

/// Geometry text as entered by the user.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawGeometry(String);

impl RawGeometry {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Name of an area stored in the `area` table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AreaReference(String);

impl AreaReference {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Pre-built SQL fragment. Only produced by the enrichment service.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerQuery(String);

impl ServerQuery {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for AreaReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ServerQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The geometry part of a where condition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryRequest {
    /// Geometry text to be parsed by the database.
    Raw(RawGeometry),
    /// Lookup of a named area.
    Area(AreaReference),
    /// Server-generated fragment, passed through as is.
    Server(ServerQuery),
}

impl GeometryRequest {
    /// Calls the handler matching the active variant and returns its result.
    ///
    /// There is no fallback handler: a new variant breaks every call site
    /// until it is handled.
    pub fn dispatch<R>(
        &self,
        on_raw: impl FnOnce(&RawGeometry) -> R,
        on_area: impl FnOnce(&AreaReference) -> R,
        on_server: impl FnOnce(&ServerQuery) -> R,
    ) -> R {
        match self {
            GeometryRequest::Raw(geometry) => on_raw(geometry),
            GeometryRequest::Area(area) => on_area(area),
            GeometryRequest::Server(query) => on_server(query),
        }
    }

    /// Stable snake_case name of the active variant, used in logs and output.
    pub fn variant_name(&self) -> &'static str {
        self.dispatch(
            |_| "raw_geometry",
            |_| "area_reference",
            |_| "server_query",
        )
    }
}

impl From<RawGeometry> for GeometryRequest {
    fn from(geometry: RawGeometry) -> Self {
        GeometryRequest::Raw(geometry)
    }
}

impl From<AreaReference> for GeometryRequest {
    fn from(area: AreaReference) -> Self {
        GeometryRequest::Area(area)
    }
}

impl From<ServerQuery> for GeometryRequest {
    fn from(query: ServerQuery) -> Self {
        GeometryRequest::Server(query)
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
