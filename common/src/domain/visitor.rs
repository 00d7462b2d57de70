//! Visitor access to a [`GeometryRequest`].
//!
//! Functionally the same as [`GeometryRequest::dispatch`]: a visitor has one
//! required method per variant and [`GeometryRequest::accept`] routes to it.

use crate::domain::geometry::{AreaReference, GeometryRequest, RawGeometry, ServerQuery};

pub trait GeometryRequestVisitor {
    type Output;

    fn visit_raw_geometry(&mut self, geometry: &RawGeometry) -> Self::Output;

    fn visit_area_reference(&mut self, area: &AreaReference) -> Self::Output;

    fn visit_server_query(&mut self, query: &ServerQuery) -> Self::Output;
}

impl GeometryRequest {
    pub fn accept<V: GeometryRequestVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            GeometryRequest::Raw(geometry) => visitor.visit_raw_geometry(geometry),
            GeometryRequest::Area(area) => visitor.visit_area_reference(area),
            GeometryRequest::Server(query) => visitor.visit_server_query(query),
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
