//! # SQL Rendering
//!
//! Maps a [`GeometryRequest`] to the SQL fragment that selects its geometry:
//!
//! | variant           | fragment                                              |
//! |-------------------|-------------------------------------------------------|
//! | [`RawGeometry`]   | `ST_MakeValid(ST_GeomFromText('<value>', 4326))`      |
//! | [`AreaReference`] | `SELECT geometry FROM area WHERE name = <value>`      |
//! | [`ServerQuery`]   | the wrapped fragment, unchanged                       |
//!
//! [`to_sql_query`] does this with a plain `match`; [`SqlQueryVisitor`] does the
//! same through the visitor interface. Both are total and never fail.
//!
//! **Note:** area names are interpolated without quoting or escaping. Callers
//! must only pass area tokens they trust.

use geoquery_common::domain::condition::WhereCondition;
use geoquery_common::domain::geometry::{AreaReference, GeometryRequest, RawGeometry, ServerQuery};
use geoquery_common::domain::visitor::GeometryRequestVisitor;
use tracing::trace;

/// WGS84 lat/long, the only SRID geometry text is read in.
pub const WGS84_SRID: u32 = 4326;

pub fn to_sql_query(geometry: &GeometryRequest) -> String {
    let sql = match geometry {
        GeometryRequest::Raw(geometry) => from_user_input(geometry),
        GeometryRequest::Area(area) => from_area_name(area),
        GeometryRequest::Server(query) => from_server_generated_query(query),
    };
    trace!("Rendered {} as: {sql}", geometry.variant_name());
    sql
}

/// Renders the geometry of a condition, if it has one.
pub fn render_condition(condition: &WhereCondition) -> Option<String> {
    condition.geometry().map(to_sql_query)
}

fn from_user_input(geometry: &RawGeometry) -> String {
    format!("ST_MakeValid(ST_GeomFromText('{}', {WGS84_SRID}))", geometry.value())
}

fn from_area_name(area: &AreaReference) -> String {
    format!("SELECT geometry FROM area WHERE name = {}", area.value())
}

fn from_server_generated_query(query: &ServerQuery) -> String {
    query.value().to_string()
}

/// Visitor counterpart of [`to_sql_query`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SqlQueryVisitor;

impl GeometryRequestVisitor for SqlQueryVisitor {
    type Output = String;

    fn visit_raw_geometry(&mut self, geometry: &RawGeometry) -> String {
        from_user_input(geometry)
    }

    fn visit_area_reference(&mut self, area: &AreaReference) -> String {
        from_area_name(area)
    }

    fn visit_server_query(&mut self, query: &ServerQuery) -> String {
        from_server_generated_query(query)
    }
}

pub fn render_with_visitor(geometry: &GeometryRequest) -> String {
    geometry.accept(&mut SqlQueryVisitor)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
