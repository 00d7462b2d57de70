use geoquery_common::domain::condition::WhereCondition;
use geoquery_common::domain::geometry::ServerQuery;
use tracing::info;

/// Leading part of the buffered area-of-interest query; the area of interest is appended verbatim.
pub const AREA_OF_INTEREST_TEMPLATE_PREFIX: &str = "ST_Transform(ST_Buffer(ST_Transform(....";

/// Replaces the geometry of a condition with a server-generated query.
#[derive(Clone, Copy, Debug, Default)]
pub struct AreaOfInterestService;

impl AreaOfInterestService {
    pub fn new() -> Self {
        Self
    }

    /// Returns a copy of `condition` whose geometry is the area-of-interest query.
    ///
    /// Any existing geometry is overwritten, server queries included. The
    /// expression is kept. `area_of_interest` is trusted and not escaped.
    pub fn query_from_area_of_interest(
        &self,
        condition: &WhereCondition,
        area_of_interest: &str,
    ) -> WhereCondition {
        if let Some(previous) = condition.geometry() {
            info!(
                "Overriding {} geometry with area of interest",
                previous.variant_name()
            );
        }
        condition.with_geometry(from_area_of_interest(area_of_interest))
    }
}

fn from_area_of_interest(area_of_interest: &str) -> ServerQuery {
    ServerQuery::new(format!("{AREA_OF_INTEREST_TEMPLATE_PREFIX}{area_of_interest}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
