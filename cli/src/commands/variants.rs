use geoquery_common::config::Config;
use geoquery_common::domain::condition::WhereCondition;
use geoquery_common::domain::geometry::{AreaReference, GeometryRequest, RawGeometry};
use geoquery_core::enrichment::AreaOfInterestService;
use geoquery_core::sql;

use crate::terminal::print;

/// Prints how each variant renders, one sample per variant.
pub fn variants(cfg: &Config) {
    let server = AreaOfInterestService::new()
        .query_from_area_of_interest(&WhereCondition::default(), "100");

    let mut samples: Vec<GeometryRequest> = vec![
        RawGeometry::new("POINT(1 2)").into(),
        AreaReference::new("$downtown").into(),
    ];
    samples.extend(server.geometry().cloned());

    for request in &samples {
        print::aligned_line(request.variant_name(), &sql::to_sql_query(request), cfg.quiet);
        if cfg.explain {
            print::aligned_line("  visitor", &sql::render_with_visitor(request), cfg.quiet);
        }
    }
    print::fat_separator(cfg.quiet);
}
