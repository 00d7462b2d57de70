use anyhow::Context;
use tracing::{debug, warn};

use crate::commands::RenderArgs;
use crate::terminal::print;
use geoquery_common::config::Config;
use geoquery_common::domain::condition::{ConditionInput, WhereCondition};
use geoquery_core::adapters::{
    MarkedAreaNameFactory, TextGeometryFactory, TrimmingExpressionValidator,
};
use geoquery_core::enrichment::AreaOfInterestService;
use geoquery_core::factory::WhereConditionFactory;
use geoquery_core::sql;

pub fn render(args: RenderArgs, cfg: &Config) -> anyhow::Result<()> {
    let factory = WhereConditionFactory::new(
        Box::new(TrimmingExpressionValidator),
        Box::new(TextGeometryFactory),
        Box::new(MarkedAreaNameFactory),
    );

    let dto = ConditionInput::new(args.expression, args.geometry);
    let condition = factory
        .create(&dto)
        .context("could not build the where condition")?;

    let condition = match args.area_of_interest.as_deref() {
        Some(area_of_interest) => {
            debug!("Applying area of interest '{area_of_interest}'");
            AreaOfInterestService::new()
                .query_from_area_of_interest(&condition, area_of_interest)
        }
        None => condition,
    };

    print_condition(&condition, cfg);
    Ok(())
}

fn print_condition(condition: &WhereCondition, cfg: &Config) {
    if let Some(expression) = condition.expression() {
        if cfg.quiet < 2 {
            print::aligned_line("Expression", expression, cfg.quiet);
        }
    }

    let Some(geometry) = condition.geometry() else {
        warn!("No geometry given, nothing to render");
        return;
    };

    if cfg.explain && cfg.quiet < 2 {
        print::aligned_line("Variant", geometry.variant_name(), cfg.quiet);
    }

    print::aligned_line("SQL", &sql::to_sql_query(geometry), cfg.quiet);
    print::fat_separator(cfg.quiet);
}
