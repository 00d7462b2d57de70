use geoquery_common::domain::condition::{ConditionInput, WhereCondition};
use geoquery_common::domain::geometry::{AreaReference, GeometryRequest, RawGeometry, ServerQuery};
use geoquery_common::error::{ConditionError, ConstructionError, ValidationError};
use geoquery_core::enrichment::AreaOfInterestService;
use geoquery_core::sql::{render_condition, render_with_visitor, to_sql_query};

use crate::util::{counting_factory, default_factory};

fn input(expression: Option<&str>, geometry: Option<&str>) -> ConditionInput {
    ConditionInput::new(expression.map(String::from), geometry.map(String::from))
}

/*************************************************************
                      Construction
**************************************************************/

#[test]
fn empty_input_builds_empty_condition_without_collaborators() {
    let (factory, counters) = counting_factory(&[]);

    let condition = factory.create(&input(None, None)).unwrap();

    assert_eq!(condition, WhereCondition::new(None, None));
    assert_eq!(counters.snapshot(), (0, 0, 0));
}

#[test]
fn geometry_text_renders_as_valid_wgs84_geometry() {
    let (factory, counters) = counting_factory(&[]);

    let condition = factory.create(&input(None, Some("POINT(1 2)"))).unwrap();

    assert!(condition.expression().is_none());
    assert_eq!(
        condition.geometry(),
        Some(&GeometryRequest::Raw(RawGeometry::new("POINT(1 2)")))
    );
    assert_eq!(counters.snapshot(), (0, 1, 0));
    assert_eq!(
        render_condition(&condition).as_deref(),
        Some("ST_MakeValid(ST_GeomFromText('POINT(1 2)', 4326))")
    );
}

#[test]
fn marked_geometry_renders_as_area_lookup() {
    let (factory, counters) = counting_factory(&[]);

    let condition = factory.create(&input(None, Some("$downtown"))).unwrap();

    assert_eq!(
        condition.geometry(),
        Some(&GeometryRequest::Area(AreaReference::new("$downtown")))
    );
    assert_eq!(counters.snapshot(), (0, 0, 1));
    assert_eq!(
        render_condition(&condition).as_deref(),
        Some("SELECT geometry FROM area WHERE name = $downtown")
    );
}

#[test]
fn rejected_expression_fails_whole_create() {
    let (factory, counters) = counting_factory(&["1=1"]);

    let result = factory.create(&input(Some("1=1"), None));

    assert_eq!(
        result,
        Err(ConditionError::Validation(ValidationError::new(
            "1=1",
            "rejected by test validator"
        )))
    );
    assert_eq!(counters.snapshot(), (1, 0, 0));
}

#[test]
fn rejected_expression_wins_over_valid_geometry() {
    let (factory, _) = counting_factory(&["1=1"]);

    let result = factory.create(&input(Some("1=1"), Some("POINT(1 2)")));

    assert!(matches!(result, Err(ConditionError::Validation(_))));
}

#[test]
fn default_adapters_reject_bare_area_marker() {
    let result = default_factory().create(&input(Some(" a = 1 "), Some("$")));

    assert!(matches!(
        result,
        Err(ConditionError::Construction(ConstructionError::Lookup { .. }))
    ));
}

#[test]
fn default_adapters_normalize_input() {
    let condition = default_factory()
        .create(&input(Some("  population > 1000 "), Some(" POINT(3 4) ")))
        .unwrap();

    assert_eq!(condition.expression(), Some("population > 1000"));
    assert_eq!(
        render_condition(&condition).as_deref(),
        Some("ST_MakeValid(ST_GeomFromText('POINT(3 4)', 4326))")
    );
}

/*************************************************************
                      Enrichment
**************************************************************/

#[test]
fn area_of_interest_replaces_geometry_and_renders_verbatim() {
    let (factory, _) = counting_factory(&[]);
    let condition = factory
        .create(&input(Some("kind = 'park'"), Some("$downtown")))
        .unwrap();

    let enriched = AreaOfInterestService::new().query_from_area_of_interest(&condition, "100");

    assert_eq!(enriched.expression(), Some("kind = 'park'"));
    assert_eq!(
        enriched.geometry(),
        Some(&GeometryRequest::Server(ServerQuery::new(
            "ST_Transform(ST_Buffer(ST_Transform(....100"
        )))
    );
    assert_eq!(
        render_condition(&enriched).as_deref(),
        Some("ST_Transform(ST_Buffer(ST_Transform(....100")
    );
}

#[test]
fn area_of_interest_applied_twice_keeps_only_the_last() {
    let service = AreaOfInterestService::new();
    let first = service.query_from_area_of_interest(&WhereCondition::default(), "100");
    let second = service.query_from_area_of_interest(&first, "200");

    assert_eq!(
        render_condition(&second).as_deref(),
        Some("ST_Transform(ST_Buffer(ST_Transform(....200")
    );
}

/*************************************************************
                      Rendering
**************************************************************/

#[test]
fn both_dispatch_styles_render_identically() {
    let requests: Vec<GeometryRequest> = vec![
        RawGeometry::new("POLYGON((0 0, 1 0, 1 1, 0 0))").into(),
        AreaReference::new("$harbour").into(),
        ServerQuery::new("SELECT ST_Point(0, 0)").into(),
    ];

    for request in &requests {
        let first = to_sql_query(request);
        assert_eq!(first, to_sql_query(request));
        assert_eq!(first, render_with_visitor(request));
    }
}
