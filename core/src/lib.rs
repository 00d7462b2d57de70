//! # geoquery core
//!
//! Application services built on the `geoquery-common` domain and ports.
//!
//! ## Available Services
//! * [`factory::WhereConditionFactory`]: Turns a [`ConditionInput`](geoquery_common::domain::condition::ConditionInput) into a validated where condition.
//! * [`enrichment::AreaOfInterestService`]: Swaps the geometry of a condition for a server-generated query.
//! * [`sql`]: Renders a geometry request to a SQL fragment, by `match` or by visitor.
//!
//! ## Adapters
//! * [`adapters`]: Simple default implementations of the outbound ports.

pub mod adapters;
pub mod enrichment;
pub mod factory;
pub mod sql;
