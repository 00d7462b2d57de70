//! # Outbound Ports
//!
//! Contracts for the collaborators the construction pipeline is driven through.
//!
//! ## Rules
//! 1. All items here must be `traits`.
//! 2. No concrete implementations allowed; defaults live in `geoquery-core::adapters`.
//! 3. Failures are reported with the types in [`crate::error`], never panics.
pub mod area_name_factory;
pub mod expression_validator;
pub mod geometry_factory;

pub use area_name_factory::AreaNameFactory;
pub use expression_validator::ExpressionValidator;
pub use geometry_factory::GeometryFactory;
