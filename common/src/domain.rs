//! # Domain Layer
//!
//! The geometry request and everything built around it.
//!
//! ## Contents
//! * **[`geometry`]**: The three variants and the closed [`geometry::GeometryRequest`] over them.
//! * **[`visitor`]**: Double-dispatch access to a request, for consumers that prefer a visitor object.
//! * **[`condition`]**: The [`condition::WhereCondition`] model and its untyped input.

pub mod condition;
pub mod geometry;
pub mod visitor;
