//! # geoquery common
//!
//! Shared building blocks of the workspace, organized the hexagonal way:
//!
//! * **[`domain`]**: The geometry request variants and the where-condition model.
//!     * *Center of the Hexagon*. Pure Rust, no IO.
//! * **[`ports`]**: Traits for the collaborators the construction pipeline depends on.
//!     * *Boundaries of the Hexagon*. Implemented by adapters in `geoquery-core` or by callers.
//! * **[`error`]**: The error taxonomy surfaced by the ports and the pipeline.
//! * **[`config`]**: Front-end settings passed down by the CLI.

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
