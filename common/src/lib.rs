//! # Scenegen Common
//!
//! Models shared by every scenegen crate. Pure Rust, no IO.
//!
//! * **[`geo`]**: coordinate sequences, points and grids.
//! * **[`scene`]**: simulation parameters, meteorology models, domains and
//!   the outbound scene request.
//! * **[`validate`]**: aggregate field validation used by the models.
//! * **[`config`]**: runtime options collected from the command line.

pub mod config;
pub mod geo;
pub mod scene;
pub mod validate;
