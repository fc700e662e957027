//! # Scenegen Core
//!
//! Loading domain files and submitting their scenes.
//!
//! * **[`loader`]**: reads and validates the YAML domain file.
//! * **[`submit`]**: the per-domain submission loop.
//! * **[`client`]**: the [`client::SceneSink`] boundary and its HTTP implementation.

pub mod client;
pub mod loader;
pub mod submit;
