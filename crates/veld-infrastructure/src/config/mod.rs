//! Configuration
//!
//! Figment-based layered configuration: defaults, then `veld.toml`, then
//! `VELD__SECTION__KEY` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{LoggingConfig, ResolutionSettings, VeldConfig};
