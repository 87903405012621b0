//! Root configuration type

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, ResolutionSettings};

/// Complete Veld configuration
///
/// Loaded by [`ConfigLoader`](crate::config::loader::ConfigLoader) from
/// defaults, an optional `veld.toml`, and `VELD__` environment variables.
///
/// ```toml
/// [resolution]
/// active_profiles = ["prod"]
/// strict = true
///
/// [resolution.properties]
/// "cache.enabled" = "true"
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VeldConfig {
    /// Resolution environment
    pub resolution: ResolutionSettings,
    /// Logging setup
    pub logging: LoggingConfig,
}
