//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `veld_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "veld.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "veld";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "VELD";

/// Separator between the prefix and nested keys (`VELD__RESOLUTION__STRICT`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "VELD_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 7;

/// File name prefix used when the configured log path has no stem
pub const LOG_DEFAULT_FILE_PREFIX: &str = "veld";

// ============================================================================
// ADAPTER CONSTANTS
// ============================================================================

/// Default file name for a written resolution plan
pub const DEFAULT_PLAN_FILENAME: &str = "veld-plan.json";
