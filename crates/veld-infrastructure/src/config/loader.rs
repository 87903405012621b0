//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::{LoggingConfig, ResolutionSettings, VeldConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use veld_domain::constants::PROFILE_NEGATION_PREFIX;
use veld_domain::error::{Error, Result};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `VeldConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `VELD__RESOLUTION__STRICT`)
    pub fn load(&self) -> Result<VeldConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(VeldConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        let prefix = format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let config: VeldConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_config(&config)?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &VeldConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a loaded configuration
///
/// Fails fast on values the engine would otherwise silently misread.
pub fn validate_config(config: &VeldConfig) -> Result<()> {
    validate_resolution_settings(&config.resolution)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_resolution_settings(settings: &ResolutionSettings) -> Result<()> {
    for profile in &settings.active_profiles {
        let name = profile.trim();
        if name.is_empty() {
            return Err(Error::configuration("Active profile names cannot be empty"));
        }
        if name.starts_with(PROFILE_NEGATION_PREFIX) {
            return Err(Error::configuration(format!(
                "Active profile '{name}' cannot start with '{PROFILE_NEGATION_PREFIX}'"
            )));
        }
    }
    if settings.properties.keys().any(|key| key.trim().is_empty()) {
        return Err(Error::configuration("Property keys cannot be empty"));
    }
    if settings
        .available_types
        .iter()
        .any(|name| name.trim().is_empty())
    {
        return Err(Error::configuration("Available type names cannot be empty"));
    }
    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    parse_log_level(&logging.level)?;
    if logging.file_output.is_some() && logging.max_files == 0 {
        return Err(Error::configuration(
            "Maximum log files cannot be 0 when file output is enabled",
        ));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: VeldConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a profile
    #[must_use]
    pub fn with_profile<S: Into<String>>(mut self, profile: S) -> Self {
        self.config.resolution.active_profiles.insert(profile.into());
        self
    }

    /// Set a property
    #[must_use]
    pub fn with_property<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.config
            .resolution
            .properties
            .insert(key.into(), value.into());
        self
    }

    /// Enable or disable strict mode
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.resolution.strict = strict;
        self
    }

    /// Set logging configuration
    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> VeldConfig {
        self.config
    }
}
