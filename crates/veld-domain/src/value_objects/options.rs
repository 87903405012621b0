//! Resolution options
//!
//! The explicit environment passed into every run. There is no process-wide
//! registry of profiles or properties; whatever the caller puts here is all
//! the engine sees.

use crate::constants::PROFILE_NEGATION_PREFIX;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Value Object: Resolution Options
///
/// ## Example
///
/// ```rust
/// use veld_domain::value_objects::ResolutionOptions;
///
/// let options = ResolutionOptions::new()
///     .with_profile("prod")
///     .with_property("cache.enabled", "true");
///
/// assert!(options.profile_matches("prod"));
/// assert!(options.profile_matches("!dev"));
/// assert_eq!(options.property("cache.enabled"), Some("true"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionOptions {
    /// Active profile names
    #[serde(default)]
    pub active_profiles: BTreeSet<String>,
    /// Configuration properties
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Promote every warning to an error
    #[serde(default)]
    pub strict: bool,
    /// Types known to be available besides the ones components declare
    #[serde(default)]
    pub available_types: BTreeSet<String>,
}

impl ResolutionOptions {
    /// Empty options: no profiles, no properties, lenient
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a profile
    #[must_use]
    pub fn with_profile<S: Into<String>>(mut self, profile: S) -> Self {
        self.active_profiles.insert(profile.into());
        self
    }

    /// Set a property
    #[must_use]
    pub fn with_property<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Declare an externally available type
    #[must_use]
    pub fn with_available_type<S: Into<String>>(mut self, type_name: S) -> Self {
        self.available_types.insert(type_name.into());
        self
    }

    /// Enable strict mode
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Look up a property
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Match one profile expression; `!name` matches when `name` is inactive
    pub fn profile_matches(&self, expression: &str) -> bool {
        let expression = expression.trim();
        match expression.strip_prefix(PROFILE_NEGATION_PREFIX) {
            Some(negated) => !self.active_profiles.contains(negated.trim()),
            None => self.active_profiles.contains(expression),
        }
    }
}
