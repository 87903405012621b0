//! Resolution settings

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use veld_domain::value_objects::ResolutionOptions;

/// The resolution environment as written in configuration
///
/// Converts with `From` into the [`ResolutionOptions`] handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionSettings {
    /// Active profile names
    pub active_profiles: BTreeSet<String>,

    /// Promote every warning to an error
    pub strict: bool,

    /// Types known to exist outside the descriptor set
    pub available_types: BTreeSet<String>,

    /// Configuration properties for `Property` conditions and value injection
    pub properties: BTreeMap<String, String>,
}

impl From<ResolutionSettings> for ResolutionOptions {
    fn from(settings: ResolutionSettings) -> Self {
        Self {
            active_profiles: settings.active_profiles,
            properties: settings.properties,
            strict: settings.strict,
            available_types: settings.available_types,
        }
    }
}
