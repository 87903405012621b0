//! JSON descriptor source
//!
//! Reads the descriptor set produced by the scanning front-end.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use veld_application::ports::DescriptorSource;
use veld_domain::entities::ComponentDescriptor;
use veld_domain::error::{Error, Result};

use crate::utils::FileUtils;

const CONTEXT: &str = "descriptor file";

/// Accepted document shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptorDocument {
    List(Vec<ComponentDescriptor>),
    Wrapped { components: Vec<ComponentDescriptor> },
}

impl DescriptorDocument {
    fn into_components(self) -> Vec<ComponentDescriptor> {
        match self {
            Self::List(components) | Self::Wrapped { components } => components,
        }
    }
}

#[derive(Debug, Clone)]
enum Input {
    File(PathBuf),
    Inline(String),
}

/// [`DescriptorSource`] reading JSON from a file or a string
///
/// Every descriptor implicitly declares its own id as a type, and is
/// rejected when its id or a requirement's target type is blank.
///
/// ## Example
///
/// ```rust
/// use veld_application::ports::DescriptorSource;
/// use veld_infrastructure::adapters::JsonDescriptorSource;
///
/// let source = JsonDescriptorSource::from_json(r#"[{ "id": "app.Clock" }]"#);
/// let descriptors = source.load_descriptors().unwrap();
/// assert!(descriptors[0].satisfies("app.Clock"));
/// ```
#[derive(Debug, Clone)]
pub struct JsonDescriptorSource {
    input: Input,
}

impl JsonDescriptorSource {
    /// Source reading a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            input: Input::File(path.as_ref().to_path_buf()),
        }
    }

    /// Source over in-memory JSON text
    pub fn from_json<S: Into<String>>(json: S) -> Self {
        Self {
            input: Input::Inline(json.into()),
        }
    }

    fn document(&self) -> Result<DescriptorDocument> {
        match &self.input {
            Input::File(path) => FileUtils::read_json(path, CONTEXT),
            Input::Inline(json) => FileUtils::parse_json(json, CONTEXT),
        }
    }
}

impl DescriptorSource for JsonDescriptorSource {
    fn load_descriptors(&self) -> Result<Vec<ComponentDescriptor>> {
        let descriptors = self
            .document()?
            .into_components()
            .into_iter()
            .map(normalize)
            .collect::<Result<Vec<_>>>()?;
        debug!(count = descriptors.len(), "Descriptors loaded");
        Ok(descriptors)
    }
}

fn normalize(mut descriptor: ComponentDescriptor) -> Result<ComponentDescriptor> {
    if descriptor.id.trim().is_empty() {
        return Err(Error::invalid_descriptor("component id cannot be empty"));
    }
    if let Some(position) = descriptor
        .dependencies
        .iter()
        .position(|d| d.target_type.trim().is_empty())
    {
        return Err(Error::invalid_descriptor(format!(
            "component '{}': dependency {position} has an empty target type",
            descriptor.id
        )));
    }
    descriptor.declared_types.insert(descriptor.id.clone());
    Ok(descriptor)
}
