//! Configuration value injection

use std::collections::BTreeMap;

use veld_domain::entities::ValueRequirement;
use veld_domain::value_objects::{DiagnosticCode, Diagnostics, ResolutionOptions};

use crate::graph::ComponentGraph;

/// Resolved values: component index to (value index to value)
pub type ResolvedValues = BTreeMap<usize, BTreeMap<usize, String>>;

/// Resolves value requirements from the resolution properties
pub struct ValueResolver<'a> {
    options: &'a ResolutionOptions,
}

impl<'a> ValueResolver<'a> {
    /// Resolver bound to one set of options
    pub fn new(options: &'a ResolutionOptions) -> Self {
        Self { options }
    }

    /// Property value, then the declared default
    pub fn resolve(&self, requirement: &ValueRequirement) -> Option<String> {
        self.options
            .property(&requirement.key)
            .map(str::to_string)
            .or_else(|| requirement.default.clone())
    }

    /// Resolve every value requirement of every component in `graph`
    ///
    /// A requirement with neither a property nor a default is reported as
    /// `MissingPropertyError` and left out of the result.
    pub fn resolve_all(&self, graph: &ComponentGraph, diagnostics: &mut Diagnostics) -> ResolvedValues {
        let mut resolved = ResolvedValues::new();
        for (index, node) in graph.nodes().iter().enumerate() {
            for (position, requirement) in node.values.iter().enumerate() {
                match self.resolve(requirement) {
                    Some(value) => {
                        resolved.entry(index).or_default().insert(position, value);
                    }
                    None => diagnostics.report(
                        DiagnosticCode::MissingPropertyError,
                        &node.id,
                        format!("property '{}' is not set and has no default", requirement.key),
                    ),
                }
            }
        }
        resolved
    }
}
