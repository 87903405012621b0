//! # Veld
//!
//! A compile-time dependency-injection resolver. Given component descriptors
//! extracted from source declarations, Veld builds the dependency graph,
//! binds every injection requirement, rejects structural errors (cycles,
//! ambiguity, missing bindings), applies conditional activation, and produces
//! a deterministic initialization plan for a code generator.
//!
//! This crate is the public facade: it re-exports the layers and adds
//! one-call entry points that wire configuration, the JSON adapters and the
//! engine together.
//!
//! ## Example
//!
//! ```rust
//! use veld::{ComponentDescriptor, DependencyRequirement, ResolutionEngine, ResolutionOptions};
//!
//! let descriptors = vec![
//!     ComponentDescriptor::new("app.Controller")
//!         .with_dependency(DependencyRequirement::single("app.Service")),
//!     ComponentDescriptor::new("app.ServiceImpl").with_type("app.Service"),
//! ];
//!
//! let plan = ResolutionEngine::new()
//!     .resolve(&descriptors, &ResolutionOptions::default())
//!     .unwrap();
//! assert_eq!(plan.ids(), vec!["app.ServiceImpl", "app.Controller"]);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Descriptor model, diagnostics, plan types, domain errors
//! - `application` - The resolution engine and its ports
//! - `infrastructure` - Configuration, logging, JSON adapters

use std::path::Path;

use tracing::info;

/// Domain layer - descriptor model and plan types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use veld_domain::*;
}

/// Application layer - resolution engine and ports
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use veld_application::*;
}

/// Infrastructure layer - configuration, logging and adapters
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use veld_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the engine and adapters at the crate root
pub use application::{DescriptorSource, PlanSink, ResolutionEngine};
pub use infrastructure::{ConfigLoader, JsonDescriptorSource, JsonPlanWriter, VeldConfig};

/// Resolve a JSON descriptor file using a TOML configuration file
///
/// A missing configuration file falls back to defaults and environment
/// variables, the same way [`ConfigLoader`] does.
///
/// # Errors
///
/// Returns a configuration or descriptor error, or
/// [`Error::ResolutionFailed`] carrying every diagnostic of a failed run.
pub fn resolve_from_files<C, D>(config_path: C, descriptors_path: D) -> Result<ResolutionPlan>
where
    C: AsRef<Path>,
    D: AsRef<Path>,
{
    let config = ConfigLoader::new().with_config_path(config_path).load()?;
    let descriptors = JsonDescriptorSource::from_path(descriptors_path).load_descriptors()?;
    ResolutionEngine::new()
        .resolve(&descriptors, &ResolutionOptions::from(config.resolution))
        .map_err(Error::resolution_failed)
}

/// Resolve a JSON descriptor file and write the plan as JSON
///
/// # Errors
///
/// Same as [`resolve_from_files`], plus any error writing `plan_path`.
pub fn resolve_to_file<C, D, P>(config_path: C, descriptors_path: D, plan_path: P) -> Result<ResolutionPlan>
where
    C: AsRef<Path>,
    D: AsRef<Path>,
    P: AsRef<Path>,
{
    let config = ConfigLoader::new().with_config_path(config_path).load()?;
    let source = JsonDescriptorSource::from_path(descriptors_path);
    let sink = JsonPlanWriter::new(plan_path);
    let options = ResolutionOptions::from(config.resolution);
    let plan = ResolutionEngine::new().run(&source, &sink, &options)?;
    info!(path = %sink.path().display(), "Plan generated");
    Ok(plan)
}
