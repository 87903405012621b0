//! # Domain Layer
//!
//! Pure data types for the Veld compile-time resolver. Nothing in this crate
//! performs resolution; it only describes what goes into the engine and what
//! comes out of it.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Component descriptors, dependency requirements, conditions |
//! | [`value_objects`] | Resolution options, diagnostics, the resolution plan |
//! | [`error`] | Domain error type shared by every layer |
//! | [`constants`] | Defaults shared by the engine and the adapters |
//!
//! ## Example
//!
//! ```rust
//! use veld_domain::entities::{ComponentDescriptor, DependencyRequirement};
//!
//! let repo = ComponentDescriptor::new("app.UserRepository")
//!     .with_type("app.Repository");
//! let service = ComponentDescriptor::new("app.UserService")
//!     .with_dependency(DependencyRequirement::single("app.Repository"));
//!
//! assert!(repo.satisfies("app.Repository"));
//! assert_eq!(service.dependencies.len(), 1);
//! ```

pub mod constants;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    ComponentDescriptor, Condition, DependencyRequirement, InjectionSite, LifecycleHooks,
    Multiplicity, Scope, ValueRequirement,
};
pub use error::{Error, Result};
pub use value_objects::{
    CyclePath, Diagnostic, DiagnosticCode, Diagnostics, LifecycleOrder, PlannedComponent,
    ResolutionOptions, ResolutionPlan, ResolvedBinding, Severity,
};
