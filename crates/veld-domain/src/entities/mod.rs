//! Domain Entities
//!
//! The descriptor model handed to the engine by the scanning front-end.
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`ComponentDescriptor`] | A resolvable unit with identity, scope and requirements |
//! | [`DependencyRequirement`] | One injection point and its multiplicity |
//! | [`ValueRequirement`] | A configuration value injected from properties |
//! | [`Condition`] | Predicate deciding whether a component participates |

/// Component descriptor entity
pub mod component;
/// Activation conditions
pub mod condition;
/// Dependency and value requirements
pub mod requirement;

pub use component::{ComponentDescriptor, LifecycleHooks, Scope};
pub use condition::Condition;
pub use requirement::{DependencyRequirement, InjectionSite, Multiplicity, ValueRequirement};
