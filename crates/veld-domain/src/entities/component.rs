//! Component Descriptor Entity
//!
//! The unit of resolution. One descriptor is produced per declared component
//! by the scanning front-end; the engine never mutates it.

use crate::constants::DEFAULT_COMPONENT_ORDER;
use crate::entities::{Condition, DependencyRequirement, ValueRequirement};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Instance scope of a component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scope {
    /// One shared instance per registry
    #[default]
    Singleton,
    /// A fresh instance per lookup
    Prototype,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton => write!(f, "SINGLETON"),
            Self::Prototype => write!(f, "PROTOTYPE"),
        }
    }
}

/// Ordered lifecycle hook identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleHooks {
    /// Hooks run after the component is activated
    #[serde(default)]
    pub post_construct: Vec<String>,
    /// Hooks run before the component is torn down
    #[serde(default)]
    pub pre_destroy: Vec<String>,
}

impl LifecycleHooks {
    /// True when neither activation nor teardown hooks are declared
    pub fn is_empty(&self) -> bool {
        self.post_construct.is_empty() && self.pre_destroy.is_empty()
    }
}

/// Entity: Component Descriptor
///
/// Describes a component and everything the engine needs to bind it:
/// the types it satisfies, how it is scoped, which conditions gate it and
/// what it requires from other components.
///
/// ## Business Rules
///
/// - `id` is the unique key of the component within the active set
/// - `declared_types` holds the component's own type plus every interface or
///   supertype it can be injected as
/// - `dependencies` and `values` keep their declaration order; the plan refers
///   to them by index
///
/// ## Example
///
/// ```rust
/// use veld_domain::entities::{ComponentDescriptor, Scope};
///
/// let cache = ComponentDescriptor::new("app.RedisCache")
///     .with_type("app.Cache")
///     .with_scope(Scope::Singleton)
///     .with_order(10)
///     .primary();
///
/// assert!(cache.satisfies("app.Cache"));
/// assert!(cache.satisfies("app.RedisCache"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Unique qualified name
    pub id: String,
    /// Types this component satisfies
    #[serde(default)]
    pub declared_types: BTreeSet<String>,
    /// Instance scope
    #[serde(default)]
    pub scope: Scope,
    /// Defers eager instantiation
    #[serde(default)]
    pub lazy: bool,
    /// Preferred candidate among otherwise ambiguous bindings
    #[serde(default)]
    pub primary: bool,
    /// Optional named disambiguator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier_name: Option<String>,
    /// Activation conditions, all of which must hold
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Ids that must be initialized before this component
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Tie-break for ordering and collection membership
    #[serde(default = "default_order")]
    pub order: i32,
    /// Injection requirements in declaration order
    #[serde(default)]
    pub dependencies: Vec<DependencyRequirement>,
    /// Configuration values in declaration order
    #[serde(default)]
    pub values: Vec<ValueRequirement>,
    /// Activation and teardown hooks
    #[serde(default)]
    pub lifecycle: LifecycleHooks,
}

fn default_order() -> i32 {
    DEFAULT_COMPONENT_ORDER
}

impl ComponentDescriptor {
    /// Create a singleton descriptor whose only declared type is its own id
    pub fn new<S: Into<String>>(id: S) -> Self {
        let id = id.into();
        Self {
            declared_types: BTreeSet::from([id.clone()]),
            id,
            scope: Scope::Singleton,
            lazy: false,
            primary: false,
            qualifier_name: None,
            conditions: Vec::new(),
            depends_on: Vec::new(),
            order: DEFAULT_COMPONENT_ORDER,
            dependencies: Vec::new(),
            values: Vec::new(),
            lifecycle: LifecycleHooks::default(),
        }
    }

    /// True when the component can be bound to a requirement for `type_name`
    pub fn satisfies(&self, type_name: &str) -> bool {
        self.declared_types.contains(type_name)
    }

    /// True when `target` names this component by id or by a declared type
    pub fn is_named_by(&self, target: &str) -> bool {
        self.id == target || self.satisfies(target)
    }

    /// True when the component carries no activation conditions
    pub fn is_unconditional(&self) -> bool {
        self.conditions.is_empty()
    }
}

// Builder-style helpers used by front-ends and tests
impl ComponentDescriptor {
    /// Add a satisfied type (interface or supertype)
    #[must_use]
    pub fn with_type<S: Into<String>>(mut self, type_name: S) -> Self {
        self.declared_types.insert(type_name.into());
        self
    }

    /// Set the instance scope
    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Mark the component lazy
    #[must_use]
    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    /// Mark the component primary
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Set the qualifier name
    #[must_use]
    pub fn with_qualifier<S: Into<String>>(mut self, qualifier: S) -> Self {
        self.qualifier_name = Some(qualifier.into());
        self
    }

    /// Append an activation condition
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Append an explicit ordering hint
    #[must_use]
    pub fn depends_on<S: Into<String>>(mut self, id: S) -> Self {
        self.depends_on.push(id.into());
        self
    }

    /// Set the order tie-break
    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Append a dependency requirement
    #[must_use]
    pub fn with_dependency(mut self, requirement: DependencyRequirement) -> Self {
        self.dependencies.push(requirement);
        self
    }

    /// Append a configuration value requirement
    #[must_use]
    pub fn with_value(mut self, value: ValueRequirement) -> Self {
        self.values.push(value);
        self
    }

    /// Append a post-activation hook
    #[must_use]
    pub fn with_post_construct<S: Into<String>>(mut self, hook: S) -> Self {
        self.lifecycle.post_construct.push(hook.into());
        self
    }

    /// Append a pre-teardown hook
    #[must_use]
    pub fn with_pre_destroy<S: Into<String>>(mut self, hook: S) -> Self {
        self.lifecycle.pre_destroy.push(hook.into());
        self
    }
}
