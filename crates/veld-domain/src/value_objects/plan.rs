//! Resolution plan
//!
//! The artifact handed to the code-generation backend. Maps are `BTreeMap`
//! and lists are in rank order so two serializations of the same plan are
//! byte-identical.

use crate::entities::Scope;
use crate::value_objects::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The binding chosen for one dependency requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedBinding {
    /// Direct reference to one component (SINGLE, or OPTIONAL when present)
    Bound {
        /// Bound component id
        component: String,
    },
    /// Ordered collection members
    Collection {
        /// Member ids sorted by order, then declaration order
        components: Vec<String>,
    },
    /// Provider-style indirection to one component
    Provider {
        /// Component looked up through the provider
        component: String,
    },
    /// Explicit marker for an OPTIONAL or DEFERRED requirement with no candidate
    Absent,
}

impl ResolvedBinding {
    /// Every component id referenced by this binding
    pub fn component_ids(&self) -> Vec<&str> {
        match self {
            Self::Bound { component } | Self::Provider { component } => vec![component.as_str()],
            Self::Collection { components } => components.iter().map(String::as_str).collect(),
            Self::Absent => Vec::new(),
        }
    }

    /// True for the absent marker
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Lifecycle sequencing for one component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleOrder {
    /// Position in the activation sequence (same as the init rank)
    pub activation_rank: usize,
    /// Position in the teardown sequence (reverse of the init rank)
    pub teardown_rank: usize,
    /// Post-activation hooks in declaration order
    #[serde(default)]
    pub post_construct: Vec<String>,
    /// Pre-teardown hooks in declaration order
    #[serde(default)]
    pub pre_destroy: Vec<String>,
}

/// One component of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedComponent {
    /// Component id
    pub id: String,
    /// Resolved scope
    pub scope: Scope,
    /// Instantiated on first use instead of at startup
    pub lazy: bool,
    /// Initialization rank, dependencies first
    pub init_rank: usize,
    /// Binding per dependency requirement index
    pub bindings: BTreeMap<usize, ResolvedBinding>,
    /// Resolved configuration value per value requirement index
    #[serde(default)]
    pub values: BTreeMap<usize, String>,
    /// Lifecycle sequencing
    pub lifecycle_order: LifecycleOrder,
}

/// Value Object: Resolution Plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionPlan {
    /// Components in initialization order
    pub components: Vec<PlannedComponent>,
    /// Non-fatal diagnostics (warnings and exclusion traces)
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolutionPlan {
    /// Look up a planned component by id
    pub fn get(&self, id: &str) -> Option<&PlannedComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Initialization rank of a component
    pub fn rank_of(&self, id: &str) -> Option<usize> {
        self.get(id).map(|c| c.init_rank)
    }

    /// Ids in initialization order
    pub fn ids(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.id.as_str()).collect()
    }

    /// Ids of components with activation hooks, in activation order
    pub fn activation_order(&self) -> Vec<&str> {
        self.components
            .iter()
            .filter(|c| !c.lifecycle_order.post_construct.is_empty())
            .map(|c| c.id.as_str())
            .collect()
    }

    /// Ids of components with teardown hooks, in teardown order
    pub fn teardown_order(&self) -> Vec<&str> {
        self.components
            .iter()
            .rev()
            .filter(|c| !c.lifecycle_order.pre_destroy.is_empty())
            .map(|c| c.id.as_str())
            .collect()
    }

    /// Number of planned components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True when no component survived resolution
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
