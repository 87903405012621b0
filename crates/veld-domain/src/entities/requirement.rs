//! Dependency and value requirements

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the requirement was declared. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InjectionSite {
    /// Constructor parameter
    #[default]
    Constructor,
    /// Field injection
    Field,
    /// Method (setter) parameter
    Method,
}

impl fmt::Display for InjectionSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constructor => write!(f, "CONSTRUCTOR"),
            Self::Field => write!(f, "FIELD"),
            Self::Method => write!(f, "METHOD"),
        }
    }
}

/// How many bindings a requirement accepts and how it is wired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Multiplicity {
    /// Exactly one binding
    #[default]
    Single,
    /// Zero or one binding
    Optional,
    /// Every matching binding, sorted by order
    Collection,
    /// Provider-style indirection resolved after construction
    Deferred,
}

impl Multiplicity {
    /// Edges of this multiplicity constrain eager construction order
    pub fn is_eager(self) -> bool {
        matches!(self, Self::Single | Self::Collection)
    }

    /// Zero candidates resolve to the absent marker instead of failing
    pub fn tolerates_absence(self) -> bool {
        matches!(self, Self::Optional | Self::Deferred)
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "SINGLE"),
            Self::Optional => write!(f, "OPTIONAL"),
            Self::Collection => write!(f, "COLLECTION"),
            Self::Deferred => write!(f, "DEFERRED"),
        }
    }
}

/// One injection point of a component
///
/// ```rust
/// use veld_domain::entities::{DependencyRequirement, Multiplicity};
///
/// let req = DependencyRequirement::collection("app.Plugin").allowing_empty();
/// assert_eq!(req.multiplicity, Multiplicity::Collection);
/// assert!(!req.requires_candidate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRequirement {
    /// Type being requested
    pub target_type: String,
    /// Exact qualifier filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    /// Declaration site
    #[serde(default)]
    pub site: InjectionSite,
    /// Binding multiplicity
    #[serde(default)]
    pub multiplicity: Multiplicity,
    /// A COLLECTION requirement may resolve to zero members
    #[serde(default)]
    pub allow_empty: bool,
}

impl DependencyRequirement {
    /// Create a requirement with the given multiplicity
    pub fn new<S: Into<String>>(target_type: S, multiplicity: Multiplicity) -> Self {
        Self {
            target_type: target_type.into(),
            qualifier: None,
            site: InjectionSite::Constructor,
            multiplicity,
            allow_empty: false,
        }
    }

    /// Exactly-one requirement
    pub fn single<S: Into<String>>(target_type: S) -> Self {
        Self::new(target_type, Multiplicity::Single)
    }

    /// Zero-or-one requirement
    pub fn optional<S: Into<String>>(target_type: S) -> Self {
        Self::new(target_type, Multiplicity::Optional)
    }

    /// All-candidates requirement
    pub fn collection<S: Into<String>>(target_type: S) -> Self {
        Self::new(target_type, Multiplicity::Collection)
    }

    /// Provider-style requirement
    pub fn deferred<S: Into<String>>(target_type: S) -> Self {
        Self::new(target_type, Multiplicity::Deferred)
    }

    /// Restrict candidates to an exact qualifier
    #[must_use]
    pub fn with_qualifier<S: Into<String>>(mut self, qualifier: S) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// Set the declaration site
    #[must_use]
    pub fn at_site(mut self, site: InjectionSite) -> Self {
        self.site = site;
        self
    }

    /// Let a COLLECTION requirement resolve to zero members
    #[must_use]
    pub fn allowing_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Zero candidates after filtering is a build error
    pub fn requires_candidate(&self) -> bool {
        match self.multiplicity {
            Multiplicity::Single => true,
            Multiplicity::Collection => !self.allow_empty,
            Multiplicity::Optional | Multiplicity::Deferred => false,
        }
    }
}

impl fmt::Display for DependencyRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.multiplicity, self.target_type)?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, " @{qualifier}")?;
        }
        Ok(())
    }
}

/// A configuration value injected from the resolution properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRequirement {
    /// Property key
    pub key: String,
    /// Value used when the property is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ValueRequirement {
    /// Value with no fallback
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self {
            key: key.into(),
            default: None,
        }
    }

    /// Value with a fallback
    pub fn with_default<S: Into<String>, D: Into<String>>(key: S, default: D) -> Self {
        Self {
            key: key.into(),
            default: Some(default.into()),
        }
    }
}
