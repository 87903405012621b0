//! Activation conditions
//!
//! A closed set of predicates. Adding a kind here forces every evaluator
//! `match` to handle it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicate deciding whether a component participates in resolution
///
/// Static kinds (`Property`, `TypePresence`, `Profile`) depend only on the
/// resolution options. Dynamic kinds (`MissingComponent`, `PresentComponent`)
/// depend on which other components are active and are re-checked until the
/// active set stops changing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// Property lookup against the configured properties
    Property {
        /// Property key
        name: String,
        /// Required value; `None` or empty means "any value"
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expected_value: Option<String>,
        /// Result when the property is not set
        #[serde(default)]
        match_if_absent: bool,
    },
    /// Every listed type must be available
    TypePresence {
        /// Fully qualified type names
        type_names: Vec<String>,
    },
    /// No other active component may match `target` by id or type
    MissingComponent {
        /// Component id or type name
        target: String,
    },
    /// Another active component must match `target` by id or type
    PresentComponent {
        /// Component id or type name
        target: String,
    },
    /// At least one listed profile is active (`!name` matches an inactive one)
    Profile {
        /// Profile names
        profiles: Vec<String>,
        /// Invert the result
        #[serde(default)]
        negate: bool,
    },
    /// Every nested condition holds
    AllOf {
        /// Nested conditions
        conditions: Vec<Condition>,
    },
    /// At least one nested condition holds
    AnyOf {
        /// Nested conditions
        conditions: Vec<Condition>,
    },
    /// The nested condition does not hold
    Not {
        /// Nested condition
        condition: Box<Condition>,
    },
}

impl Condition {
    /// Property condition matching any value when present
    pub fn property<S: Into<String>>(name: S) -> Self {
        Self::Property {
            name: name.into(),
            expected_value: None,
            match_if_absent: false,
        }
    }

    /// Property condition matching an exact value
    pub fn property_equals<S: Into<String>, V: Into<String>>(name: S, value: V) -> Self {
        Self::Property {
            name: name.into(),
            expected_value: Some(value.into()),
            match_if_absent: false,
        }
    }

    /// Type presence condition
    pub fn types<I, S>(type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::TypePresence {
            type_names: type_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Active only while nothing else provides `target`
    pub fn missing<S: Into<String>>(target: S) -> Self {
        Self::MissingComponent {
            target: target.into(),
        }
    }

    /// Active only while something else provides `target`
    pub fn present<S: Into<String>>(target: S) -> Self {
        Self::PresentComponent {
            target: target.into(),
        }
    }

    /// Profile condition
    pub fn profiles<I, S>(profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Profile {
            profiles: profiles.into_iter().map(Into::into).collect(),
            negate: false,
        }
    }

    /// Negated profile condition
    pub fn not_profiles<I, S>(profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Profile {
            profiles: profiles.into_iter().map(Into::into).collect(),
            negate: true,
        }
    }

    /// Negate a condition
    #[allow(clippy::should_implement_trait)]
    pub fn not(condition: Condition) -> Self {
        Self::Not {
            condition: Box::new(condition),
        }
    }

    /// True when evaluation depends on the current active set
    pub fn is_dynamic(&self) -> bool {
        match self {
            Self::MissingComponent { .. } | Self::PresentComponent { .. } => true,
            Self::Property { .. } | Self::TypePresence { .. } | Self::Profile { .. } => false,
            Self::AllOf { conditions } | Self::AnyOf { conditions } => {
                conditions.iter().any(Self::is_dynamic)
            }
            Self::Not { condition } => condition.is_dynamic(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property {
                name,
                expected_value,
                match_if_absent,
            } => {
                write!(f, "property '{name}'")?;
                if let Some(value) = expected_value.as_deref().filter(|v| !v.is_empty()) {
                    write!(f, " == '{value}'")?;
                }
                if *match_if_absent {
                    write!(f, " (or absent)")?;
                }
                Ok(())
            }
            Self::TypePresence { type_names } => {
                write!(f, "types present [{}]", type_names.join(", "))
            }
            Self::MissingComponent { target } => write!(f, "missing component '{target}'"),
            Self::PresentComponent { target } => write!(f, "present component '{target}'"),
            Self::Profile { profiles, negate } => {
                let prefix = if *negate { "not " } else { "" };
                write!(f, "{prefix}profile [{}]", profiles.join(", "))
            }
            Self::AllOf { conditions } => write_joined(f, "all of", conditions),
            Self::AnyOf { conditions } => write_joined(f, "any of", conditions),
            Self::Not { condition } => write!(f, "not ({condition})"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, label: &str, conditions: &[Condition]) -> fmt::Result {
    write!(f, "{label} (")?;
    for (index, condition) in conditions.iter().enumerate() {
        if index > 0 {
            write!(f, "; ")?;
        }
        write!(f, "{condition}")?;
    }
    write!(f, ")")
}
