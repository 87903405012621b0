//! Diagnostics
//!
//! Every finding of a resolution run is a [`Diagnostic`] carrying a
//! [`DiagnosticCode`] so tooling can react to it without string matching.

use crate::constants::{CYCLE_PATH_SEPARATOR, ID_LIST_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level for diagnostics
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Fails the run
    Error,
    /// Reported with the plan
    Warning,
    /// Traceability only
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
            Self::Info => write!(f, "INFO"),
        }
    }
}

/// Machine-readable diagnostic taxonomy
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DiagnosticCode {
    /// Two active components share an id
    DuplicateComponentIdError,
    /// A required binding has no candidate
    MissingDependencyError,
    /// A binding has several equally valid candidates
    AmbiguousBindingError,
    /// Eager edges form a cycle
    CircularDependencyError,
    /// Conditions never settle on an active set
    NonConvergingConditionsError,
    /// A `depends_on` hint is unusable (cycle or unknown id)
    InvalidOrderingConstraintError,
    /// A value requirement has neither a property nor a default
    MissingPropertyError,
    /// `primary` set on the only candidate of a requirement
    RedundantPrimary,
    /// An eager component forces a lazy one to be built early
    LazyDependencyNarrowing,
    /// A singleton captures a prototype through a direct edge
    PrototypeInSingleton,
    /// A `depends_on` hint names a component excluded by conditions
    UnresolvedOrderingHint,
    /// A component was excluded by one of its conditions
    ComponentExcluded,
}

impl DiagnosticCode {
    /// Short stable identifier (e.g. `VELD002`)
    pub fn id(self) -> &'static str {
        match self {
            Self::DuplicateComponentIdError => "VELD001",
            Self::MissingDependencyError => "VELD002",
            Self::AmbiguousBindingError => "VELD003",
            Self::CircularDependencyError => "VELD004",
            Self::NonConvergingConditionsError => "VELD005",
            Self::InvalidOrderingConstraintError => "VELD006",
            Self::MissingPropertyError => "VELD007",
            Self::RedundantPrimary => "VELD101",
            Self::LazyDependencyNarrowing => "VELD102",
            Self::PrototypeInSingleton => "VELD103",
            Self::UnresolvedOrderingHint => "VELD104",
            Self::ComponentExcluded => "VELD201",
        }
    }

    /// Severity a diagnostic of this code is raised with
    pub fn default_severity(self) -> Severity {
        match self {
            Self::DuplicateComponentIdError
            | Self::MissingDependencyError
            | Self::AmbiguousBindingError
            | Self::CircularDependencyError
            | Self::NonConvergingConditionsError
            | Self::InvalidOrderingConstraintError
            | Self::MissingPropertyError => Severity::Error,
            Self::RedundantPrimary
            | Self::LazyDependencyNarrowing
            | Self::PrototypeInSingleton
            | Self::UnresolvedOrderingHint => Severity::Warning,
            Self::ComponentExcluded => Severity::Info,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Value Object: Diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Component the finding is attached to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    /// Position of the dependency requirement the finding is about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<usize>,
    /// Human-readable description
    pub message: String,
    /// Taxonomy value
    pub code: DiagnosticCode,
}

impl Diagnostic {
    /// Diagnostic with the code's default severity
    pub fn new<S: Into<String>>(code: DiagnosticCode, component_id: Option<&str>, message: S) -> Self {
        Self {
            severity: code.default_severity(),
            component_id: component_id.map(str::to_string),
            requirement: None,
            message: message.into(),
            code,
        }
    }

    /// Diagnostic attached to a component
    pub fn for_component<S: Into<String>>(code: DiagnosticCode, component_id: &str, message: S) -> Self {
        Self::new(code, Some(component_id), message)
    }

    /// Attach the position of the requirement in the component's dependency list
    #[must_use]
    pub fn with_requirement(mut self, position: usize) -> Self {
        self.requirement = Some(position);
        self
    }

    /// True for ERROR severity
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Canonical sort key: severity, component, code, requirement, message
    fn sort_key(&self) -> (Severity, Option<&str>, DiagnosticCode, Option<usize>, &str) {
        (
            self.severity,
            self.component_id.as_deref(),
            self.code,
            self.requirement,
            self.message.as_str(),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.severity, self.code.id(), self.code)?;
        if let Some(component) = &self.component_id {
            write!(f, " ({component})")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Accumulator for diagnostics produced across pipeline stages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Record a diagnostic attached to a component
    pub fn report<S: Into<String>>(&mut self, code: DiagnosticCode, component_id: &str, message: S) {
        self.push(Diagnostic::for_component(code, component_id, message));
    }

    /// True when at least one ERROR was recorded
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_error)
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate recorded diagnostics
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Turn every WARNING into an ERROR
    pub fn promote_warnings(&mut self) {
        for diagnostic in &mut self.entries {
            if diagnostic.severity == Severity::Warning {
                diagnostic.severity = Severity::Error;
            }
        }
    }

    /// Canonically ordered diagnostics with exact repeats removed
    ///
    /// Findings about different requirements of one component differ in
    /// `requirement` and are all kept.
    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        self.entries.dedup();
        self.entries
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A dependency cycle in discovery order, first id repeated at the end
///
/// ```rust
/// use veld_domain::value_objects::CyclePath;
///
/// let cycle = CyclePath::closed(vec!["A".into(), "B".into(), "C".into()]);
/// assert_eq!(cycle.to_string(), "A -> B -> C -> A");
/// assert_eq!(cycle.members(), ["A", "B", "C"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CyclePath {
    /// Path ids, first id repeated at the end
    pub path: Vec<String>,
}

impl CyclePath {
    /// Close an open member list into a path
    pub fn closed(members: Vec<String>) -> Self {
        let mut path = members;
        if let Some(first) = path.first().cloned() {
            path.push(first);
        }
        Self { path }
    }

    /// Distinct members, without the closing repetition
    pub fn members(&self) -> &[String] {
        match self.path.len() {
            0 => &[],
            len => &self.path[..len - 1],
        }
    }

    /// True for a component depending on itself
    pub fn is_self_loop(&self) -> bool {
        self.members().len() == 1
    }
}

impl fmt::Display for CyclePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join(CYCLE_PATH_SEPARATOR))
    }
}

/// Render ids the way diagnostic messages list them
pub fn join_ids<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| id.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(ID_LIST_SEPARATOR)
}
