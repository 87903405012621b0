//! Binding Resolver
//!
//! Selects the component(s) bound to one dependency requirement.
//!
//! 1. A qualifier keeps only candidates with that exact qualifier name.
//! 2. Several candidates: a single `primary` wins, several primaries are
//!    ambiguous.
//! 3. Several candidates and no primary are ambiguous.
//! 4. No candidate: absent for OPTIONAL and DEFERRED, missing otherwise.
//!
//! COLLECTION keeps every candidate, ordered by `order` then canonical
//! declaration order.

use tracing::warn;
use veld_domain::entities::{ComponentDescriptor, DependencyRequirement, Multiplicity};
use veld_domain::value_objects::diagnostic::join_ids;
use veld_domain::value_objects::{Diagnostic, DiagnosticCode, ResolvedBinding};

/// Components selected for one requirement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected component indices; empty means absent
    pub targets: Vec<usize>,
    /// Non-fatal findings about the selection
    pub warnings: Vec<Diagnostic>,
}

impl Selection {
    fn of(targets: Vec<usize>) -> Self {
        Self {
            targets,
            warnings: Vec::new(),
        }
    }
}

/// Resolves requirements against candidate components of one graph
pub struct BindingResolver<'a> {
    nodes: &'a [ComponentDescriptor],
}

impl<'a> BindingResolver<'a> {
    /// Resolver over the graph arena
    pub fn new(nodes: &'a [ComponentDescriptor]) -> Self {
        Self { nodes }
    }

    /// Select the binding for `requirement`, declared at `position` in the
    /// dependency list of `owner`
    ///
    /// `candidates` are indices of components whose declared types contain
    /// the requirement's target type, in canonical order.
    ///
    /// # Errors
    ///
    /// Returns a `MissingDependencyError` or `AmbiguousBindingError`
    /// diagnostic attached to the owner and tagged with `position`.
    pub fn resolve(
        &self,
        owner: usize,
        position: usize,
        requirement: &DependencyRequirement,
        candidates: &[usize],
    ) -> Result<Selection, Diagnostic> {
        let owner_id = self.nodes[owner].id.as_str();
        let matching: Vec<usize> = match &requirement.qualifier {
            Some(qualifier) => candidates
                .iter()
                .copied()
                .filter(|&i| self.nodes[i].qualifier_name.as_deref() == Some(qualifier.as_str()))
                .collect(),
            None => candidates.to_vec(),
        };

        if matching.is_empty() {
            if requirement.requires_candidate() {
                warn!(component = owner_id, position, %requirement, "No candidate for requirement");
                return Err(Diagnostic::for_component(
                    DiagnosticCode::MissingDependencyError,
                    owner_id,
                    format!(
                        "{}: {}",
                        describe(position, requirement),
                        self.missing_message(requirement, candidates)
                    ),
                )
                .with_requirement(position));
            }
            return Ok(Selection::default());
        }

        if requirement.multiplicity == Multiplicity::Collection {
            let mut members = matching;
            members.sort_by_key(|&i| (self.nodes[i].order, i));
            return Ok(Selection::of(members));
        }

        if let [only] = matching[..] {
            let mut selection = Selection::of(vec![only]);
            if self.nodes[only].primary {
                selection.warnings.push(Diagnostic::for_component(
                    DiagnosticCode::RedundantPrimary,
                    &self.nodes[only].id,
                    format!(
                        "primary marker is redundant: sole candidate for {} of '{owner_id}'",
                        describe(position, requirement)
                    ),
                ));
            }
            return Ok(selection);
        }

        let primaries: Vec<usize> = matching
            .iter()
            .copied()
            .filter(|&i| self.nodes[i].primary)
            .collect();
        match primaries[..] {
            [winner] => Ok(Selection::of(vec![winner])),
            [] => Err(self.ambiguous(owner_id, position, requirement, &matching, "candidates")),
            _ => Err(self.ambiguous(
                owner_id,
                position,
                requirement,
                &primaries,
                "primary candidates",
            )),
        }
    }

    /// Plan representation of a selection
    pub fn binding_for(&self, multiplicity: Multiplicity, targets: &[usize]) -> ResolvedBinding {
        match (multiplicity, targets) {
            (Multiplicity::Collection, members) => ResolvedBinding::Collection {
                components: members.iter().map(|&i| self.nodes[i].id.clone()).collect(),
            },
            (_, []) => ResolvedBinding::Absent,
            (Multiplicity::Deferred, [first, ..]) => ResolvedBinding::Provider {
                component: self.nodes[*first].id.clone(),
            },
            (Multiplicity::Single | Multiplicity::Optional, [first, ..]) => ResolvedBinding::Bound {
                component: self.nodes[*first].id.clone(),
            },
        }
    }

    fn ambiguous(
        &self,
        owner_id: &str,
        position: usize,
        requirement: &DependencyRequirement,
        indices: &[usize],
        label: &str,
    ) -> Diagnostic {
        warn!(component = owner_id, position, %requirement, "Ambiguous binding");
        Diagnostic::for_component(
            DiagnosticCode::AmbiguousBindingError,
            owner_id,
            format!(
                "{}: ambiguous binding for {requirement}: {} {label} [{}]",
                describe(position, requirement),
                indices.len(),
                join_ids(indices.iter().map(|&i| self.nodes[i].id.as_str()))
            ),
        )
        .with_requirement(position)
    }

    fn missing_message(&self, requirement: &DependencyRequirement, candidates: &[usize]) -> String {
        match (&requirement.qualifier, candidates.is_empty()) {
            (Some(qualifier), false) => format!(
                "no candidate for {requirement}: none of [{}] is qualified '{qualifier}'",
                join_ids(candidates.iter().map(|&i| self.nodes[i].id.as_str()))
            ),
            _ => format!("no candidate for {requirement}"),
        }
    }
}

/// `requirement #1 (FIELD)`
fn describe(position: usize, requirement: &DependencyRequirement) -> String {
    format!("requirement #{position} ({})", requirement.site)
}
