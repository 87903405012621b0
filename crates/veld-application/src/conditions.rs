//! Condition Evaluator
//!
//! Filters the descriptor set down to the components that participate in
//! resolution. Static conditions are decided once; conditions that look at
//! other components are re-checked until the active set stops changing.

use std::collections::BTreeSet;

use tracing::{debug, warn};
use veld_domain::entities::{ComponentDescriptor, Condition};
use veld_domain::value_objects::diagnostic::join_ids;
use veld_domain::value_objects::{DiagnosticCode, Diagnostics, ResolutionOptions};

/// Result of condition evaluation
#[derive(Debug, Clone, Default)]
pub struct ConditionOutcome {
    /// Active descriptors in canonical order
    pub active: Vec<ComponentDescriptor>,
    /// Ids of descriptors excluded by a condition
    pub excluded: BTreeSet<String>,
    /// `false` when the fixpoint was not reached
    pub converged: bool,
}

/// Evaluates activation conditions against explicit resolution options
pub struct ConditionEvaluator<'a> {
    options: &'a ResolutionOptions,
}

impl<'a> ConditionEvaluator<'a> {
    /// Evaluator bound to one set of options
    pub fn new(options: &'a ResolutionOptions) -> Self {
        Self { options }
    }

    /// Compute the active subset of `descriptors`
    ///
    /// Emits one `ComponentExcluded` INFO per excluded component, or a single
    /// `NonConvergingConditionsError` when the active set keeps changing.
    pub fn evaluate(
        &self,
        descriptors: &[ComponentDescriptor],
        diagnostics: &mut Diagnostics,
    ) -> ConditionOutcome {
        let mut ordered: Vec<&ComponentDescriptor> = descriptors.iter().collect();
        ordered.sort_by(|a, b| a.id.cmp(&b.id));

        let scope = EvaluationScope {
            options: self.options,
            descriptors: &ordered,
            available_types: self.available_types(descriptors),
        };

        let static_pass: BTreeSet<usize> = (0..ordered.len())
            .filter(|&i| scope.passes_static(i))
            .collect();
        debug!(
            total = ordered.len(),
            static_pass = static_pass.len(),
            "Static conditions evaluated"
        );

        let max_iterations = ordered.len() + 1;
        let mut current = static_pass.clone();
        let mut previous = BTreeSet::new();
        let mut converged = false;

        for iteration in 0..max_iterations {
            let next: BTreeSet<usize> = static_pass
                .iter()
                .copied()
                .filter(|&i| scope.passes_dynamic(i, &current))
                .collect();
            if next == current {
                debug!(iterations = iteration + 1, "Condition fixpoint reached");
                converged = true;
                break;
            }
            previous = std::mem::replace(&mut current, next);
        }

        if !converged {
            let oscillating: Vec<&str> = previous
                .symmetric_difference(&current)
                .map(|&i| ordered[i].id.as_str())
                .collect();
            warn!(ids = %join_ids(&oscillating), "Conditions did not converge");
            let anchor = oscillating.first().copied().unwrap_or_default();
            diagnostics.report(
                DiagnosticCode::NonConvergingConditionsError,
                anchor,
                format!(
                    "conditions did not converge after {max_iterations} passes; oscillating components: {}",
                    join_ids(&oscillating)
                ),
            );
            return ConditionOutcome {
                active: Vec::new(),
                excluded: BTreeSet::new(),
                converged: false,
            };
        }

        let mut outcome = ConditionOutcome {
            converged: true,
            ..ConditionOutcome::default()
        };
        for (index, descriptor) in ordered.iter().enumerate() {
            if current.contains(&index) {
                outcome.active.push((*descriptor).clone());
                continue;
            }
            let reason = scope
                .first_failing(index, &current)
                .map_or_else(|| "a condition".to_string(), ToString::to_string);
            debug!(component = %descriptor.id, %reason, "Component excluded");
            diagnostics.report(
                DiagnosticCode::ComponentExcluded,
                &descriptor.id,
                format!("excluded: {reason} not met"),
            );
            outcome.excluded.insert(descriptor.id.clone());
        }
        outcome
    }

    /// Types that satisfy a `TypePresence` condition
    fn available_types(&self, descriptors: &[ComponentDescriptor]) -> BTreeSet<String> {
        let mut types = self.options.available_types.clone();
        for descriptor in descriptors {
            types.extend(descriptor.declared_types.iter().cloned());
        }
        types
    }
}

/// Read-only data shared by every pass
struct EvaluationScope<'s> {
    options: &'s ResolutionOptions,
    descriptors: &'s [&'s ComponentDescriptor],
    available_types: BTreeSet<String>,
}

impl EvaluationScope<'_> {
    fn passes_static(&self, index: usize) -> bool {
        self.descriptors[index]
            .conditions
            .iter()
            .filter(|c| !c.is_dynamic())
            .all(|c| self.holds(c, index, &BTreeSet::new()))
    }

    fn passes_dynamic(&self, index: usize, active: &BTreeSet<usize>) -> bool {
        self.descriptors[index]
            .conditions
            .iter()
            .filter(|c| c.is_dynamic())
            .all(|c| self.holds(c, index, active))
    }

    fn first_failing(&self, index: usize, active: &BTreeSet<usize>) -> Option<&Condition> {
        self.descriptors[index]
            .conditions
            .iter()
            .find(|c| !self.holds(c, index, active))
    }

    fn holds(&self, condition: &Condition, owner: usize, active: &BTreeSet<usize>) -> bool {
        match condition {
            Condition::Property {
                name,
                expected_value,
                match_if_absent,
            } => match self.options.property(name) {
                None => *match_if_absent,
                Some(actual) => expected_value
                    .as_deref()
                    .filter(|expected| !expected.is_empty())
                    .is_none_or(|expected| expected == actual),
            },
            Condition::TypePresence { type_names } => type_names
                .iter()
                .all(|name| self.available_types.contains(name)),
            Condition::MissingComponent { target } => !self.provided_by_other(target, owner, active),
            Condition::PresentComponent { target } => self.provided_by_other(target, owner, active),
            Condition::Profile { profiles, negate } => {
                let matched = profiles.is_empty()
                    || profiles.iter().any(|p| self.options.profile_matches(p));
                matched != *negate
            }
            Condition::AllOf { conditions } => {
                conditions.iter().all(|c| self.holds(c, owner, active))
            }
            Condition::AnyOf { conditions } => {
                conditions.iter().any(|c| self.holds(c, owner, active))
            }
            Condition::Not { condition } => !self.holds(condition, owner, active),
        }
    }

    /// True when an active component other than `owner` answers to `target`
    fn provided_by_other(&self, target: &str, owner: usize, active: &BTreeSet<usize>) -> bool {
        active
            .iter()
            .filter(|&&i| i != owner)
            .any(|&i| self.descriptors[i].is_named_by(target))
    }
}
