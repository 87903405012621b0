//! Resolution Engine
//!
//! Runs the pipeline stages in order and turns their diagnostics into a
//! single all-or-nothing result.

use tracing::{debug, info, warn};
use veld_domain::entities::ComponentDescriptor;
use veld_domain::error::{Error, Result};
use veld_domain::value_objects::{
    Diagnostic, DiagnosticCode, Diagnostics, ResolutionOptions, ResolutionPlan,
};

use crate::conditions::ConditionEvaluator;
use crate::cycles::CycleDetector;
use crate::graph::GraphBuilder;
use crate::planner::InitializationPlanner;
use crate::ports::{DescriptorSource, PlanSink};
use crate::values::ValueResolver;

/// Stateless resolver; one instance can serve any number of builds
///
/// ## Example
///
/// ```rust
/// use veld_application::ResolutionEngine;
/// use veld_domain::entities::{ComponentDescriptor, DependencyRequirement};
/// use veld_domain::value_objects::ResolutionOptions;
///
/// let descriptors = vec![
///     ComponentDescriptor::new("app.Service")
///         .with_dependency(DependencyRequirement::single("app.Repository")),
///     ComponentDescriptor::new("app.Repository"),
/// ];
///
/// let plan = ResolutionEngine::new()
///     .resolve(&descriptors, &ResolutionOptions::default())
///     .unwrap();
/// assert_eq!(plan.ids(), vec!["app.Repository", "app.Service"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionEngine;

impl ResolutionEngine {
    /// Create an engine
    pub fn new() -> Self {
        Self
    }

    /// Resolve a descriptor set into an initialization plan
    ///
    /// Diagnostics from every stage are accumulated. The plan is returned
    /// only when no ERROR was produced; warnings and exclusion traces travel
    /// with it. The result does not depend on the order of `descriptors`.
    ///
    /// # Errors
    ///
    /// Returns every diagnostic of the run, canonically sorted, when at
    /// least one is an ERROR (after strict-mode promotion).
    pub fn resolve(
        &self,
        descriptors: &[ComponentDescriptor],
        options: &ResolutionOptions,
    ) -> std::result::Result<ResolutionPlan, Vec<Diagnostic>> {
        debug!(
            descriptors = descriptors.len(),
            profiles = options.active_profiles.len(),
            strict = options.strict,
            "Resolution started"
        );
        let mut diagnostics = Diagnostics::new();
        let plan = Self::run_stages(descriptors, options, &mut diagnostics);

        if options.strict {
            diagnostics.promote_warnings();
        }

        match plan {
            Some(mut plan) if !diagnostics.has_errors() => {
                plan.diagnostics = diagnostics.into_sorted();
                info!(
                    components = plan.len(),
                    diagnostics = plan.diagnostics.len(),
                    "Resolution plan ready"
                );
                Ok(plan)
            }
            _ => {
                let diagnostics = diagnostics.into_sorted();
                let errors = diagnostics.iter().filter(|d| d.is_error()).count();
                warn!(errors, total = diagnostics.len(), "Resolution failed");
                Err(diagnostics)
            }
        }
    }

    /// Load descriptors from `source`, resolve them, and hand the plan to `sink`
    ///
    /// # Errors
    ///
    /// Returns the source or sink error, or [`Error::ResolutionFailed`]
    /// carrying the diagnostics of a failed run.
    pub fn run(
        &self,
        source: &dyn DescriptorSource,
        sink: &dyn PlanSink,
        options: &ResolutionOptions,
    ) -> Result<ResolutionPlan> {
        let descriptors = source.load_descriptors()?;
        let plan = self
            .resolve(&descriptors, options)
            .map_err(Error::resolution_failed)?;
        sink.write_plan(&plan)?;
        Ok(plan)
    }

    fn run_stages(
        descriptors: &[ComponentDescriptor],
        options: &ResolutionOptions,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResolutionPlan> {
        let outcome = ConditionEvaluator::new(options).evaluate(descriptors, diagnostics);
        if !outcome.converged {
            return None;
        }
        debug!(
            active = outcome.active.len(),
            excluded = outcome.excluded.len(),
            "Conditions evaluated"
        );

        let graph = GraphBuilder::new()
            .with_excluded(outcome.excluded)
            .build(outcome.active, diagnostics)?;

        let values = ValueResolver::new(options).resolve_all(&graph, diagnostics);

        let cycles = CycleDetector::detect_cycles(&graph);
        if !cycles.is_empty() {
            for cycle in &cycles {
                let anchor = cycle.members().first().map_or("", String::as_str);
                warn!(%cycle, "Circular dependency");
                diagnostics.report(
                    DiagnosticCode::CircularDependencyError,
                    anchor,
                    format!("circular dependency: {cycle}"),
                );
            }
            return None;
        }

        InitializationPlanner::new(&graph).plan(&values, diagnostics)
    }
}
