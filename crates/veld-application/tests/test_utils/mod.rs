//! Test utilities for veld-application tests
//!
//! Descriptor factories and small helpers shared by the unit and integration
//! suites. Everything here builds real descriptors; nothing is mocked.

#![allow(dead_code)]

use veld_domain::entities::ComponentDescriptor;
use veld_domain::value_objects::{
    Diagnostic, DiagnosticCode, Diagnostics, ResolutionOptions, ResolutionPlan,
};
use veld_application::{ComponentGraph, GraphBuilder, ResolutionEngine};

/// Singleton descriptor with no requirements
pub fn component(id: &str) -> ComponentDescriptor {
    ComponentDescriptor::new(id)
}

/// Descriptor that also satisfies `type_name`
pub fn implementing(id: &str, type_name: &str) -> ComponentDescriptor {
    ComponentDescriptor::new(id).with_type(type_name)
}

/// Resolve with default options
pub fn resolve(descriptors: &[ComponentDescriptor]) -> Result<ResolutionPlan, Vec<Diagnostic>> {
    ResolutionEngine::new().resolve(descriptors, &ResolutionOptions::default())
}

/// Resolve with explicit options
pub fn resolve_with(
    descriptors: &[ComponentDescriptor],
    options: &ResolutionOptions,
) -> Result<ResolutionPlan, Vec<Diagnostic>> {
    ResolutionEngine::new().resolve(descriptors, options)
}

/// Resolve and fail the test on any error, printing the diagnostics
pub fn expect_plan(descriptors: &[ComponentDescriptor]) -> ResolutionPlan {
    match resolve(descriptors) {
        Ok(plan) => plan,
        Err(diagnostics) => panic!("expected a plan, got: {diagnostics:#?}"),
    }
}

/// Resolve and fail the test when a plan is produced
pub fn expect_failure(descriptors: &[ComponentDescriptor]) -> Vec<Diagnostic> {
    match resolve(descriptors) {
        Ok(plan) => panic!("expected failure, got plan: {:?}", plan.ids()),
        Err(diagnostics) => diagnostics,
    }
}

/// Build a graph, failing the test on duplicate ids
pub fn build_graph(descriptors: Vec<ComponentDescriptor>) -> (ComponentGraph, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let graph = GraphBuilder::new()
        .build(descriptors, &mut diagnostics)
        .expect("graph should build");
    (graph, diagnostics)
}

/// Diagnostics with the given code
pub fn with_code(diagnostics: &[Diagnostic], code: DiagnosticCode) -> Vec<&Diagnostic> {
    diagnostics.iter().filter(|d| d.code == code).collect()
}

/// True when at least one diagnostic has the given code
pub fn has_code<'a, I>(diagnostics: I, code: DiagnosticCode) -> bool
where
    I: IntoIterator<Item = &'a Diagnostic>,
{
    diagnostics.into_iter().any(|d| d.code == code)
}
