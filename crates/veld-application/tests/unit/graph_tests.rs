//! Unit tests for graph construction

use std::collections::BTreeSet;

use veld_application::GraphBuilder;
use veld_domain::entities::DependencyRequirement;
use veld_domain::value_objects::{DiagnosticCode, Diagnostics, ResolvedBinding};

use crate::test_utils::{build_graph, component, has_code, implementing};

#[test]
fn test_nodes_are_in_canonical_order() {
    let (graph, _) = build_graph(vec![component("c"), component("a"), component("b")]);

    let ids: Vec<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(graph.index_of("b"), Some(1));
    assert_eq!(graph.index_of("z"), None);
}

#[test]
fn test_duplicate_ids_are_fatal_and_all_reported() {
    let mut diagnostics = Diagnostics::new();

    let graph = GraphBuilder::new().build(
        vec![
            component("a"),
            component("b"),
            component("a"),
            component("b"),
            component("c"),
        ],
        &mut diagnostics,
    );

    assert!(graph.is_none());
    let duplicates: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.code == DiagnosticCode::DuplicateComponentIdError)
        .map(|d| d.component_id.clone().unwrap_or_default())
        .collect();
    assert_eq!(duplicates, vec!["a", "b"]);
}

#[test]
fn test_candidates_follow_declared_types() {
    let (graph, _) = build_graph(vec![
        implementing("app.JdbcRepo", "app.Repo"),
        implementing("app.MemRepo", "app.Repo"),
        component("app.Other"),
    ]);

    assert_eq!(graph.candidates("app.Repo"), vec![0, 1]);
    assert_eq!(graph.candidates("app.MemRepo"), vec![1]);
    assert!(graph.candidates("app.Missing").is_empty());
}

#[test]
fn test_edges_carry_resolved_bindings() {
    let (graph, diagnostics) = build_graph(vec![
        component("app.Service")
            .with_dependency(DependencyRequirement::single("app.Repo"))
            .with_dependency(DependencyRequirement::optional("app.Metrics")),
        implementing("app.JdbcRepo", "app.Repo"),
    ]);

    assert!(diagnostics.is_empty());
    let service = graph.index_of("app.Service").unwrap();
    let repo = graph.index_of("app.JdbcRepo").unwrap();
    let edges: Vec<_> = graph.edges_of(service).collect();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].targets, vec![repo]);
    assert_eq!(
        edges[0].binding,
        ResolvedBinding::Bound {
            component: "app.JdbcRepo".to_string()
        }
    );
    assert_eq!(edges[1].requirement, 1);
    assert_eq!(edges[1].binding, ResolvedBinding::Absent);
}

#[test]
fn test_failed_binding_is_reported_without_edge() {
    let (graph, diagnostics) = build_graph(vec![
        component("app.Service").with_dependency(DependencyRequirement::single("app.Repo")),
    ]);

    assert!(graph.edges().is_empty());
    assert!(has_code(diagnostics.iter(), DiagnosticCode::MissingDependencyError));
}

#[test]
fn test_eager_successors_skip_lazy_owners_and_soft_edges() {
    let (graph, _) = build_graph(vec![
        component("a")
            .with_dependency(DependencyRequirement::single("b"))
            .with_dependency(DependencyRequirement::optional("c"))
            .with_dependency(DependencyRequirement::deferred("d")),
        component("b"),
        component("c"),
        component("d"),
        component("e").lazy().with_dependency(DependencyRequirement::single("b")),
    ]);

    let successors = graph.eager_successors();

    assert_eq!(successors[0], vec![1]);
    assert!(successors[4].is_empty());
}

#[test]
fn test_excluded_ids_are_remembered() {
    let mut diagnostics = Diagnostics::new();
    let graph = GraphBuilder::new()
        .with_excluded(BTreeSet::from(["gone".to_string()]))
        .build(vec![component("kept")], &mut diagnostics)
        .unwrap();

    assert!(graph.is_excluded("gone"));
    assert!(!graph.is_excluded("kept"));
}
