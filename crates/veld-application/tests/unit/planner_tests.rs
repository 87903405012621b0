//! Unit tests for initialization planning

use std::collections::BTreeSet;

use veld_application::values::ResolvedValues;
use veld_application::{GraphBuilder, InitializationPlanner};
use veld_domain::entities::{DependencyRequirement, Scope};
use veld_domain::value_objects::{DiagnosticCode, Diagnostics};

use crate::test_utils::{build_graph, component, has_code};

#[test]
fn test_dependencies_initialize_first() {
    let (graph, _) = build_graph(vec![
        component("a_service").with_dependency(DependencyRequirement::single("z_repo")),
        component("z_repo").with_dependency(DependencyRequirement::single("m_source")),
        component("m_source"),
    ]);
    let mut diagnostics = Diagnostics::new();

    let plan = InitializationPlanner::new(&graph)
        .plan(&ResolvedValues::new(), &mut diagnostics)
        .unwrap();

    assert_eq!(plan.ids(), vec!["m_source", "z_repo", "a_service"]);
    assert_eq!(plan.rank_of("a_service"), Some(2));
}

#[test]
fn test_ties_broken_by_order_then_declaration() {
    let (graph, _) = build_graph(vec![
        component("a").with_order(10),
        component("b"),
        component("c").with_order(-1),
        component("d"),
    ]);
    let mut diagnostics = Diagnostics::new();

    let order = InitializationPlanner::new(&graph)
        .initialization_order(&mut diagnostics)
        .unwrap();

    let ids: Vec<&str> = order.iter().map(|&i| graph.node(i).id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "d", "a"]);
}

#[test]
fn test_depends_on_adds_ordering() {
    let (graph, _) = build_graph(vec![
        component("a").depends_on("b"),
        component("b"),
    ]);
    let mut diagnostics = Diagnostics::new();

    let plan = InitializationPlanner::new(&graph)
        .plan(&ResolvedValues::new(), &mut diagnostics)
        .unwrap();

    assert_eq!(plan.ids(), vec!["b", "a"]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_optional_and_deferred_edges_do_not_order() {
    let (graph, _) = build_graph(vec![
        component("a")
            .with_dependency(DependencyRequirement::optional("c"))
            .with_dependency(DependencyRequirement::deferred("b")),
        component("b"),
        component("c"),
    ]);
    let mut diagnostics = Diagnostics::new();

    let plan = InitializationPlanner::new(&graph)
        .plan(&ResolvedValues::new(), &mut diagnostics)
        .unwrap();

    assert_eq!(plan.ids(), vec!["a", "b", "c"]);
}

#[test]
fn test_cycle_through_depends_on_is_invalid_constraint() {
    let (graph, _) = build_graph(vec![
        component("a").with_dependency(DependencyRequirement::single("b")),
        component("b").depends_on("a"),
    ]);
    let mut diagnostics = Diagnostics::new();

    let plan = InitializationPlanner::new(&graph).plan(&ResolvedValues::new(), &mut diagnostics);

    assert!(plan.is_none());
    let errors = diagnostics.into_sorted();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, DiagnosticCode::InvalidOrderingConstraintError);
    assert!(errors[0].message.contains("a -> b -> a"));
}

#[test]
fn test_self_depends_on_is_invalid_constraint() {
    let (graph, _) = build_graph(vec![component("a").depends_on("a")]);
    let mut diagnostics = Diagnostics::new();

    assert!(
        InitializationPlanner::new(&graph)
            .initialization_order(&mut diagnostics)
            .is_none()
    );
    assert!(has_code(diagnostics.iter(), DiagnosticCode::InvalidOrderingConstraintError));
}

#[test]
fn test_unknown_depends_on_is_invalid_constraint() {
    let (graph, _) = build_graph(vec![component("a").depends_on("ghost")]);
    let mut diagnostics = Diagnostics::new();

    let plan = InitializationPlanner::new(&graph).plan(&ResolvedValues::new(), &mut diagnostics);

    assert!(plan.is_none());
    assert!(has_code(diagnostics.iter(), DiagnosticCode::InvalidOrderingConstraintError));
}

#[test]
fn test_depends_on_excluded_component_is_warning() {
    let mut diagnostics = Diagnostics::new();
    let graph = GraphBuilder::new()
        .with_excluded(BTreeSet::from(["metrics".to_string()]))
        .build(vec![component("a").depends_on("metrics")], &mut diagnostics)
        .unwrap();

    let plan = InitializationPlanner::new(&graph)
        .plan(&ResolvedValues::new(), &mut diagnostics)
        .unwrap();

    assert_eq!(plan.ids(), vec!["a"]);
    assert!(!diagnostics.has_errors());
    assert!(has_code(diagnostics.iter(), DiagnosticCode::UnresolvedOrderingHint));
}

#[test]
fn test_lifecycle_ranks() {
    let (graph, _) = build_graph(vec![
        component("pool")
            .with_post_construct("open")
            .with_pre_destroy("close"),
        component("service")
            .with_dependency(DependencyRequirement::single("pool"))
            .with_post_construct("start")
            .with_pre_destroy("stop"),
        component("clock").with_order(5),
    ]);
    let mut diagnostics = Diagnostics::new();

    let plan = InitializationPlanner::new(&graph)
        .plan(&ResolvedValues::new(), &mut diagnostics)
        .unwrap();

    assert_eq!(plan.ids(), vec!["pool", "service", "clock"]);
    let pool = plan.get("pool").unwrap();
    assert_eq!(pool.lifecycle_order.activation_rank, 0);
    assert_eq!(pool.lifecycle_order.teardown_rank, 2);
    assert_eq!(plan.activation_order(), vec!["pool", "service"]);
    assert_eq!(plan.teardown_order(), vec!["service", "pool"]);
}

#[test]
fn test_scope_warnings() {
    let (graph, _) = build_graph(vec![
        component("eager").with_dependency(DependencyRequirement::single("lazy_one")),
        component("lazy_one").lazy(),
        component("holder").with_dependency(DependencyRequirement::single("proto")),
        component("provider_holder").with_dependency(DependencyRequirement::deferred("proto")),
        component("proto").with_scope(Scope::Prototype),
    ]);
    let mut diagnostics = Diagnostics::new();

    InitializationPlanner::new(&graph)
        .plan(&ResolvedValues::new(), &mut diagnostics)
        .unwrap();

    let warnings = diagnostics.into_sorted();
    let summary: Vec<(DiagnosticCode, &str)> = warnings
        .iter()
        .map(|d| (d.code, d.component_id.as_deref().unwrap_or_default()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (DiagnosticCode::LazyDependencyNarrowing, "eager"),
            (DiagnosticCode::PrototypeInSingleton, "holder"),
        ]
    );
}
