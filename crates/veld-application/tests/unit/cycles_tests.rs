//! Unit tests for cycle detection

use veld_application::CycleDetector;
use veld_application::cycles::strongly_connected_components;
use veld_domain::entities::DependencyRequirement;

use crate::test_utils::{build_graph, component};

#[test]
fn test_three_component_cycle_path() {
    let (graph, _) = build_graph(vec![
        component("A").with_dependency(DependencyRequirement::single("B")),
        component("B").with_dependency(DependencyRequirement::single("C")),
        component("C").with_dependency(DependencyRequirement::single("A")),
    ]);

    let cycles = CycleDetector::detect_cycles(&graph);

    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].path, vec!["A", "B", "C", "A"]);
}

#[test]
fn test_deferred_edge_breaks_cycle() {
    let (graph, _) = build_graph(vec![
        component("A").with_dependency(DependencyRequirement::single("B")),
        component("B").with_dependency(DependencyRequirement::deferred("A")),
    ]);

    assert!(CycleDetector::detect_cycles(&graph).is_empty());
}

#[test]
fn test_lazy_owner_breaks_cycle() {
    let (graph, _) = build_graph(vec![
        component("A").with_dependency(DependencyRequirement::single("B")),
        component("B")
            .lazy()
            .with_dependency(DependencyRequirement::single("A")),
    ]);

    assert!(CycleDetector::detect_cycles(&graph).is_empty());
}

#[test]
fn test_optional_edges_do_not_form_cycles() {
    let (graph, _) = build_graph(vec![
        component("A").with_dependency(DependencyRequirement::optional("B")),
        component("B").with_dependency(DependencyRequirement::single("A")),
    ]);

    assert!(CycleDetector::detect_cycles(&graph).is_empty());
}

#[test]
fn test_collection_edges_form_cycles() {
    let (graph, _) = build_graph(vec![
        component("hub").with_dependency(DependencyRequirement::collection("app.Plugin")),
        component("plugin")
            .with_type("app.Plugin")
            .with_dependency(DependencyRequirement::single("hub")),
    ]);

    let cycles = CycleDetector::detect_cycles(&graph);

    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].to_string(), "hub -> plugin -> hub");
}

#[test]
fn test_self_reference_is_legal_only_when_deferred() {
    let (deferred, _) = build_graph(vec![
        component("A").with_dependency(DependencyRequirement::deferred("A")),
    ]);
    let (optional, _) = build_graph(vec![
        component("A")
            .lazy()
            .with_dependency(DependencyRequirement::optional("A")),
    ]);

    assert!(CycleDetector::detect_cycles(&deferred).is_empty());
    let cycles = CycleDetector::detect_cycles(&optional);
    assert_eq!(cycles.len(), 1);
    assert!(cycles[0].is_self_loop());
    assert_eq!(cycles[0].to_string(), "A -> A");
}

#[test]
fn test_disjoint_cycles_reported_separately() {
    let (graph, _) = build_graph(vec![
        component("A").with_dependency(DependencyRequirement::single("B")),
        component("B").with_dependency(DependencyRequirement::single("A")),
        component("X").with_dependency(DependencyRequirement::single("Y")),
        component("Y").with_dependency(DependencyRequirement::single("X")),
        component("Z").with_dependency(DependencyRequirement::single("A")),
    ]);

    let rendered: Vec<String> = CycleDetector::detect_cycles(&graph)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(rendered, vec!["A -> B -> A", "X -> Y -> X"]);
}

#[test]
fn test_components_close_in_completion_order() {
    let successors = vec![vec![1], vec![2], vec![0, 3], vec![]];

    let components = strongly_connected_components(&successors);

    assert_eq!(components, vec![vec![3], vec![0, 1, 2]]);
}

#[test]
fn test_long_dependency_chain_uses_bounded_stack() {
    const LEN: usize = 200_000;
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let mut successors: Vec<Vec<usize>> = (1..LEN).map(|next| vec![next]).collect();
            successors.push(Vec::new());
            let open = strongly_connected_components(&successors);

            successors[LEN - 1].push(0);
            let closed = strongly_connected_components(&successors);
            (open, closed)
        })
        .unwrap();

    let (open, closed) = handle.join().unwrap();

    assert_eq!(open.len(), LEN);
    assert_eq!(open[0], vec![LEN - 1]);
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0], (0..LEN).collect::<Vec<_>>());
}
