//! Initialization Planner
//!
//! Kahn's topological sort of the eager subgraph merged with `depends_on`
//! hints. Ready components are taken by `(order, canonical index)`, so the
//! rank sequence only depends on the descriptor set.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use tracing::{debug, warn};
use veld_domain::entities::{Multiplicity, Scope};
use veld_domain::value_objects::{
    CyclePath, DiagnosticCode, Diagnostics, LifecycleOrder, PlannedComponent, ResolutionPlan,
};

use crate::cycles::{shortest_cycle, strongly_connected_components};
use crate::graph::ComponentGraph;
use crate::values::ResolvedValues;

/// Plans initialization ranks and lifecycle sequencing
pub struct InitializationPlanner<'a> {
    graph: &'a ComponentGraph,
}

impl<'a> InitializationPlanner<'a> {
    /// Planner over a resolved graph
    ///
    /// The graph is expected to be free of eager cycles; any cycle left
    /// during planning is blamed on `depends_on` hints.
    pub fn new(graph: &'a ComponentGraph) -> Self {
        Self { graph }
    }

    /// Build the resolution plan
    ///
    /// Returns `None` when ordering hints make a total order impossible.
    /// The plan carries no diagnostics; the engine attaches them.
    pub fn plan(&self, values: &ResolvedValues, diagnostics: &mut Diagnostics) -> Option<ResolutionPlan> {
        self.report_scope_warnings(diagnostics);
        let order = self.initialization_order(diagnostics)?;
        let last = order.len().saturating_sub(1);

        let components = order
            .iter()
            .enumerate()
            .map(|(rank, &index)| {
                let node = self.graph.node(index);
                PlannedComponent {
                    id: node.id.clone(),
                    scope: node.scope,
                    lazy: node.lazy,
                    init_rank: rank,
                    bindings: self
                        .graph
                        .edges_of(index)
                        .map(|edge| (edge.requirement, edge.binding.clone()))
                        .collect(),
                    values: values.get(&index).cloned().unwrap_or_default(),
                    lifecycle_order: LifecycleOrder {
                        activation_rank: rank,
                        teardown_rank: last - rank,
                        post_construct: node.lifecycle.post_construct.clone(),
                        pre_destroy: node.lifecycle.pre_destroy.clone(),
                    },
                }
            })
            .collect();

        Some(ResolutionPlan {
            components,
            diagnostics: Vec::new(),
        })
    }

    /// Component indices in initialization order
    pub fn initialization_order(&self, diagnostics: &mut Diagnostics) -> Option<Vec<usize>> {
        let prerequisites = self.prerequisites(diagnostics)?;
        let len = self.graph.len();

        let mut in_degree = vec![0usize; len];
        let mut dependents = vec![Vec::new(); len];
        for (node, required) in prerequisites.iter().enumerate() {
            in_degree[node] = required.len();
            for &prerequisite in required {
                dependents[prerequisite].push(node);
            }
        }

        let mut ready: BinaryHeap<Reverse<(i32, usize)>> = (0..len)
            .filter(|&i| in_degree[i] == 0)
            .map(|i| Reverse((self.graph.node(i).order, i)))
            .collect();
        let mut order = Vec::with_capacity(len);

        while let Some(Reverse((_, node))) = ready.pop() {
            order.push(node);
            for &dependent in &dependents[node] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.push(Reverse((self.graph.node(dependent).order, dependent)));
                }
            }
        }

        if order.len() == len {
            debug!(components = len, "Initialization order computed");
            return Some(order);
        }

        self.report_ordering_cycles(&prerequisites, diagnostics);
        None
    }

    /// Per component, the set of components that must initialize first
    fn prerequisites(&self, diagnostics: &mut Diagnostics) -> Option<Vec<BTreeSet<usize>>> {
        let mut prerequisites = vec![BTreeSet::new(); self.graph.len()];
        for edge in self.graph.edges().iter().filter(|e| self.graph.is_eager(e)) {
            prerequisites[edge.owner].extend(edge.targets.iter().copied().filter(|&t| t != edge.owner));
        }

        let mut valid = true;
        for (index, node) in self.graph.nodes().iter().enumerate() {
            for hint in &node.depends_on {
                if let Some(target) = self.graph.index_of(hint) {
                    prerequisites[index].insert(target);
                } else if self.graph.is_excluded(hint) {
                    warn!(component = %node.id, hint = %hint, "Ordering hint names an excluded component");
                    diagnostics.report(
                        DiagnosticCode::UnresolvedOrderingHint,
                        &node.id,
                        format!("depends_on '{hint}' ignored: component excluded by conditions"),
                    );
                } else {
                    diagnostics.report(
                        DiagnosticCode::InvalidOrderingConstraintError,
                        &node.id,
                        format!("depends_on '{hint}' names an unknown component"),
                    );
                    valid = false;
                }
            }
        }
        valid.then_some(prerequisites)
    }

    fn report_ordering_cycles(&self, prerequisites: &[BTreeSet<usize>], diagnostics: &mut Diagnostics) {
        let successors: Vec<Vec<usize>> = prerequisites
            .iter()
            .map(|set| set.iter().copied().collect())
            .collect();

        for component in strongly_connected_components(&successors) {
            let path = match component[..] {
                [single] if successors[single].contains(&single) => vec![single],
                [_] => continue,
                _ => shortest_cycle(&component, &successors),
            };
            let cycle = CyclePath::closed(path.iter().map(|&i| self.graph.node(i).id.clone()).collect());
            let anchor = &self.graph.node(path[0]).id;
            warn!(component = %anchor, %cycle, "Ordering hints form a cycle");
            diagnostics.report(
                DiagnosticCode::InvalidOrderingConstraintError,
                anchor,
                format!("depends_on hints form a cycle: {cycle}"),
            );
        }
    }

    /// Warnings about eager edges that defeat laziness or prototype scope
    fn report_scope_warnings(&self, diagnostics: &mut Diagnostics) {
        let mut reported = BTreeSet::new();
        for edge in self.graph.edges() {
            let owner = self.graph.node(edge.owner);
            for &target in edge.targets.iter().filter(|&&t| t != edge.owner) {
                let dependency = self.graph.node(target);
                if self.graph.is_eager(edge) && dependency.lazy {
                    let key = (edge.owner, target, DiagnosticCode::LazyDependencyNarrowing);
                    if reported.insert(key) {
                        diagnostics.report(
                            DiagnosticCode::LazyDependencyNarrowing,
                            &owner.id,
                            format!(
                                "eager component '{}' forces lazy component '{}' to initialize at startup",
                                owner.id, dependency.id
                            ),
                        );
                    }
                }
                if owner.scope == Scope::Singleton
                    && dependency.scope == Scope::Prototype
                    && edge.multiplicity != Multiplicity::Deferred
                {
                    let key = (edge.owner, target, DiagnosticCode::PrototypeInSingleton);
                    if reported.insert(key) {
                        diagnostics.report(
                            DiagnosticCode::PrototypeInSingleton,
                            &owner.id,
                            format!(
                                "singleton '{}' captures prototype '{}' through a direct reference",
                                owner.id, dependency.id
                            ),
                        );
                    }
                }
            }
        }
    }
}
