//! Component graph
//!
//! An arena of active descriptors in canonical order, addressed by integer
//! index, plus one resolved edge per dependency requirement. The graph is
//! immutable once built; later stages only read it.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;
use veld_domain::entities::{ComponentDescriptor, Multiplicity, Scope};
use veld_domain::value_objects::{DiagnosticCode, Diagnostics, ResolvedBinding};

use crate::binding::BindingResolver;

/// A dependency requirement resolved to its target components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Index of the component declaring the requirement
    pub owner: usize,
    /// Position of the requirement in the owner's dependency list
    pub requirement: usize,
    /// Multiplicity of the requirement
    pub multiplicity: Multiplicity,
    /// Indices of the bound components (empty for an absent binding)
    pub targets: Vec<usize>,
    /// Binding as it appears in the plan
    pub binding: ResolvedBinding,
}

impl Edge {
    /// True for a non-DEFERRED edge from a component to itself
    pub fn is_self_reference(&self) -> bool {
        self.multiplicity != Multiplicity::Deferred && self.targets.contains(&self.owner)
    }
}

/// Resolved dependency graph of the active components
#[derive(Debug, Clone, Default)]
pub struct ComponentGraph {
    nodes: Vec<ComponentDescriptor>,
    index: BTreeMap<String, usize>,
    edges: Vec<Edge>,
    excluded: BTreeSet<String>,
}

impl ComponentGraph {
    /// Number of components
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no component is active
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Component at `index`
    pub fn node(&self, index: usize) -> &ComponentDescriptor {
        &self.nodes[index]
    }

    /// Components in canonical order
    pub fn nodes(&self) -> &[ComponentDescriptor] {
        &self.nodes
    }

    /// Index of the component with `id`
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Every resolved edge, grouped by owner in canonical order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges declared by one component
    pub fn edges_of(&self, owner: usize) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.owner == owner)
    }

    /// True when `id` was declared but excluded by a condition
    pub fn is_excluded(&self, id: &str) -> bool {
        self.excluded.contains(id)
    }

    /// True when the edge constrains eager construction
    ///
    /// SINGLE and COLLECTION edges of non-lazy owners. DEFERRED and OPTIONAL
    /// edges never do.
    pub fn is_eager(&self, edge: &Edge) -> bool {
        edge.multiplicity.is_eager() && !self.nodes[edge.owner].lazy
    }

    /// Successor lists of the eager subgraph (owner to target), sorted
    pub fn eager_successors(&self) -> Vec<Vec<usize>> {
        let mut successors = vec![BTreeSet::new(); self.nodes.len()];
        for edge in self.edges.iter().filter(|e| self.is_eager(e)) {
            successors[edge.owner].extend(edge.targets.iter().copied());
        }
        successors
            .into_iter()
            .map(|set| set.into_iter().collect())
            .collect()
    }

    /// Active components satisfying `type_name`, in canonical order
    pub fn candidates(&self, type_name: &str) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.satisfies(type_name))
            .map(|(i, _)| i)
            .collect()
    }

    /// Scope of the component at `index`
    pub fn scope(&self, index: usize) -> Scope {
        self.nodes[index].scope
    }
}

/// Builds a [`ComponentGraph`] from the active descriptor set
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    excluded: BTreeSet<String>,
}

impl GraphBuilder {
    /// Builder with no excluded ids
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember ids excluded by conditions, for ordering-hint checks
    #[must_use]
    pub fn with_excluded(mut self, excluded: BTreeSet<String>) -> Self {
        self.excluded = excluded;
        self
    }

    /// Build the graph
    ///
    /// Duplicate ids are fatal and reported before any edge is built: the
    /// call returns `None` with one `DuplicateComponentIdError` per id.
    /// Binding failures are reported and leave the requirement without an
    /// edge; the graph is still returned so later stages can report more.
    pub fn build(
        self,
        active: Vec<ComponentDescriptor>,
        diagnostics: &mut Diagnostics,
    ) -> Option<ComponentGraph> {
        let mut nodes = active;
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        if Self::report_duplicates(&nodes, diagnostics) {
            return None;
        }

        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.clone(), i))
            .collect();
        let mut graph = ComponentGraph {
            nodes,
            index,
            edges: Vec::new(),
            excluded: self.excluded,
        };

        let resolver = BindingResolver::new(&graph.nodes);
        let mut edges = Vec::new();
        for (owner, node) in graph.nodes.iter().enumerate() {
            for (position, requirement) in node.dependencies.iter().enumerate() {
                let candidates = graph.candidates(&requirement.target_type);
                match resolver.resolve(owner, position, requirement, &candidates) {
                    Ok(selection) => {
                        diagnostics.extend(selection.warnings);
                        edges.push(Edge {
                            owner,
                            requirement: position,
                            multiplicity: requirement.multiplicity,
                            binding: resolver.binding_for(requirement.multiplicity, &selection.targets),
                            targets: selection.targets,
                        });
                    }
                    Err(diagnostic) => diagnostics.push(diagnostic),
                }
            }
        }
        graph.edges = edges;

        debug!(
            components = graph.len(),
            edges = graph.edges.len(),
            "Component graph built"
        );
        Some(graph)
    }

    fn report_duplicates(nodes: &[ComponentDescriptor], diagnostics: &mut Diagnostics) -> bool {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for node in nodes {
            *counts.entry(node.id.as_str()).or_default() += 1;
        }
        let mut found = false;
        for (id, count) in counts.into_iter().filter(|(_, count)| *count > 1) {
            diagnostics.report(
                DiagnosticCode::DuplicateComponentIdError,
                id,
                format!("component id '{id}' is declared {count} times among active components"),
            );
            found = true;
        }
        found
    }
}
