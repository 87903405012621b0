//! Cycle Detector
//!
//! Tarjan's strongly connected components over the eager subgraph. Every
//! component of two or more members is one cycle; the reported path is the
//! shortest cycle through the member discovered first.

use std::collections::{BTreeSet, VecDeque};

use tracing::debug;
use veld_domain::value_objects::CyclePath;

use crate::graph::ComponentGraph;

/// Finds dependency cycles that would make eager construction impossible
pub struct CycleDetector;

impl CycleDetector {
    /// Every cycle of the graph, sorted by path
    ///
    /// Includes self-references through any non-DEFERRED edge, even outside
    /// the eager subgraph.
    pub fn detect_cycles(graph: &ComponentGraph) -> Vec<CyclePath> {
        let successors = graph.eager_successors();
        let mut cycles: BTreeSet<Vec<String>> = BTreeSet::new();

        for component in strongly_connected_components(&successors) {
            if component.len() < 2 {
                continue;
            }
            let path = shortest_cycle(&component, &successors);
            cycles.insert(path.iter().map(|&i| graph.node(i).id.clone()).collect());
        }

        for edge in graph.edges().iter().filter(|e| e.is_self_reference()) {
            cycles.insert(vec![graph.node(edge.owner).id.clone()]);
        }

        debug!(cycles = cycles.len(), "Cycle detection finished");
        cycles.into_iter().map(CyclePath::closed).collect()
    }
}

/// Strongly connected components, each listed in discovery order
///
/// Roots are visited in index order and successor lists are expected to be
/// sorted, so the result is deterministic. Stack usage does not grow with
/// the length of dependency chains.
pub fn strongly_connected_components(successors: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut tarjan = Tarjan::new(successors);
    for node in 0..successors.len() {
        if tarjan.index[node].is_none() {
            tarjan.visit(node);
        }
    }
    tarjan.components
}

/// Shortest cycle through the first member of `component`
///
/// Breadth-first search restricted to the component; returns the open member
/// list starting at the root.
pub(crate) fn shortest_cycle(component: &[usize], successors: &[Vec<usize>]) -> Vec<usize> {
    let Some(&root) = component.first() else {
        return Vec::new();
    };
    let members: BTreeSet<usize> = component.iter().copied().collect();
    let mut parent = vec![None; successors.len()];
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        for &next in &successors[node] {
            if next == root {
                let mut path = vec![node];
                let mut cursor = node;
                while let Some(previous) = parent[cursor] {
                    path.push(previous);
                    cursor = previous;
                }
                path.reverse();
                return path;
            }
            if members.contains(&next) && parent[next].is_none() && next != root {
                parent[next] = Some(node);
                queue.push_back(next);
            }
        }
    }
    component.to_vec()
}

struct Tarjan<'a> {
    successors: &'a [Vec<usize>],
    next_index: usize,
    index: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    components: Vec<Vec<usize>>,
}

impl<'a> Tarjan<'a> {
    fn new(successors: &'a [Vec<usize>]) -> Self {
        let len = successors.len();
        Self {
            successors,
            next_index: 0,
            index: vec![None; len],
            lowlink: vec![0; len],
            on_stack: vec![false; len],
            stack: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Depth-first search from `root` driven by an explicit frame stack
    ///
    /// Each frame is a node and the position of its next unvisited successor.
    fn visit(&mut self, root: usize) {
        let successors = self.successors;
        let mut frames = vec![(root, 0usize)];
        self.discover(root);

        while let Some(frame) = frames.last_mut() {
            let (node, position) = *frame;
            if let Some(&next) = successors[node].get(position) {
                frame.1 += 1;
                match self.index[next] {
                    None => {
                        self.discover(next);
                        frames.push((next, 0));
                    }
                    Some(next_index) if self.on_stack[next] => {
                        self.lowlink[node] = self.lowlink[node].min(next_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                self.lowlink[parent] = self.lowlink[parent].min(self.lowlink[node]);
            }
            if self.index[node] == Some(self.lowlink[node]) {
                self.close_component(node);
            }
        }
    }

    fn discover(&mut self, node: usize) {
        self.index[node] = Some(self.next_index);
        self.lowlink[node] = self.next_index;
        self.next_index += 1;
        self.stack.push(node);
        self.on_stack[node] = true;
    }

    /// Pop the component rooted at `root` off the stack
    fn close_component(&mut self, root: usize) {
        let mut component = Vec::new();
        while let Some(member) = self.stack.pop() {
            self.on_stack[member] = false;
            component.push(member);
            if member == root {
                break;
            }
        }
        component.sort_by_key(|&member| self.index[member]);
        self.components.push(component);
    }
}
