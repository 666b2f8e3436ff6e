//! Adjacency graph storage.

use std::collections::HashMap;
use std::hash::Hash;

/// An undirected graph with insertion-ordered nodes.
///
/// Edges are symmetric and stored once per direction; self-loops are
/// silently ignored. All operations are total: adding an existing node or
/// edge is a no-op, and queries on unknown nodes return empty results.
///
/// Node enumeration order (via [`ColorGraph::nodes`]) is the order in which
/// nodes were first added, whether explicitly through
/// [`ColorGraph::add_node`] or implicitly through [`ColorGraph::add_edge`].
/// This order is stable and reproducible, which both solvers depend on for
/// deterministic results.
///
/// # Examples
///
/// ```
/// use u_chroma::graph::ColorGraph;
///
/// let mut graph = ColorGraph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("A", "C");
/// assert_eq!(graph.degree(&"A"), 2);
/// assert_eq!(graph.nodes(), ["A", "B", "C"]);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorGraph<N: Eq + Hash> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl<N: Clone + Eq + Hash> ColorGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Adds a node. Idempotent: adding an existing node is a no-op.
    pub fn add_node(&mut self, node: N) {
        self.intern(node);
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Nodes not yet present are added implicitly. Idempotent: adding an
    /// existing edge is a no-op. Self-loops (`u == v`) are ignored.
    pub fn add_edge(&mut self, u: N, v: N) {
        if u == v {
            // The node is still added; only the loop itself is dropped.
            self.intern(u);
            return;
        }
        let ui = self.intern(u);
        let vi = self.intern(v);
        if !self.adjacency[ui].contains(&vi) {
            self.adjacency[ui].push(vi);
            self.adjacency[vi].push(ui);
        }
    }

    /// Returns the neighbors of `node` in the order their edges were added.
    ///
    /// Unknown nodes have no neighbors.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> {
        self.index
            .get(node)
            .map(|&i| self.adjacency[i].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&j| &self.nodes[j])
    }

    /// Returns the number of distinct neighbors of `node` (0 if unknown).
    pub fn degree(&self, node: &N) -> usize {
        self.index
            .get(node)
            .map(|&i| self.adjacency[i].len())
            .unwrap_or(0)
    }

    /// Returns all nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `node` is present.
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Whether an edge between `u` and `v` is present.
    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        match (self.index.get(u), self.index.get(v)) {
            (Some(&ui), Some(&vi)) => self.adjacency[ui].contains(&vi),
            _ => false,
        }
    }

    /// Neighbor index lists, parallel to [`ColorGraph::nodes`].
    ///
    /// Solvers work on node indices internally and map back to `N` only
    /// when building the final coloring.
    pub(crate) fn adjacency_indices(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    fn intern(&mut self, node: N) -> usize {
        if let Some(&i) = self.index.get(&node) {
            return i;
        }
        let i = self.nodes.len();
        self.index.insert(node.clone(), i);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        i
    }
}
