//! Coloring validation.

use std::fmt;
use std::hash::Hash;

use super::types::Coloring;
use crate::graph::ColorGraph;

/// Checks that `coloring` is a proper, complete coloring of `graph`.
///
/// Returns `true` iff every node of the graph has an assigned color and no
/// adjacent pair shares one. Assignments for nodes outside the graph are
/// ignored.
///
/// # Examples
///
/// ```
/// use u_chroma::coloring::validate;
/// use u_chroma::dsatur::DsaturRunner;
/// use u_chroma::graph::ColorGraph;
///
/// let mut graph = ColorGraph::new();
/// graph.add_edge("A", "B");
/// let coloring = DsaturRunner::run(&graph, &["red", "green"]).unwrap();
/// assert!(validate(&graph, &coloring));
/// ```
pub fn validate<N, C>(graph: &ColorGraph<N>, coloring: &Coloring<N, C>) -> bool
where
    N: Clone + Eq + Hash + fmt::Debug,
    C: Eq,
{
    for node in graph.nodes() {
        let Some(color) = coloring.color_of(node) else {
            return false;
        };
        for neighbor in graph.neighbors(node) {
            if coloring.color_of(neighbor) == Some(color) {
                return false;
            }
        }
    }
    true
}
