//! Undirected adjacency graph model.
//!
//! [`ColorGraph`] stores nodes in insertion order together with a symmetric
//! adjacency relation. It is the shared input type of both solvers; the
//! insertion order it exposes through [`ColorGraph::nodes`] is the
//! deterministic tie-break order the solvers rely on.

mod model;

pub use model::ColorGraph;
