//! Graph coloring engine for undirected adjacency graphs.
//!
//! Assigns colors from a finite, ordered palette to the nodes of a graph so
//! that no two adjacent nodes share a color. Two solvers are provided:
//!
//! - **Backtracking (exact)**: Complete depth-first search over the
//!   constraint-satisfaction formulation. Finds a valid coloring whenever one
//!   exists under the given palette, at exponential worst-case cost —
//!   intended for small graphs (up to a few dozen nodes).
//! - **DSATUR (heuristic)**: Greedy saturation-degree selection with
//!   first-fit color assignment. Polynomial time, incomplete — intended for
//!   large graphs (hundreds of nodes, e.g. region adjacency maps).
//!
//! Both solvers consume the same [`graph::ColorGraph`] and palette slice and
//! produce a [`coloring::Coloring`] or a [`coloring::SolveError`]. Neither
//! depends on the other.
//!
//! # Architecture
//!
//! This crate is the algorithmic core only. Producing the graph (e.g.
//! deriving adjacency from geographic boundaries) and consuming the coloring
//! (rendering, reporting) belong to consumer layers. The crate has no I/O
//! surface of its own.
//!
//! # Determinism
//!
//! Both solvers are pure functions of (graph, palette, config). Node
//! enumeration order is the graph's insertion order; it doubles as the
//! deterministic tie-break for both solvers, so identical inputs always
//! produce identical results.
//!
//! # Example
//!
//! ```
//! use u_chroma::backtrack::BacktrackRunner;
//! use u_chroma::coloring::validate;
//! use u_chroma::graph::ColorGraph;
//!
//! let mut graph = ColorGraph::new();
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "C");
//! graph.add_edge("A", "C");
//!
//! let palette = ["red", "green", "blue"];
//! let coloring = BacktrackRunner::run(&graph, &palette).unwrap();
//! assert!(validate(&graph, &coloring));
//! ```

pub mod backtrack;
pub mod coloring;
pub mod dsatur;
pub mod graph;
