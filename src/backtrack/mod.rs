//! Exact backtracking solver.
//!
//! A complete depth-first search over the constraint-satisfaction
//! formulation of graph coloring: one variable per node, the palette as the
//! shared domain, and a "not equal" constraint across every edge. Finds a
//! valid coloring whenever one exists under the given palette.
//!
//! # References
//!
//! Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 6
//! (backtracking search for CSPs, map-coloring formulation).

mod runner;

pub use runner::BacktrackRunner;
