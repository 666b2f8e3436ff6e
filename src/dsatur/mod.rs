//! DSATUR heuristic solver.
//!
//! Greedy coloring driven by saturation degree: at every step the uncolored
//! node whose neighborhood is most constrained is colored next with the
//! first palette color its neighbors do not use. Polynomial time, roughly
//! O(N²) in node count, and incomplete — it may fail on inputs the exact
//! solver can color. Intended for graphs with hundreds of nodes where a
//! good-enough coloring beats an exhaustive search.
//!
//! # References
//!
//! Brélaz, D. (1979). "New methods to color the vertices of a graph",
//! *Communications of the ACM* 22(4), 251-256.

mod config;
mod runner;

pub use config::{DsaturConfig, SaturationPolicy};
pub use runner::DsaturRunner;
