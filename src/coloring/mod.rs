//! Shared coloring result types and validation.
//!
//! Both solvers produce a [`Coloring`] on success or a [`SolveError`] on
//! failure. [`validate`] checks a coloring against a graph independently of
//! how it was produced, for callers that want to verify a solver's output
//! before trusting it.

mod types;
mod validate;

pub use types::{check_palette, Coloring, SolveError};
pub use validate::validate;
