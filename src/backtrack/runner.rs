//! Backtracking search execution.
//!
//! # Algorithm
//!
//! 1. Take the first unassigned node in graph enumeration order (no
//!    variable-ordering heuristic).
//! 2. Try palette colors in palette order; a candidate is valid iff no
//!    already-assigned neighbor holds it.
//! 3. On a valid candidate, assign and recurse; the first complete
//!    assignment found is returned as-is.
//! 4. When every candidate fails, unassign the node and report failure to
//!    the ancestor call, which moves on to its next color.
//!
//! Worst case is `|palette|^|nodes|`. There is deliberately no propagation
//! or pruning beyond the direct-neighbor conflict check; this solver trades
//! speed for completeness and readability and is meant for small graphs.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::coloring::{check_palette, Coloring, SolveError};
use crate::graph::ColorGraph;

/// Outcome of one search branch.
enum Search {
    Found,
    Exhausted,
    Cancelled,
}

/// Executes exact backtracking search.
pub struct BacktrackRunner;

impl BacktrackRunner {
    /// Solves `graph` over `palette`, returning the first complete coloring
    /// found or [`SolveError::NoSolution`] if none exists.
    ///
    /// The result is deterministic: identical graph, enumeration order, and
    /// palette always produce the identical coloring. Optimality in color
    /// count is not attempted; it depends solely on the palette supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_chroma::backtrack::BacktrackRunner;
    /// use u_chroma::coloring::SolveError;
    /// use u_chroma::graph::ColorGraph;
    ///
    /// let mut graph = ColorGraph::new();
    /// graph.add_edge("A", "B");
    /// graph.add_edge("B", "C");
    /// graph.add_edge("A", "C");
    ///
    /// assert!(BacktrackRunner::run(&graph, &[1, 2, 3]).is_ok());
    /// assert_eq!(
    ///     BacktrackRunner::run(&graph, &[1, 2]),
    ///     Err(SolveError::NoSolution),
    /// );
    /// ```
    pub fn run<N, C>(graph: &ColorGraph<N>, palette: &[C]) -> Result<Coloring<N, C>, SolveError<N>>
    where
        N: Clone + Eq + Hash + fmt::Debug,
        C: Clone + Eq + Hash,
    {
        Self::run_with_cancel(graph, palette, None)
    }

    /// Solves with an optional cancellation token.
    ///
    /// The exponential worst case means a search on an unfortunate input can
    /// run arbitrarily long; callers that need a deadline set the flag from
    /// another thread and receive [`SolveError::Cancelled`]. The token is
    /// checked once per search step.
    pub fn run_with_cancel<N, C>(
        graph: &ColorGraph<N>,
        palette: &[C],
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Coloring<N, C>, SolveError<N>>
    where
        N: Clone + Eq + Hash + fmt::Debug,
        C: Clone + Eq + Hash,
    {
        check_palette(palette)?;

        let node_count = graph.node_count();
        debug!(
            "backtrack: {} nodes, {} edges, {} colors",
            node_count,
            graph.edge_count(),
            palette.len()
        );

        // Fresh assignment per call; nothing is shared across invocations.
        let mut assignment: Vec<Option<usize>> = vec![None; node_count];
        let adjacency = graph.adjacency_indices();

        match search(adjacency, palette.len(), &mut assignment, 0, cancel.as_deref()) {
            Search::Found => {
                debug!("backtrack: solved");
                Ok(build_coloring(graph, palette, &assignment))
            }
            Search::Exhausted => {
                debug!("backtrack: no solution");
                Err(SolveError::NoSolution)
            }
            Search::Cancelled => Err(SolveError::Cancelled),
        }
    }

    /// Solves by exploring the root node's candidate colors in parallel.
    ///
    /// Each rayon task runs an independent sequential search with its own
    /// assignment; the first branch to complete a coloring wins and the
    /// remaining branches are abandoned. Every returned coloring is valid,
    /// but *which* one is returned depends on scheduling, so this mode
    /// trades the sequential solver's reproducibility for speed.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<N, C>(
        graph: &ColorGraph<N>,
        palette: &[C],
    ) -> Result<Coloring<N, C>, SolveError<N>>
    where
        N: Clone + Eq + Hash + fmt::Debug + Sync,
        C: Clone + Eq + Hash + Sync,
    {
        check_palette(palette)?;

        let node_count = graph.node_count();
        if node_count == 0 {
            return Ok(Coloring::from_assignments(HashMap::new()));
        }

        let adjacency = graph.adjacency_indices();
        let found = (0..palette.len()).into_par_iter().find_map_any(|color| {
            let mut assignment: Vec<Option<usize>> = vec![None; node_count];
            assignment[0] = Some(color);
            match search(adjacency, palette.len(), &mut assignment, 1, None) {
                Search::Found => Some(assignment),
                _ => None,
            }
        });

        match found {
            Some(assignment) => Ok(build_coloring(graph, palette, &assignment)),
            None => Err(SolveError::NoSolution),
        }
    }
}

/// Recursive search over node indices `position..`.
///
/// Nodes are assigned strictly in enumeration order, so `position` is both
/// the recursion depth and the index of the first unassigned node. On
/// failure the tentative assignment at `position` is removed before
/// returning, restoring the exact prior state.
fn search(
    adjacency: &[Vec<usize>],
    palette_len: usize,
    assignment: &mut [Option<usize>],
    position: usize,
    cancel: Option<&AtomicBool>,
) -> Search {
    if let Some(flag) = cancel {
        if flag.load(Ordering::Relaxed) {
            return Search::Cancelled;
        }
    }

    if position == assignment.len() {
        return Search::Found;
    }

    for color in 0..palette_len {
        let conflict = adjacency[position]
            .iter()
            .any(|&neighbor| assignment[neighbor] == Some(color));
        if conflict {
            continue;
        }

        trace!("backtrack: node {position} <- color {color}");
        assignment[position] = Some(color);
        match search(adjacency, palette_len, assignment, position + 1, cancel) {
            Search::Exhausted => {
                trace!("backtrack: node {position} unassigned");
                assignment[position] = None;
            }
            done => return done,
        }
    }

    Search::Exhausted
}

fn build_coloring<N, C>(
    graph: &ColorGraph<N>,
    palette: &[C],
    assignment: &[Option<usize>],
) -> Coloring<N, C>
where
    N: Clone + Eq + Hash + fmt::Debug,
    C: Clone + Eq + Hash,
{
    let map: HashMap<N, C> = graph
        .nodes()
        .iter()
        .zip(assignment)
        .map(|(node, color)| {
            let color = color.expect("complete assignment");
            (node.clone(), palette[color].clone())
        })
        .collect();
    Coloring::from_assignments(map)
}
