//! DSATUR execution loop.
//!
//! # Algorithm
//!
//! 1. Select the uncolored node maximizing (saturation, degree)
//!    lexicographically; any remaining tie goes to the node earliest in
//!    graph enumeration order.
//! 2. Assign it the first palette color not used by a colored neighbor.
//! 3. If every palette color is taken, stop the whole run with
//!    [`SolveError::PaletteExhausted`] — the algorithm never revisits
//!    earlier choices.
//! 4. Raise the saturation of the node's uncolored neighbors and repeat
//!    until every node is colored.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use log::{debug, trace};

use super::config::{DsaturConfig, SaturationPolicy};
use crate::coloring::{check_palette, Coloring, SolveError};
use crate::graph::ColorGraph;

/// Per-node saturation bookkeeping.
///
/// `counts` drives selection. Under [`SaturationPolicy::DistinctColors`]
/// the `seen` sets deduplicate colors per node before counting; under
/// [`SaturationPolicy::ColoredNeighbors`] every event counts.
struct Saturation {
    policy: SaturationPolicy,
    counts: Vec<usize>,
    seen: Vec<HashSet<usize>>,
}

impl Saturation {
    fn new(policy: SaturationPolicy, node_count: usize) -> Self {
        Self {
            policy,
            counts: vec![0; node_count],
            seen: vec![HashSet::new(); node_count],
        }
    }

    fn bump(&mut self, node: usize, color: usize) {
        match self.policy {
            SaturationPolicy::DistinctColors => {
                if self.seen[node].insert(color) {
                    self.counts[node] += 1;
                }
            }
            SaturationPolicy::ColoredNeighbors => self.counts[node] += 1,
        }
    }

    fn of(&self, node: usize) -> usize {
        self.counts[node]
    }
}

/// Executes the DSATUR greedy coloring.
pub struct DsaturRunner;

impl DsaturRunner {
    /// Solves `graph` over `palette` with the default configuration
    /// (classic distinct-color saturation).
    ///
    /// On success every node is colored and no adjacent pair shares a
    /// color. On [`SolveError::PaletteExhausted`] no partial coloring is
    /// returned; the error carries the node that could not be colored so
    /// callers can diagnose or retry with a larger palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_chroma::dsatur::DsaturRunner;
    /// use u_chroma::graph::ColorGraph;
    ///
    /// let mut graph = ColorGraph::new();
    /// graph.add_edge("center", "leaf-1");
    /// graph.add_edge("center", "leaf-2");
    ///
    /// let coloring = DsaturRunner::run(&graph, &["red", "green"]).unwrap();
    /// assert_eq!(coloring.color_of(&"center"), Some(&"red"));
    /// assert_eq!(coloring.color_of(&"leaf-1"), Some(&"green"));
    /// ```
    pub fn run<N, C>(graph: &ColorGraph<N>, palette: &[C]) -> Result<Coloring<N, C>, SolveError<N>>
    where
        N: Clone + Eq + Hash + fmt::Debug,
        C: Clone + Eq + Hash,
    {
        Self::run_with_config(graph, palette, &DsaturConfig::default())
    }

    /// Solves with an explicit configuration.
    pub fn run_with_config<N, C>(
        graph: &ColorGraph<N>,
        palette: &[C],
        config: &DsaturConfig,
    ) -> Result<Coloring<N, C>, SolveError<N>>
    where
        N: Clone + Eq + Hash + fmt::Debug,
        C: Clone + Eq + Hash,
    {
        check_palette(palette)?;

        let node_count = graph.node_count();
        let adjacency = graph.adjacency_indices();
        debug!(
            "dsatur: {} nodes, {} edges, {} colors, policy {:?}",
            node_count,
            graph.edge_count(),
            palette.len(),
            config.saturation_policy
        );

        // Static degrees, computed once for the whole run.
        let degrees: Vec<usize> = adjacency.iter().map(Vec::len).collect();
        let mut saturation = Saturation::new(config.saturation_policy, node_count);
        let mut colors: Vec<Option<usize>> = vec![None; node_count];

        for _ in 0..node_count {
            let node = select_next(&colors, &saturation, &degrees);

            let used: HashSet<usize> = adjacency[node]
                .iter()
                .filter_map(|&neighbor| colors[neighbor])
                .collect();
            let Some(color) = (0..palette.len()).find(|c| !used.contains(c)) else {
                debug!("dsatur: stuck at node {node}");
                return Err(SolveError::PaletteExhausted(graph.nodes()[node].clone()));
            };

            trace!(
                "dsatur: node {node} <- color {color} (saturation {}, degree {})",
                saturation.of(node),
                degrees[node]
            );
            colors[node] = Some(color);
            for &neighbor in &adjacency[node] {
                if colors[neighbor].is_none() {
                    saturation.bump(neighbor, color);
                }
            }
        }

        debug!("dsatur: solved");
        let map: HashMap<N, C> = graph
            .nodes()
            .iter()
            .zip(&colors)
            .map(|(node, color)| {
                let color = color.expect("all nodes colored");
                (node.clone(), palette[color].clone())
            })
            .collect();
        Ok(Coloring::from_assignments(map))
    }
}

/// Argmax of (saturation, degree) over uncolored nodes; strict comparison
/// keeps the earliest node on ties, which is the graph enumeration order.
fn select_next(colors: &[Option<usize>], saturation: &Saturation, degrees: &[usize]) -> usize {
    let mut best = usize::MAX;
    let mut best_key = (0, 0);
    for node in 0..colors.len() {
        if colors[node].is_some() {
            continue;
        }
        let key = (saturation.of(node), degrees[node]);
        if best == usize::MAX || key > best_key {
            best = node;
            best_key = key;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtrack::BacktrackRunner;
    use crate::coloring::validate;

    fn region_graph() -> ColorGraph<&'static str> {
        let mut graph = ColorGraph::new();
        for node in ["A", "B", "C", "D", "E"] {
            graph.add_node(node);
        }
        for (u, v) in [
            ("A", "B"),
            ("A", "C"),
            ("B", "C"),
            ("B", "D"),
            ("C", "D"),
            ("D", "E"),
        ] {
            graph.add_edge(u, v);
        }
        graph
    }

    #[test]
    fn test_region_graph_four_colors() {
        let graph = region_graph();
        let coloring = DsaturRunner::run(&graph, &["red", "green", "blue", "yellow"]).unwrap();
        assert!(validate(&graph, &coloring));
        assert_eq!(coloring.len(), 5);
    }

    #[test]
    fn test_star_graph_colors_center_first() {
        let mut graph = ColorGraph::new();
        for leaf in 0..10u32 {
            graph.add_edge(100, leaf);
        }

        let coloring = DsaturRunner::run(&graph, &["red", "green"]).unwrap();
        assert!(validate(&graph, &coloring));
        // Highest degree wins the first selection, so the center takes the
        // first color and every leaf the second.
        assert_eq!(coloring.color_of(&100), Some(&"red"));
        for leaf in 0..10 {
            assert_eq!(coloring.color_of(&leaf), Some(&"green"));
        }
    }

    #[test]
    fn test_isolated_node_gets_first_color() {
        let mut graph = ColorGraph::new();
        graph.add_node("only");
        let coloring = DsaturRunner::run(&graph, &["red", "green"]).unwrap();
        assert_eq!(coloring.color_of(&"only"), Some(&"red"));
    }

    #[test]
    fn test_empty_graph() {
        let graph: ColorGraph<&str> = ColorGraph::new();
        let coloring = DsaturRunner::run(&graph, &["red"]).unwrap();
        assert!(coloring.is_empty());
    }

    #[test]
    fn test_empty_palette_is_config_error() {
        let graph = region_graph();
        let palette: [&str; 0] = [];
        assert_eq!(
            DsaturRunner::run(&graph, &palette),
            Err(SolveError::EmptyPalette)
        );
    }

    #[test]
    fn test_exhaustion_reports_offending_node() {
        // Triangle with two colors: first-fit colors A and B, then C sees
        // both palette colors among its neighbors.
        let mut graph = ColorGraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("A", "C");

        assert_eq!(
            DsaturRunner::run(&graph, &["red", "green"]),
            Err(SolveError::PaletteExhausted("C"))
        );
    }

    /// A 3-colorable graph on which DSATUR gets stuck with three colors
    /// while backtracking succeeds.
    ///
    /// Core: triangle w-p-q, u adjacent to w, v adjacent to p and q, anchor
    /// a adjacent to u and v. Leaf nodes inflate the degrees of a, u, and v
    /// so that the selection order becomes a, u, v, w, p, q. First-fit then
    /// paints u and v with the same color, which spends all three colors
    /// around the triangle: w, p, q collectively see u, v, and each other,
    /// and the last of them has no color left. A proper 3-coloring exists
    /// (give u and v different colors).
    fn greedy_trap_graph() -> ColorGraph<&'static str> {
        let mut graph = ColorGraph::new();
        for node in ["a", "u", "v", "w", "p", "q"] {
            graph.add_node(node);
        }
        for (x, y) in [
            ("a", "u"),
            ("a", "v"),
            ("u", "w"),
            ("v", "p"),
            ("v", "q"),
            ("w", "p"),
            ("w", "q"),
            ("p", "q"),
        ] {
            graph.add_edge(x, y);
        }
        for leaf in ["a1", "a2", "a3", "a4"] {
            graph.add_edge("a", leaf);
        }
        for leaf in ["u1", "u2", "u3"] {
            graph.add_edge("u", leaf);
        }
        for leaf in ["v1", "v2"] {
            graph.add_edge("v", leaf);
        }
        graph
    }

    #[test]
    fn test_greedy_incompleteness_counterexample() {
        let graph = greedy_trap_graph();
        let palette = ["red", "green", "blue"];

        let exact = BacktrackRunner::run(&graph, &palette).unwrap();
        assert!(validate(&graph, &exact));

        assert_eq!(
            DsaturRunner::run(&graph, &palette),
            Err(SolveError::PaletteExhausted("q"))
        );
    }

    #[test]
    fn test_both_policies_produce_valid_colorings() {
        let graph = region_graph();
        let palette = ["red", "green", "blue", "yellow"];
        for policy in [
            SaturationPolicy::DistinctColors,
            SaturationPolicy::ColoredNeighbors,
        ] {
            let config = DsaturConfig::default().with_saturation_policy(policy);
            let coloring = DsaturRunner::run_with_config(&graph, &palette, &config).unwrap();
            assert!(validate(&graph, &coloring), "policy {policy:?}");
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let graph = greedy_trap_graph();
        let palette = ["red", "green", "blue", "yellow"];
        let first = DsaturRunner::run(&graph, &palette).unwrap();
        let second = DsaturRunner::run(&graph, &palette).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trap_graph_recovers_with_fourth_color() {
        let graph = greedy_trap_graph();
        let coloring = DsaturRunner::run(&graph, &["red", "green", "blue", "yellow"]).unwrap();
        assert!(validate(&graph, &coloring));
    }
}
