//! Coloring result and error types.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use thiserror::Error;

/// Why a solve call failed.
///
/// Configuration errors (`EmptyPalette`, `DuplicatePaletteColor`) are
/// detected before any search runs and are distinct from "no solution"
/// outcomes, so callers can tell a misuse apart from a genuinely
/// uncolorable input. Both `NoSolution` and `PaletteExhausted` are
/// "insufficient palette" conditions from the caller's point of view;
/// retrying with a larger palette is a reasonable external recovery for
/// either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveError<N: fmt::Debug> {
    /// The palette contains no colors.
    #[error("palette is empty")]
    EmptyPalette,

    /// The palette contains the same color twice (at the given index).
    #[error("palette contains a duplicate color at index {0}")]
    DuplicatePaletteColor(usize),

    /// The exact solver exhausted every branch without finding a complete
    /// coloring: none exists under the given palette.
    #[error("no complete coloring exists under the given palette")]
    NoSolution,

    /// The heuristic solver found a node whose colored neighbors already
    /// use every palette color. Hard stop; no partial coloring is returned.
    #[error("palette exhausted: no color available for node {0:?}")]
    PaletteExhausted(N),

    /// The search was cancelled through its cancellation token.
    #[error("solve cancelled")]
    Cancelled,
}

/// A complete node-to-color mapping produced by a solver.
///
/// Every node of the input graph appears exactly once. Solvers only ever
/// return complete colorings; partial assignments stay internal to the
/// search and are discarded on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coloring<N: Eq + Hash, C> {
    assignments: HashMap<N, C>,
}

impl<N: Eq + Hash, C> Coloring<N, C> {
    pub(crate) fn from_assignments(assignments: HashMap<N, C>) -> Self {
        Self { assignments }
    }

    /// Returns the color assigned to `node`, if any.
    pub fn color_of(&self, node: &N) -> Option<&C> {
        self.assignments.get(node)
    }

    /// Iterates over all (node, color) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &C)> {
        self.assignments.iter()
    }

    /// Returns the number of colored nodes.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the coloring is empty (only possible for an empty graph).
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Consumes the coloring and returns the underlying map.
    pub fn into_map(self) -> HashMap<N, C> {
        self.assignments
    }
}

/// Checks a palette for configuration errors.
///
/// Returns `EmptyPalette` for an empty slice and `DuplicatePaletteColor`
/// (with the index of the second occurrence) when the same color appears
/// twice. Both solvers call this before searching.
pub fn check_palette<N, C>(palette: &[C]) -> Result<(), SolveError<N>>
where
    N: fmt::Debug,
    C: Eq + Hash,
{
    if palette.is_empty() {
        return Err(SolveError::EmptyPalette);
    }
    let mut seen = HashSet::with_capacity(palette.len());
    for (i, color) in palette.iter().enumerate() {
        if !seen.insert(color) {
            return Err(SolveError::DuplicatePaletteColor(i));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_palette_accepts_distinct() {
        assert!(check_palette::<&str, _>(&["red", "green", "blue"]).is_ok());
    }

    #[test]
    fn test_check_palette_rejects_empty() {
        let err = check_palette::<&str, &str>(&[]).unwrap_err();
        assert_eq!(err, SolveError::EmptyPalette);
    }

    #[test]
    fn test_check_palette_rejects_duplicate() {
        let err = check_palette::<&str, _>(&["red", "green", "red"]).unwrap_err();
        assert_eq!(err, SolveError::DuplicatePaletteColor(2));
    }

    #[test]
    fn test_coloring_accessors() {
        let mut map = HashMap::new();
        map.insert("A", "red");
        map.insert("B", "green");
        let coloring = Coloring::from_assignments(map);

        assert_eq!(coloring.len(), 2);
        assert!(!coloring.is_empty());
        assert_eq!(coloring.color_of(&"A"), Some(&"red"));
        assert_eq!(coloring.color_of(&"Z"), None);
        assert_eq!(coloring.iter().count(), 2);
        assert_eq!(coloring.into_map().get("B"), Some(&"green"));
    }

    #[test]
    fn test_error_display() {
        let err: SolveError<&str> = SolveError::PaletteExhausted("Nevada");
        assert_eq!(
            err.to_string(),
            "palette exhausted: no color available for node \"Nevada\""
        );
        let err: SolveError<&str> = SolveError::NoSolution;
        assert!(err.to_string().contains("no complete coloring"));
    }
}
