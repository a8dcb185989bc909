//! Local dead-end detection shared by puzzle variants.
//!
//! These checks look at most two moves ahead and let the engines skip a
//! state without expanding it. They never replace the goal test.

use crate::puzzle::Puzzle;

/// Check if `puzzle` is a local dead end.
///
/// A state is a dead end when it has no moves at all, or when its only
/// move leads to a state whose only move comes straight back.
pub fn is_local_dead_end<P: Puzzle>(puzzle: &P) -> bool {
    is_dead_end_among(puzzle, &puzzle.extensions())
}

/// [`is_local_dead_end`] with `puzzle`'s extensions already generated.
pub fn is_dead_end_among<P: Puzzle>(puzzle: &P, extensions: &[P]) -> bool {
    match extensions {
        [] => true,
        [only] => is_back_and_forth(puzzle, only),
        _ => false,
    }
}

/// Check if the sole move out of `next` returns to `origin`.
fn is_back_and_forth<P: Puzzle>(origin: &P, next: &P) -> bool {
    matches!(next.extensions().as_slice(), [back] if back == origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    /// A state on a small hand-built graph, identified by its vertex.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Vertex {
        id: usize,
        edges: &'static [&'static [usize]],
    }

    impl fmt::Display for Vertex {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "v{}", self.id)
        }
    }

    impl Puzzle for Vertex {
        fn is_solved(&self) -> bool {
            false
        }

        fn extensions(&self) -> Vec<Self> {
            self.edges[self.id]
                .iter()
                .map(|&id| Vertex {
                    id,
                    edges: self.edges,
                })
                .collect()
        }
    }

    fn vertex(id: usize, edges: &'static [&'static [usize]]) -> Vertex {
        Vertex { id, edges }
    }

    #[test]
    fn test_no_moves_is_dead_end() {
        static EDGES: &[&[usize]] = &[&[]];
        assert!(is_local_dead_end(&vertex(0, EDGES)));
    }

    #[test]
    fn test_two_cycle_is_dead_end() {
        static EDGES: &[&[usize]] = &[&[1], &[0]];
        assert!(is_local_dead_end(&vertex(0, EDGES)));
        assert!(is_local_dead_end(&vertex(1, EDGES)));
    }

    #[test]
    fn test_single_move_with_progress_is_not_dead_end() {
        // 0 -> 1, 1 -> {0, 2}
        static EDGES: &[&[usize]] = &[&[1], &[0, 2], &[]];
        assert!(!is_local_dead_end(&vertex(0, EDGES)));

        // 0 -> 1 -> 2
        static CHAIN: &[&[usize]] = &[&[1], &[2], &[]];
        assert!(!is_local_dead_end(&vertex(0, CHAIN)));
    }

    #[test]
    fn test_branching_is_not_dead_end() {
        static EDGES: &[&[usize]] = &[&[1, 2], &[0], &[0]];
        assert!(!is_local_dead_end(&vertex(0, EDGES)));
    }

    #[test]
    fn test_dead_end_among_given_extensions() {
        static EDGES: &[&[usize]] = &[&[1], &[0], &[]];
        let origin = vertex(0, EDGES);
        assert!(is_dead_end_among(&origin, &origin.extensions()));
        assert!(is_dead_end_among(&origin, &[]));
        // Only what is passed in counts, not the graph's own edges.
        assert!(!is_dead_end_among(&origin, &[vertex(2, EDGES)]));
        assert!(!is_dead_end_among(&origin, &[vertex(1, EDGES), vertex(2, EDGES)]));
    }
}
