//! The capability set every puzzle variant exposes to the search engines.
//!
//! The engines never look inside a concrete puzzle. They only ask a state
//! whether it is solved, which states are one move away, and whether it
//! can already be written off as a dead end.

use std::fmt::Display;
use std::hash::Hash;

use thiserror::Error;

/// One configuration of a puzzle.
///
/// Equality must be configuration equality: two states compare equal iff
/// every part of their configuration matches. `Hash` has to agree with
/// `Eq` because the engines keep visited states in a hash set.
pub trait Puzzle: Clone + Eq + Hash + Display {
    /// True iff this configuration satisfies the variant's terminal condition.
    fn is_solved(&self) -> bool;

    /// Every configuration reachable by exactly one legal move.
    ///
    /// Never contains `self`, never mutates `self`, and yields the same
    /// states in the same order for the same input.
    fn extensions(&self) -> Vec<Self>;

    /// Cheap local check that this configuration cannot lead anywhere.
    ///
    /// Only a pruning shortcut. Returning `false` everywhere must leave the
    /// engines correct, just slower.
    fn fail_fast(&self) -> bool {
        false
    }

    /// [`fail_fast`](Puzzle::fail_fast) for a state whose extensions are
    /// already known.
    ///
    /// `extensions` is exactly `self.extensions()`. The engines call this
    /// on every expanded state, so variants whose check looks at their own
    /// moves should override it instead of generating them twice.
    fn fail_fast_with(&self, extensions: &[Self]) -> bool {
        let _ = extensions;
        self.fail_fast()
    }
}

/// Structural problems detected while building a puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("target grid is {found_rows}x{found_cols}, expected {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    #[error("invalid marker {marker:?} at row {row}, column {col}")]
    InvalidMarker { marker: char, row: usize, col: usize },

    #[error("{grid} grid has {found} blanks, expected exactly one")]
    BlankCount { grid: &'static str, found: usize },

    #[error("start and target grids do not hold the same tiles")]
    TileMismatch,

    #[error("invalid word {0:?}: words must be non-empty lowercase ASCII")]
    InvalidWord(String),

    #[error("start word {0:?} is not in the vocabulary")]
    WordNotInVocabulary(String),
}

/// Checks that `rows` is non-empty and rectangular, returning its width.
pub(crate) fn rectangular_width<T>(rows: &[Vec<T>]) -> Result<usize, PuzzleError> {
    let first = rows.first().ok_or(PuzzleError::EmptyGrid)?;
    let expected = first.len();
    if expected == 0 {
        return Err(PuzzleError::RaggedRow {
            row: 0,
            expected: 1,
            found: 0,
        });
    }
    for (row, cells) in rows.iter().enumerate().skip(1) {
        if cells.len() != expected {
            return Err(PuzzleError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
    }
    Ok(expected)
}
