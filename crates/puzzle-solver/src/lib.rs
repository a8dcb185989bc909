//! Generic solver for combinatorial puzzles.
//!
//! Any type implementing [`Puzzle`] can be searched with
//! [`depth_first_solve`] or [`breadth_first_solve`]. Three variants ship
//! with the crate: sliding tiles, peg solitaire and word ladders.

pub mod config;
pub mod node;
pub mod peg_solitaire;
pub mod pruning;
pub mod puzzle;
pub mod report;
pub mod sliding_tile;
pub mod solver;
pub mod word_ladder;

// Re-export main types
pub use config::{load_puzzle, ConfigError, LoadedPuzzle, PuzzleDefinition};
pub use node::{NodeId, PuzzleNode, SearchTree};
pub use peg_solitaire::{Cell, PegSolitaire};
pub use puzzle::{Puzzle, PuzzleError};
pub use report::SolveReport;
pub use sliding_tile::SlidingTile;
pub use solver::{
    breadth_first_solve, depth_first_solve, solve, Frontier, SearchStats, SolveOutcome, Strategy,
};
pub use word_ladder::{Vocabulary, WordLadder};
