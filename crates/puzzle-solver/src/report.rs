//! Summary of a search run in the shape the CLI prints.

use serde::{Deserialize, Serialize};

use crate::puzzle::Puzzle;
use crate::solver::{SearchStats, SolveOutcome, Strategy};

/// Output of one solve, serialisable as camelCase JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    /// Puzzle kind, e.g. `sliding_tile`
    pub puzzle: String,
    pub strategy: Strategy,
    pub solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<usize>,
    /// Rendered states from the initial configuration to the solved one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    pub stats: SearchStats,
    pub time_elapsed_ms: u64,
    /// Move-by-move trace of the solution chain
    #[serde(skip)]
    pub trace: Option<String>,
}

impl SolveReport {
    pub fn new<P: Puzzle>(kind: &str, outcome: &SolveOutcome<P>) -> Self {
        let solution = outcome.solution.as_ref();
        SolveReport {
            puzzle: kind.to_string(),
            strategy: outcome.strategy,
            solved: solution.is_some(),
            moves: solution.map(|path| path.moves()),
            path: solution
                .map(|path| path.states().map(|s| s.to_string()).collect())
                .unwrap_or_default(),
            stats: outcome.stats,
            time_elapsed_ms: outcome.time_elapsed_ms,
            trace: solution.map(|path| path.to_string()),
        }
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        match self.moves {
            Some(moves) => format!(
                "{} solved {} in {} moves ({} states expanded, {} ms)",
                self.strategy, self.puzzle, moves, self.stats.expanded, self.time_elapsed_ms
            ),
            None => format!(
                "{} found no solution for {} ({} states expanded, {} ms)",
                self.strategy, self.puzzle, self.stats.expanded, self.time_elapsed_ms
            ),
        }
    }
}
