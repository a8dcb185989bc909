//! Depth-first and breadth-first search over puzzle states.
//!
//! Both engines share one driver and differ only in the frontier
//! discipline: a stack for depth-first, a queue for breadth-first. States
//! are marked visited as soon as they are discovered, so every reachable
//! configuration enters the frontier at most once and the search
//! terminates on any finite state graph, cycles included.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::time::Instant;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::node::{NodeId, PuzzleNode, SearchTree};
use crate::puzzle::Puzzle;

/// Traversal order of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Explore the most recently discovered state first
    DepthFirst,
    /// Explore states level by level; finds a path with the fewest moves
    BreadthFirst,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => f.write_str("depth-first"),
            Strategy::BreadthFirst => f.write_str("breadth-first"),
        }
    }
}

/// Discovered-but-unexpanded nodes.
pub trait Frontier: Default {
    fn push(&mut self, id: NodeId);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LIFO: the last node pushed is expanded next.
impl Frontier for Vec<NodeId> {
    fn push(&mut self, id: NodeId) {
        Vec::push(self, id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        Vec::pop(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// FIFO: nodes are expanded in discovery order.
impl Frontier for VecDeque<NodeId> {
    fn push(&mut self, id: NodeId) {
        self.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// States added to the search tree, the initial state included
    pub discovered: usize,
    /// States whose extensions were generated
    pub expanded: usize,
    /// States skipped by the fail-fast check
    pub pruned: usize,
    /// Extensions dropped because they had been seen before
    pub duplicates: usize,
    /// Largest frontier size observed
    pub max_frontier: usize,
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct SolveOutcome<P> {
    pub strategy: Strategy,
    /// Path from the initial state to a solved state, if one was found
    pub solution: Option<PuzzleNode<P>>,
    pub stats: SearchStats,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

impl<P> SolveOutcome<P> {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Search for a path from `puzzle` to a solved state using depth-first order.
///
/// Returns `None` when the reachable state graph holds no solved state. The
/// path found is not necessarily the shortest.
pub fn depth_first_solve<P: Puzzle>(puzzle: P) -> Option<PuzzleNode<P>> {
    solve(puzzle, Strategy::DepthFirst).solution
}

/// Search for a path from `puzzle` to a solved state using breadth-first order.
///
/// Returns `None` when the reachable state graph holds no solved state.
/// Otherwise the path uses the fewest moves possible.
pub fn breadth_first_solve<P: Puzzle>(puzzle: P) -> Option<PuzzleNode<P>> {
    solve(puzzle, Strategy::BreadthFirst).solution
}

/// Run a search with the given strategy and report its statistics.
pub fn solve<P: Puzzle>(puzzle: P, strategy: Strategy) -> SolveOutcome<P> {
    match strategy {
        Strategy::DepthFirst => search::<P, Vec<NodeId>>(puzzle, strategy),
        Strategy::BreadthFirst => search::<P, VecDeque<NodeId>>(puzzle, strategy),
    }
}

fn search<P: Puzzle, F: Frontier>(puzzle: P, strategy: Strategy) -> SolveOutcome<P> {
    let start_time = Instant::now();
    let mut stats = SearchStats {
        discovered: 1,
        ..SearchStats::default()
    };
    debug!("starting {strategy} search from\n{puzzle}");

    let finish = |solution: Option<PuzzleNode<P>>, stats: SearchStats| {
        let time_elapsed_ms = start_time.elapsed().as_millis() as u64;
        match &solution {
            Some(path) => debug!(
                "{strategy} search solved in {} moves ({} expanded, {} ms)",
                path.moves(),
                stats.expanded,
                time_elapsed_ms
            ),
            None => debug!(
                "{strategy} search exhausted without a solution ({} expanded, {} ms)",
                stats.expanded, time_elapsed_ms
            ),
        }
        SolveOutcome {
            strategy,
            solution,
            stats,
            time_elapsed_ms,
        }
    };

    if puzzle.is_solved() {
        return finish(Some(PuzzleNode::new(puzzle)), stats);
    }
    if puzzle.fail_fast() {
        stats.pruned += 1;
        return finish(None, stats);
    }

    let mut visited: HashSet<P> = HashSet::new();
    visited.insert(puzzle.clone());
    let mut tree = SearchTree::new(puzzle);
    let root = tree.root();
    let mut frontier = F::default();
    frontier.push(root);
    stats.max_frontier = 1;

    while let Some(id) = frontier.pop() {
        let state = tree.state(id);
        if state.is_solved() {
            return finish(Some(tree.reconstruct_path(id)), stats);
        }
        let extensions = state.extensions();
        // The root already passed this check before the loop.
        if id != root && state.fail_fast_with(&extensions) {
            stats.pruned += 1;
            continue;
        }
        stats.expanded += 1;
        let mut added = 0;
        for next in extensions {
            if visited.contains(&next) {
                stats.duplicates += 1;
                continue;
            }
            visited.insert(next.clone());
            let child = tree.insert(next, id);
            frontier.push(child);
            added += 1;
        }
        stats.discovered += added;
        stats.max_frontier = stats.max_frontier.max(frontier.len());
        trace!(
            "expanded node {} at depth {}: {} new, frontier {}",
            id.index(),
            tree.depth(id),
            added,
            frontier.len()
        );
    }

    finish(None, stats)
}
