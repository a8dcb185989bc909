//! JSON puzzle definitions read by the CLI.
//!
//! A definition names the puzzle kind and carries its initial
//! configuration:
//!
//! ```json
//! {"kind": "sliding_tile", "from": [["*", "2", "3"], ["1", "4", "5"]], "to": [["1", "2", "3"], ["4", "5", "*"]]}
//! {"kind": "peg_solitaire", "grid": ["***", "***", "**."]}
//! {"kind": "word_ladder", "from": "same", "to": "cost", "wordsFile": "words.txt"}
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::peg_solitaire::PegSolitaire;
use crate::puzzle::PuzzleError;
use crate::report::SolveReport;
use crate::sliding_tile::SlidingTile;
use crate::solver::{solve, Strategy};
use crate::word_ladder::{Vocabulary, WordLadder};

/// Errors raised while loading a puzzle definition
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid puzzle definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid puzzle: {0}")]
    Puzzle(#[from] PuzzleError),
}

/// A puzzle as described in a definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleDefinition {
    SlidingTile {
        from: Vec<Vec<String>>,
        to: Vec<Vec<String>>,
    },
    PegSolitaire {
        /// One string per row
        grid: Vec<String>,
    },
    WordLadder {
        from: String,
        to: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        words: Vec<String>,
        /// Word list file, relative to the definition file
        #[serde(
            default,
            rename = "wordsFile",
            skip_serializing_if = "Option::is_none"
        )]
        words_file: Option<PathBuf>,
    },
}

impl PuzzleDefinition {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Short name of the puzzle kind
    pub fn kind(&self) -> &'static str {
        match self {
            PuzzleDefinition::SlidingTile { .. } => "sliding_tile",
            PuzzleDefinition::PegSolitaire { .. } => "peg_solitaire",
            PuzzleDefinition::WordLadder { .. } => "word_ladder",
        }
    }

    /// Validate the definition and build the initial puzzle state.
    ///
    /// `base_dir` anchors relative `wordsFile` paths; `None` means the
    /// current directory.
    pub fn build(self, base_dir: Option<&Path>) -> Result<LoadedPuzzle, ConfigError> {
        let puzzle = match self {
            PuzzleDefinition::SlidingTile { from, to } => {
                LoadedPuzzle::SlidingTile(SlidingTile::new(from, to)?)
            }
            PuzzleDefinition::PegSolitaire { grid } => {
                let rows = grid.iter().map(|row| row.chars().collect()).collect();
                LoadedPuzzle::PegSolitaire(PegSolitaire::new(rows)?)
            }
            PuzzleDefinition::WordLadder {
                from,
                to,
                mut words,
                words_file,
            } => {
                if let Some(file) = words_file {
                    let path = match base_dir {
                        Some(dir) => dir.join(file),
                        None => file,
                    };
                    words.extend(read_word_list(&path)?);
                }
                let vocabulary = Vocabulary::from_words(words);
                debug!("loaded vocabulary of {} words", vocabulary.len());
                LoadedPuzzle::WordLadder(WordLadder::new(from, to, vocabulary)?)
            }
        };
        Ok(puzzle)
    }
}

/// Read a puzzle definition file and build its puzzle.
pub fn load_puzzle(path: &Path) -> Result<LoadedPuzzle, ConfigError> {
    let json = read_file(path)?;
    PuzzleDefinition::from_json(&json)?.build(path.parent())
}

/// Read a whitespace-separated word list.
pub fn read_word_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    let text = read_file(path)?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// A validated initial state of any supported puzzle kind
#[derive(Debug, Clone)]
pub enum LoadedPuzzle {
    SlidingTile(SlidingTile),
    PegSolitaire(PegSolitaire),
    WordLadder(WordLadder),
}

impl LoadedPuzzle {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadedPuzzle::SlidingTile(_) => "sliding_tile",
            LoadedPuzzle::PegSolitaire(_) => "peg_solitaire",
            LoadedPuzzle::WordLadder(_) => "word_ladder",
        }
    }

    /// Search for a solution and summarise the run.
    pub fn solve(self, strategy: Strategy) -> SolveReport {
        let kind = self.kind();
        match self {
            LoadedPuzzle::SlidingTile(p) => SolveReport::new(kind, &solve(p, strategy)),
            LoadedPuzzle::PegSolitaire(p) => SolveReport::new(kind, &solve(p, strategy)),
            LoadedPuzzle::WordLadder(p) => SolveReport::new(kind, &solve(p, strategy)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliding_tile_definition() {
        let json = r#"{
            "kind": "sliding_tile",
            "from": [["*", "2", "3"], ["1", "4", "5"]],
            "to": [["1", "2", "3"], ["4", "5", "*"]]
        }"#;

        let definition = PuzzleDefinition::from_json(json).unwrap();
        assert_eq!(definition.kind(), "sliding_tile");
        match definition.build(None).unwrap() {
            LoadedPuzzle::SlidingTile(p) => assert_eq!(p.to_string(), "*23\n145"),
            other => panic!("unexpected puzzle {other:?}"),
        }
    }

    #[test]
    fn test_peg_solitaire_definition() {
        let json = r#"{"kind": "peg_solitaire", "grid": ["***", "***", "**."]}"#;
        let puzzle = PuzzleDefinition::from_json(json).unwrap().build(None).unwrap();
        assert_eq!(puzzle.kind(), "peg_solitaire");

        let report = puzzle.solve(Strategy::DepthFirst);
        assert_eq!(report.puzzle, "peg_solitaire");
        assert_eq!(report.strategy, Strategy::DepthFirst);
    }

    #[test]
    fn test_word_ladder_definition_with_inline_words() {
        let json = r#"{
            "kind": "word_ladder",
            "from": "cat",
            "to": "cot",
            "words": ["cat", "cot", "dog"]
        }"#;
        let report = PuzzleDefinition::from_json(json)
            .unwrap()
            .build(None)
            .unwrap()
            .solve(Strategy::BreadthFirst);

        assert!(report.solved);
        assert_eq!(report.moves, Some(1));
        assert_eq!(report.path, vec!["cat -> cot", "cot -> cot"]);
    }

    #[test]
    fn test_word_ladder_definition_with_word_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("words.txt"), "same\nsome\ncame\ncome\ncose\ncost\n").unwrap();
        let definition_path = dir.join("ladder.json");
        fs::write(
            &definition_path,
            r#"{"kind": "word_ladder", "from": "same", "to": "cost", "wordsFile": "words.txt"}"#,
        )
        .unwrap();

        let puzzle = load_puzzle(&definition_path).unwrap();
        match &puzzle {
            LoadedPuzzle::WordLadder(ladder) => assert_eq!(ladder.vocabulary().len(), 6),
            other => panic!("unexpected puzzle {other:?}"),
        }
        let report = puzzle.solve(Strategy::BreadthFirst);
        assert_eq!(report.moves, Some(4));
    }

    #[test]
    fn test_invalid_definitions() {
        assert!(matches!(
            PuzzleDefinition::from_json(r#"{"kind": "chess"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            PuzzleDefinition::from_json(r#"{"kind": "peg_solitaire", "grid": ["**", "*"]}"#)
                .unwrap()
                .build(None),
            Err(ConfigError::Puzzle(PuzzleError::RaggedRow { .. }))
        ));
        assert!(matches!(
            load_puzzle(Path::new("/nonexistent/puzzle.json")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_definition_serializes_with_kind_tag() {
        let definition = PuzzleDefinition::PegSolitaire {
            grid: vec!["**.".to_string()],
        };
        let json = serde_json::to_string(&definition).unwrap();
        assert_eq!(json, r#"{"kind":"peg_solitaire","grid":["**."]}"#);
        assert_eq!(PuzzleDefinition::from_json(&json).unwrap(), definition);
    }
}
