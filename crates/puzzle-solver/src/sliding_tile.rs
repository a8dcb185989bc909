//! M×N sliding-tile puzzle, a generalisation of the 15-puzzle.
//!
//! Tiles are arbitrary string symbols; the blank is [`BLANK`]. A move
//! swaps the blank with one of its horizontal or vertical neighbours.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::puzzle::{rectangular_width, Puzzle, PuzzleError};

/// Symbol marking the empty cell
pub const BLANK: &str = "*";

/// One configuration of a sliding-tile puzzle together with its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingTile {
    rows: usize,
    cols: usize,
    /// Current tiles, row-major
    tiles: Vec<String>,
    /// Index of the blank in `tiles`
    blank: usize,
    /// Shared by every state of one puzzle
    target: Arc<Vec<String>>,
}

impl SlidingTile {
    /// Create a puzzle in configuration `from`, working towards `to`.
    pub fn new(from: Vec<Vec<String>>, to: Vec<Vec<String>>) -> Result<Self, PuzzleError> {
        let cols = rectangular_width(&from)?;
        let rows = from.len();
        let target_cols = rectangular_width(&to)?;
        if to.len() != rows || target_cols != cols {
            return Err(PuzzleError::DimensionMismatch {
                rows,
                cols,
                found_rows: to.len(),
                found_cols: target_cols,
            });
        }

        let tiles: Vec<String> = from.into_iter().flatten().collect();
        let target: Vec<String> = to.into_iter().flatten().collect();
        let blank = find_single_blank(&tiles, "start")?;
        find_single_blank(&target, "target")?;

        let mut current_sorted: Vec<&String> = tiles.iter().collect();
        let mut target_sorted: Vec<&String> = target.iter().collect();
        current_sorted.sort();
        target_sorted.sort();
        if current_sorted != target_sorted {
            return Err(PuzzleError::TileMismatch);
        }

        Ok(Self {
            rows,
            cols,
            tiles,
            blank,
            target: Arc::new(target),
        })
    }

    /// Build a puzzle from text grids with one row per line and one
    /// character per tile.
    pub fn parse(from: &str, to: &str) -> Result<Self, PuzzleError> {
        Self::new(char_grid(from), char_grid(to))
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Current configuration as rows of tiles.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.tiles.chunks(self.cols)
    }

    /// Target configuration as rows of tiles.
    pub fn target_rows(&self) -> impl Iterator<Item = &[String]> {
        self.target.chunks(self.cols)
    }

    /// Position of the blank as (row, column).
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.cols, self.blank % self.cols)
    }

    fn with_blank_swapped(&self, other: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, other);
        Self {
            rows: self.rows,
            cols: self.cols,
            tiles,
            blank: other,
            target: Arc::clone(&self.target),
        }
    }
}

fn find_single_blank(tiles: &[String], grid: &'static str) -> Result<usize, PuzzleError> {
    let mut blanks = tiles.iter().enumerate().filter(|(_, t)| *t == BLANK);
    match (blanks.next(), blanks.count()) {
        (Some((index, _)), 0) => Ok(index),
        (first, rest) => Err(PuzzleError::BlankCount {
            grid,
            found: usize::from(first.is_some()) + rest,
        }),
    }
}

fn char_grid(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(String::from).collect())
        .collect()
}

impl Puzzle for SlidingTile {
    fn is_solved(&self) -> bool {
        self.tiles == *self.target
    }

    /// Slide the blank right, left, up, then down, where possible.
    fn extensions(&self) -> Vec<Self> {
        let (row, col) = self.blank_position();
        let mut result = Vec::with_capacity(4);
        if col + 1 < self.cols {
            result.push(self.with_blank_swapped(self.blank + 1));
        }
        if col > 0 {
            result.push(self.with_blank_swapped(self.blank - 1));
        }
        if row > 0 {
            result.push(self.with_blank_swapped(self.blank - self.cols));
        }
        if row + 1 < self.rows {
            result.push(self.with_blank_swapped(self.blank + self.cols));
        }
        result
    }
}

// The target is fixed for a given puzzle, so the tiles alone are a good key.
impl Hash for SlidingTile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl fmt::Display for SlidingTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .tiles
            .iter()
            .map(|t| t.chars().count())
            .max()
            .unwrap_or(1);
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            if width <= 1 {
                for tile in row {
                    f.write_str(tile)?;
                }
            } else {
                let cells: Vec<String> = row.iter().map(|t| format!("{t:>width$}")).collect();
                f.write_str(&cells.join(" "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    fn two_by_three() -> SlidingTile {
        SlidingTile::new(
            grid(&[&["*", "2", "3"], &["1", "4", "5"]]),
            grid(&[&["1", "2", "3"], &["4", "5", "*"]]),
        )
        .unwrap()
    }

    #[test]
    fn test_extensions_from_corner() {
        let puzzle = two_by_three();
        let extensions = puzzle.extensions();

        assert_eq!(extensions.len(), 2);
        assert!(extensions.contains(&SlidingTile::parse("2*3\n145", "123\n45*").unwrap()));
        assert!(extensions.contains(&SlidingTile::parse("123\n*45", "123\n45*").unwrap()));
        assert!(!extensions.contains(&puzzle));
    }

    #[test]
    fn test_extensions_from_centre() {
        let puzzle = SlidingTile::parse("123\n4*5\n678", "123\n45*\n678").unwrap();
        let extensions = puzzle.extensions();
        let rendered: Vec<String> = extensions.iter().map(|p| p.to_string()).collect();

        assert_eq!(
            rendered,
            vec!["123\n45*\n678", "123\n*45\n678", "1*3\n425\n678", "123\n475\n6*8"]
        );
        assert_eq!(extensions, puzzle.extensions());
    }

    #[test]
    fn test_is_solved() {
        assert!(!two_by_three().is_solved());
        assert!(SlidingTile::parse("123\n45*", "123\n45*").unwrap().is_solved());
    }

    #[test]
    fn test_equality_includes_target() {
        let a = SlidingTile::parse("*23\n145", "123\n45*").unwrap();
        let b = SlidingTile::parse("*23\n145", "123\n*45").unwrap();
        assert_eq!(a, two_by_three());
        assert_ne!(a, b);

        let targets: Vec<Vec<String>> = b.target_rows().map(<[String]>::to_vec).collect();
        assert_eq!(targets, vec![vec!["1", "2", "3"], vec!["*", "4", "5"]]);
        assert!(a.rows().eq(b.rows()));
    }

    #[test]
    fn test_display() {
        assert_eq!(two_by_three().to_string(), "*23\n145");

        let wide = SlidingTile::new(
            grid(&[&["10", "2"], &["*", "1"]]),
            grid(&[&["1", "2"], &["10", "*"]]),
        )
        .unwrap();
        assert_eq!(wide.to_string(), "10  2\n *  1");
    }

    #[test]
    fn test_rejects_malformed_grids() {
        assert_eq!(
            SlidingTile::new(Vec::new(), Vec::new()),
            Err(PuzzleError::EmptyGrid)
        );
        assert!(matches!(
            SlidingTile::parse("*23\n14", "123\n45*"),
            Err(PuzzleError::RaggedRow { row: 1, .. })
        ));
        assert!(matches!(
            SlidingTile::parse("*2\n14", "123\n45*"),
            Err(PuzzleError::DimensionMismatch { .. })
        ));
        assert_eq!(
            SlidingTile::parse("123\n145", "123\n45*"),
            Err(PuzzleError::BlankCount {
                grid: "start",
                found: 0,
            })
        );
        assert_eq!(
            SlidingTile::parse("**3\n145", "123\n45*"),
            Err(PuzzleError::BlankCount {
                grid: "start",
                found: 2,
            })
        );
        assert_eq!(
            SlidingTile::parse("*23\n145", "123\n459"),
            Err(PuzzleError::BlankCount {
                grid: "target",
                found: 0,
            })
        );
        assert_eq!(
            SlidingTile::parse("*23\n146", "123\n45*"),
            Err(PuzzleError::TileMismatch)
        );
    }
}
