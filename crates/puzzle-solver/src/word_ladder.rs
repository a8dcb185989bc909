//! Word ladder: turn one word into another by changing one letter at a
//! time, with every intermediate word taken from a vocabulary.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::puzzle::{Puzzle, PuzzleError};

/// Letters a single substitution may introduce
const LETTERS: std::ops::RangeInclusive<u8> = b'a'..=b'z';

/// Set of allowed words, shared by every state of one puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary(Arc<HashSet<String>>);

impl Vocabulary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(Arc::new(words.into_iter().map(Into::into).collect()))
    }

    /// Read a word list: words separated by any whitespace.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

/// A word-ladder position: the current word and the word to reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLadder {
    word: String,
    target: String,
    vocabulary: Vocabulary,
}

impl WordLadder {
    /// Create a ladder stepping from `from` to `to` through `vocabulary`.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        vocabulary: Vocabulary,
    ) -> Result<Self, PuzzleError> {
        let word = validate(from.into())?;
        let target = validate(to.into())?;
        if !vocabulary.contains(&word) {
            return Err(PuzzleError::WordNotInVocabulary(word));
        }
        Ok(Self {
            word,
            target,
            vocabulary,
        })
    }

    /// The current word.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn step_to(&self, word: String) -> Self {
        Self {
            word,
            target: self.target.clone(),
            vocabulary: self.vocabulary.clone(),
        }
    }
}

fn validate(word: String) -> Result<String, PuzzleError> {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(PuzzleError::InvalidWord(word));
    }
    Ok(word)
}

impl Puzzle for WordLadder {
    fn is_solved(&self) -> bool {
        self.word == self.target
    }

    /// Substitute each position with each other letter, keeping the
    /// results found in the vocabulary.
    fn extensions(&self) -> Vec<Self> {
        let mut candidate = self.word.clone().into_bytes();
        let mut result = Vec::new();
        for i in 0..candidate.len() {
            let original = candidate[i];
            for letter in LETTERS.filter(|&l| l != original) {
                candidate[i] = letter;
                if let Ok(word) = std::str::from_utf8(&candidate) {
                    if self.vocabulary.contains(word) {
                        result.push(self.step_to(word.to_string()));
                    }
                }
            }
            candidate[i] = original;
        }
        result
    }
}

// Equal ladders always share words, so hashing the vocabulary is unnecessary.
impl Hash for WordLadder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
        self.target.hash(state);
    }
}

impl fmt::Display for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.word, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_words([
            "same", "some", "save", "came", "cost", "cat", "cast", "case", "word", "cave",
            "money", "party", "most",
        ])
    }

    #[test]
    fn test_extensions_change_one_letter() {
        let puzzle = WordLadder::new("same", "cost", vocabulary()).unwrap();
        let extensions = puzzle.extensions();

        let words: HashSet<&str> = extensions.iter().map(|p| p.word()).collect();
        assert_eq!(words, HashSet::from(["some", "save", "came"]));
        assert_eq!(extensions.len(), 3);
        assert!(extensions.iter().all(|p| p.target() == "cost"));
        assert!(!extensions.contains(&puzzle));
    }

    #[test]
    fn test_extensions_are_deterministic() {
        let puzzle = WordLadder::new("case", "cost", vocabulary()).unwrap();
        let first: Vec<String> = puzzle.extensions().iter().map(|p| p.to_string()).collect();
        let second: Vec<String> = puzzle.extensions().iter().map(|p| p.to_string()).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["came -> cost", "cave -> cost", "cast -> cost"]);
    }

    #[test]
    fn test_is_solved() {
        let ladder = WordLadder::new("same", "cost", vocabulary()).unwrap();
        assert!(!ladder.is_solved());
        let ladder = WordLadder::new("cost", "cost", vocabulary()).unwrap();
        assert!(ladder.is_solved());
    }

    #[test]
    fn test_equality_and_display() {
        let a = WordLadder::new("same", "cost", vocabulary()).unwrap();
        let b = WordLadder::new("same", "cost", vocabulary()).unwrap();
        let c = WordLadder::new("save", "cost", vocabulary()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "same -> cost");
    }

    #[test]
    fn test_rejects_invalid_words() {
        assert_eq!(
            WordLadder::new("Same", "cost", vocabulary()),
            Err(PuzzleError::InvalidWord("Same".to_string()))
        );
        assert_eq!(
            WordLadder::new("same", "", vocabulary()),
            Err(PuzzleError::InvalidWord(String::new()))
        );
        assert_eq!(
            WordLadder::new("lame", "cost", vocabulary()),
            Err(PuzzleError::WordNotInVocabulary("lame".to_string()))
        );
    }

    #[test]
    fn test_vocabulary_parse() {
        let vocabulary = Vocabulary::parse("same  some\nsave\tcame\n\n");
        assert_eq!(vocabulary.len(), 4);
        assert!(vocabulary.contains("save"));
        assert!(!vocabulary.contains(""));
        let mut words: Vec<&str> = vocabulary.iter().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["came", "same", "save", "some"]);

        let collected: Vocabulary = vec!["a".to_string(), "b".to_string()].into_iter().collect();
        assert_eq!(collected, Vocabulary::from_words(["b", "a"]));
    }
}
