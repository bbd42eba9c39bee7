//! Configurable Stop Words
//!
//! Built-in stop-word sets selected by name, merged with user supplied words
//! into the single list the analyzers consult.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Japanese particles and auxiliaries (wo, desu, suru, no, rera).
pub static CJK_STOP_WORDS: &[&str] = &["\u{3092}", "\u{3067}\u{3059}", "\u{3059}\u{308b}", "\u{306e}", "\u{308c}\u{3089}"];

/// Function words: articles, prepositions, auxiliaries, question words.
pub static ENGLISH1_STOP_WORDS: &[&str] = &[
    "i", "a", "about", "an", "and", "are", "as", "at",
    "be", "been", "by", "com", "for", "from", "how", "in",
    "is", "it", "not", "of", "on", "or", "that",
    "the", "this", "to", "was", "what", "when", "where", "which",
    "who", "will", "with", "www", "the",
];

/// Pronouns, modals and conjunctions.
pub static ENGLISH2_STOP_WORDS: &[&str] = &[
    "we", "us", "our", "ours",
    "they", "them", "their", "he", "him", "his",
    "she", "her", "hers", "it", "its", "you", "yours", "your",
    "has", "have", "would", "could", "should", "shall",
    "can", "may", "if", "then", "else", "but",
    "there", "these", "those",
];

/// Named built-in stop-word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordSet {
    Cjk,
    English1,
    English2,
}

impl StopWordSet {
    pub const ALL: [StopWordSet; 3] = [StopWordSet::Cjk, StopWordSet::English1, StopWordSet::English2];

    /// Parse a set from its configuration name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cjk" => Some(StopWordSet::Cjk),
            "english1" => Some(StopWordSet::English1),
            "english2" => Some(StopWordSet::English2),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StopWordSet::Cjk => "cjk",
            StopWordSet::English1 => "english1",
            StopWordSet::English2 => "english2",
        }
    }

    /// The fixed word list behind this set.
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            StopWordSet::Cjk => CJK_STOP_WORDS,
            StopWordSet::English1 => ENGLISH1_STOP_WORDS,
            StopWordSet::English2 => ENGLISH2_STOP_WORDS,
        }
    }
}

/// The effective stop-word list of an engine.
///
/// Keeps insertion order (the Chinese analyzer cuts on words in that order)
/// alongside exact and case-folded lookup sets.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    ordered: Vec<String>,
    words: HashSet<String>,
    folded: HashSet<String>,
}

impl StopWords {
    /// Create an empty stop words collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a slice of words.
    pub fn from_slice(words: &[&str]) -> Self {
        let mut sw = Self::new();
        sw.add_words(words);
        sw
    }

    /// User words first, then the words of each set in the order given.
    pub fn resolve<S: AsRef<str>>(sets: &[StopWordSet], user_words: &[S]) -> Self {
        let mut sw = Self::new();
        for word in user_words {
            sw.add(word.as_ref());
        }
        for set in sets {
            sw.add_words(set.words());
        }
        sw
    }

    /// Load stop words from a file (one word per line, `#` starts a comment line).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let content = fs::read_to_string(path)?;
        let mut sw = Self::new();
        content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .for_each(|word| sw.add(word));
        Ok(sw)
    }

    /// Add a word; words already present are ignored.
    pub fn add(&mut self, word: impl Into<String>) {
        let word = word.into();
        if word.is_empty() || self.words.contains(&word) {
            return;
        }
        self.folded.insert(word.to_lowercase());
        self.words.insert(word.clone());
        self.ordered.push(word);
    }

    /// Add multiple words.
    pub fn add_words(&mut self, words: &[&str]) {
        for word in words {
            self.add(*word);
        }
    }

    /// Merge with another stop words collection, keeping this one's order first.
    pub fn merge(&mut self, other: &StopWords) {
        for word in &other.ordered {
            self.add(word.as_str());
        }
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership after lowercasing both sides.
    pub fn contains_ignore_case(&self, word: &str) -> bool {
        self.folded.contains(&word.to_lowercase())
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}
