//! Analyzer Traits
//!
//! Common interfaces for the per-language term extractors.

use serde::{Deserialize, Serialize};

use super::stop_words::StopWords;

/// Supported languages for term extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Unsegmented Han text, counted as n-gram phrases
    Chinese,
    /// Space-delimited text, counted by stem
    English,
}

impl Language {
    /// Every language the engine knows, in processing order.
    pub const ALL: [Language; 2] = [Language::Chinese, Language::English];

    /// Parse a language from its configuration name.
    ///
    /// Returns `None` for names this crate does not handle.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "chinese" => Some(Language::Chinese),
            "en" | "english" => Some(Language::English),
            _ => None,
        }
    }

    /// Get language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
        }
    }

    /// Configuration name, the inverse of [`Language::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Language::Chinese => "chinese",
            Language::English => "english",
        }
    }
}

/// Tuning knobs shared by the analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Longest phrase, in characters, the Chinese analyzer generates
    pub max_phrase_length: usize,
    /// Keep substrings whose count equals that of a longer phrase
    pub no_filter_substring: bool,
    /// Match English stop words regardless of case
    pub case_insensitive_stop_words: bool,
}

pub const DEFAULT_MAX_PHRASE_LENGTH: usize = 8;

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_phrase_length: DEFAULT_MAX_PHRASE_LENGTH,
            no_filter_substring: false,
            case_insensitive_stop_words: false,
        }
    }
}

/// A term and the number of times it was seen in one analyzed text.
pub type TermCount = (String, usize);

/// Common trait for all term extractors.
pub trait Analyzer: Send + Sync {
    /// The language this analyzer extracts.
    fn language(&self) -> Language;

    /// Get the analyzer configuration.
    fn config(&self) -> &AnalyzerConfig;

    /// Extract `(term, count)` pairs from `text`.
    ///
    /// Every term appears at most once in the result. Degenerate input
    /// yields an empty vector.
    fn analyze(&self, text: &str, stop_words: &StopWords) -> Vec<TermCount>;
}
