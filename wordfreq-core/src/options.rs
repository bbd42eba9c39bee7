use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;
use wordfreq_analyzers::{AnalyzerConfig, Language, StopWordSet, StopWords};

use crate::WordFreqError;

pub const DEFAULT_MINIMUM_COUNT: usize = 2;
pub const DEFAULT_MAX_PHRASE_LENGTH: usize = wordfreq_analyzers::analyzers::DEFAULT_MAX_PHRASE_LENGTH;

/// Engine configuration.
///
/// Missing fields take their defaults; zero numeric values are replaced by
/// their defaults when the engine is built (see [`Options::normalized`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Languages to extract, processed in this order.
    #[serde(deserialize_with = "known_languages")]
    pub languages: Vec<Language>,
    /// Built-in stop-word lists merged after `stop_words`.
    #[serde(alias = "stopWordSets", deserialize_with = "known_stop_word_sets")]
    pub stop_word_sets: Vec<StopWordSet>,
    #[serde(alias = "stopWords")]
    pub stop_words: Vec<String>,
    /// Terms seen fewer times than this are left out of the list.
    #[serde(alias = "minimumCount")]
    pub minimum_count: usize,
    /// Longest Chinese phrase, in characters.
    #[serde(alias = "maxPhraseLength", alias = "maxiumPhraseLength")]
    pub max_phrase_length: usize,
    #[serde(alias = "noFilterSubstring")]
    pub no_filter_substring: bool,
    #[serde(alias = "caseInsensitiveStopWords")]
    pub case_insensitive_stop_words: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
            stop_word_sets: StopWordSet::ALL.to_vec(),
            stop_words: Vec::new(),
            minimum_count: DEFAULT_MINIMUM_COUNT,
            max_phrase_length: DEFAULT_MAX_PHRASE_LENGTH,
            no_filter_substring: false,
            case_insensitive_stop_words: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(content: &str) -> Result<Self, WordFreqError> {
        serde_json::from_str(content).map_err(WordFreqError::from)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WordFreqError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Persist the options as pretty-printed JSON.
    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), WordFreqError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load from the file named by `WORDFREQ_CONFIG`, or use the defaults.
    pub fn from_env_or_default() -> Result<Self, WordFreqError> {
        match std::env::var("WORDFREQ_CONFIG") {
            Ok(path) => Self::from_path(path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn with_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.languages = languages.into_iter().collect();
        self
    }

    pub fn with_stop_word_sets(mut self, sets: impl IntoIterator<Item = StopWordSet>) -> Self {
        self.stop_word_sets = sets.into_iter().collect();
        self
    }

    pub fn with_stop_words<S: Into<String>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_minimum_count(mut self, minimum_count: usize) -> Self {
        self.minimum_count = minimum_count;
        self
    }

    pub fn with_max_phrase_length(mut self, max_phrase_length: usize) -> Self {
        self.max_phrase_length = max_phrase_length;
        self
    }

    pub fn with_no_filter_substring(mut self, no_filter_substring: bool) -> Self {
        self.no_filter_substring = no_filter_substring;
        self
    }

    pub fn with_case_insensitive_stop_words(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive_stop_words = case_insensitive;
        self
    }

    /// Replace zero counts and lengths with their defaults.
    pub fn normalized(mut self) -> Self {
        if self.minimum_count == 0 {
            self.minimum_count = DEFAULT_MINIMUM_COUNT;
        }
        if self.max_phrase_length == 0 {
            self.max_phrase_length = DEFAULT_MAX_PHRASE_LENGTH;
        }
        self
    }

    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            max_phrase_length: self.max_phrase_length,
            no_filter_substring: self.no_filter_substring,
            case_insensitive_stop_words: self.case_insensitive_stop_words,
        }
    }

    /// User stop words followed by every word of the selected sets.
    pub fn resolve_stop_words(&self) -> StopWords {
        StopWords::resolve(&self.stop_word_sets, &self.stop_words)
    }
}

/// Parse configuration names, dropping the ones `parse` does not recognise.
pub fn parse_names<T, S: AsRef<str>>(names: &[S], kind: &str, parse: fn(&str) -> Option<T>) -> Vec<T> {
    names
        .iter()
        .filter_map(|name| {
            let parsed = parse(name.as_ref());
            if parsed.is_none() {
                warn!("ignoring unknown {} {:?}", kind, name.as_ref());
            }
            parsed
        })
        .collect()
}

fn known_languages<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Language>, D::Error> {
    let names = Vec::<String>::deserialize(deserializer)?;
    Ok(parse_names(&names, "language", Language::from_name))
}

fn known_stop_word_sets<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<StopWordSet>, D::Error> {
    let names = Vec::<String>::deserialize(deserializer)?;
    Ok(parse_names(&names, "stop word set", StopWordSet::from_name))
}
