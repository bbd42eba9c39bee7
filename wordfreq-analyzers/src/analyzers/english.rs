//! English Text Analyzer
//!
//! Counts words by stem and reports each stem under its most representative
//! surface form.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, trace};

use super::stemmer::{SnowballStemmer, Stemmer};
use super::stop_words::StopWords;
use super::traits::{Analyzer, AnalyzerConfig, Language, TermCount};

static MULTIPLE_STOPS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());
static TRAILING_STOP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.{3,})\.$").unwrap());
static NEGATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(n)['’]t\b").unwrap());
static CONTRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)['’](?:s|ll|d|ve)?(?:\b|$)").unwrap());

/// Characters that may appear inside an English token.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, 'é' | 'É' | '\'' | '’' | '_' | '-' | '@' | '.')
}

/// Numbers, dotted numbers, bare `@` and dash runs.
fn is_numeric_shape(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '@' | '-'))
}

/// Collapse stop runs, drop a sentence stop, strip negations and contractions.
fn normalize(token: &str) -> String {
    let token = MULTIPLE_STOPS.replace_all(token, ".");
    let token = TRAILING_STOP.replace(&token, "$1");
    let token = NEGATION.replace_all(&token, "$1");
    CONTRACTION.replace_all(&token, "").into_owned()
}

/// Running state for one stem within a single `analyze` call.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StemCluster {
    word: String,
    count: usize,
}

impl StemCluster {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            count: 0,
        }
    }

    /// Count one more occurrence and let it compete for the representative form.
    ///
    /// Shorter words win (`booking` -> `book`); an equal-length spelling that
    /// differs folds the representative to lowercase (`Book` -> `book`).
    fn observe(&mut self, word: &str) {
        self.count += 1;
        let current = self.word.chars().count();
        let candidate = word.chars().count();
        if candidate < current {
            self.word = word.to_string();
        } else if candidate == current && word != self.word {
            self.word = word.to_lowercase();
        }
    }
}

/// English term extractor.
pub struct EnglishAnalyzer {
    config: AnalyzerConfig,
    stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("config", &self.config)
            .field("stemmer", &"<stemmer>")
            .finish()
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default(), Arc::new(SnowballStemmer::english()))
    }
}

impl EnglishAnalyzer {
    /// Create a new English analyzer.
    pub fn new(config: AnalyzerConfig, stemmer: Arc<dyn Stemmer>) -> Self {
        Self { config, stemmer }
    }

    /// Split, normalize and shape-filter `text`, keeping the original case.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !is_word_char(c))
            .filter(|raw| !raw.is_empty())
            .map(normalize)
            .filter(|token| token.chars().count() > 2 && !is_numeric_shape(token))
            .collect()
    }

    fn is_stop_word(&self, token: &str, stop_words: &StopWords) -> bool {
        if self.config.case_insensitive_stop_words {
            stop_words.contains_ignore_case(token)
        } else {
            stop_words.contains(token)
        }
    }
}

impl Analyzer for EnglishAnalyzer {
    fn language(&self) -> Language {
        Language::English
    }

    fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    fn analyze(&self, text: &str, stop_words: &StopWords) -> Vec<TermCount> {
        let mut clusters: HashMap<String, StemCluster> = HashMap::new();
        let mut seen = 0usize;

        for token in self.tokenize(text) {
            if self.is_stop_word(&token, stop_words) {
                continue;
            }
            let key = match self.stemmer.stem(&token.to_lowercase()) {
                Ok(key) => key,
                Err(err) => {
                    trace!(token = %token, error = %err, "skipping unstemmable token");
                    continue;
                }
            };
            seen += 1;
            clusters
                .entry(key)
                .or_insert_with(|| StemCluster::new(&token))
                .observe(&token);
        }

        debug!(tokens = seen, stems = clusters.len(), "english analysis done");
        clusters
            .into_values()
            .map(|cluster| (cluster.word, cluster.count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::stemmer::IdentityStemmer;
    use crate::analyzers::stop_words::StopWordSet;
    use crate::AnalyzerError;

    fn counts(pairs: Vec<TermCount>) -> HashMap<String, usize> {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_segmentation() {
        let analyzer = EnglishAnalyzer::default();
        let tokens = analyzer.tokenize("Hello, World! snake_case / well-known; me@example.com");
        assert_eq!(
            tokens,
            vec!["Hello", "World", "snake_case", "well-known", "me@example.com"]
        );
    }

    #[test]
    fn test_stop_normalization() {
        let analyzer = EnglishAnalyzer::default();
        assert_eq!(analyzer.tokenize("wait... end."), vec!["wait", "end"]);
        // the trailing stop needs three characters in front of it
        assert_eq!(analyzer.tokenize("ab."), vec!["ab."]);
        assert_eq!(analyzer.tokenize("e.g.."), vec!["e.g"]);
    }

    #[test]
    fn test_contractions() {
        let analyzer = EnglishAnalyzer::default();
        assert_eq!(analyzer.tokenize("can't"), vec!["can"]);
        assert_eq!(analyzer.tokenize("WON’T"), vec!["WON"]);
        assert_eq!(analyzer.tokenize("book's"), vec!["book"]);
        assert_eq!(analyzer.tokenize("they'll we've she'd"), vec!["they", "she"]);
        assert_eq!(analyzer.tokenize("dogs'"), vec!["dogs"]);
    }

    #[test]
    fn test_shape_filter() {
        let analyzer = EnglishAnalyzer::default();
        let tokens = analyzer.tokenize("an ox 2024 3.14 --- @@@ 1-800 b2b rust");
        assert_eq!(tokens, vec!["b2b", "rust"]);
    }

    #[test]
    fn test_representative_prefers_shortest() {
        let analyzer = EnglishAnalyzer::default();
        let terms = counts(analyzer.analyze("Running run runs", &StopWords::new()));
        assert_eq!(terms.len(), 1);
        assert_eq!(terms.get("run"), Some(&3));
    }

    #[test]
    fn test_representative_is_order_independent() {
        let analyzer = EnglishAnalyzer::default();
        let forward = counts(analyzer.analyze("booking Book book", &StopWords::new()));
        let backward = counts(analyzer.analyze("book Book booking", &StopWords::new()));
        assert_eq!(forward.get("book"), Some(&3));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_equal_length_folds_to_lowercase() {
        let analyzer = EnglishAnalyzer::default();
        let terms = counts(analyzer.analyze("Rust RUST", &StopWords::new()));
        assert_eq!(terms.get("rust"), Some(&2));
    }

    #[test]
    fn test_contraction_counts() {
        let analyzer = EnglishAnalyzer::default();
        let terms = counts(analyzer.analyze("can't can't book's", &StopWords::new()));
        assert_eq!(terms.get("can"), Some(&2));
        assert_eq!(terms.get("book"), Some(&1));
        assert!(!terms.contains_key("book's"));
    }

    #[test]
    fn test_stop_words_are_case_sensitive_by_default() {
        let analyzer = EnglishAnalyzer::default();
        let stop_words = StopWords::resolve::<&str>(&[StopWordSet::English1], &[]);
        let terms = counts(analyzer.analyze("the The quick", &stop_words));
        assert!(!terms.contains_key("the"));
        assert_eq!(terms.get("The"), Some(&1));
        assert_eq!(terms.get("quick"), Some(&1));
    }

    #[test]
    fn test_case_insensitive_stop_words() {
        let config = AnalyzerConfig {
            case_insensitive_stop_words: true,
            ..AnalyzerConfig::default()
        };
        let analyzer = EnglishAnalyzer::new(config, Arc::new(SnowballStemmer::english()));
        let stop_words = StopWords::resolve::<&str>(&[StopWordSet::English1], &[]);
        let terms = counts(analyzer.analyze("the The THE quick", &stop_words));
        assert_eq!(terms.len(), 1);
        assert_eq!(terms.get("quick"), Some(&1));
    }

    #[test]
    fn test_identity_stemmer_keeps_inflections_apart() {
        let analyzer = EnglishAnalyzer::new(AnalyzerConfig::default(), Arc::new(IdentityStemmer));
        let terms = counts(analyzer.analyze("books book Book", &StopWords::new()));
        assert_eq!(terms.get("books"), Some(&1));
        assert_eq!(terms.get("book"), Some(&2));
    }

    struct RejectingStemmer;

    impl Stemmer for RejectingStemmer {
        fn stem(&self, word: &str) -> Result<String, AnalyzerError> {
            if word.contains('-') {
                Err(AnalyzerError::Stem {
                    word: word.to_string(),
                })
            } else {
                Ok(word.to_string())
            }
        }
    }

    #[test]
    fn test_stemmer_failure_skips_only_that_token() {
        let analyzer = EnglishAnalyzer::new(AnalyzerConfig::default(), Arc::new(RejectingStemmer));
        let terms = counts(analyzer.analyze("well-known words", &StopWords::new()));
        assert_eq!(terms.len(), 1);
        assert_eq!(terms.get("words"), Some(&1));
    }

    #[test]
    fn test_empty_input() {
        let analyzer = EnglishAnalyzer::default();
        assert!(analyzer.analyze("", &StopWords::new()).is_empty());
        assert!(analyzer.analyze("!! ?? 42", &StopWords::new()).is_empty());
    }
}
