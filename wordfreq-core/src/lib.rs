use std::sync::Arc;

use tracing::debug;
use wordfreq_analyzers::MultilingualAnalyzer;

mod accumulator;
mod options;
pub mod ranking;
mod shared;

pub use accumulator::{Term, TermAccumulator};
pub use options::{parse_names, Options, DEFAULT_MAX_PHRASE_LENGTH, DEFAULT_MINIMUM_COUNT};
pub use shared::SharedWordFreq;
pub use wordfreq_analyzers::{IdentityStemmer, Language, SnowballStemmer, Stemmer, StopWordSet, StopWords};

#[derive(Debug, thiserror::Error)]
pub enum WordFreqError {
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("word frequency engine lock poisoned")]
    Poisoned,
}

/// Word and phrase frequency counter.
///
/// Counts accumulate across [`WordFreq::process`] calls until
/// [`WordFreq::empty`] is called.
#[derive(Debug)]
pub struct WordFreq {
    options: Options,
    stop_words: StopWords,
    analyzer: MultilingualAnalyzer,
    terms: TermAccumulator,
    list: Vec<Term>,
}

impl Default for WordFreq {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl WordFreq {
    /// Build an engine that stems English with the Snowball algorithm.
    pub fn new(options: Options) -> Self {
        Self::with_stemmer(options, Arc::new(SnowballStemmer::english()))
    }

    pub fn with_stemmer(options: Options, stemmer: Arc<dyn Stemmer>) -> Self {
        let options = options.normalized();
        let stop_words = options.resolve_stop_words();
        let analyzer = MultilingualAnalyzer::new(&options.languages, options.analyzer_config(), stemmer);
        debug!(
            languages = ?analyzer.languages(),
            stop_words = stop_words.len(),
            "word frequency engine ready"
        );
        Self {
            options,
            stop_words,
            analyzer,
            terms: TermAccumulator::new(),
            list: Vec::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The merged stop words every analyzer consults.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Count the terms of `text` and return the updated ranked list.
    pub fn process(&mut self, text: &str) -> &[Term] {
        let terms = &mut self.terms;
        self.analyzer
            .analyze_each(text, &self.stop_words, |_, (term, count)| terms.push(term, count));

        self.list = self.terms.finalize(self.options.minimum_count);
        debug!(
            distinct = self.terms.len(),
            listed = self.list.len(),
            "processed text"
        );
        &self.list
    }

    /// The list computed by the last [`WordFreq::process`] call.
    pub fn list(&self) -> &[Term] {
        &self.list
    }

    /// Forget every count and the last list.
    pub fn empty(&mut self) {
        self.terms.clear();
        self.list.clear();
    }
}
