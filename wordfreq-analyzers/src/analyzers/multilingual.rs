//! Multilingual Text Analyzer
//!
//! Runs every configured language analyzer over the same text. Languages are
//! chosen by configuration, never detected.

use std::sync::Arc;

use super::chinese::ChineseAnalyzer;
use super::english::EnglishAnalyzer;
use super::stemmer::{SnowballStemmer, Stemmer};
use super::stop_words::StopWords;
use super::traits::{Analyzer, AnalyzerConfig, Language, TermCount};

/// Ordered set of per-language analyzers sharing one configuration.
pub struct MultilingualAnalyzer {
    config: AnalyzerConfig,
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl std::fmt::Debug for MultilingualAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultilingualAnalyzer")
            .field("config", &self.config)
            .field("languages", &self.languages())
            .finish()
    }
}

impl Default for MultilingualAnalyzer {
    fn default() -> Self {
        Self::new(
            &Language::ALL,
            AnalyzerConfig::default(),
            Arc::new(SnowballStemmer::english()),
        )
    }
}

impl MultilingualAnalyzer {
    /// Build one analyzer per language, in the order given; repeats are skipped.
    pub fn new(languages: &[Language], config: AnalyzerConfig, stemmer: Arc<dyn Stemmer>) -> Self {
        let mut analyzers: Vec<Box<dyn Analyzer>> = Vec::with_capacity(languages.len());
        for &language in languages {
            if analyzers.iter().any(|a| a.language() == language) {
                continue;
            }
            let analyzer: Box<dyn Analyzer> = match language {
                Language::Chinese => Box::new(ChineseAnalyzer::new(config)),
                Language::English => Box::new(EnglishAnalyzer::new(config, Arc::clone(&stemmer))),
            };
            analyzers.push(analyzer);
        }
        Self { config, analyzers }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Languages in processing order.
    pub fn languages(&self) -> Vec<Language> {
        self.analyzers.iter().map(|a| a.language()).collect()
    }

    /// Run every analyzer over `text`, handing each pair to `sink`.
    pub fn analyze_each<F>(&self, text: &str, stop_words: &StopWords, mut sink: F)
    where
        F: FnMut(Language, TermCount),
    {
        for analyzer in &self.analyzers {
            let language = analyzer.language();
            for pair in analyzer.analyze(text, stop_words) {
                sink(language, pair);
            }
        }
    }

    /// All pairs from all analyzers; a term may repeat across languages.
    pub fn analyze(&self, text: &str, stop_words: &StopWords) -> Vec<TermCount> {
        let mut pairs = Vec::new();
        self.analyze_each(text, stop_words, |_, pair| pairs.push(pair));
        pairs
    }
}
