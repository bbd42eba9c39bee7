//! Text Analyzers Module
//!
//! Per-language term extractors: stemmed word counts for English, n-gram
//! phrase counts for Chinese, and the stop words they share.

mod chinese;
mod english;
mod multilingual;
mod stemmer;
mod stop_words;
mod traits;

pub use chinese::{filter_subsumed, is_han, ngrams, ChineseAnalyzer};
pub use english::EnglishAnalyzer;
pub use multilingual::MultilingualAnalyzer;
pub use stemmer::{IdentityStemmer, SnowballStemmer, Stemmer};
pub use stop_words::{
    StopWordSet, StopWords, CJK_STOP_WORDS, ENGLISH1_STOP_WORDS, ENGLISH2_STOP_WORDS,
};
pub use traits::{Analyzer, AnalyzerConfig, Language, TermCount, DEFAULT_MAX_PHRASE_LENGTH};
