pub mod analyzers;

pub use analyzers::{
    Analyzer, AnalyzerConfig, ChineseAnalyzer, EnglishAnalyzer, IdentityStemmer, Language,
    MultilingualAnalyzer, SnowballStemmer, Stemmer, StopWordSet, StopWords, TermCount,
};

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("stemmer could not reduce {word:?}")]
    Stem { word: String },
}
