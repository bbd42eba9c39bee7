//! Stemming strategies used to canonicalize English tokens.

use std::fmt;

use rust_stemmers::Algorithm;

use crate::AnalyzerError;

/// Reduces a lowercase word to its stem key.
///
/// Implementations must be pure: the same input always yields the same key.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> Result<String, AnalyzerError>;
}

/// English Snowball stemmer backed by `rust-stemmers`.
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &"english")
            .finish()
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> Result<String, AnalyzerError> {
        let stem = self.inner.stem(word);
        if stem.is_empty() {
            return Err(AnalyzerError::Stem {
                word: word.to_string(),
            });
        }
        Ok(stem.into_owned())
    }
}

/// Leaves words untouched; clusters only identical lowercase forms.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> Result<String, AnalyzerError> {
        Ok(word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowball_reduces_inflections() {
        let stemmer = SnowballStemmer::english();
        assert_eq!(stemmer.stem("running").unwrap(), "run");
        assert_eq!(stemmer.stem("runs").unwrap(), "run");
        assert_eq!(stemmer.stem("books").unwrap(), "book");
        assert_eq!(stemmer.stem("booking").unwrap(), "book");
    }

    #[test]
    fn snowball_rejects_empty_word() {
        let stemmer = SnowballStemmer::english();
        let err = stemmer.stem("").unwrap_err();
        assert!(matches!(err, AnalyzerError::Stem { .. }));
    }

    #[test]
    fn identity_keeps_word() {
        assert_eq!(IdentityStemmer.stem("running").unwrap(), "running");
    }
}
