//! Chinese Text Analyzer
//!
//! Han text has no word boundaries, so every bounded-length substring of
//! every Han run is counted as a candidate phrase. Substrings that only ever
//! occur inside one longer phrase are then dropped in favour of that phrase.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use tracing::debug;

use super::stop_words::StopWords;
use super::traits::{Analyzer, AnalyzerConfig, Language, TermCount};

const SEPARATOR: char = '\n';

/// CJK Unified Ideographs and Extension A.
pub fn is_han(ch: char) -> bool {
    matches!(ch as u32,
        0x4E00..=0x9FFF |  // CJK Unified Ideographs
        0x3400..=0x4DBF    // CJK Extension A
    )
}

/// Every contiguous substring of `chars`, longest first at each offset.
///
/// Offset `i` yields lengths `min(max_len, len - i)` down to 1, so a run of
/// `n` characters yields at most `n * max_len` substrings.
pub fn ngrams(chars: &[char], max_len: usize) -> impl Iterator<Item = &[char]> + '_ {
    (0..chars.len()).flat_map(move |start| {
        let longest = max_len.min(chars.len() - start);
        (1..=longest).rev().map(move |len| &chars[start..start + len])
    })
}

/// Keys of `pending` that occur inside `term` exactly as often as `term` itself.
fn subsumed_by<'a>(
    term: &str,
    count: usize,
    pending: &'a HashMap<String, usize>,
    max_len: usize,
) -> Vec<&'a str> {
    let chars: Vec<char> = term.chars().collect();
    ngrams(&chars, max_len)
        .filter(|gram| gram.len() < chars.len())
        .filter_map(|gram| {
            let substring: String = gram.iter().collect();
            match pending.get_key_value(substring.as_str()) {
                Some((key, &sub_count)) if sub_count == count => Some(key.as_str()),
                _ => None,
            }
        })
        .collect()
}

/// Remove every phrase whose count equals that of a longer phrase containing it.
///
/// Removals are decided against the unmodified set and applied together, so
/// the outcome does not depend on iteration order. Returns the number of
/// phrases removed.
pub fn filter_subsumed(pending: &mut HashMap<String, usize>, max_len: usize) -> usize {
    let snapshot: &HashMap<String, usize> = pending;
    let doomed: HashSet<String> = snapshot
        .par_iter()
        .flat_map_iter(|(term, &count)| subsumed_by(term, count, snapshot, max_len))
        .map(str::to_owned)
        .collect();

    pending.retain(|term, _| !doomed.contains(term));
    doomed.len()
}

/// Chinese phrase extractor.
#[derive(Debug, Clone, Default)]
pub struct ChineseAnalyzer {
    config: AnalyzerConfig,
}

impl ChineseAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Han runs of at least two characters, cut after every Han stop word.
    ///
    /// Stop words stay in their chunk; they only prevent phrases from
    /// spanning across them.
    pub fn chunks(&self, text: &str, stop_words: &StopWords) -> Vec<String> {
        let mut han = String::with_capacity(text.len());
        for ch in text.chars() {
            if is_han(ch) {
                han.push(ch);
            } else if !han.ends_with(SEPARATOR) {
                han.push(SEPARATOR);
            }
        }

        for word in stop_words.iter().filter(|w| w.chars().all(is_han)) {
            let mut cut = String::with_capacity(word.len() + 1);
            cut.push_str(word);
            cut.push(SEPARATOR);
            han = han.replace(word, &cut);
        }

        han.split(SEPARATOR)
            .filter(|chunk| chunk.chars().count() > 1)
            .map(str::to_owned)
            .collect()
    }

    /// Count every phrase of two or more characters across all chunks.
    fn count_phrases(&self, chunks: &[String]) -> HashMap<String, usize> {
        let mut pending: HashMap<String, usize> = HashMap::new();
        for chunk in chunks {
            let chars: Vec<char> = chunk.chars().collect();
            for gram in ngrams(&chars, self.config.max_phrase_length) {
                if gram.len() <= 1 {
                    continue;
                }
                *pending.entry(gram.iter().collect()).or_insert(0) += 1;
            }
        }
        pending
    }
}

impl Analyzer for ChineseAnalyzer {
    fn language(&self) -> Language {
        Language::Chinese
    }

    fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    fn analyze(&self, text: &str, stop_words: &StopWords) -> Vec<TermCount> {
        let chunks = self.chunks(text, stop_words);
        let mut pending = self.count_phrases(&chunks);
        let candidates = pending.len();

        if !self.config.no_filter_substring {
            filter_subsumed(&mut pending, self.config.max_phrase_length);
        }

        debug!(
            chunks = chunks.len(),
            candidates,
            phrases = pending.len(),
            "chinese analysis done"
        );
        pending.into_iter().collect()
    }
}
