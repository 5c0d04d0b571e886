//! Keyword extraction: derives a ranked, de-overlapped keyword list from a job description.
//!
//! Algorithm:
//! 1. Normalize the text (lowercase, punctuation stripped, whitespace collapsed).
//! 2. Every vocabulary term contained in the text becomes a priority keyword.
//! 3. Count single words (≥ 4 chars, not stop words, not numeric) and 2/3-word
//!    phrases (every word ≥ 3 chars and not a stop word).
//! 4. Priority keywords first, then ranked phrases, then ranked words, up to the cap.
//! 5. Drop any entry contained in another entry, so longer phrases win.

use std::cmp::Reverse;

use indexmap::IndexMap;
use tracing::debug;

use crate::analysis::lexicon::Lexicon;
use crate::analysis::text::{char_len, is_numeric, normalize, tokens};

/// Hard ceiling on the configured keyword cap.
pub const MAX_KEYWORD_CAP: usize = 25;

const MIN_WORD_LEN: usize = 4;
const MIN_PHRASE_WORD_LEN: usize = 3;
const PHRASE_SIZES: [usize; 2] = [2, 3];

/// How many candidates of each kind survive ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorLimits {
    pub max_keywords: usize,
    pub top_words: usize,
    pub top_phrases: usize,
}

impl Default for ExtractorLimits {
    fn default() -> Self {
        Self {
            max_keywords: 20,
            top_words: 10,
            top_phrases: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor {
    lexicon: Lexicon,
    limits: ExtractorLimits,
}

impl KeywordExtractor {
    pub fn new(lexicon: Lexicon, limits: ExtractorLimits) -> Self {
        Self { lexicon, limits }
    }

    /// Returns the ranked keyword list for a job description. Deterministic:
    /// the same input always yields the same ordered list.
    pub fn extract(&self, job_description: &str) -> Vec<String> {
        let text = normalize(job_description);
        if text.is_empty() {
            return Vec::new();
        }

        let priority = self.priority_keywords(&text);
        let words = tokens(&text);

        let ranked_phrases: Vec<String> = rank(self.phrase_frequencies(&words))
            .into_iter()
            .filter(|p| !priority.contains(p))
            .take(self.limits.top_phrases)
            .collect();
        let ranked_words: Vec<String> = rank(self.word_frequencies(&words))
            .into_iter()
            .filter(|w| !priority.contains(w))
            .take(self.limits.top_words)
            .collect();

        let remaining = self.limits.max_keywords.saturating_sub(priority.len());
        let priority_count = priority.len();
        let mut combined = priority;
        combined.extend(ranked_phrases.into_iter().chain(ranked_words).take(remaining));
        combined.truncate(self.limits.max_keywords);

        let keywords = remove_overlaps(&combined);
        debug!(
            priority = priority_count,
            candidates = combined.len(),
            keywords = keywords.len(),
            "extracted job description keywords"
        );
        keywords
    }

    fn priority_keywords(&self, text: &str) -> Vec<String> {
        self.lexicon
            .vocabulary_terms()
            .into_iter()
            .filter(|term| text.contains(term))
            .map(str::to_string)
            .collect()
    }

    fn word_frequencies<'a>(&self, words: &[&'a str]) -> IndexMap<&'a str, usize> {
        let mut counts = IndexMap::new();
        for &word in words {
            if char_len(word) >= MIN_WORD_LEN && !self.lexicon.is_stop_word(word) && !is_numeric(word)
            {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
        counts
    }

    fn phrase_frequencies(&self, words: &[&str]) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for start in 0..words.len() {
            for size in PHRASE_SIZES {
                let Some(window) = words.get(start..start + size) else {
                    continue;
                };
                if self.is_phrase(window) {
                    *counts.entry(window.join(" ")).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    fn is_phrase(&self, window: &[&str]) -> bool {
        let all_content = window
            .iter()
            .all(|w| char_len(w) >= MIN_PHRASE_WORD_LEN && !self.lexicon.is_stop_word(w));
        // "manager manager" is repetition, not a phrase
        let distinct = window
            .iter()
            .enumerate()
            .all(|(i, w)| !window[..i].contains(w));
        all_content && distinct
    }
}

/// Sorts by descending frequency; ties keep first-encounter order.
fn rank<K: ToString>(counts: IndexMap<K, usize>) -> Vec<String> {
    let mut entries: Vec<(K, usize)> = counts.into_iter().collect();
    entries.sort_by_key(|(_, count)| Reverse(*count));
    entries.into_iter().map(|(key, _)| key.to_string()).collect()
}

/// Removes every entry that is a substring of another entry.
///
/// Candidates are visited longest-phrase first and kept only when no kept entry
/// contains them; a second sweep drops anything still contained in a survivor
/// (same-length collisions such as "java" / "javascript"). Survivors are returned
/// in their original rank order.
pub fn remove_overlaps(candidates: &[String]) -> Vec<String> {
    let mut by_word_count: Vec<&str> = candidates.iter().map(String::as_str).collect();
    by_word_count.sort_by_key(|c| Reverse(c.split_whitespace().count()));

    let mut kept: Vec<&str> = Vec::new();
    for candidate in by_word_count {
        if !kept.iter().any(|k| k.contains(candidate)) {
            kept.push(candidate);
        }
    }

    let survivors: Vec<&str> = kept
        .iter()
        .enumerate()
        .filter(|&(i, entry)| {
            !kept
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && other.contains(entry))
        })
        .map(|(_, entry)| *entry)
        .collect();

    let mut ordered: Vec<String> = Vec::with_capacity(survivors.len());
    for candidate in candidates {
        if survivors.contains(&candidate.as_str()) && !ordered.contains(candidate) {
            ordered.push(candidate.clone());
        }
    }
    ordered
}

/// Extracts keywords with the built-in lexicon and default limits.
pub fn extract_top_keywords(job_description: &str) -> Vec<String> {
    KeywordExtractor::default().extract(job_description)
}
