//! Keyword matching: decides, per keyword, whether the résumé mentions it.
//!
//! Matching is deliberately permissive: a keyword counts as found when any of its
//! lexical variants shows up anywhere in the résumé. False positives ("java" inside
//! "javascript") are accepted in exchange for very few false negatives.

use indexmap::IndexMap;

use crate::analysis::text::{char_len, normalize};

/// Keyword → found, in keyword-list order.
pub type MatchMap = IndexMap<String, bool>;

/// Suffix-stripped variants shorter than this are discarded.
const MIN_STEM_LEN: usize = 3;

/// Matches every keyword against the résumé text.
pub fn analyze_keywords(resume_text: &str, keywords: &[String]) -> MatchMap {
    let resume = ResumeText::new(resume_text);
    keywords
        .iter()
        .map(|keyword| (keyword.clone(), resume.mentions(keyword)))
        .collect()
}

/// The résumé in the three shapes variants are tested against.
struct ResumeText {
    lowered: String,
    normalized: String,
    /// Lowercased, hyphens and whitespace runs folded into single spaces.
    spaced: String,
}

impl ResumeText {
    fn new(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let spaced = lowered
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            normalized: normalize(text),
            lowered,
            spaced,
        }
    }

    fn mentions(&self, keyword: &str) -> bool {
        keyword_variants(keyword)
            .iter()
            .any(|variant| self.contains_variant(variant))
    }

    /// Substring test against every shape. Against `spaced`, the variant's own
    /// hyphens count as spaces, so "machine-learning" and "machine\n learning" agree.
    fn contains_variant(&self, variant: &str) -> bool {
        self.lowered.contains(variant)
            || self.normalized.contains(variant)
            || self.spaced.contains(&variant.replace('-', " "))
    }
}

/// Lowercased lexical variants of a keyword: the literal form, hyphen/space swaps,
/// suffix-stripped stems and a camelCase split. Deduplicated, literal first.
pub fn keyword_variants(keyword: &str) -> Vec<String> {
    let trimmed = keyword.trim();
    let lowered = trimmed.to_lowercase();
    if lowered.is_empty() {
        return Vec::new();
    }

    let mut candidates = vec![
        lowered.clone(),
        lowered.replace('-', " "),
        lowered.replace(' ', "-"),
    ];
    candidates.extend(
        suffix_stems(&lowered)
            .into_iter()
            .filter(|stem| char_len(stem) >= MIN_STEM_LEN),
    );
    candidates.push(split_camel_case(trimmed));

    let mut variants: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

fn suffix_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();
    if let Some(stem) = word.strip_suffix("ing") {
        stems.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        stems.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix("ed") {
        stems.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix("tion") {
        stems.push(format!("{stem}t"));
    }
    if let Some(stem) = word.strip_suffix("ly") {
        stems.push(stem.to_string());
    }
    stems
}

/// "PowerPoint" → "power point".
fn split_camel_case(word: &str) -> String {
    let mut spaced = String::with_capacity(word.len() + 4);
    let mut previous: Option<char> = None;
    for c in word.chars() {
        if c.is_uppercase() && previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            spaced.push(' ');
        }
        spaced.extend(c.to_lowercase());
        previous = Some(c);
    }
    spaced
}
