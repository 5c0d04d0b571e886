//! Text normalization shared by the extractor, the matcher and the calculator.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is neither a word character nor whitespace.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Lowercases, strips punctuation and collapses whitespace runs to a single space.
///
/// Lossy: "node.js" becomes "nodejs" and "cross-functional" becomes "crossfunctional".
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace tokens of already-normalized text.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Character length, not byte length.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
