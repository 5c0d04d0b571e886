//! Regex predicates over raw résumé text.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[•\-]\s").unwrap());

/// Percentages, or a growth/reduction verb followed by a number within the clause.
static QUANTIFIED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d+(?:\.\d+)?\s*%|\b(?:increased|decreased|reduced|improved|grew|boosted|cut|saved|raised|lowered)\b[^.\n]{0,40}?\$?\d",
    )
    .unwrap()
});

/// Pipes, braces, brackets, backslashes, URL schemes and markdown emphasis.
static MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[|{}\[\]\\]|https?://|\*\*|__|~~").unwrap());

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap()
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[\s.\-]?)?\(?\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4}\b").unwrap()
});

static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/(?:in|pub)/[\w\-%]+").unwrap());

static PORTFOLIO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:github\.com|gitlab\.com|bitbucket\.org|behance\.net|dribbble\.com)/[\w\-.]+|\bportfolio\s*:\s*\S+",
    )
    .unwrap()
});

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:bachelor|master|phd|mba|bs|ba|ms|ma|doctorate|degree)s?\b").unwrap()
});

static INSTITUTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:university|college|institute|school)\b").unwrap());

/// `•` or `-` followed by whitespace.
pub fn has_bullet_points(text: &str) -> bool {
    BULLET_RE.is_match(text)
}

pub fn has_quantifiable_achievements(text: &str) -> bool {
    QUANTIFIED_RE.is_match(text)
}

pub fn has_markup(text: &str) -> bool {
    MARKUP_RE.is_match(text)
}

pub fn has_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    PHONE_RE.is_match(text)
}

pub fn has_linkedin(text: &str) -> bool {
    LINKEDIN_RE.is_match(text)
}

/// Git hosting or design-portfolio profile links.
pub fn has_portfolio(text: &str) -> bool {
    PORTFOLIO_RE.is_match(text)
}

pub fn has_degree(text: &str) -> bool {
    DEGREE_RE.is_match(text)
}

pub fn has_institution(text: &str) -> bool {
    INSTITUTION_RE.is_match(text)
}

/// Case-insensitive whole-word alternation over `terms`. Build once per table.
pub fn word_set(terms: &[&str]) -> Regex {
    let alternation = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
        .expect("alternation of escaped literals is a valid pattern")
}

/// Number of distinct terms of a [`word_set`] that occur in `text`.
pub fn count_distinct_words(set: &Regex, text: &str) -> usize {
    set.find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| m.as_str().to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}
