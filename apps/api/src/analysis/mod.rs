// Résumé analysis: keyword extraction, keyword matching and ATS scoring.
// Everything except `handlers` is pure, synchronous and free of I/O.

pub mod calculator;
pub mod extractor;
pub mod handlers;
pub mod lexicon;
pub mod matcher;
pub mod models;
pub mod patterns;
pub mod report;
pub mod text;

pub use calculator::calculate_scores;
pub use extractor::extract_top_keywords;
pub use matcher::{analyze_keywords, MatchMap};
pub use models::ScoreResult;
