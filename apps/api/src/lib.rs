//! ATS résumé scanner: scores a résumé against a job description.
//!
//! The [`analysis`] module is the pure core (keyword extraction, matching and
//! scoring); the remaining modules expose it over HTTP.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod pdf;
pub mod routes;
pub mod state;

pub use analysis::{analyze_keywords, calculate_scores, extract_top_keywords, MatchMap, ScoreResult};
