//! Scan report envelope returned by the HTTP surface, plus the display tiers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::matcher::MatchMap;
use crate::analysis::models::ScoreResult;

/// Presentation band for a 0 – 100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreTier {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreTier::Excellent
        } else if score >= 60 {
            ScoreTier::Good
        } else {
            ScoreTier::NeedsImprovement
        }
    }
}

/// Human-readable guidance for an interview-probability value.
pub fn interview_advice(probability: u32) -> String {
    match ScoreTier::from_score(probability) {
        ScoreTier::Excellent => {
            "Excellent! You have a high probability of getting an interview call.".to_string()
        }
        ScoreTier::Good => "Good! You have a moderate chance of getting an interview. \
             Consider adding the missing keywords to improve your chances."
            .to_string(),
        ScoreTier::NeedsImprovement => "Your resume needs improvement to increase your \
             interview chances. Add the missing keywords and strengthen quantified results."
            .to_string(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub scan_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub resume_file_name: Option<String>,
    pub top_keywords: Vec<String>,
    pub keyword_matches: MatchMap,
    pub scores: ScoreResult,
    pub ats_tier: ScoreTier,
    pub interview_tier: ScoreTier,
    pub interview_advice: String,
    pub scorer_backend: String,
}

impl ScanReport {
    pub fn new(
        resume_file_name: Option<String>,
        top_keywords: Vec<String>,
        keyword_matches: MatchMap,
        scores: ScoreResult,
        scorer_backend: &str,
    ) -> Self {
        Self {
            scan_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            resume_file_name,
            top_keywords,
            keyword_matches,
            ats_tier: ScoreTier::from_score(scores.ats_score),
            interview_tier: ScoreTier::from_score(scores.interview_probability),
            interview_advice: interview_advice(scores.interview_probability),
            scores,
            scorer_backend: scorer_backend.to_string(),
        }
    }
}
