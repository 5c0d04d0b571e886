use serde::Serialize;

use crate::analysis::lexicon::{Industry, JobContext};

/// Bullet / quantified-achievement / action-verb signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattingSignals {
    pub has_bullet_points: bool,
    pub has_quantifiable_achievements: bool,
    /// Distinct action verbs found in the résumé.
    pub action_verb_count: u32,
    pub action_verb_score: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linkedin: bool,
    pub has_portfolio: bool,
    pub score: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EducationSignals {
    pub has_degree: bool,
    pub has_institution: bool,
    pub score: i32,
}

/// Deductions already folded into `ats_score`. Every field is zero or negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Penalties {
    pub length_penalty: i32,
    pub formatting_penalty: i32,
    pub keyword_stuffing_penalty: i32,
}

impl Penalties {
    pub fn total(&self) -> i32 {
        self.length_penalty + self.formatting_penalty + self.keyword_stuffing_penalty
    }
}

/// Best-matching role archetype for the job and how well the résumé speaks to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContextMatch {
    /// `None` when no archetype covers more than 30% of its terms in the job text.
    pub context: Option<JobContext>,
    /// Context terms found in the résumé.
    pub resume_terms: u32,
    /// round(10 × résumé share of the context terms).
    pub score: i32,
}

/// Full result of scoring one résumé against one job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreResult {
    pub ats_score: u32,                // 0 – 100
    pub keyword_match_percentage: u32, // 0 – 100
    pub interview_probability: u32,    // 0 – 100
    pub missing_keywords: Vec<String>,
    pub section_score: i32,
    pub industry: Option<Industry>,
    pub industry_relevance_score: i32,
    pub term_match_percentage: u32,
    pub formatting: FormattingSignals,
    pub contact_info: ContactInfo,
    pub education: EducationSignals,
    pub penalties: Penalties,
    pub context_match: ContextMatch,
}

impl ScoreResult {
    pub fn matched_keywords(&self, total_keywords: usize) -> usize {
        total_keywords.saturating_sub(self.missing_keywords.len())
    }
}
