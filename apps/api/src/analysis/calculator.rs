//! Score calculator. Folds keyword coverage, structure, formatting, penalties and
//! relevance signals into an ATS score and an interview-probability estimate.
//!
//! `ats_score` is an additive accumulation clamped once at the end:
//!
//! keyword % + sections + formatting + penalties + industry + contact + education
//!
//! `interview_probability` is computed separately from a weighted sum with
//! threshold dampening and a role-context adjustment.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;

use crate::analysis::lexicon::{Industry, Lexicon, TermGroup};
use crate::analysis::matcher::MatchMap;
use crate::analysis::models::{
    ContactInfo, ContextMatch, EducationSignals, FormattingSignals, Penalties, ScoreResult,
};
use crate::analysis::patterns;
use crate::analysis::text::{char_len, normalize, tokens};

const SECTION_BONUS_MAX: i32 = 15;
const SECTIONS_FOR_FULL_BONUS: f64 = 6.0;

const BULLET_BONUS: i32 = 5;
const QUANTIFIED_BONUS: i32 = 5;
const ACTION_VERB_SCORE_MAX: i32 = 10;
const ACTION_VERBS_PER_POINT: u32 = 3;

const SHORT_RESUME_CHARS: usize = 1500;
const LONG_RESUME_CHARS: usize = 7000;
const SHORT_RESUME_PENALTY: i32 = -10;
const LONG_RESUME_PENALTY: i32 = -5;
const MARKUP_PENALTY: i32 = -5;

const STUFFING_MIN_WORD_LEN: usize = 4;
const STUFFING_SHARE: f64 = 0.05;
const STUFFING_PENALTY_PER_WORD: i32 = -2;
const STUFFING_PENALTY_MAX: i32 = -10;

const INDUSTRY_BONUS_MAX: f64 = 15.0;

const EMAIL_BONUS: i32 = 2;
const PHONE_BONUS: i32 = 2;
const LINKEDIN_BONUS: i32 = 1;
const PORTFOLIO_BONUS: i32 = 1;

const DEGREE_BONUS: i32 = 3;
const INSTITUTION_BONUS: i32 = 2;

const LOW_MATCH_THRESHOLD: u32 = 40;
const LOW_MATCH_MULTIPLIER: f64 = 0.4;
const LOW_MATCH_FLOOR: f64 = 5.0;
const PARTIAL_MATCH_THRESHOLD: u32 = 60;
const PARTIAL_MATCH_MULTIPLIER: f64 = 0.7;
const PARTIAL_MATCH_FLOOR: f64 = 15.0;

const CONTEXT_MIN_SHARE: f64 = 0.3;
const CONTEXT_MISS_MULTIPLIER: f64 = 0.6;
const CONTEXT_MISS_FLOOR: f64 = 10.0;
const CONTEXT_BONUS_PER_POINT: f64 = 0.03;

/// Weights of the interview-probability sum: 0.60 keyword + 0.25 ats + 0.15 terms.
#[derive(Debug, Clone, Copy)]
pub struct InterviewWeights {
    pub keyword_match: f64,
    pub ats: f64,
    pub term_match: f64,
}

impl Default for InterviewWeights {
    fn default() -> Self {
        Self {
            keyword_match: 0.60,
            ats: 0.25,
            term_match: 0.15,
        }
    }
}

/// The scorer trait. Implement this to swap scoring backends without touching the
/// handlers. Carried in `AppState` as `Arc<dyn AtsScorer>`.
pub trait AtsScorer: Send + Sync {
    fn score(&self, matches: &MatchMap, resume_text: &str, job_description: &str)
        -> ScoreResult;

    /// Backend label reported alongside results.
    fn backend(&self) -> &'static str;
}

static DEFAULT_SCORER: LazyLock<HeuristicScorer> = LazyLock::new(HeuristicScorer::default);

/// Hand-tuned heuristic scorer. Pure and deterministic.
#[derive(Debug, Clone)]
pub struct HeuristicScorer {
    lexicon: Lexicon,
    weights: InterviewWeights,
    /// Action verbs of `lexicon`, compiled once.
    action_verbs: Regex,
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new(Lexicon::builtin(), InterviewWeights::default())
    }
}

impl HeuristicScorer {
    pub fn new(lexicon: Lexicon, weights: InterviewWeights) -> Self {
        Self {
            action_verbs: patterns::word_set(lexicon.action_verbs),
            lexicon,
            weights,
        }
    }

    pub fn calculate(
        &self,
        matches: &MatchMap,
        resume_text: &str,
        job_description: &str,
    ) -> ScoreResult {
        let resume_lower = resume_text.to_lowercase();
        let job_lower = job_description.to_lowercase();

        let keyword_match_percentage = keyword_match_percentage(matches);
        let section_score = section_score(&self.lexicon, &resume_lower);
        let formatting = self.formatting_signals(resume_text);
        let penalties = Penalties {
            length_penalty: length_penalty(resume_text),
            formatting_penalty: formatting_penalty(resume_text),
            keyword_stuffing_penalty: keyword_stuffing_penalty(resume_text),
        };
        let (industry, industry_relevance_score) =
            industry_relevance(&self.lexicon, &resume_lower, &job_lower);
        let contact_info = contact_info(resume_text);
        let education = education(resume_text);

        let raw_ats = keyword_match_percentage as i32
            + section_score
            + formatting_bonus(&formatting)
            + penalties.total()
            + industry_relevance_score
            + contact_info.score
            + education.score;
        let ats_score = raw_ats.clamp(0, 100) as u32;

        let term_match_percentage =
            term_match_percentage(&self.lexicon, &resume_lower, &job_lower);
        let context_match = context_match(&self.lexicon, &resume_lower, &job_lower);
        let interview_probability = interview_probability(
            keyword_match_percentage,
            ats_score,
            term_match_percentage,
            &context_match,
            &self.weights,
        );

        debug!(
            keyword_match_percentage,
            raw_ats,
            ats_score,
            interview_probability,
            section_score,
            industry_relevance_score,
            penalties = penalties.total(),
            "scored resume"
        );

        ScoreResult {
            ats_score,
            keyword_match_percentage,
            interview_probability,
            missing_keywords: missing_keywords(matches),
            section_score,
            industry,
            industry_relevance_score,
            term_match_percentage,
            formatting,
            contact_info,
            education,
            penalties,
            context_match,
        }
    }

    pub fn formatting_signals(&self, resume_text: &str) -> FormattingSignals {
        let action_verb_count =
            patterns::count_distinct_words(&self.action_verbs, resume_text) as u32;
        FormattingSignals {
            has_bullet_points: patterns::has_bullet_points(resume_text),
            has_quantifiable_achievements: patterns::has_quantifiable_achievements(resume_text),
            action_verb_count,
            action_verb_score: ((action_verb_count / ACTION_VERBS_PER_POINT) as i32)
                .min(ACTION_VERB_SCORE_MAX),
        }
    }
}

impl AtsScorer for HeuristicScorer {
    fn score(
        &self,
        matches: &MatchMap,
        resume_text: &str,
        job_description: &str,
    ) -> ScoreResult {
        self.calculate(matches, resume_text, job_description)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

/// Scores with the built-in lexicon and default weights.
pub fn calculate_scores(matches: &MatchMap, resume_text: &str, job_description: &str) -> ScoreResult {
    DEFAULT_SCORER.calculate(matches, resume_text, job_description)
}

// ────────────────────────────────────────────────────────────────────────────
// ATS score components
// ────────────────────────────────────────────────────────────────────────────

/// round(100 × matched / total); 0 for an empty map.
pub fn keyword_match_percentage(matches: &MatchMap) -> u32 {
    let total = matches.len();
    if total == 0 {
        return 0;
    }
    let matched = matches.values().filter(|&&found| found).count();
    percentage(matched, total)
}

/// Keywords marked absent, in keyword-list order.
pub fn missing_keywords(matches: &MatchMap) -> Vec<String> {
    matches
        .iter()
        .filter(|&(_, &found)| !found)
        .map(|(keyword, _)| keyword.clone())
        .collect()
}

/// min(15, round(headers_found / 6 × 15)).
pub fn section_score(lexicon: &Lexicon, resume_lower: &str) -> i32 {
    let found = lexicon
        .section_headers
        .iter()
        .filter(|header| resume_lower.contains(**header))
        .count();
    let bonus = (found as f64 / SECTIONS_FOR_FULL_BONUS * SECTION_BONUS_MAX as f64).round() as i32;
    bonus.min(SECTION_BONUS_MAX)
}

pub fn formatting_bonus(signals: &FormattingSignals) -> i32 {
    let mut bonus = signals.action_verb_score;
    if signals.has_bullet_points {
        bonus += BULLET_BONUS;
    }
    if signals.has_quantifiable_achievements {
        bonus += QUANTIFIED_BONUS;
    }
    bonus
}

/// −10 under 1500 characters, −5 over 7000.
pub fn length_penalty(resume_text: &str) -> i32 {
    let length = char_len(resume_text);
    if length < SHORT_RESUME_CHARS {
        SHORT_RESUME_PENALTY
    } else if length > LONG_RESUME_CHARS {
        LONG_RESUME_PENALTY
    } else {
        0
    }
}

pub fn formatting_penalty(resume_text: &str) -> i32 {
    if patterns::has_markup(resume_text) {
        MARKUP_PENALTY
    } else {
        0
    }
}

/// −2 per word (longer than 3 chars) making up more than 5% of all such words,
/// capped at −10.
pub fn keyword_stuffing_penalty(resume_text: &str) -> i32 {
    let normalized = normalize(resume_text);
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for word in tokens(&normalized) {
        if char_len(word) >= STUFFING_MIN_WORD_LEN {
            *counts.entry(word).or_insert(0) += 1;
        }
    }
    let total: usize = counts.values().sum();
    if total == 0 {
        return 0;
    }
    let stuffed = counts
        .values()
        .filter(|&&count| count as f64 / total as f64 > STUFFING_SHARE)
        .count() as i32;
    (stuffed * STUFFING_PENALTY_PER_WORD).max(STUFFING_PENALTY_MAX)
}

/// Infers the job's industry (highest term share, earlier entry on ties) and
/// returns round(15 × résumé share of that industry's terms).
pub fn industry_relevance(
    lexicon: &Lexicon,
    resume_lower: &str,
    job_lower: &str,
) -> (Option<Industry>, i32) {
    let Some((group, _)) = best_group(lexicon.industries, job_lower, 0.0) else {
        return (None, 0);
    };
    let coverage = term_share(group.terms, resume_lower);
    (Some(group.label), (coverage * INDUSTRY_BONUS_MAX).round() as i32)
}

/// +2 email, +2 phone, +1 LinkedIn, +1 portfolio.
pub fn contact_info(resume_text: &str) -> ContactInfo {
    let has_email = patterns::has_email(resume_text);
    let has_phone = patterns::has_phone(resume_text);
    let has_linkedin = patterns::has_linkedin(resume_text);
    let has_portfolio = patterns::has_portfolio(resume_text);
    let score = [
        (has_email, EMAIL_BONUS),
        (has_phone, PHONE_BONUS),
        (has_linkedin, LINKEDIN_BONUS),
        (has_portfolio, PORTFOLIO_BONUS),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, bonus)| bonus)
    .sum();
    ContactInfo {
        has_email,
        has_phone,
        has_linkedin,
        has_portfolio,
        score,
    }
}

/// +3 degree keyword, +2 institution keyword.
pub fn education(resume_text: &str) -> EducationSignals {
    let has_degree = patterns::has_degree(resume_text);
    let has_institution = patterns::has_institution(resume_text);
    let mut score = 0;
    if has_degree {
        score += DEGREE_BONUS;
    }
    if has_institution {
        score += INSTITUTION_BONUS;
    }
    EducationSignals {
        has_degree,
        has_institution,
        score,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interview probability
// ────────────────────────────────────────────────────────────────────────────

/// Share of the job's seniority/qualification terms the résumé also mentions.
/// 100 when the job mentions none.
pub fn term_match_percentage(lexicon: &Lexicon, resume_lower: &str, job_lower: &str) -> u32 {
    let required: Vec<&str> = lexicon
        .seniority_terms
        .iter()
        .copied()
        .filter(|term| job_lower.contains(term))
        .collect();
    if required.is_empty() {
        return 100;
    }
    let matched = required
        .iter()
        .filter(|term| resume_lower.contains(**term))
        .count();
    percentage(matched, required.len())
}

/// Picks the job context whose term share exceeds 30% (best share wins) and
/// measures the résumé against it.
pub fn context_match(lexicon: &Lexicon, resume_lower: &str, job_lower: &str) -> ContextMatch {
    let Some((group, _)) = best_group(lexicon.contexts, job_lower, CONTEXT_MIN_SHARE) else {
        return ContextMatch::default();
    };
    let resume_terms = group
        .terms
        .iter()
        .filter(|term| resume_lower.contains(**term))
        .count();
    let share = resume_terms as f64 / group.terms.len() as f64;
    ContextMatch {
        context: Some(group.label),
        resume_terms: resume_terms as u32,
        score: (share * 10.0).round() as i32,
    }
}

/// Weighted sum, dampened for weak keyword coverage, adjusted for role context,
/// clamped to 0 – 100.
pub fn interview_probability(
    keyword_match_percentage: u32,
    ats_score: u32,
    term_match_percentage: u32,
    context: &ContextMatch,
    weights: &InterviewWeights,
) -> u32 {
    let mut probability = weights.keyword_match * keyword_match_percentage as f64
        + weights.ats * ats_score.min(100) as f64
        + weights.term_match * term_match_percentage as f64;

    if keyword_match_percentage < LOW_MATCH_THRESHOLD {
        probability = (probability * LOW_MATCH_MULTIPLIER).max(LOW_MATCH_FLOOR);
    } else if keyword_match_percentage < PARTIAL_MATCH_THRESHOLD {
        probability = (probability * PARTIAL_MATCH_MULTIPLIER).max(PARTIAL_MATCH_FLOOR);
    }

    if context.context.is_some() {
        if context.resume_terms == 0 {
            probability = (probability * CONTEXT_MISS_MULTIPLIER).max(CONTEXT_MISS_FLOOR);
        } else {
            probability += context.score as f64 * CONTEXT_BONUS_PER_POINT;
        }
    }

    probability.clamp(0.0, 100.0).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn percentage(part: usize, whole: usize) -> u32 {
    (part as f64 / whole as f64 * 100.0).round() as u32
}

fn term_share(terms: &[&str], text: &str) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    let found = terms.iter().filter(|term| text.contains(**term)).count();
    found as f64 / terms.len() as f64
}

/// Group with the highest share of its terms in `text`, if that share is above
/// `min_share`. Earlier groups win ties.
fn best_group<L: Copy>(
    groups: &[TermGroup<L>],
    text: &str,
    min_share: f64,
) -> Option<(TermGroup<L>, f64)> {
    let mut best: Option<(TermGroup<L>, f64)> = None;
    for group in groups {
        let share = term_share(group.terms, text);
        if share > min_share && best.map_or(true, |(_, top)| share > top) {
            best = Some((*group, share));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::extract_top_keywords;
    use crate::analysis::lexicon::JobContext;
    use crate::analysis::matcher::analyze_keywords;

    fn map(entries: &[(&str, bool)]) -> MatchMap {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn lexicon() -> Lexicon {
        Lexicon::builtin()
    }

    /// 400 distinct filler tokens, ~2.7k characters, no other signals.
    fn neutral_resume() -> String {
        (0..400).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ")
    }

    fn raw_ats(result: &ScoreResult) -> i32 {
        result.keyword_match_percentage as i32
            + result.section_score
            + formatting_bonus(&result.formatting)
            + result.penalties.total()
            + result.industry_relevance_score
            + result.contact_info.score
            + result.education.score
    }

    const JOB: &str = r#"
        Senior Data Engineer. You will build batch and streaming pipelines with Spark,
        Kafka and Airflow on AWS, model the data warehouse, and mentor analysts.
        Bachelor degree in computer science or equivalent. 5+ years of experience with
        Python and SQL. Strong data analysis and statistics background.
    "#;

    #[test]
    fn test_keyword_match_percentage_rounds() {
        assert_eq!(keyword_match_percentage(&map(&[("a", true), ("b", true), ("c", true), ("d", false)])), 75);
        assert_eq!(keyword_match_percentage(&map(&[("a", true), ("b", false), ("c", false)])), 33);
        assert_eq!(keyword_match_percentage(&map(&[("a", true), ("b", true), ("c", false)])), 67);
    }

    #[test]
    fn test_empty_match_map_scores_zero_percent() {
        let result = calculate_scores(&MatchMap::new(), "resume", "job");
        assert_eq!(result.keyword_match_percentage, 0);
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_missing_keywords_follow_list_order() {
        let matches = map(&[("rust", false), ("go", true), ("kafka", false)]);
        let result = calculate_scores(&matches, "go", "");
        assert_eq!(result.missing_keywords, vec!["rust", "kafka"]);
        let found = matches.values().filter(|&&hit| hit).count();
        assert_eq!(result.missing_keywords.len() + found, matches.len());
        assert_eq!(result.matched_keywords(matches.len()), found);
    }

    #[test]
    fn test_section_score_scales_and_caps() {
        assert_eq!(section_score(&lexicon(), "nothing relevant"), 0);
        // 3 of 6 → round(7.5) = 8
        assert_eq!(section_score(&lexicon(), "experience education skills"), 8);
        assert_eq!(
            section_score(&lexicon(), "experience education skills summary projects certifications awards"),
            15
        );
    }

    #[test]
    fn test_formatting_signals_and_bonus() {
        let signals =
            HeuristicScorer::default().formatting_signals("- Did X\nDrove a 50% increase in sales");
        assert!(signals.has_bullet_points);
        assert!(signals.has_quantifiable_achievements);
        assert_eq!(signals.action_verb_count, 1);
        assert_eq!(signals.action_verb_score, 0);
        assert_eq!(formatting_bonus(&signals), 10);
    }

    #[test]
    fn test_action_verb_score_is_count_over_three() {
        let text = "Led, managed, built, designed, launched, reduced and mentored.";
        let signals = HeuristicScorer::default().formatting_signals(text);
        assert_eq!(signals.action_verb_count, 7);
        assert_eq!(signals.action_verb_score, 2);
    }

    #[test]
    fn test_repeated_action_verb_counts_once() {
        let signals = HeuristicScorer::default().formatting_signals("Led X. LED Y. led Z.");
        assert_eq!(signals.action_verb_count, 1);
    }

    #[test]
    fn test_action_verb_score_caps_at_ten() {
        let all = lexicon().action_verbs.join(" ");
        let signals = HeuristicScorer::default().formatting_signals(&all);
        assert_eq!(signals.action_verb_count, 40);
        assert_eq!(signals.action_verb_score, 10);
    }

    #[test]
    fn test_length_penalty_bounds() {
        assert_eq!(length_penalty(&"a".repeat(1499)), -10);
        assert_eq!(length_penalty(&"a".repeat(1500)), 0);
        assert_eq!(length_penalty(&"a".repeat(7000)), 0);
        assert_eq!(length_penalty(&"a".repeat(7001)), -5);
    }

    #[test]
    fn test_formatting_penalty_on_markup() {
        assert_eq!(formatting_penalty("Acme Corp | 2019 - 2023"), -5);
        assert_eq!(formatting_penalty("Acme Corp, 2019 to 2023"), 0);
    }

    #[test]
    fn test_keyword_stuffing_penalty() {
        let mut words: Vec<String> = (0..100).map(|i| format!("term{i}")).collect();
        assert_eq!(keyword_stuffing_penalty(&words.join(" ")), 0);

        words.extend(std::iter::repeat("python".to_string()).take(10));
        assert_eq!(keyword_stuffing_penalty(&words.join(" ")), -2);

        for stuffed in ["kafka", "spark", "scala", "flink", "hadoop"] {
            words.extend(std::iter::repeat(stuffed.to_string()).take(10));
        }
        assert_eq!(keyword_stuffing_penalty(&words.join(" ")), -10);
    }

    #[test]
    fn test_short_words_do_not_count_as_stuffing() {
        assert_eq!(keyword_stuffing_penalty("the the the the and and git git"), 0);
    }

    #[test]
    fn test_industry_relevance() {
        let job = "software developer cloud database";
        assert_eq!(
            industry_relevance(&lexicon(), "software and cloud", job),
            (Some(Industry::Technology), 2)
        );
        assert_eq!(
            industry_relevance(&lexicon(), "gardening", job),
            (Some(Industry::Technology), 0)
        );
        assert_eq!(industry_relevance(&lexicon(), "software", "gardening"), (None, 0));
    }

    #[test]
    fn test_contact_info() {
        let full = contact_info(
            "jane@doe.com · (555) 123-4567 · linkedin.com/in/jane · github.com/jane",
        );
        assert!(full.has_email && full.has_phone && full.has_linkedin && full.has_portfolio);
        assert_eq!(full.score, 6);

        let email_only = contact_info("jane@doe.com");
        assert_eq!(email_only.score, 2);
        assert_eq!(contact_info("no contact details").score, 0);
    }

    #[test]
    fn test_education() {
        let signals = education("Bachelor of Science, State University");
        assert!(signals.has_degree && signals.has_institution);
        assert_eq!(signals.score, 5);
        assert_eq!(education("Self-taught").score, 0);
    }

    #[test]
    fn test_term_match_percentage() {
        assert_eq!(term_match_percentage(&lexicon(), "anything", "junior role"), 100);
        assert_eq!(
            term_match_percentage(&lexicon(), "senior developer", "senior engineer with a degree"),
            50
        );
    }

    #[test]
    fn test_context_match() {
        let job = "manage the team strategy budget as director with leadership";
        let miss = context_match(&lexicon(), "painted watercolours", job);
        assert_eq!(miss.context, Some(JobContext::Management));
        assert_eq!(miss.resume_terms, 0);
        assert_eq!(miss.score, 0);

        let hit = context_match(&lexicon(), "managed a team", job);
        assert_eq!(hit.resume_terms, 2);
        assert_eq!(hit.score, 2);

        assert_eq!(context_match(&lexicon(), "anything", "gardening").context, None);
    }

    #[test]
    fn test_context_needs_more_than_thirty_percent_of_terms() {
        // 3 of 10 management terms is exactly 0.3
        let at_threshold = context_match(&lexicon(), "strategy", "strategy budget director");
        assert_eq!(at_threshold.context, None);
        assert_eq!(at_threshold.score, 0);

        let above = context_match(&lexicon(), "strategy", "strategy budget director oversee");
        assert_eq!(above.context, Some(JobContext::Management));
        assert_eq!(above.resume_terms, 1);
        assert_eq!(above.score, 1);
    }

    #[test]
    fn test_interview_probability_weighted_sum() {
        let none = ContextMatch::default();
        let w = InterviewWeights::default();
        assert_eq!(interview_probability(100, 100, 100, &none, &w), 100);
        // 0.6*80 + 0.25*70 + 0.15*60 = 48 + 17.5 + 9 = 74.5
        assert_eq!(interview_probability(80, 70, 60, &none, &w), 75);
    }

    #[test]
    fn test_interview_probability_dampening() {
        let none = ContextMatch::default();
        let w = InterviewWeights::default();
        // (18 + 12.5 + 15) * 0.4 = 18.2
        assert_eq!(interview_probability(30, 50, 100, &none, &w), 18);
        // (30 + 10 + 0) * 0.7 = 28
        assert_eq!(interview_probability(50, 40, 0, &none, &w), 28);
        assert_eq!(interview_probability(0, 0, 0, &none, &w), 5);
        assert_eq!(interview_probability(40, 0, 0, &none, &w), 17);
        assert_eq!(interview_probability(59, 0, 0, &none, &w), 25);
    }

    #[test]
    fn test_interview_probability_context_adjustment() {
        let w = InterviewWeights::default();
        let miss = ContextMatch {
            context: Some(JobContext::Technical),
            resume_terms: 0,
            score: 0,
        };
        assert_eq!(interview_probability(100, 100, 100, &miss, &w), 60);
        assert_eq!(interview_probability(0, 0, 0, &miss, &w), 10);

        let hit = ContextMatch {
            context: Some(JobContext::Technical),
            resume_terms: 5,
            score: 5,
        };
        // 80 + 5 * 0.03
        assert_eq!(interview_probability(80, 80, 80, &hit, &w), 80);
        assert_eq!(interview_probability(100, 100, 100, &hit, &w), 100);
    }

    #[test]
    fn test_ats_score_is_clamped_sum_of_components() {
        let resume = format!("{}\nexperience education skills jane@doe.com", neutral_resume());
        let result = calculate_scores(&map(&[("a", true), ("b", false)]), &resume, JOB);
        assert_eq!(result.ats_score as i32, raw_ats(&result).clamp(0, 100));
    }

    #[test]
    fn test_short_resume_gets_length_penalty() {
        let resume = "Data engineer. Python, SQL, Spark.";
        let matches = analyze_keywords(resume, &extract_top_keywords(JOB));
        let result = calculate_scores(&matches, resume, JOB);
        assert_eq!(result.penalties.length_penalty, -10);
        assert_eq!(result.ats_score as i32, raw_ats(&result).clamp(0, 100));
    }

    #[test]
    fn test_bullets_and_quantified_results_add_five_each() {
        let matches = map(&[("a", true), ("b", false)]);
        let plain = neutral_resume();
        let rich = format!("{plain}\n- Did X with a 50% increase");

        let without = calculate_scores(&matches, &plain, "");
        let with = calculate_scores(&matches, &rich, "");

        assert!(!without.formatting.has_bullet_points);
        assert!(!without.formatting.has_quantifiable_achievements);
        assert!(with.formatting.has_bullet_points);
        assert!(with.formatting.has_quantifiable_achievements);
        assert_eq!(without.ats_score, 50);
        assert_eq!(with.ats_score, 60);
    }

    #[test]
    fn test_unrelated_resume_against_repeated_manager() {
        let job = "manager manager manager manager";
        let resume = "I enjoy gardening and painting landscapes.";
        let keywords = extract_top_keywords(job);
        assert!(keywords.contains(&"manager".to_string()));

        let matches = analyze_keywords(resume, &keywords);
        assert_eq!(matches["manager"], false);

        let result = calculate_scores(&matches, resume, job);
        assert_eq!(result.keyword_match_percentage, 0);
        assert!(result.interview_probability <= 15, "got {}", result.interview_probability);
    }

    #[test]
    fn test_resume_identical_to_job_is_not_dampened() {
        let keywords = extract_top_keywords(JOB);
        let matches = analyze_keywords(JOB, &keywords);
        let result = calculate_scores(&matches, JOB, JOB);

        assert_eq!(result.keyword_match_percentage, 100);
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.term_match_percentage, 100);
        let expected = interview_probability(
            100,
            result.ats_score,
            100,
            &result.context_match,
            &InterviewWeights::default(),
        );
        assert_eq!(result.interview_probability, expected);
        assert!(result.interview_probability >= 60);
    }

    #[test]
    fn test_scores_stay_in_range_for_extreme_inputs() {
        let stuffed = "python ".repeat(5000);
        let markup = "| { } [ ] \\ ** __ https://x ".repeat(400);
        let loaded = format!(
            "{}\n{}",
            lexicon().action_verbs.join("\n- "),
            lexicon().section_headers.join(" ")
        );
        let inputs = [
            ("", ""),
            (stuffed.as_str(), ""),
            (markup.as_str(), JOB),
            (loaded.as_str(), loaded.as_str()),
        ];
        for (resume, job) in inputs {
            for matches in [map(&[]), map(&[("x", true)]), map(&[("x", false)])] {
                let result = calculate_scores(&matches, resume, job);
                assert!(result.ats_score <= 100);
                assert!(result.interview_probability <= 100);
                assert!(result.keyword_match_percentage <= 100);
            }
        }
    }

    #[test]
    fn test_penalties_are_never_positive() {
        let result = calculate_scores(&map(&[("x", true)]), &"word ".repeat(3000), "");
        assert!(result.penalties.length_penalty <= 0);
        assert!(result.penalties.formatting_penalty <= 0);
        assert!(result.penalties.keyword_stuffing_penalty <= 0);
        assert_eq!(result.penalties.length_penalty, -5);
        assert_eq!(result.penalties.keyword_stuffing_penalty, -2);
    }
}
