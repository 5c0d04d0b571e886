use std::sync::Arc;

use crate::analysis::calculator::{AtsScorer, HeuristicScorer, InterviewWeights};
use crate::analysis::extractor::KeywordExtractor;
use crate::analysis::lexicon::Lexicon;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Keyword extractor built from the configured limits.
    pub extractor: KeywordExtractor,
    /// Pluggable scorer. Default: HeuristicScorer.
    pub scorer: Arc<dyn AtsScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let lexicon = Lexicon::builtin();
        Self {
            extractor: KeywordExtractor::new(lexicon, config.extractor),
            scorer: Arc::new(HeuristicScorer::new(lexicon, InterviewWeights::default())),
            config,
        }
    }
}
