use std::collections::HashMap;

use review_analyzer::error::ReviewError;
use review_analyzer::sentiment::{SentimentScorer, SentimentScores};

/// Deterministic scorer: each known body maps to a fixed compound score,
/// anything else scores zero.
pub struct ScriptedScorer {
    scores: HashMap<String, f64>,
}

impl ScriptedScorer {
    pub fn new(scores: &[(&str, f64)]) -> Self {
        Self {
            scores: scores
                .iter()
                .map(|(body, score)| (body.to_string(), *score))
                .collect(),
        }
    }
}

impl SentimentScorer for ScriptedScorer {
    fn score(&self, text: &str) -> Result<SentimentScores, ReviewError> {
        let compound = self.scores.get(text).copied().unwrap_or(0.0);
        Ok(SentimentScores {
            neg: if compound < 0.0 { 1.0 } else { 0.0 },
            neu: if compound == 0.0 { 1.0 } else { 0.0 },
            pos: if compound > 0.0 { 1.0 } else { 0.0 },
            compound,
        })
    }
}

/// Always fails, for exercising the fail-fast query path.
pub struct BrokenScorer;

impl SentimentScorer for BrokenScorer {
    fn score(&self, _text: &str) -> Result<SentimentScores, ReviewError> {
        Err(ReviewError::Analysis("scorer unavailable".into()))
    }
}
