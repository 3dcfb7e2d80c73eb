//! # Sentiment
//!
//! Scores review text on demand. Scores are attached to query results and
//! never written back to the store.
//!
//! The scorer is injected into the query engine as `Arc<dyn SentimentScorer>`
//! so tests and alternative algorithms can swap it out.

pub mod analyzer;
pub mod lexicon;

use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

pub use analyzer::LexiconScorer;

/// Polarity breakdown for one piece of text.
///
/// `neg`, `neu` and `pos` are proportions of the text that fall in each
/// category and sum to roughly 1. `compound` is the normalized overall
/// score in `[-1, 1]` and is what results are ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl SentimentScores {
    /// Scores for text with no tokens; `neu` is 0 because nothing was counted.
    pub const EMPTY: SentimentScores = SentimentScores {
        neg: 0.0,
        neu: 0.0,
        pos: 0.0,
        compound: 0.0,
    };
}

pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<SentimentScores, ReviewError>;
}
