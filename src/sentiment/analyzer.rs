//! # Sentiment Analyzer
//!
//! Rule-based scorer over [`ReviewLexicon`]. Per token it looks up a valence,
//! then adjusts it for:
//! 1. ALL-CAPS emphasis when the rest of the text is mixed case
//! 2. degree modifiers in the three preceding tokens (decaying with distance)
//! 3. negation in the three preceding tokens
//!
//! A contrastive "but" shifts weight onto the clause after it, and trailing
//! `!`/`?` punctuation amplifies the overall polarity. The summed valence is
//! normalized into `compound`; `pos`/`neg`/`neu` are the proportions of
//! positive, negative and neutral tokens.

use super::lexicon::ReviewLexicon;
use super::{SentimentScorer, SentimentScores};
use crate::error::ReviewError;

/// Valence added to an all-caps sentiment word in mixed-case text.
const CAPS_INCR: f64 = 0.733;
/// Multiplier applied to a negated valence.
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant for the compound score.
const ALPHA: f64 = 15.0;
/// Booster weight by distance from the sentiment word (1, 2 or 3 tokens back).
const BOOSTER_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

const MAX_EXCLAMATIONS: usize = 4;
const EXCLAMATION_INCR: f64 = 0.292;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_MAX: f64 = 0.96;

pub struct LexiconScorer {
    lexicon: ReviewLexicon,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::with_lexicon(ReviewLexicon::new())
    }

    pub fn with_lexicon(lexicon: ReviewLexicon) -> Self {
        Self { lexicon }
    }

    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScores::EMPTY;
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let caps_count = tokens.iter().filter(|t| is_all_caps(t)).count();
        let caps_differ = caps_count > 0 && caps_count < tokens.len();

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, word) in lowered.iter().enumerate() {
            if self.lexicon.booster(word).is_some() || is_kind_of(&lowered, i) {
                sentiments.push(0.0);
                continue;
            }

            let Some(mut valence) = self.lexicon.valence(word) else {
                sentiments.push(0.0);
                continue;
            };

            if caps_differ && is_all_caps(tokens[i]) {
                valence += CAPS_INCR.copysign(valence);
            }

            let mut negated = false;
            for (distance, decay) in BOOSTER_DECAY.iter().enumerate() {
                let Some(prev_index) = i.checked_sub(distance + 1) else {
                    break;
                };
                let prev = &lowered[prev_index];

                if let Some(mut scalar) = self.lexicon.booster(prev) {
                    if valence < 0.0 {
                        scalar = -scalar;
                    }
                    if caps_differ && is_all_caps(tokens[prev_index]) {
                        scalar += CAPS_INCR.copysign(scalar);
                    }
                    valence += scalar * decay;
                }

                if self.lexicon.is_negation(prev) {
                    negated = true;
                }
            }

            if negated {
                valence *= NEGATION_SCALAR;
            }

            sentiments.push(valence);
        }

        apply_but_shift(&lowered, &mut sentiments);

        let punctuation = punctuation_emphasis(text);
        score_valence(&sentiments, punctuation)
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScores, ReviewError> {
        Ok(self.polarity_scores(text))
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().filter(|c| c.is_alphabetic()).count() > 1
        && token
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase())
}

fn is_kind_of(lowered: &[String], i: usize) -> bool {
    lowered[i] == "kind" && lowered.get(i + 1).is_some_and(|next| next == "of")
}

/// Halves sentiment before the first "but" and boosts it by half after.
fn apply_but_shift(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = lowered.iter().position(|w| w == "but") else {
        return;
    };

    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < but_index {
            *sentiment *= 0.5;
        } else if i > but_index {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_MAX,
    };

    exclamations as f64 * EXCLAMATION_INCR + question_amp
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], punctuation: f64) -> SentimentScores {
    let mut total: f64 = sentiments.iter().sum();
    if total > 0.0 {
        total += punctuation;
    } else if total < 0.0 {
        total -= punctuation;
    }
    let compound = normalize(total);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            pos_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            neg_sum += sentiment - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += punctuation;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punctuation;
    }

    let denominator = pos_sum + neg_sum.abs() + neu_count;
    if denominator == 0.0 {
        return SentimentScores::EMPTY;
    }

    SentimentScores {
        neg: round_to((neg_sum / denominator).abs(), 3),
        neu: round_to((neu_count / denominator).abs(), 3),
        pos: round_to((pos_sum / denominator).abs(), 3),
        compound: round_to(compound, 4),
    }
}
