//! # Review Lexicon
//!
//! Word valences for customer-review text, on a `-4.0..=4.0` scale, plus the
//! negation and degree-modifier word lists the analyzer consults.

use std::collections::HashMap;

/// Added to (or subtracted from) a valence by an amplifying modifier.
pub const BOOST_INCR: f64 = 0.293;
/// Added to (or subtracted from) a valence by a dampening modifier.
pub const BOOST_DECR: f64 = -0.293;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("clean", 1.7),
    ("comfortable", 1.6),
    ("comfy", 1.6),
    ("convenient", 1.5),
    ("courteous", 1.9),
    ("cozy", 1.9),
    ("delicious", 2.7),
    ("delightful", 2.9),
    ("easy", 1.9),
    ("efficient", 1.6),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("fabulous", 2.4),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("impressed", 2.1),
    ("incredible", 2.3),
    ("kind", 2.4),
    ("like", 1.5),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("outstanding", 3.0),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("polite", 1.8),
    ("professional", 1.3),
    ("quick", 1.0),
    ("quiet", 0.9),
    ("recommend", 1.5),
    ("recommended", 1.5),
    ("relaxing", 2.2),
    ("satisfied", 1.8),
    ("spacious", 1.5),
    ("spotless", 2.2),
    ("superb", 3.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("welcoming", 1.9),
    ("wonderful", 2.7),
    ("worth", 0.9),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("angry", -2.3),
    ("annoying", -1.8),
    ("awful", -2.0),
    ("bad", -2.5),
    ("broken", -1.8),
    ("careless", -1.5),
    ("complain", -1.5),
    ("crowded", -1.1),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disgusting", -2.4),
    ("expensive", -0.9),
    ("fail", -2.5),
    ("failed", -2.3),
    ("filthy", -2.4),
    ("frustrated", -2.1),
    ("frustrating", -1.9),
    ("gross", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("ignored", -1.5),
    ("lousy", -2.5),
    ("mediocre", -1.0),
    ("mess", -1.5),
    ("messy", -1.5),
    ("noisy", -1.2),
    ("overpriced", -1.8),
    ("pathetic", -2.7),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("rude", -2.0),
    ("sad", -2.1),
    ("slow", -1.1),
    ("smelly", -1.6),
    ("sorry", -0.3),
    ("stale", -1.4),
    ("terrible", -2.1),
    ("ugly", -2.3),
    ("unfriendly", -1.5),
    ("unhappy", -1.8),
    ("unprofessional", -1.7),
    ("upset", -1.6),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

const NEGATIONS: &[&str] = &[
    "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt", "couldn't",
    "didnt", "didn't", "doesnt", "doesn't", "dont", "don't", "hadnt", "hadn't", "hasnt",
    "hasn't", "havent", "haven't", "isnt", "isn't", "neither", "never", "no", "nobody",
    "none", "nope", "nor", "not", "nothing", "nowhere", "shouldnt", "shouldn't", "wasnt",
    "wasn't", "werent", "weren't", "without", "wont", "won't", "wouldnt", "wouldn't",
];

const AMPLIFIERS: &[&str] = &[
    "absolutely", "completely", "deeply", "especially", "exceptionally", "extremely",
    "highly", "hugely", "incredibly", "particularly", "really", "so", "super", "thoroughly",
    "totally", "truly", "very",
];

const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally", "occasionally",
    "partly", "slightly", "somewhat", "sorta",
];

/// Valence lexicon for review text.
pub struct ReviewLexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
}

impl Default for ReviewLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewLexicon {
    pub fn new() -> Self {
        let valences = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .map(|(word, valence)| (word.to_string(), *valence))
            .collect();

        let boosters = AMPLIFIERS
            .iter()
            .map(|word| (word.to_string(), BOOST_INCR))
            .chain(DAMPENERS.iter().map(|word| (word.to_string(), BOOST_DECR)))
            .collect();

        Self { valences, boosters }
    }

    /// Valence of a lowercased token, if it carries sentiment.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Degree-modifier scalar of a lowercased token.
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        NEGATIONS.contains(&word) || word.ends_with("n't")
    }

    /// Adds or overrides a word's valence.
    pub fn add_word(&mut self, word: &str, valence: f64) {
        self.valences.insert(word.to_lowercase(), valence);
    }
}
