// src/models/review.rs
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sentiment::SentimentScores;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    #[serde(rename = "ReviewId")]
    pub id: String, // Opaque unique ID, UUID v4 for submitted reviews
    #[serde(rename = "Location")]
    pub location: String, // "City, State"
    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: NaiveDateTime, // Local wall-clock time, second precision
    #[serde(rename = "ReviewBody")]
    pub body: String, // Free-form review text
}

impl Review {
    /// Builds a freshly submitted review: new id, stamped with the current time.
    pub fn new(location: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            location: location.into(),
            timestamp: now(),
            body: body.into(),
        }
    }
}

/// Current local time truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// A review annotated with its sentiment for the duration of one query.
#[derive(Serialize, Debug, Clone)]
pub struct ScoredReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: SentimentScores,
}

/// Wire format shared by the seed CSV and JSON responses.
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}
