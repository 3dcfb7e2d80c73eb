use std::sync::Arc;

use log::{debug, info};

use crate::error::ReviewError;
use crate::filter::ReviewFilter;
use crate::models::location::is_known_location;
use crate::models::review::{Review, ScoredReview};
use crate::sentiment::SentimentScorer;
use crate::store::ReviewStore;

/// Read and write paths over a shared [`ReviewStore`].
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<ReviewStore>,
    scorer: Arc<dyn SentimentScorer>,
}

impl QueryEngine {
    pub fn new(store: Arc<ReviewStore>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { store, scorer }
    }

    pub fn store(&self) -> &Arc<ReviewStore> {
        &self.store
    }

    /// Filters the store, scores every match and ranks by compound score,
    /// most positive first. Equal scores keep their store order.
    ///
    /// A single scoring failure fails the whole query.
    pub async fn query(&self, filter: &ReviewFilter) -> Result<Vec<ScoredReview>, ReviewError> {
        let matched = filter.apply(self.store.all().await);
        debug!("[ENGINE] {} reviews matched {:?}", matched.len(), filter);

        let mut scored = matched
            .into_iter()
            .map(|review| {
                let sentiment = self.scorer.score(&review.body)?;
                Ok(ScoredReview { review, sentiment })
            })
            .collect::<Result<Vec<_>, ReviewError>>()?;

        // sort_by is stable
        scored.sort_by(|a, b| b.sentiment.compound.total_cmp(&a.sentiment.compound));
        Ok(scored)
    }

    /// Validates a submitted review and appends it with a fresh id and
    /// timestamp.
    pub async fn create_review(
        &self,
        location: Option<&str>,
        body: Option<&str>,
    ) -> Result<Review, ReviewError> {
        let (location, body) = match (location, body) {
            (Some(location), Some(body)) if !is_blank(location) && !is_blank(body) => {
                (location, body)
            }
            _ => return Err(ReviewError::MissingField),
        };

        if !is_known_location(location) {
            return Err(ReviewError::InvalidLocation);
        }

        let review = Review::new(location, body);
        self.store.append(review.clone()).await?;
        info!("[ENGINE] Created review {} for {}", review.id, review.location);
        Ok(review)
    }
}

/// Blank input fails the same check the store applies on append.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
