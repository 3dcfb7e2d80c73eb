use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};
use tokio::sync::RwLock;

use crate::error::ReviewError;
use crate::models::review::Review;

/// In-memory, append-only review collection in insertion order.
///
/// Appends take the write lock, so a reader never observes a half-added
/// review and concurrent appends cannot lose entries.
#[derive(Default)]
pub struct ReviewStore {
    inner: RwLock<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    reviews: Vec<Review>,
    ids: HashSet<String>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads seed reviews from a CSV file with header
    /// `ReviewId,Location,Timestamp,ReviewBody`.
    pub async fn load_csv(path: impl AsRef<Path>) -> Result<Self, ReviewError> {
        let path = path.as_ref();
        info!("[SEED] Loading reviews from {}", path.display());
        let file = File::open(path)
            .map_err(|e| ReviewError::Seed(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(file).await
    }

    /// Seed rows are trusted for location, but rows that would break the
    /// store invariants (empty field, duplicate id) are skipped.
    pub async fn from_reader<R: Read>(reader: R) -> Result<Self, ReviewError> {
        let store = Self::new();
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut skipped = 0usize;

        for (row, record) in csv_reader.deserialize::<Review>().enumerate() {
            let review = record?;
            if let Err(e) = store.append(review).await {
                warn!("[SEED] Skipping row {}: {}", row + 1, e);
                skipped += 1;
            }
        }

        info!(
            "[SEED] Loaded {} reviews ({} skipped)",
            store.len().await,
            skipped
        );
        Ok(store)
    }

    pub async fn append(&self, review: Review) -> Result<(), ReviewError> {
        validate(&review)?;

        let mut inner = self.inner.write().await;
        if !inner.ids.insert(review.id.clone()) {
            return Err(ReviewError::Validation(format!(
                "duplicate ReviewId {}",
                review.id
            )));
        }
        inner.reviews.push(review);
        Ok(())
    }

    /// Snapshot of every review in insertion order.
    pub async fn all(&self) -> Vec<Review> {
        self.inner.read().await.reviews.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.reviews.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn validate(review: &Review) -> Result<(), ReviewError> {
    let missing = [
        ("ReviewId", &review.id),
        ("Location", &review.location),
        ("ReviewBody", &review.body),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty());

    match missing {
        Some((field, _)) => Err(ReviewError::Validation(format!("{field} is empty"))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const SEED_CSV: &str = "\
ReviewId,Location,Timestamp,ReviewBody
r-1,\"Denver, Colorado\",2024-01-02 10:00:00,Great stay
r-2,\"Tucson, Arizona\",2024-01-15 08:30:00,\"Rude staff, dirty room\"
r-3,\"Denver, Colorado\",2024-02-01 00:00:00,It was fine
";

    fn review(id: &str, body: &str) -> Review {
        Review {
            id: id.into(),
            body: body.into(),
            ..Review::new("Denver, Colorado", body)
        }
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let store = ReviewStore::new();
        store.append(review("a", "first")).await.unwrap();
        store.append(review("b", "second")).await.unwrap();
        store.append(review("c", "third")).await.unwrap();

        let ids: Vec<String> = store.all().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_append_rejects_empty_fields() {
        let store = ReviewStore::new();

        let err = store.append(review("a", "  ")).await.unwrap_err();
        assert!(matches!(err, ReviewError::Validation(_)));

        let mut no_location = review("b", "body");
        no_location.location = String::new();
        assert!(store.append(no_location).await.is_err());

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_append_rejects_duplicate_id() {
        let store = ReviewStore::new();
        store.append(review("same", "one")).await.unwrap();
        let err = store.append(review("same", "two")).await.unwrap_err();

        assert!(matches!(err, ReviewError::Validation(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_from_later_appends() {
        let store = ReviewStore::new();
        store.append(review("a", "first")).await.unwrap();
        let snapshot = store.all().await;
        store.append(review("b", "second")).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_lose_nothing() {
        let store = Arc::new(ReviewStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    store
                        .append(Review::new("Phoenix, Arizona", "fine"))
                        .await
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let all = store.all().await;
        assert_eq!(all.len(), 400);
        let unique: HashSet<_> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(unique.len(), 400);
    }

    #[tokio::test]
    async fn test_from_reader_loads_seed_rows() {
        let store = ReviewStore::from_reader(SEED_CSV.as_bytes()).await.unwrap();
        let all = store.all().await;

        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, "r-1");
        assert_eq!(all[1].location, "Tucson, Arizona");
        assert_eq!(all[1].body, "Rude staff, dirty room");
        assert_eq!(
            all[2].timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-02-01 00:00:00"
        );
    }

    #[tokio::test]
    async fn test_from_reader_skips_invalid_rows() {
        let csv = "\
ReviewId,Location,Timestamp,ReviewBody
r-1,Nowhere,2024-01-02 10:00:00,Seeded locations are trusted
r-1,\"Denver, Colorado\",2024-01-03 10:00:00,Duplicate id
r-2,\"Denver, Colorado\",2024-01-04 10:00:00,
";
        let store = ReviewStore::from_reader(csv.as_bytes()).await.unwrap();
        let all = store.all().await;

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].location, "Nowhere");
    }

    #[tokio::test]
    async fn test_from_reader_fails_on_bad_timestamp() {
        let csv = "\
ReviewId,Location,Timestamp,ReviewBody
r-1,\"Denver, Colorado\",yesterday,Great
";
        let err = ReviewStore::from_reader(csv.as_bytes()).await.err().unwrap();
        assert!(matches!(err, ReviewError::Seed(_)));
    }

    #[tokio::test]
    async fn test_load_csv_missing_file() {
        let err = ReviewStore::load_csv("does/not/exist.csv").await.err().unwrap();
        assert!(matches!(err, ReviewError::Seed(_)));
    }
}
