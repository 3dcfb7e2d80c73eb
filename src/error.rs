use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Invalid review: {0}")]
    Validation(String),

    #[error("Location and ReviewBody are required")]
    MissingField,

    #[error("Invalid location")]
    InvalidLocation,

    #[error("Invalid {param}: expected YYYY-MM-DD")]
    InvalidFilter { param: &'static str },

    #[error("Invalid query string")]
    MalformedQuery,

    #[error("Review exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error("Sentiment analysis failed: {0}")]
    Analysis(String),

    #[error("Failed to load seed reviews: {0}")]
    Seed(String),
}

impl ReviewError {
    /// Errors the client can correct by changing its request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ReviewError::MissingField
                | ReviewError::InvalidLocation
                | ReviewError::InvalidFilter { .. }
                | ReviewError::MalformedQuery
                | ReviewError::PayloadTooLarge { .. }
        )
    }
}

impl From<csv::Error> for ReviewError {
    fn from(err: csv::Error) -> Self {
        ReviewError::Seed(err.to_string())
    }
}

impl From<std::io::Error> for ReviewError {
    fn from(err: std::io::Error) -> Self {
        ReviewError::Seed(err.to_string())
    }
}
