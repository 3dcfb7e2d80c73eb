use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ReviewError;
use crate::models::review::Review;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw filter parameters as they arrive on the query string.
#[derive(Debug, Default, Clone)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReviewQuery {
    /// Builds the query from decoded `key=value` pairs. A repeated key keeps
    /// its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "location" => &mut query.location,
                "start_date" => &mut query.start_date,
                "end_date" => &mut query.end_date,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// Parsed filter criteria, combined as a logical AND.
///
/// Date bounds are midnight of the given day on both ends, so `end_date`
/// only admits reviews stamped exactly at 00:00:00 on that day.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReviewFilter {
    pub location: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl TryFrom<ReviewQuery> for ReviewFilter {
    type Error = ReviewError;

    fn try_from(query: ReviewQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            location: present(query.location),
            start: parse_bound("start_date", query.start_date)?,
            end: parse_bound("end_date", query.end_date)?,
        })
    }
}

impl ReviewFilter {
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start = Some(date.and_time(NaiveTime::MIN));
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end = Some(date.and_time(NaiveTime::MIN));
        self
    }

    pub fn matches(&self, review: &Review) -> bool {
        self.location
            .as_deref()
            .map_or(true, |location| review.location == location)
            && self.start.map_or(true, |start| review.timestamp >= start)
            && self.end.map_or(true, |end| review.timestamp <= end)
    }

    /// Keeps matching reviews in their original relative order.
    pub fn apply(&self, reviews: Vec<Review>) -> Vec<Review> {
        reviews.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Empty parameters count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_bound(
    param: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDateTime>, ReviewError> {
    present(value)
        .map(|raw| {
            NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .map(|date| date.and_time(NaiveTime::MIN))
                .map_err(|_| ReviewError::InvalidFilter { param })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(id: &str, location: &str, timestamp: &str) -> Review {
        Review {
            id: id.into(),
            location: location.into(),
            timestamp: NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").unwrap(),
            body: "body".into(),
        }
    }

    fn sample() -> Vec<Review> {
        vec![
            at("1", "Denver, Colorado", "2023-12-31 23:59:59"),
            at("2", "Denver, Colorado", "2024-01-01 00:00:00"),
            at("3", "Tucson, Arizona", "2024-01-10 12:00:00"),
            at("4", "Denver, Colorado", "2024-01-31 00:00:00"),
            at("5", "Denver, Colorado", "2024-01-31 09:00:00"),
            at("6", "Tucson, Arizona", "2024-02-02 08:00:00"),
        ]
    }

    fn ids(reviews: &[Review]) -> Vec<&str> {
        reviews.iter().map(|r| r.id.as_str()).collect()
    }

    fn query(location: Option<&str>, start: Option<&str>, end: Option<&str>) -> ReviewQuery {
        ReviewQuery {
            location: location.map(String::from),
            start_date: start.map(String::from),
            end_date: end.map(String::from),
        }
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_keeps_first_repeated_value() {
        let query = ReviewQuery::from_pairs(pairs(&[
            ("location", "Tucson, Arizona"),
            ("start_date", "2024-01-01"),
            ("location", "Denver, Colorado"),
            ("start_date", "not-a-date"),
            ("page", "2"),
        ]));

        assert_eq!(query.location.as_deref(), Some("Tucson, Arizona"));
        assert_eq!(query.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(query.end_date, None);
        assert!(ReviewFilter::try_from(query).is_ok());
    }

    #[test]
    fn test_no_criteria_keeps_everything() {
        let filter = ReviewFilter::try_from(ReviewQuery::default()).unwrap();
        assert_eq!(filter, ReviewFilter::default());
        assert_eq!(filter.apply(sample()).len(), 6);
    }

    #[test]
    fn test_empty_parameters_are_ignored() {
        let filter = ReviewFilter::try_from(query(Some(""), Some(""), Some(""))).unwrap();
        assert_eq!(filter, ReviewFilter::default());
    }

    #[test]
    fn test_location_is_exact_match() {
        let filter = ReviewFilter::default().location("Tucson, Arizona");
        assert_eq!(ids(&filter.apply(sample())), vec!["3", "6"]);

        let filter = ReviewFilter::default().location("tucson, arizona");
        assert!(filter.apply(sample()).is_empty());
    }

    #[test]
    fn test_date_window_uses_midnight_bounds() {
        let filter =
            ReviewFilter::try_from(query(None, Some("2024-01-01"), Some("2024-01-31"))).unwrap();
        // 2024-01-31 09:00 is after the end-day midnight bound.
        assert_eq!(ids(&filter.apply(sample())), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_malformed_dates_are_rejected() {
        let err = ReviewFilter::try_from(query(None, Some("01/02/2024"), None)).unwrap_err();
        assert!(matches!(err, ReviewError::InvalidFilter { param: "start_date" }));

        let err = ReviewFilter::try_from(query(None, None, Some("2024-13-01"))).unwrap_err();
        assert!(matches!(err, ReviewError::InvalidFilter { param: "end_date" }));
    }

    #[test]
    fn test_unknown_location_yields_empty() {
        let filter = ReviewFilter::default().location("Nowhere");
        assert!(filter.apply(sample()).is_empty());
    }

    #[test]
    fn test_composition_is_order_independent() {
        let location = ReviewFilter::default().location("Denver, Colorado");
        let start =
            ReviewFilter::default().start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let end = ReviewFilter::default().end_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        let combined = ReviewFilter::default()
            .location("Denver, Colorado")
            .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .end_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

        let expected = combined.apply(sample());
        assert_eq!(ids(&expected), vec!["2", "4"]);

        let stages = [&location, &start, &end];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in orders {
            let result = order
                .iter()
                .fold(sample(), |acc, &i| stages[i].apply(acc));
            assert_eq!(result, expected, "order {:?}", order);
        }
    }
}
