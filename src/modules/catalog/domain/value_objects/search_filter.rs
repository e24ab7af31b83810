use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::modules::catalog::domain::entities::Item;
use crate::modules::rating::domain::services::to_tenths;

static RELEASED_AFTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bafter\s+(\d{4})\b").expect("valid year pattern")
});

static RATING_EQUALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\s)(\d+(?:\.\d+)?)\s+stars\b").expect("valid rating pattern")
});

// Anything finer than this is not a one-decimal value
const TENTHS_EPSILON: f64 = 1e-9;

/// Predicate a search query was classified into.
///
/// Families are tried in declaration order and the first match wins; a query
/// never combines two families.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchFilter {
    /// Items released strictly after `year`
    ReleasedAfter { year: i32 },
    /// Items whose average, rounded to one decimal, equals `stars`
    RatingEquals { stars: f64 },
    /// Items whose title or overview contains `needle` (lowercase)
    Text { needle: String },
}

impl SearchFilter {
    /// Classify free text. `None` for an empty or whitespace-only query.
    pub fn parse(query: &str) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(year) = RELEASED_AFTER
            .captures(query)
            .and_then(|caps| caps[1].parse::<i32>().ok())
        {
            return Some(SearchFilter::ReleasedAfter { year });
        }

        if let Some(stars) = RATING_EQUALS
            .captures(query)
            .and_then(|caps| caps[1].parse::<f64>().ok())
            .filter(|stars| stars.is_finite())
        {
            return Some(SearchFilter::RatingEquals { stars });
        }

        Some(SearchFilter::Text {
            needle: query.to_lowercase(),
        })
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            SearchFilter::ReleasedAfter { year } => item.release_year() > *year,
            SearchFilter::RatingEquals { stars } => match exact_tenths(*stars) {
                Some(tenths) => item.average_rating_tenths() == tenths,
                None => false,
            },
            SearchFilter::Text { needle } => {
                item.title.to_lowercase().contains(needle.as_str())
                    || item.overview.to_lowercase().contains(needle.as_str())
            }
        }
    }

    pub fn family(&self) -> &'static str {
        match self {
            SearchFilter::ReleasedAfter { .. } => "year-bound",
            SearchFilter::RatingEquals { .. } => "rating",
            SearchFilter::Text { .. } => "text",
        }
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchFilter::ReleasedAfter { year } => write!(f, "released after {}", year),
            SearchFilter::RatingEquals { stars } => write!(f, "rated {} stars", stars),
            SearchFilter::Text { needle } => write!(f, "text '{}'", needle),
        }
    }
}

/// `stars` in tenths when it has at most one decimal place
fn exact_tenths(stars: f64) -> Option<i64> {
    let scaled = stars * 10.0;
    if (scaled - scaled.round()).abs() < TENTHS_EPSILON * scaled.abs().max(1.0) {
        Some(to_tenths(stars))
    } else {
        None
    }
}
