//! Country search: validate the typed name, ask the lookup API once, hand the
//! records back in the order the API returned them.

use common::model::country::CountryResult;
use thiserror::Error;

use crate::api::CountryLookup;
use crate::feedback::Feedback;

pub const EMPTY_QUERY_NOTICE: &str = "Escribí un nombre de país";
pub const LOOKUP_FAILED_NOTICE: &str = "No se pudo buscar el país 😢";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("the country name is empty")]
    EmptyQuery,
}

/// A trimmed, non-empty country name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(SearchError::EmptyQuery)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn country_lookup_url(base: &str, query: &SearchQuery) -> String {
    format!("{}{}", base, urlencoding::encode(query.as_str()))
}

/// Runs one search.
///
/// Returns `None` when nothing should be rendered: an empty query (notice
/// only, no request) or a failed lookup (logged and noticed). The caller
/// keeps whatever it was showing in that case.
pub async fn search_countries(
    api: &impl CountryLookup,
    feedback: &impl Feedback,
    raw: &str,
) -> Option<Vec<CountryResult>> {
    let query = match SearchQuery::parse(raw) {
        Ok(query) => query,
        Err(SearchError::EmptyQuery) => {
            feedback.notice(EMPTY_QUERY_NOTICE);
            return None;
        }
    };

    match api.lookup_countries(&query).await {
        Ok(countries) => Some(countries),
        Err(err) => {
            feedback.log_error("country lookup failed", &err);
            feedback.notice(LOOKUP_FAILED_NOTICE);
            None
        }
    }
}
