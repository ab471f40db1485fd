//! HTTP access to the country lookup API and the local backend.
//!
//! Each collaborator is a trait so the controllers in `search` and
//! `favorites` can be driven by in-memory fakes in tests. [`HttpApi`] is the
//! browser implementation built on `gloo-net`.
//!
//! Every call is a single request: no retries, no timeout, no cancellation.

pub mod error;
#[cfg(test)]
pub mod testing;

use common::model::cleaned::CleanedRow;
use common::model::country::CountryResult;
use common::model::favorite::Favorite;
use common::requests::CreateFavorite;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::search::{country_lookup_url, SearchQuery};

pub use error::ApiError;

pub trait CountryLookup {
    async fn lookup_countries(&self, query: &SearchQuery) -> Result<Vec<CountryResult>, ApiError>;
}

pub trait FavoritesStore {
    async fn create_favorite(&self, favorite: &CreateFavorite) -> Result<(), ApiError>;
    async fn list_favorites(&self) -> Result<Vec<Favorite>, ApiError>;
}

pub trait CleanedDataSource {
    async fn list_cleaned_data(&self) -> Result<Vec<CleanedRow>, ApiError>;
}

#[derive(Clone, Debug)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl CountryLookup for HttpApi {
    async fn lookup_countries(&self, query: &SearchQuery) -> Result<Vec<CountryResult>, ApiError> {
        get_json(&country_lookup_url(&self.config.country_api_base, query)).await
    }
}

impl FavoritesStore for HttpApi {
    async fn create_favorite(&self, favorite: &CreateFavorite) -> Result<(), ApiError> {
        let url = self.config.favorites_url();
        let response = Request::post(&url).json(favorite)?.send().await?;
        ensure_success(&url, &response)
    }

    async fn list_favorites(&self) -> Result<Vec<Favorite>, ApiError> {
        get_json(&self.config.favorites_url()).await
    }
}

impl CleanedDataSource for HttpApi {
    async fn list_cleaned_data(&self) -> Result<Vec<CleanedRow>, ApiError> {
        get_json(&self.config.cleaned_data_url()).await
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url).send().await?;
    ensure_success(url, &response)?;
    Ok(response.json::<T>().await?)
}

fn ensure_success(url: &str, response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        })
    }
}
