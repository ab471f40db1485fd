//! In-memory stand-in for the HTTP collaborators.

use std::cell::RefCell;

use common::model::cleaned::CleanedRow;
use common::model::country::CountryResult;
use common::model::favorite::Favorite;
use common::requests::CreateFavorite;

use super::{ApiError, CleanedDataSource, CountryLookup, FavoritesStore};
use crate::search::SearchQuery;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Lookup(String),
    Create(String),
    ListFavorites,
    ListCleaned,
}

/// Answers from canned data and records every call in order.
/// A `*_status` field set to `Some(code)` makes that endpoint fail with it.
#[derive(Default)]
pub struct FakeApi {
    pub countries: Vec<CountryResult>,
    pub favorites: RefCell<Vec<Favorite>>,
    pub cleaned: Vec<CleanedRow>,
    pub lookup_status: Option<u16>,
    pub create_status: Option<u16>,
    pub favorites_status: Option<u16>,
    pub cleaned_status: Option<u16>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }
}

fn fail_with(status: Option<u16>) -> Result<(), ApiError> {
    match status {
        Some(status) => Err(ApiError::Status {
            url: "fake://".to_string(),
            status,
        }),
        None => Ok(()),
    }
}

impl CountryLookup for FakeApi {
    async fn lookup_countries(&self, query: &SearchQuery) -> Result<Vec<CountryResult>, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Lookup(query.as_str().to_string()));
        fail_with(self.lookup_status)?;
        Ok(self.countries.clone())
    }
}

impl FavoritesStore for FakeApi {
    async fn create_favorite(&self, favorite: &CreateFavorite) -> Result<(), ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Create(favorite.name().to_string()));
        fail_with(self.create_status)?;
        let id = self.favorites.borrow().len() as i64 + 1;
        self.favorites.borrow_mut().push(Favorite {
            id: Some(id),
            name: favorite.name().to_string(),
            comment: favorite.comment().to_string(),
            image_url: favorite.image_url().to_string(),
        });
        Ok(())
    }

    async fn list_favorites(&self) -> Result<Vec<Favorite>, ApiError> {
        self.calls.borrow_mut().push(Call::ListFavorites);
        fail_with(self.favorites_status)?;
        Ok(self.favorites.borrow().clone())
    }
}

impl CleanedDataSource for FakeApi {
    async fn list_cleaned_data(&self) -> Result<Vec<CleanedRow>, ApiError> {
        self.calls.borrow_mut().push(Call::ListCleaned);
        fail_with(self.cleaned_status)?;
        Ok(self.cleaned.clone())
    }
}
