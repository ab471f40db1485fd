//! Runtime state of the explorer page.
//!
//! Each list holds view-models, not wire records, and is replaced wholesale
//! whenever a fetch for it succeeds.

use crate::api::HttpApi;
use crate::config::ApiConfig;
use crate::theme::{BrowserStorage, ThemeController};

use super::view_model::{CountryCard, FavoriteCard, TableRow};

pub struct ExplorerComponent {
    /// Current content of the search input, untrimmed.
    pub query: String,

    /// Cards for the latest successful search.
    pub results: Vec<CountryCard>,

    /// Cards for the latest successful favorites fetch.
    pub favorites: Vec<FavoriteCard>,

    /// Rows for the latest successful cleaned-data fetch.
    pub cleaned: Vec<TableRow>,

    pub theme: ThemeController<BrowserStorage>,

    pub api: HttpApi,

    /// Guard so the boot fetches run once.
    pub loaded: bool,
}

impl ExplorerComponent {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            favorites: Vec::new(),
            cleaned: Vec::new(),
            theme: ThemeController::load(BrowserStorage),
            api: HttpApi::new(ApiConfig::from_window()),
            loaded: false,
        }
    }
}
