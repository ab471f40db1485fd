//! Pure data → view-model conversions for the three rendered sections.
//!
//! The view layer only reads these structs, so everything that decides what
//! a card or a table row shows is testable without a browser.

use common::model::cleaned::CleanedRow;
use common::model::country::CountryResult;
use common::model::favorite::Favorite;

/// Cell text for a column the backend sent as `null`.
pub const MISSING_CELL: &str = "-";

#[derive(Clone, Debug, PartialEq)]
pub struct CountryCard {
    pub name: String,
    pub capital: String,
    pub continent: String,
    /// Empty when the API had no flag.
    pub flag_url: String,
}

impl From<&CountryResult> for CountryCard {
    fn from(country: &CountryResult) -> Self {
        Self {
            name: country.display_name().to_string(),
            capital: country.capital_name().to_string(),
            continent: country.continent_name().to_string(),
            flag_url: country.flag_url().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FavoriteCard {
    pub name: String,
    pub comment: String,
    pub image_url: String,
}

impl From<&Favorite> for FavoriteCard {
    fn from(favorite: &Favorite) -> Self {
        Self {
            name: favorite.name.clone(),
            comment: favorite.comment.clone(),
            image_url: favorite.image_url.clone(),
        }
    }
}

/// Cells in column order: id, name, country, date, value, source.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub cells: [String; 6],
}

impl From<&CleanedRow> for TableRow {
    fn from(row: &CleanedRow) -> Self {
        Self {
            cells: [
                optional_cell(row.id.as_ref()),
                optional_cell(row.name.as_ref()),
                optional_cell(row.country.as_ref()),
                optional_cell(row.date.as_ref()),
                optional_cell(row.value.as_ref()),
                optional_cell(row.source.as_ref()),
            ],
        }
    }
}

fn optional_cell(value: Option<&impl ToString>) -> String {
    value.map_or_else(|| MISSING_CELL.to_string(), ToString::to_string)
}

pub fn country_cards(countries: &[CountryResult]) -> Vec<CountryCard> {
    countries.iter().map(CountryCard::from).collect()
}

pub fn favorite_cards(favorites: &[Favorite]) -> Vec<FavoriteCard> {
    favorites.iter().map(FavoriteCard::from).collect()
}

pub fn table_rows(rows: &[CleanedRow]) -> Vec<TableRow> {
    rows.iter().map(TableRow::from).collect()
}
