use common::model::cleaned::CleanedRow;
use common::model::country::CountryResult;
use common::model::favorite::Favorite;

#[derive(Debug, PartialEq)]
pub enum Msg {
    UpdateQuery(String),
    Search,
    ShowResults(Vec<CountryResult>),
    /// Index into the rendered result cards.
    SaveFavorite(usize),
    ShowFavorites(Vec<Favorite>),
    ShowCleaned(Vec<CleanedRow>),
    ToggleTheme,
}
