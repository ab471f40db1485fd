//! Favorites synchronization.
//!
//! Saving is a two-step pipeline: await the write, then fetch the favorites
//! list and the cleaned dataset together. The backend feeds new favorites
//! into its cleaned dataset, so both are refetched in full after every
//! successful save. Nothing is merged locally; each fetch replaces a whole
//! view.

use common::model::cleaned::CleanedRow;
use common::model::favorite::Favorite;
use common::requests::CreateFavorite;

use crate::api::{CleanedDataSource, FavoritesStore};
use crate::feedback::Feedback;

pub const SAVE_FAILED_NOTICE: &str = "No se pudo guardar 😓";

/// What the refresh after a successful save produced. A part is `None` when
/// its fetch failed, so the matching view keeps its last render.
#[derive(Debug, Default, PartialEq)]
pub struct Snapshot {
    pub favorites: Option<Vec<Favorite>>,
    pub cleaned: Option<Vec<CleanedRow>>,
}

/// Creates `draft` on the backend, then refreshes both lists.
///
/// Returns `None` if the create failed; in that case the error is logged, the
/// user gets one notice, and no list is fetched.
pub async fn save_favorite<A>(
    api: &A,
    feedback: &impl Feedback,
    draft: &CreateFavorite,
) -> Option<Snapshot>
where
    A: FavoritesStore + CleanedDataSource,
{
    if let Err(err) = api.create_favorite(draft).await {
        feedback.log_error("could not save favorite", &err);
        feedback.notice(SAVE_FAILED_NOTICE);
        return None;
    }

    let (favorites, cleaned) = futures::join!(
        refresh_favorites(api, feedback),
        refresh_cleaned(api, feedback)
    );
    Some(Snapshot { favorites, cleaned })
}

/// Page boot: fetches both lists concurrently and hands each one to
/// `deliver` as soon as it resolves, as a `Snapshot` with only that part set.
/// A failed or slow fetch never holds back the other one.
pub async fn boot<A>(api: &A, feedback: &impl Feedback, deliver: impl Fn(Snapshot))
where
    A: FavoritesStore + CleanedDataSource,
{
    futures::join!(
        async {
            let favorites = refresh_favorites(api, feedback).await;
            deliver(Snapshot {
                favorites,
                cleaned: None,
            });
        },
        async {
            let cleaned = refresh_cleaned(api, feedback).await;
            deliver(Snapshot {
                favorites: None,
                cleaned,
            });
        }
    );
}

/// Fetches the favorites list. Failures are logged only.
pub async fn refresh_favorites(
    api: &impl FavoritesStore,
    feedback: &impl Feedback,
) -> Option<Vec<Favorite>> {
    api.list_favorites()
        .await
        .map_err(|err| feedback.log_error("error loading favorites", &err))
        .ok()
}

/// Fetches the cleaned dataset. Failures are logged only.
pub async fn refresh_cleaned(
    api: &impl CleanedDataSource,
    feedback: &impl Feedback,
) -> Option<Vec<CleanedRow>> {
    api.list_cleaned_data()
        .await
        .map_err(|err| feedback.log_error("error loading cleaned data", &err))
        .ok()
}
