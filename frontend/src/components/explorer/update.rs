//! Update function for the explorer page.
//!
//! Network work is spawned as local tasks that report back through
//! `ctx.link()`; a task that fails sends nothing, so the affected section keeps
//! its previous render.

use common::requests::CreateFavorite;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::favorites::{boot, save_favorite, Snapshot};
use crate::feedback::BrowserFeedback;
use crate::search::search_countries;
use crate::theme::apply_to_body;

use super::helpers::prompt_comment;
use super::messages::Msg;
use super::state::ExplorerComponent;
use super::view_model::{country_cards, favorite_cards, table_rows};

/// Central update function for the component.
///
/// Returns `true` when state that the view reads has changed.
pub fn update(component: &mut ExplorerComponent, ctx: &Context<ExplorerComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateQuery(query) => {
            component.query = query;
            false
        }
        Msg::Search => {
            let api = component.api.clone();
            let query = component.query.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                if let Some(countries) = search_countries(&api, &BrowserFeedback, &query).await {
                    link.send_message(Msg::ShowResults(countries));
                }
            });
            false
        }
        Msg::ShowResults(countries) => {
            component.results = country_cards(&countries);
            true
        }
        Msg::SaveFavorite(index) => {
            let Some(card) = component.results.get(index) else {
                gloo_console::warn!(format!("no result card at index {index}"));
                return false;
            };
            let Some(comment) = prompt_comment(&card.name) else {
                return false;
            };
            // An empty comment abandons the save like a cancelled prompt.
            let Ok(draft) = CreateFavorite::new(card.name.clone(), comment, card.flag_url.clone())
            else {
                return false;
            };

            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                if let Some(snapshot) = save_favorite(&api, &BrowserFeedback, &draft).await {
                    link.send_message_batch(snapshot_messages(snapshot));
                }
            });
            false
        }
        Msg::ShowFavorites(favorites) => {
            component.favorites = favorite_cards(&favorites);
            true
        }
        Msg::ShowCleaned(rows) => {
            component.cleaned = table_rows(&rows);
            true
        }
        Msg::ToggleTheme => {
            let theme = component.theme.toggle();
            apply_to_body(theme);
            true
        }
    }
}

/// Boot: loads favorites and cleaned data; each list renders as soon as its
/// own fetch succeeds.
pub fn load_lists(component: &ExplorerComponent, ctx: &Context<ExplorerComponent>) {
    let api = component.api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        boot(&api, &BrowserFeedback, |snapshot| {
            link.send_message_batch(snapshot_messages(snapshot));
        })
        .await;
    });
}

/// One render message per list that was fetched successfully.
pub fn snapshot_messages(snapshot: Snapshot) -> Vec<Msg> {
    snapshot
        .favorites
        .map(Msg::ShowFavorites)
        .into_iter()
        .chain(snapshot.cleaned.map(Msg::ShowCleaned))
        .collect()
}
