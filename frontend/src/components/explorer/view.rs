//! View rendering for the explorer page: header with the theme toggle, the
//! search form with its result cards, the favorites cards, and the cleaned
//! data table.

use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::card_grid::CardGrid;

use super::helpers::save_index_from_event;
use super::messages::Msg;
use super::state::ExplorerComponent;
use super::view_model::{CountryCard, FavoriteCard, TableRow};

const TABLE_HEADERS: [&str; 6] = ["ID", "Nombre", "País", "Fecha", "Valor", "Fuente"];

pub fn view(component: &ExplorerComponent, ctx: &Context<ExplorerComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="container">
            { build_header(component, link) }
            { build_search(component, link) }
            { build_favorites(&component.favorites) }
            { build_cleaned_table(&component.cleaned) }
        </div>
    }
}

fn build_header(component: &ExplorerComponent, link: &Scope<ExplorerComponent>) -> Html {
    html! {
        <header class="header">
            <h1>{"🌍 InfoMundi"}</h1>
            <button
                id="themeToggle"
                class="btn btn--ghost"
                title="Cambiar tema"
                onclick={link.callback(|_| Msg::ToggleTheme)}
            >
                { component.theme.indicator() }
            </button>
        </header>
    }
}

fn build_search(component: &ExplorerComponent, link: &Scope<ExplorerComponent>) -> Html {
    html! {
        <section class="section">
            <h2>{"Buscar país"}</h2>
            <div class="search">
                <input
                    id="input-pais"
                    type="text"
                    placeholder="Ej: Argentina"
                    value={component.query.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateQuery(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                        (e.key() == "Enter").then_some(Msg::Search)
                    })}
                />
                <button class="btn btn--primary" onclick={link.callback(|_| Msg::Search)}>
                    {"🔎 Buscar"}
                </button>
            </div>
            <CardGrid
                id="resultados"
                onclick={link.batch_callback(|e: MouseEvent| save_index_from_event(&e).map(Msg::SaveFavorite))}
            >
                { for component.results.iter().enumerate().map(|(i, card)| country_card(i, card)) }
            </CardGrid>
        </section>
    }
}

fn country_card(index: usize, card: &CountryCard) -> Html {
    let save_index = index.to_string();
    html! {
        <div class="card">
            { flag_image(&card.flag_url, &format!("Bandera de {}", card.name)) }
            <div class="card__body">
                <h3>{ card.name.clone() }</h3>
                <p><strong>{"Capital: "}</strong>{ card.capital.clone() }</p>
                <p><strong>{"Continente: "}</strong>{ card.continent.clone() }</p>
                <button class="btn btn--primary" data-save-index={save_index}>
                    {"💾 Guardar favorito"}
                </button>
            </div>
        </div>
    }
}

fn build_favorites(favorites: &[FavoriteCard]) -> Html {
    html! {
        <section class="section">
            <h2>{"⭐ Favoritos"}</h2>
            <CardGrid id="favoritos">
                { for favorites.iter().map(favorite_card) }
            </CardGrid>
        </section>
    }
}

fn favorite_card(card: &FavoriteCard) -> Html {
    html! {
        <div class="card">
            { flag_image(&card.image_url, &format!("Imagen de {}", card.name)) }
            <div class="card__body">
                <h3>{ card.name.clone() }</h3>
                <p><strong>{"Comentario: "}</strong>{ card.comment.clone() }</p>
            </div>
        </div>
    }
}

fn build_cleaned_table(rows: &[TableRow]) -> Html {
    html! {
        <section class="section">
            <h2>{"📊 Datos limpios"}</h2>
            <table id="cleanedTable" class="table">
                <thead>
                    <tr>{ for TABLE_HEADERS.iter().map(|h| html! { <th>{ *h }</th> }) }</tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| html! {
                        <tr>{ for row.cells.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }</tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}

/// `<img>` for a flag, or nothing when there is no URL.
fn flag_image(url: &str, alt: &str) -> Html {
    if url.is_empty() {
        html! {}
    } else {
        html! { <img src={url.to_string()} alt={alt.to_string()} /> }
    }
}
