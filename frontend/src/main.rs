use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod favorites;
mod feedback;
mod search;
mod theme;

fn main() {
    yew::Renderer::<App>::new().render();
}
