//! Explorer page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, view-models and DOM
//! helpers.
//!
//! On first render the theme is applied to `<body>` and the favorites and
//! cleaned-data lists are loaded. Search only runs on user request.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;
pub mod view_model;

pub use messages::Msg;
pub use state::ExplorerComponent;

use crate::theme::apply_to_body;

impl Component for ExplorerComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ExplorerComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            apply_to_body(self.theme.theme());
            update::load_lists(self, ctx);
        }
    }
}
