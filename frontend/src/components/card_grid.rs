use web_sys::MouseEvent;
use yew::{html, Callback, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub id: &'static str,
    /// Single listener for every card in the grid.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    pub children: Children,
}

/// Responsive grid that holds a section's cards. Re-rendering it replaces
/// all of its cards.
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div id={props.id} class="grid" onclick={props.onclick.clone()}>
                { for props.children.iter() }
            </div>
        }
    }
}
