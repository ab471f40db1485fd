//! Browser glue for the explorer: the comment prompt and the delegated click
//! handling on the result cards.
//!
//! Every save button carries its card index in [`SAVE_INDEX_ATTR`]; a single
//! click listener on the results container walks up from the click target to
//! the nearest such button. Names and URLs never end up inside handler code,
//! so there is nothing to escape.

use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

pub const SAVE_INDEX_ATTR: &str = "data-save-index";

/// Asks the user why they like `country`. `None` when the dialog is
/// cancelled or unavailable.
pub fn prompt_comment(country: &str) -> Option<String> {
    web_sys::window()?
        .prompt_with_message(&format!("¿Por qué te gusta {country}? 📝"))
        .ok()
        .flatten()
}

/// Resolves a click inside the results container to a card index.
pub fn save_index_from_event(event: &MouseEvent) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(&format!("[{SAVE_INDEX_ATTR}]")).ok()??;
    parse_save_index(button.get_attribute(SAVE_INDEX_ATTR).as_deref())
}

pub fn parse_save_index(value: Option<&str>) -> Option<usize> {
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rendered_indices() {
        assert_eq!(parse_save_index(Some("0")), Some(0));
        assert_eq!(parse_save_index(Some("12")), Some(12));
    }

    #[test]
    fn ignores_missing_or_malformed_indices() {
        assert_eq!(parse_save_index(None), None);
        assert_eq!(parse_save_index(Some("")), None);
        assert_eq!(parse_save_index(Some("-1")), None);
        assert_eq!(parse_save_index(Some("Italy")), None);
    }
}
