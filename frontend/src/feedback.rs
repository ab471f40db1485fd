//! How the controllers talk back to the person using the page.
//!
//! Two channels exist: a visible notice (a toast) for failures the user caused
//! by clicking something, and the browser console for everything worth a
//! trace. Automatic list refreshes only ever use the console.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub trait Feedback {
    /// Shows a short message to the user.
    fn notice(&self, message: &str);

    /// Records a failure in the console; never shown on the page.
    fn log_error(&self, context: &str, error: &dyn std::fmt::Display);
}

/// [`Feedback`] backed by DOM toasts and `gloo-console`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFeedback;

impl Feedback for BrowserFeedback {
    fn notice(&self, message: &str) {
        show_toast(message);
    }

    fn log_error(&self, context: &str, error: &dyn std::fmt::Display) {
        gloo_console::error!(format!("{context}: {error}"));
    }
}

/// Displays a temporary notification at the bottom of the screen.
///
/// Injects a styled `div` into `<body>` and removes it after three seconds.
/// The message is set as text, not markup.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::Feedback;

    /// Records notices and console errors instead of touching the browser.
    #[derive(Default)]
    pub struct RecordingFeedback {
        pub notices: RefCell<Vec<String>>,
        pub errors: RefCell<Vec<String>>,
    }

    impl Feedback for RecordingFeedback {
        fn notice(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }

        fn log_error(&self, context: &str, error: &dyn std::fmt::Display) {
            self.errors.borrow_mut().push(format!("{context}: {error}"));
        }
    }
}
