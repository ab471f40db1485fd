//! Light/dark theme preference.
//!
//! The preference lives in a [`SettingsStore`] under [`THEME_KEY`]. The browser
//! page uses `localStorage`; tests use an in-memory map.

pub const THEME_KEY: &str = "infomundi-theme";

/// Body class that switches the stylesheet to the light palette.
pub const LIGHT_BODY_CLASS: &str = "theme-light";

pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. Reads and writes are no-ops when storage is
/// unavailable (private mode, sandboxed frames).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl SettingsStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                gloo_console::warn!(format!("could not persist {key}"));
            }
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl SettingsStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Anything other than `"light"` (including nothing) is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Symbol shown on the toggle button.
    pub fn indicator(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }
}

pub struct ThemeController<S: SettingsStore> {
    store: S,
    theme: Theme,
}

impl<S: SettingsStore> ThemeController<S> {
    /// Reads the persisted preference. Loading never writes.
    pub fn load(store: S) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn indicator(&self) -> &'static str {
        self.theme.indicator()
    }

    /// Flips the theme and persists it immediately.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str());
        self.theme
    }
}

/// Adds or removes [`LIGHT_BODY_CLASS`] on `<body>`.
pub fn apply_to_body(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    body.class_list()
        .toggle_with_force(LIGHT_BODY_CLASS, theme == Theme::Light)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        let controller = ThemeController::load(MemoryStorage::default());
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.indicator(), "🌙");
    }

    #[test]
    fn unknown_stored_values_mean_dark() {
        for stored in ["dark", "Light", "", "blue"] {
            let store = MemoryStorage::default();
            store.set(THEME_KEY, stored);
            assert_eq!(ThemeController::load(store).theme(), Theme::Dark, "{stored:?}");
        }
    }

    #[test]
    fn loads_persisted_light() {
        let store = MemoryStorage::default();
        store.set(THEME_KEY, "light");
        let controller = ThemeController::load(store);
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.indicator(), "☀️");
    }

    #[test]
    fn loading_does_not_persist() {
        let controller = ThemeController::load(MemoryStorage::default());
        assert_eq!(controller.store.get(THEME_KEY), None);
    }

    #[test]
    fn one_toggle_from_default_persists_light() {
        let mut controller = ThemeController::load(MemoryStorage::default());

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(controller.indicator(), "☀️");
    }

    #[test]
    fn two_toggles_return_to_default() {
        let mut controller = ThemeController::load(MemoryStorage::default());
        let initial = controller.indicator();

        controller.toggle();
        controller.toggle();

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.indicator(), initial);
        assert_eq!(controller.store.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
