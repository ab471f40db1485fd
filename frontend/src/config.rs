//! Endpoint configuration, chosen once at startup from the page's own origin.
//!
//! When the page is served by the TLS reverse proxy (`https:` on port 8443) the
//! backend lives behind the same origin, so requests use relative paths.
//! Anywhere else (e.g. `trunk serve` during development) the backend is
//! reached directly on its local development address.

/// Public country lookup API. The URL-encoded name is appended to it.
pub const COUNTRY_API_BASE: &str = "https://restcountries.com/v3.1/name/";

/// Backend address used outside the reverse proxy.
pub const DEV_API_BASE: &str = "http://127.0.0.1:8000";

/// Port the reverse proxy serves the page on.
pub const PROXY_PORT: &str = "8443";

const FAVORITES_PATH: &str = "/favoritos";
const CLEANED_DATA_PATH: &str = "/api/cleaned_data";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Prefix for local backend resources; empty means same origin.
    pub api_base: String,
    pub country_api_base: String,
}

impl ApiConfig {
    /// Selects the backend base from a `window.location`-style protocol
    /// (with trailing colon) and port.
    pub fn for_origin(protocol: &str, port: &str) -> Self {
        let api_base = if protocol == "https:" && port == PROXY_PORT {
            String::new()
        } else {
            DEV_API_BASE.to_string()
        };
        Self {
            api_base,
            country_api_base: COUNTRY_API_BASE.to_string(),
        }
    }

    /// Reads the current page location. An unreadable location is treated as
    /// a development origin.
    pub fn from_window() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let protocol = location
            .as_ref()
            .and_then(|l| l.protocol().ok())
            .unwrap_or_default();
        let port = location
            .as_ref()
            .and_then(|l| l.port().ok())
            .unwrap_or_default();
        Self::for_origin(&protocol, &port)
    }

    pub fn favorites_url(&self) -> String {
        format!("{}{}", self.api_base, FAVORITES_PATH)
    }

    pub fn cleaned_data_url(&self) -> String {
        format!("{}{}", self.api_base, CLEANED_DATA_PATH)
    }
}
