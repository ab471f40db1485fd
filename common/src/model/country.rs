use serde::Deserialize;

/// Placeholder shown when the lookup API omits a country or continent name.
pub const UNKNOWN_NAME: &str = "Desconocido";

/// Placeholder shown when the lookup API omits the capital.
pub const UNKNOWN_CAPITAL: &str = "Desconocida";

/// A single record returned by the public country lookup API
/// (`GET /v3.1/name/{name}`).
///
/// The API returns far more than this; only the fields the client renders are
/// decoded and every one of them may be missing. Use the accessors instead of
/// the raw fields so missing data falls back to the same placeholders
/// everywhere.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CountryResult {
    #[serde(default)]
    pub name: Option<CountryName>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub continents: Option<Vec<String>>,
    #[serde(default)]
    pub flags: Option<Flags>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CountryName {
    #[serde(default)]
    pub common: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Flags {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

impl CountryResult {
    /// Common name of the country, or [`UNKNOWN_NAME`].
    pub fn display_name(&self) -> &str {
        self.name
            .as_ref()
            .and_then(|n| n.common.as_deref())
            .unwrap_or(UNKNOWN_NAME)
    }

    /// First listed capital, or [`UNKNOWN_CAPITAL`].
    pub fn capital_name(&self) -> &str {
        first(&self.capital).unwrap_or(UNKNOWN_CAPITAL)
    }

    /// First listed continent, or [`UNKNOWN_NAME`].
    pub fn continent_name(&self) -> &str {
        first(&self.continents).unwrap_or(UNKNOWN_NAME)
    }

    /// PNG flag if present and non-empty, then SVG, then an empty string.
    pub fn flag_url(&self) -> &str {
        let Some(flags) = &self.flags else {
            return "";
        };
        [flags.png.as_deref(), flags.svg.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .unwrap_or("")
    }
}

fn first(values: &Option<Vec<String>>) -> Option<&str> {
    values.as_ref().and_then(|v| v.first()).map(String::as_str)
}
