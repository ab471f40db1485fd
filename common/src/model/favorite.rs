use serde::{Deserialize, Serialize};

/// A country saved by the user, as listed by `GET /favoritos`.
///
/// The backend names its columns in Spanish; the serde renames keep the Rust
/// side in English while matching the wire format exactly. `id` is assigned by
/// the backend and is not needed to render a favorite, so it may be absent.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Favorite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "comentario")]
    pub comment: String,
    #[serde(rename = "imagen_url")]
    pub image_url: String,
}
