use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("a favorite needs a non-empty comment")]
    EmptyComment,
}

/// Request payload for `POST /favoritos`.
/// Built only through [`CreateFavorite::new`], which refuses an empty comment.
/// Whitespace is kept as typed; the backend accepts it.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CreateFavorite {
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "comentario")]
    comment: String,
    #[serde(rename = "imagen_url")]
    image_url: String,
}

impl CreateFavorite {
    pub fn new(
        name: impl Into<String>,
        comment: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self, RequestError> {
        let comment = comment.into();
        if comment.is_empty() {
            return Err(RequestError::EmptyComment);
        }
        Ok(Self {
            name: name.into(),
            comment,
            image_url: image_url.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}
