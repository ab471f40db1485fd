use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, or a body that did not decode as the expected JSON.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    /// Any non-2xx answer. Client and server errors are handled alike.
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
}
