#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response status {status}")]
    Status { status: u16 },
    #[error("invalid response body (status {status}): {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[cfg(feature = "web")]
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("window location has no origin")]
    NoOrigin,
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("element #{id} is not a {expected}")]
    WrongElement {
        id: &'static str,
        expected: &'static str,
    },
    #[error("failed to register {0} listener")]
    Listener(&'static str),
}
