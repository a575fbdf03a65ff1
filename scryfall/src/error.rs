use thiserror::Error;

/// Errors raised while talking to the Scryfall API.
#[derive(Error, Debug)]
pub enum ScryfallError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered {status}: {body}")]
    Status { status: u16, url: String, body: String },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}

impl ScryfallError {
    /// Connection failures, timeouts, throttling and server errors.
    pub fn is_transient(&self) -> bool {
        match self {
            ScryfallError::Http(e) => e.is_timeout() || e.is_connect(),
            ScryfallError::Status { status, .. } => *status == 429 || (500..600).contains(status),
            ScryfallError::Decode { .. } | ScryfallError::UnknownCategory(_) => false,
        }
    }
}
