use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the affiliate API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the key outright (HTTP 401 or 403).
    #[error("API key rejected (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body is not JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body is JSON but has no `data` array.
    #[error("response from {context} has no data array")]
    MissingData { context: String },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Errors from a [`crate::KeyValueStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key store I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid key store slot name: {0:?}")]
    InvalidName(String),
}

/// Errors from [`crate::Session`] operations that touch the key store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("API key must not be empty")]
    EmptyKey,

    #[error(transparent)]
    Store(#[from] StoreError),
}
