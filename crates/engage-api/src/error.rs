use thiserror::Error;

/// Errors returned by the engage API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("request to {path} failed with status {status}")]
    Status { status: u16, path: String },

    /// A single-engagement fetch hit a 404. This is the one call site where
    /// the dashboard distinguishes "not found" from a generic failure.
    #[error("engagement {id} not found")]
    NotFound { id: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("json deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// An import file needs an extension so the backend can pick a parser.
    #[error("import file '{0}' has no extension")]
    MissingExtension(String),
}
