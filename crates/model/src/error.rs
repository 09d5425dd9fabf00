//! Error types for feed decoding.

use thiserror::Error;

/// Errors that can occur while decoding the search or favorites feeds.
///
/// The algorithmic core itself raises no errors; decoding the provider's
/// JSON at the boundary is the only fallible step in this crate.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The provider answered but flagged the request as failed
    /// (`"Response": "False"` with an accompanying message).
    #[error("search provider error: {message}")]
    Api { message: String },

    /// The payload was not valid JSON or did not match the expected shape.
    #[error("malformed feed payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for Results in this crate.
pub type Result<T> = std::result::Result<T, FeedError>;
