//! Decoders for the two external feeds the core consumes.
//!
//! - The *search-results feed*: the provider's title-search envelope with a
//!   `Search` array, a string-typed `Response` flag, and an `Error` message
//!   when the flag is "False".
//! - The *favorites feed*: a plain JSON array of favorite records. The
//!   remote document store historically wrote fields both capitalized and
//!   lowercased depending on client version, so favorite records accept
//!   either spelling (handled by the serde aliases on the types).

use crate::error::{FeedError, Result};
use crate::types::{FavoriteMovie, Movie};
use serde::Deserialize;

/// The search provider's response envelope.
#[derive(Debug, Deserialize)]
pub struct SearchFeed {
    #[serde(alias = "Search", default)]
    pub search: Vec<Movie>,
    #[serde(alias = "totalResults", default)]
    pub total_results: String,
    #[serde(alias = "Response")]
    pub response: String,
    #[serde(alias = "Error", default)]
    pub error: Option<String>,
}

impl SearchFeed {
    /// Decode a raw search response into the movies it carries.
    ///
    /// A provider-level failure (`Response: "False"`) becomes
    /// `FeedError::Api` carrying the provider's message.
    pub fn decode(payload: &str) -> Result<Vec<Movie>> {
        let feed: SearchFeed = serde_json::from_str(payload)?;
        if feed.response != "True" {
            return Err(FeedError::Api {
                message: feed
                    .error
                    .unwrap_or_else(|| "No movies found".to_string()),
            });
        }
        tracing::debug!(count = feed.search.len(), "decoded search feed");
        Ok(feed.search)
    }
}

/// Decode a favorites feed payload: a JSON array of favorite records.
///
/// The feed replaces the previous favorites list wholesale on every change,
/// so an empty array is a normal, meaningful value (no favorites, or signed
/// out) rather than an error.
pub fn decode_favorites(payload: &str) -> Result<Vec<FavoriteMovie>> {
    let favorites: Vec<FavoriteMovie> = serde_json::from_str(payload)?;
    Ok(favorites)
}
