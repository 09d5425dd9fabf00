//! Core domain types shared by every crate in the workspace.
//!
//! The shapes mirror what the search provider returns: ids are opaque
//! strings, years are strings (the provider emits ranges like "2001–2003"
//! for series), and most detail fields are optional because title search
//! returns partial records that only a later detail lookup fills in.

use serde::{Deserialize, Serialize};

// =============================================================================
// Movie
// =============================================================================

/// A movie as observed from the search provider.
///
/// Identity is the `id` field alone: two records with the same `id` are the
/// same movie even when other fields differ (search results carry fewer
/// fields than detail lookups). No reconciliation is performed anywhere in
/// the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    #[serde(alias = "imdbID")]
    pub id: String,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Year", default)]
    pub year: String,
    /// Raw poster URL as delivered; may be the literal sentinel "N/A".
    /// Run it through `imaging::PosterResolver` before display.
    #[serde(alias = "Poster", default)]
    pub poster: String,
    #[serde(alias = "Type", rename = "type", default = "default_kind")]
    pub kind: String,
    /// Comma-separated genre list, e.g. "Drama, Comedy".
    #[serde(alias = "Genre", default, deserialize_with = "de_optional_text")]
    pub genre: Option<String>,
    #[serde(alias = "Director", default, deserialize_with = "de_optional_text")]
    pub director: Option<String>,
    #[serde(alias = "Actors", default, deserialize_with = "de_optional_text")]
    pub actors: Option<String>,
    #[serde(alias = "Plot", default, deserialize_with = "de_optional_text")]
    pub plot: Option<String>,
    #[serde(alias = "imdbRating", default, deserialize_with = "de_optional_text")]
    pub imdb_rating: Option<String>,
    #[serde(alias = "Ratings", default)]
    pub ratings: Vec<RatingRef>,
}

fn default_kind() -> String {
    "movie".to_string()
}

/// Decode an optional text field, normalizing the provider's "N/A"
/// sentinel (and empty strings) to `None`.
fn de_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty() && s != "N/A"))
}

impl Movie {
    /// Genre tokens, split on the provider's literal `", "` delimiter.
    ///
    /// A missing genre yields an empty iterator; a malformed one simply
    /// yields whatever tokens the split produces. Scoring treats unknown
    /// tokens as zero weight, so nothing here can fail.
    pub fn genre_tokens(&self) -> impl Iterator<Item = &str> {
        self.genre
            .as_deref()
            .unwrap_or("")
            .split(", ")
            .filter(|t| !t.is_empty())
    }
}

/// One entry of the provider's per-source rating list
/// (e.g. source "Rotten Tomatoes", value "87%").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRef {
    #[serde(alias = "Source")]
    pub source: String,
    #[serde(alias = "Value")]
    pub value: String,
}

// =============================================================================
// FavoriteMovie
// =============================================================================

/// A movie the user has favorited, as materialized by the favorites feed.
///
/// `added_at` is an ISO-8601 timestamp string set once when the favorite is
/// created and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteMovie {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(alias = "addedAt", default)]
    pub added_at: String,
}

impl FavoriteMovie {
    pub fn id(&self) -> &str {
        &self.movie.id
    }
}
