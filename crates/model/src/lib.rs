//! # Model Crate
//!
//! Domain types and the catalog store shared by every crate in the
//! workspace.
//!
//! ## Main Components
//!
//! - **types**: Movie, FavoriteMovie, RatingRef
//! - **catalog**: CatalogStore, the append-only candidate pool
//! - **feed**: decoders for the search-results and favorites feeds
//! - **error**: FeedError for the decoding boundary
//!
//! ## Example Usage
//!
//! ```ignore
//! use model::{CatalogStore, SearchFeed};
//!
//! let movies = SearchFeed::decode(&payload)?;
//! let mut catalog = CatalogStore::new();
//! catalog.add_movies(movies);
//! ```

// Public modules
pub mod catalog;
pub mod error;
pub mod feed;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::CatalogStore;
pub use error::{FeedError, Result};
pub use feed::{decode_favorites, SearchFeed};
pub use types::{FavoriteMovie, Movie, RatingRef};
