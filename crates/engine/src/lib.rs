//! # Engine Crate
//!
//! The recommendation engine: taste-profile extraction, candidate scoring
//! and ranking, and the reactive recomputation wrapper.
//!
//! ## Architecture
//! The engine derives recommendations in three stages:
//! 1. `preferences` turns the favorites set into a genre-weight profile
//! 2. `scoring` ranks the un-favorited catalog against that profile
//! 3. `Recommender` ties both to the two input feeds and memoizes the
//!    result until an input changes
//!
//! ## Example Usage
//! ```ignore
//! use engine::Recommender;
//!
//! let recommender = Recommender::new();
//! recommender.add_movies_to_catalog(search_results);
//! recommender.set_favorites(favorites_snapshot);
//! let top = recommender.recommendations();
//! ```

pub mod preferences;
pub mod recommender;
pub mod scoring;

// Re-export main types
pub use preferences::{extract_preferences, Preferences};
pub use recommender::Recommender;
pub use scoring::{compute_recommendations, score_movie};
