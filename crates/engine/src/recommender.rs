//! The reactive recommender: derived state over (catalog, favorites).
//!
//! Recommendations are a pure derived value. The contract: any catalog
//! insertion or favorites replacement is reflected before the next read of
//! the recommendation list; a consumer never observes a stale value once
//! both inputs are populated. The implementation is a pull-based memoized
//! getter: mutations mark the derived value dirty, the next read
//! recomputes it under the same lock. Reads before any search has filled
//! the catalog legitimately observe an empty list even when favorites
//! exist.

use crate::preferences::extract_preferences;
use crate::scoring::compute_recommendations;
use chrono::Datelike;
use model::{CatalogStore, FavoriteMovie, Movie};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct RecommenderState {
    catalog: CatalogStore,
    favorites: Vec<FavoriteMovie>,
    cache: Vec<Movie>,
    dirty: bool,
}

/// Owns the catalog and the current favorites snapshot and serves the
/// ranked recommendation list derived from them.
///
/// All mutable state sits behind one mutex, serializing mutations and the
/// recomputation pass so a read always sees the preceding write. Share
/// behind `Arc` as needed.
#[derive(Debug, Default)]
pub struct Recommender {
    state: Mutex<RecommenderState>,
}

impl Recommender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a batch of search results into the catalog.
    ///
    /// Only ids not already present are inserted; a batch of pure
    /// duplicates leaves the derived value untouched.
    pub fn add_movies_to_catalog(&self, movies: Vec<Movie>) {
        let mut state = self.state.lock().expect("recommender lock");
        if state.catalog.add_movies(movies) > 0 {
            state.dirty = true;
        }
    }

    /// Replace the favorites snapshot wholesale, as the favorites feed
    /// delivers it (including the empty list on sign-out).
    pub fn set_favorites(&self, favorites: Vec<FavoriteMovie>) {
        let mut state = self.state.lock().expect("recommender lock");
        state.favorites = favorites;
        state.dirty = true;
        tracing::debug!(favorites = state.favorites.len(), "favorites snapshot replaced");
    }

    /// The current recommendation list, recomputed if any input changed
    /// since the last read.
    pub fn recommendations(&self) -> Vec<Movie> {
        let mut state = self.state.lock().expect("recommender lock");
        if state.dirty {
            let preferences = extract_preferences(&state.favorites);
            let recomputed = compute_recommendations(
                state.catalog.movies(),
                &state.favorites,
                &preferences,
                current_year(),
            );
            state.cache = recomputed;
            state.dirty = false;
            tracing::debug!(count = state.cache.len(), "recommendations recomputed");
        }
        state.cache.clone()
    }

    /// Number of distinct movies observed so far.
    pub fn catalog_len(&self) -> usize {
        self.state.lock().expect("recommender lock").catalog.len()
    }
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, genre: &str) -> Movie {
        serde_json::from_str(&format!(
            r#"{{"imdbID": "{id}", "Title": "Movie {id}", "Year": "1990", "Genre": "{genre}"}}"#
        ))
        .unwrap()
    }

    fn favorite(id: &str, genre: &str) -> FavoriteMovie {
        serde_json::from_str(&format!(
            r#"{{"id": "{id}", "title": "Fav {id}", "year": "1990", "genre": "{genre}", "addedAt": "2026-01-01T00:00:00Z"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_empty_until_both_inputs_present() {
        let recommender = Recommender::new();
        assert!(recommender.recommendations().is_empty());

        // Favorites alone: still empty, the catalog has not been fed.
        recommender.set_favorites(vec![favorite("z", "Drama")]);
        assert!(recommender.recommendations().is_empty());

        recommender.add_movies_to_catalog(vec![movie("a", "Drama")]);
        assert_eq!(recommender.recommendations().len(), 1);
    }

    #[test]
    fn test_reads_reflect_catalog_growth() {
        let recommender = Recommender::new();
        recommender.set_favorites(vec![favorite("z", "Drama")]);
        recommender.add_movies_to_catalog(vec![movie("a", "Drama")]);
        assert_eq!(recommender.recommendations().len(), 1);

        recommender.add_movies_to_catalog(vec![movie("b", "Drama"), movie("c", "Horror")]);
        let ids: Vec<String> = recommender
            .recommendations()
            .iter()
            .map(|m| m.id.clone())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_favorite_removal_reflected_immediately() {
        let recommender = Recommender::new();
        recommender.add_movies_to_catalog(vec![movie("a", "Drama"), movie("z", "Drama")]);
        recommender.set_favorites(vec![favorite("z", "Drama")]);
        assert!(recommender.recommendations().iter().all(|m| m.id != "z"));

        // Signing out replaces the snapshot with an empty list; the
        // derived value empties with it.
        recommender.set_favorites(Vec::new());
        assert!(recommender.recommendations().is_empty());
    }

    #[test]
    fn test_duplicate_batch_leaves_value_clean() {
        let recommender = Recommender::new();
        recommender.set_favorites(vec![favorite("z", "Drama")]);
        recommender.add_movies_to_catalog(vec![movie("a", "Drama")]);
        let before = recommender.recommendations();

        recommender.add_movies_to_catalog(vec![movie("a", "Drama")]);
        assert_eq!(recommender.catalog_len(), 1);
        let after = recommender.recommendations();
        assert_eq!(
            before.iter().map(|m| &m.id).collect::<Vec<_>>(),
            after.iter().map(|m| &m.id).collect::<Vec<_>>()
        );
    }
}
