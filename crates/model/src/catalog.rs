//! The catalog store: every movie ever observed from search results.
//!
//! The catalog is the candidate pool for recommendations. It is append-only
//! by identity: a movie id is inserted at most once and the first record
//! seen for an id wins, even if a later search returns the same id with
//! different (often richer) fields. There is no removal and no eviction;
//! the catalog lives for the application session.

use crate::types::Movie;
use std::collections::HashSet;

/// Append-only accumulator of search results, deduplicated by movie id.
///
/// Insertion order is preserved but carries no meaning; conceptually this
/// is a set indexed by id.
#[derive(Debug, Default)]
pub struct CatalogStore {
    movies: Vec<Movie>,
    ids: HashSet<String>,
}

impl CatalogStore {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every movie whose id is not already present.
    ///
    /// Existing entries are never overwritten. Returns how many movies were
    /// actually inserted, which lets callers cheaply detect a no-op batch.
    pub fn add_movies(&mut self, movies: Vec<Movie>) -> usize {
        let before = self.movies.len();
        for movie in movies {
            if self.ids.insert(movie.id.clone()) {
                self.movies.push(movie);
            }
        }
        let inserted = self.movies.len() - before;
        if inserted > 0 {
            tracing::debug!(inserted, total = self.movies.len(), "catalog grew");
        }
        inserted
    }

    /// All movies in insertion order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn get(&self, id: &str) -> Option<&Movie> {
        if !self.ids.contains(id) {
            return None;
        }
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
