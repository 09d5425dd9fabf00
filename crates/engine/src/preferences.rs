//! The taste profile: genre weights derived from the favorites set.

use model::FavoriteMovie;
use std::collections::HashMap;

/// Genre name -> weight. Built fresh for every scoring pass and discarded
/// afterwards; there is no persisted profile lifecycle.
pub type Preferences = HashMap<String, u32>;

/// Derive the genre-weighted preference profile from the favorites set.
///
/// Each favorite contributes +1 to every genre token it lists (split on
/// the provider's literal `", "` delimiter). A favorite without a genre
/// contributes nothing; an empty favorites set yields an empty profile.
pub fn extract_preferences(favorites: &[FavoriteMovie]) -> Preferences {
    let mut weights = Preferences::new();
    for favorite in favorites {
        for genre in favorite.movie.genre_tokens() {
            *weights.entry(genre.to_string()).or_insert(0) += 1;
        }
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(id: &str, genre: Option<&str>) -> FavoriteMovie {
        let genre_field = genre
            .map(|g| format!(r#", "genre": "{g}""#))
            .unwrap_or_default();
        serde_json::from_str(&format!(
            r#"{{"id": "{id}", "title": "{id}", "year": "2020", "addedAt": "2026-01-01T00:00:00Z"{genre_field}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_empty_favorites_yield_empty_profile() {
        assert!(extract_preferences(&[]).is_empty());
    }

    #[test]
    fn test_weights_count_listing_favorites() {
        let favorites = vec![
            favorite("tt1", Some("Drama, Comedy")),
            favorite("tt2", Some("Drama")),
            favorite("tt3", None),
        ];

        let prefs = extract_preferences(&favorites);
        assert_eq!(prefs.get("Drama"), Some(&2));
        assert_eq!(prefs.get("Comedy"), Some(&1));
        assert_eq!(prefs.len(), 2);
    }

    #[test]
    fn test_additivity_over_disjoint_genre_sets() {
        let f1 = vec![favorite("tt1", Some("Drama")), favorite("tt2", Some("Drama, War"))];
        let f2 = vec![favorite("tt3", Some("Comedy, Romance"))];

        let mut combined: Vec<FavoriteMovie> = f1.clone();
        combined.extend(f2.clone());

        let p1 = extract_preferences(&f1);
        let p2 = extract_preferences(&f2);
        let sum = extract_preferences(&combined);

        // Pointwise sum of the two disjoint profiles.
        for (genre, weight) in &sum {
            let expected = p1.get(genre).copied().unwrap_or(0) + p2.get(genre).copied().unwrap_or(0);
            assert_eq!(*weight, expected, "genre {genre}");
        }
        assert_eq!(sum.len(), p1.len() + p2.len());
    }
}
