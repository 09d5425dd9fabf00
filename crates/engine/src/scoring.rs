//! Scoring and ranking of catalog candidates against the taste profile.
//!
//! Every pass is computed from scratch; no state survives between calls.
//! The score of a candidate is the sum of the preference weights of its
//! genre tokens, plus a flat +1 recency bonus for movies released within
//! the last ten calendar years. Malformed genre or year data degrades to a
//! zero contribution rather than failing.

use crate::preferences::Preferences;
use model::{FavoriteMovie, Movie};
use rayon::prelude::*;
use std::collections::HashSet;

/// How many top-scored candidates survive the first cut.
const RANKING_CUT: usize = 15;
/// Final size bound of the recommendation list.
const MAX_RECOMMENDATIONS: usize = 10;
/// A release within this many years of `current_year` earns the bonus.
const RECENCY_WINDOW_YEARS: i32 = 10;

/// Compute the ranked recommendation list.
///
/// ## Algorithm
/// 1. Empty catalog or empty favorites short-circuits to an empty list.
/// 2. Candidates: catalog deduplicated by id (first occurrence wins) minus
///    every favorited id.
/// 3. Each candidate is scored (in parallel) against the profile.
/// 4. Sort by descending score; equal scores order by ascending id, a
///    stable tie-break chosen over the upstream behavior of randomly
///    inverting the comparison (see DESIGN.md).
/// 5. Cut to the top 15, collapse duplicate ids once more, cut to 10.
///    The second collapse guards against non-unique upstream input.
pub fn compute_recommendations(
    catalog: &[Movie],
    favorites: &[FavoriteMovie],
    preferences: &Preferences,
    current_year: i32,
) -> Vec<Movie> {
    if favorites.is_empty() || catalog.is_empty() {
        return Vec::new();
    }

    let favorite_ids: HashSet<&str> = favorites.iter().map(|f| f.id()).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let candidates: Vec<&Movie> = catalog
        .iter()
        .filter(|m| seen.insert(m.id.as_str()) && !favorite_ids.contains(m.id.as_str()))
        .collect();

    let mut scored: Vec<(&Movie, u32)> = candidates
        .par_iter()
        .map(|movie| (*movie, score_movie(movie, preferences, current_year)))
        .collect();

    scored.sort_by(|(a, score_a), (b, score_b)| {
        score_b.cmp(score_a).then_with(|| a.id.cmp(&b.id))
    });
    scored.truncate(RANKING_CUT);

    let mut emitted: HashSet<&str> = HashSet::new();
    let recommendations: Vec<Movie> = scored
        .into_iter()
        .filter(|(movie, _)| emitted.insert(movie.id.as_str()))
        .take(MAX_RECOMMENDATIONS)
        .map(|(movie, _)| movie.clone())
        .collect();

    tracing::debug!(
        candidates = candidates.len(),
        returned = recommendations.len(),
        "scored recommendation pass"
    );
    recommendations
}

/// Score one candidate against the profile.
pub fn score_movie(movie: &Movie, preferences: &Preferences, current_year: i32) -> u32 {
    let mut score: u32 = movie
        .genre_tokens()
        .map(|genre| preferences.get(genre).copied().unwrap_or(0))
        .sum();

    if let Ok(year) = movie.year.parse::<i32>() {
        if year >= current_year - RECENCY_WINDOW_YEARS {
            score += 1;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::extract_preferences;

    const YEAR: i32 = 2026;

    fn movie(id: &str, genre: Option<&str>, year: &str) -> Movie {
        let genre_field = genre
            .map(|g| format!(r#", "Genre": "{g}""#))
            .unwrap_or_default();
        serde_json::from_str(&format!(
            r#"{{"imdbID": "{id}", "Title": "Movie {id}", "Year": "{year}"{genre_field}}}"#
        ))
        .unwrap()
    }

    fn favorite(id: &str, genre: &str) -> FavoriteMovie {
        serde_json::from_str(&format!(
            r#"{{"id": "{id}", "title": "Fav {id}", "year": "2015", "genre": "{genre}", "addedAt": "2026-01-01T00:00:00Z"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_empty_inputs_short_circuit() {
        let prefs = Preferences::new();
        assert!(compute_recommendations(&[], &[favorite("z", "Drama")], &prefs, YEAR).is_empty());
        assert!(
            compute_recommendations(&[movie("a", Some("Drama"), "2020")], &[], &prefs, YEAR)
                .is_empty()
        );
    }

    #[test]
    fn test_genre_scoring_scenario() {
        // Old years so only genre weights distinguish the candidates.
        let catalog = vec![
            movie("a", Some("Drama"), "1990"),
            movie("b", Some("Drama, Comedy"), "1990"),
            movie("c", Some("Horror"), "1990"),
        ];
        let favorites = vec![favorite("z", "Drama")];
        let prefs = extract_preferences(&favorites);
        assert_eq!(prefs.get("Drama"), Some(&1));

        let recs = compute_recommendations(&catalog, &favorites, &prefs, YEAR);
        let ids: Vec<&str> = recs.iter().map(|m| m.id.as_str()).collect();

        // a and b score 1, c scores 0.
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_recency_bonus() {
        let prefs = Preferences::new();
        assert_eq!(score_movie(&movie("a", None, "2026"), &prefs, YEAR), 1);
        assert_eq!(score_movie(&movie("b", None, "2016"), &prefs, YEAR), 1);
        assert_eq!(score_movie(&movie("c", None, "2015"), &prefs, YEAR), 0);
        // Unparseable years contribute nothing.
        assert_eq!(score_movie(&movie("d", None, "2001–2003"), &prefs, YEAR), 0);
        assert_eq!(score_movie(&movie("e", None, ""), &prefs, YEAR), 0);
    }

    #[test]
    fn test_score_monotonic_in_matching_genres() {
        let favorites = vec![favorite("z", "Drama, Comedy")];
        let prefs = extract_preferences(&favorites);

        let one_match = score_movie(&movie("a", Some("Drama"), "1990"), &prefs, YEAR);
        let two_matches = score_movie(&movie("b", Some("Drama, Comedy"), "1990"), &prefs, YEAR);
        assert!(two_matches > one_match);
    }

    #[test]
    fn test_favorites_never_recommended() {
        let catalog = vec![
            movie("a", Some("Drama"), "2020"),
            movie("z", Some("Drama"), "2020"),
        ];
        let favorites = vec![favorite("z", "Drama")];
        let prefs = extract_preferences(&favorites);

        let recs = compute_recommendations(&catalog, &favorites, &prefs, YEAR);
        assert!(recs.iter().all(|m| m.id != "z"));
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn test_duplicate_catalog_entries_first_occurrence_wins() {
        let mut first = movie("a", Some("Drama"), "2020");
        first.title = "First copy".to_string();
        let mut second = movie("a", Some("Drama"), "2020");
        second.title = "Second copy".to_string();

        let favorites = vec![favorite("z", "Drama")];
        let prefs = extract_preferences(&favorites);
        let recs = compute_recommendations(&[first, second], &favorites, &prefs, YEAR);

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "First copy");
    }

    #[test]
    fn test_output_bounded_at_ten() {
        let catalog: Vec<Movie> = (0..40)
            .map(|i| movie(&format!("tt{i:03}"), Some("Drama"), "2024"))
            .collect();
        let favorites = vec![favorite("z", "Drama")];
        let prefs = extract_preferences(&favorites);

        let recs = compute_recommendations(&catalog, &favorites, &prefs, YEAR);
        assert_eq!(recs.len(), 10);
    }

    #[test]
    fn test_equal_scores_order_by_id() {
        let catalog = vec![
            movie("ttC", Some("Drama"), "1990"),
            movie("ttA", Some("Drama"), "1990"),
            movie("ttB", Some("Drama"), "1990"),
        ];
        let favorites = vec![favorite("z", "Drama")];
        let prefs = extract_preferences(&favorites);

        let recs = compute_recommendations(&catalog, &favorites, &prefs, YEAR);
        let ids: Vec<&str> = recs.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["ttA", "ttB", "ttC"]);
    }
}
