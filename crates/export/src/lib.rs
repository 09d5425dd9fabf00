//! # Export Crate
//!
//! CSV export transforms for the favorites list and single-movie details.
//!
//! Pure formatting: fixed column orders, every field wrapped in double
//! quotes with internal quotes doubled (RFC-4180 style), rows joined with
//! `\n`, and a UTF-8 byte-order-mark prefix so spreadsheet applications
//! detect the encoding. Missing values render as `N/A`.

use chrono::DateTime;
use model::{FavoriteMovie, Movie};

/// Byte-order mark prefixed to every export.
const BOM: &str = "\u{feff}";

const FAVORITES_HEADERS: [&str; 7] = [
    "Title",
    "Year",
    "Genre",
    "Director",
    "Actors",
    "IMDb Rating",
    "Added Date",
];

const DETAILS_HEADERS: [&str; 8] = [
    "ID",
    "Title",
    "Year",
    "Genre",
    "Director",
    "Actors",
    "Plot",
    "IMDb Rating",
];

/// Render the favorites list as CSV.
pub fn favorites_to_csv(favorites: &[FavoriteMovie]) -> String {
    let mut rows = vec![header_row(&FAVORITES_HEADERS)];
    for favorite in favorites {
        let movie = &favorite.movie;
        rows.push(join_row(&[
            or_na(Some(movie.title.as_str())),
            or_na(Some(movie.year.as_str())),
            or_na(movie.genre.as_deref()),
            or_na(movie.director.as_deref()),
            or_na(movie.actors.as_deref()),
            or_na(movie.imdb_rating.as_deref()),
            added_date(&favorite.added_at),
        ]));
    }
    format!("{BOM}{}", rows.join("\n"))
}

/// Render a single movie's details as CSV (header plus one row).
pub fn movie_details_to_csv(movie: &Movie) -> String {
    let row = join_row(&[
        or_na(Some(movie.id.as_str())),
        or_na(Some(movie.title.as_str())),
        or_na(Some(movie.year.as_str())),
        or_na(movie.genre.as_deref()),
        or_na(movie.director.as_deref()),
        or_na(movie.actors.as_deref()),
        or_na(movie.plot.as_deref()),
        or_na(movie.imdb_rating.as_deref()),
    ]);
    format!("{BOM}{}\n{row}", header_row(&DETAILS_HEADERS))
}

/// Filename for a single-movie details export: every non-alphanumeric
/// character of the title becomes `_`.
pub fn details_filename(title: &str) -> String {
    if title.is_empty() {
        return "movie_details.csv".to_string();
    }
    let sanitized: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{sanitized}_details.csv")
}

fn header_row(headers: &[&str]) -> String {
    join_row(&headers.iter().map(|h| h.to_string()).collect::<Vec<_>>())
}

fn join_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| quote(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Wrap in double quotes, doubling any internal double quote.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

/// The calendar-date portion of the `addedAt` timestamp.
fn added_date(added_at: &str) -> String {
    match DateTime::parse_from_rfc3339(added_at) {
        Ok(ts) => ts.format("%Y-%m-%d").to_string(),
        Err(_) => or_na(Some(added_at)),
    }
}
