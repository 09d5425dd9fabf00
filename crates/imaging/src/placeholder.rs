//! Generated placeholder posters for missing or broken artwork.
//!
//! A placeholder is a 300x450 SVG card: soft gradient background, a film
//! reel motif, the movie title (truncated to fit), and a "No poster
//! available" caption, returned as a `data:image/svg+xml` URL so the
//! display layer can drop it straight into an image source attribute.
//!
//! Generation is a pure function of the title and is memoized per title:
//! the same title is rendered exactly once per session. The cache is keyed
//! by title only, so two different movies sharing a title share one
//! placeholder (accepted approximation).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

const WIDTH: u32 = 300;
const HEIGHT: u32 = 450;
/// Widest the title text may render, in SVG user units (20px margins).
const MAX_TEXT_WIDTH: f32 = 260.0;
/// Nominal font size of the title line.
const TITLE_FONT_SIZE: f32 = 18.0;

/// Memoizing placeholder generator.
#[derive(Debug, Default)]
pub struct PlaceholderCache {
    cache: Mutex<HashMap<String, String>>,
    generations: AtomicUsize,
}

impl PlaceholderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the placeholder data URL for `title`, rendering it on first
    /// use and serving the cached copy afterwards.
    pub fn get(&self, title: &str) -> String {
        let mut cache = self.cache.lock().expect("placeholder cache lock");
        if let Some(cached) = cache.get(title) {
            return cached.clone();
        }
        self.generations.fetch_add(1, Ordering::Relaxed);
        let rendered = render_placeholder(title);
        cache.insert(title.to_string(), rendered.clone());
        rendered
    }

    /// How many placeholders have actually been rendered (cache misses).
    pub fn generations(&self) -> usize {
        self.generations.load(Ordering::Relaxed)
    }
}

/// Render the SVG card for `title`. Pure and deterministic.
fn render_placeholder(title: &str) -> String {
    let display_title = truncate_to_fit(title, MAX_TEXT_WIDTH);
    let center_x = WIDTH / 2;
    let center_y = HEIGHT / 2 - 30;

    let svg = format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"##,
            r##"<defs><linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">"##,
            r##"<stop offset="0%" stop-color="#f1f5f9"/>"##,
            r##"<stop offset="50%" stop-color="#e2e8f0"/>"##,
            r##"<stop offset="100%" stop-color="#cbd5e1"/>"##,
            r##"</linearGradient></defs>"##,
            r##"<rect width="{w}" height="{h}" fill="url(#bg)"/>"##,
            r##"<circle cx="{cx}" cy="{cy}" r="50" fill="#94a3b8"/>"##,
            r##"<circle cx="{cx}" cy="{cy}" r="35" fill="#cbd5e1"/>"##,
            r##"<circle cx="{cx}" cy="{cy}" r="20" fill="#475569"/>"##,
            r##"<circle cx="{hx}" cy="{hy}" r="6" fill="#ffffff" fill-opacity="0.3"/>"##,
            r##"<rect x="{rx}" y="{ry}" width="8" height="12" fill="#94a3b8"/>"##,
            r##"<text x="{cx}" y="{ty}" text-anchor="middle" font-family="'Segoe UI', Arial, sans-serif" font-size="18" font-weight="bold" fill="#334155">{title}</text>"##,
            r##"<text x="{cx}" y="{sy}" text-anchor="middle" font-family="'Segoe UI', Arial, sans-serif" font-size="12" fill="#64748b">No poster available</text>"##,
            r##"</svg>"##
        ),
        w = WIDTH,
        h = HEIGHT,
        cx = center_x,
        cy = center_y,
        hx = center_x - 5,
        hy = center_y - 5,
        rx = center_x + 35,
        ry = center_y - 15,
        ty = center_y + 100,
        sy = center_y + 130,
        title = escape_xml(&display_title),
    );

    format!("data:image/svg+xml;utf8,{}", encode_data_url(&svg))
}

/// Truncate `title` to the longest prefix (plus an ellipsis marker) whose
/// estimated rendered width fits `max_width`.
///
/// Rendered width is a non-decreasing function of prefix length for a
/// fixed font, so a binary search over the truncation length finds the
/// longest fitting prefix.
fn truncate_to_fit(title: &str, max_width: f32) -> String {
    if text_width(title) <= max_width {
        return title.to_string();
    }

    let chars: Vec<char> = title.chars().collect();
    let mut low = 0usize;
    let mut high = chars.len();
    let mut result = String::new();

    while low <= high {
        let mid = (low + high) / 2;
        let mut candidate: String = chars[..mid].iter().collect();
        if mid < chars.len() {
            candidate.push_str("...");
        }
        if text_width(&candidate) <= max_width {
            result = candidate;
            low = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            high = mid - 1;
        }
    }

    result
}

/// Estimated advance width of `text` at the title font size.
///
/// A per-character advance table approximates the font metrics; exact
/// pixel fidelity does not matter, only that the estimate is monotonic in
/// prefix length, which holds because every advance is positive.
fn text_width(text: &str) -> f32 {
    text.chars().map(char_advance).sum::<f32>() * (TITLE_FONT_SIZE / 18.0)
}

fn char_advance(c: char) -> f32 {
    match c {
        'i' | 'l' | 'j' | '!' | '\'' | '|' | '.' | ',' | ':' | ';' => 5.0,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' | ' ' => 7.0,
        'm' | 'w' => 15.0,
        'M' | 'W' => 17.0,
        'A'..='Z' | '0'..='9' => 13.0,
        _ => 10.0,
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encode the characters that terminate or corrupt an inline SVG
/// data URL; everything else passes through for readability.
fn encode_data_url(svg: &str) -> String {
    let mut out = String::with_capacity(svg.len());
    for c in svg.chars() {
        match c {
            '#' => out.push_str("%23"),
            '%' => out.push_str("%25"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '"' => out.push_str("%22"),
            '\n' => out.push_str("%0A"),
            other => out.push(other),
        }
    }
    out
}
