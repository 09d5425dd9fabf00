//! Poster URL resolution.
//!
//! The display layer hands every raw poster URL through `PosterResolver`
//! before rendering. Untrustworthy URLs (provider sentinels, non-HTTP
//! schemes, leftover dev-proxy artifacts, or anything matching a learned
//! broken fingerprint) resolve to a generated placeholder instead.

use crate::patterns::BrokenUrlPatterns;
use crate::placeholder::PlaceholderCache;

/// Sentinel values the provider emits in place of a real poster URL.
const URL_SENTINELS: [&str; 3] = ["N/A", "null", "undefined"];

/// Artifact of a broken local dev proxy that used to leak into stored
/// records; still present in old favorites documents.
const DEV_PROXY_ARTIFACT: &str = "localhost:4200/N/A";

/// Resolves raw poster URLs to something safe to render.
///
/// Owns the broken-fingerprint set and the placeholder cache; share one
/// instance (behind `Arc`) across everything that renders posters so that
/// learned fingerprints block globally.
#[derive(Debug, Default)]
pub struct PosterResolver {
    patterns: BrokenUrlPatterns,
    placeholders: PlaceholderCache,
}

impl PosterResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a raw poster URL for the movie titled `title`.
    ///
    /// Returns the URL unchanged when it looks trustworthy, otherwise the
    /// memoized placeholder for `title`. Never fails and has no side
    /// effect on the successful path.
    pub fn resolve(&self, url: Option<&str>, title: &str) -> String {
        match url {
            Some(url) if !self.is_invalid(url) && !self.patterns.matches(url) => url.to_string(),
            _ => self.placeholders.get(title),
        }
    }

    /// Record that `failed_url` failed to load, learning its fingerprint
    /// so future resolutions of any URL sharing it go to a placeholder.
    pub fn report_broken(&self, failed_url: &str) {
        self.patterns.report(failed_url);
    }

    /// The placeholder for `title`, generated on first use.
    pub fn placeholder(&self, title: &str) -> String {
        self.placeholders.get(title)
    }

    /// Number of fingerprints currently blocked.
    pub fn blocked_fingerprints(&self) -> usize {
        self.patterns.len()
    }

    fn is_invalid(&self, url: &str) -> bool {
        URL_SENTINELS.contains(&url)
            || !url.starts_with("http")
            || url.contains(DEV_PROXY_ARTIFACT)
    }
}
