//! The learned blocklist of broken poster-URL fingerprints.
//!
//! The image CDN serves many movies from shared assets; when one asset
//! 404s, every movie whose poster URL embeds the same asset id is broken
//! too. A fingerprint is the asset-id portion of the URL: the vendor's
//! `MV5B` prefix followed by an alphanumeric run. Once a fingerprint is
//! reported broken, every future resolution containing it is redirected to
//! a placeholder, regardless of which movie originally failed.

use regex::Regex;
use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// Asset-id pattern embedded in the CDN's poster URLs.
static FINGERPRINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"MV5B[a-zA-Z0-9]+").expect("fingerprint regex is valid"));

/// Fingerprints known to be broken before any failure has been observed
/// this session. Collected from recurring dead assets in the wild.
const SEED_PATTERNS: [&str; 7] = [
    "MV5BNGYyMDZkZGMtZDdlYy00YmVjLTk4MmMtOWI5NWViNmVkZDU0",
    "MV5BYzEzZGFlYjctNzZiMi00N2YyLWFjODctM2FmYWZmMDI5M2U1",
    "MV5BYjI3OTg1ODUtNTk0Zi00YjVjLWI2MzMtMTEzOGVmODU4MWZk",
    "MV5BNmUxZDE2NWYtOWE5ZC00M2M0LTlkMzEtNGY0NDk5OWQ3YTU5",
    "MV5BOTRmMDExMTAtZDM2MC00YTZlLWE1ODItNTIxMTM3Y2NjZGY5",
    "MV5BN2QzNTQxODAtYzI4Mi00ZjAzLWFjNDgtZThkNDJkNzE1N2Jl",
    "MV5BYTQxYTY1MDgtM2FjNS00YTdlLWE0OTItMDk2YzRlMjYxMGQx",
];

/// Session-lifetime set of broken-URL fingerprints.
///
/// Grows monotonically; never persisted across sessions. Interior mutex so
/// the set can be shared behind `&self` from multiple threads.
#[derive(Debug)]
pub struct BrokenUrlPatterns {
    patterns: Mutex<HashSet<String>>,
}

impl BrokenUrlPatterns {
    /// Creates the set pre-seeded with the known-bad fingerprints.
    pub fn new() -> Self {
        Self {
            patterns: Mutex::new(SEED_PATTERNS.iter().map(|p| p.to_string()).collect()),
        }
    }

    /// True when `url` contains any fingerprint currently in the set.
    pub fn matches(&self, url: &str) -> bool {
        let patterns = self.patterns.lock().expect("pattern set lock");
        patterns.iter().any(|p| url.contains(p.as_str()))
    }

    /// Learn from a failed load: extract the fingerprint from `failed_url`
    /// and add it if new. Idempotent; URLs without an extractable
    /// fingerprint accumulate nothing.
    pub fn report(&self, failed_url: &str) {
        let Some(found) = FINGERPRINT.find(failed_url) else {
            return;
        };
        let mut patterns = self.patterns.lock().expect("pattern set lock");
        if patterns.insert(found.as_str().to_string()) {
            tracing::info!(fingerprint = found.as_str(), "learned broken poster fingerprint");
        }
    }

    /// Number of fingerprints currently blocked. Never below the seed
    /// count; the set only grows.
    pub fn len(&self) -> usize {
        self.patterns.lock().expect("pattern set lock").len()
    }
}

impl Default for BrokenUrlPatterns {
    fn default() -> Self {
        Self::new()
    }
}
