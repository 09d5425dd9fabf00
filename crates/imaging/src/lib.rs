//! # Imaging Crate
//!
//! Poster image resolution: decides whether a raw poster URL can be
//! trusted, maintains the session blocklist of broken-URL fingerprints,
//! and generates memoized SVG placeholders for everything else.
//!
//! ## Main Components
//!
//! - **resolver**: PosterResolver, the facade the display layer calls
//! - **patterns**: BrokenUrlPatterns, the learned fingerprint blocklist
//! - **placeholder**: PlaceholderCache, deterministic SVG generation
//!
//! ## Example Usage
//!
//! ```ignore
//! use imaging::PosterResolver;
//! use std::sync::Arc;
//!
//! let resolver = Arc::new(PosterResolver::new());
//! let src = resolver.resolve(Some(&movie.poster), &movie.title);
//! // on load failure:
//! resolver.report_broken(&failed_url);
//! ```

// Public modules
pub mod patterns;
pub mod placeholder;
pub mod resolver;

// Re-export main types
pub use patterns::BrokenUrlPatterns;
pub use placeholder::PlaceholderCache;
pub use resolver::PosterResolver;
