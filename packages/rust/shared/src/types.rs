//! Core domain types for clipmark.

use serde::{Deserialize, Serialize};

/// Fallback title when the extraction provider returns none.
pub const DEFAULT_TITLE: &str = "web_note";

// ---------------------------------------------------------------------------
// ExtractedPage
// ---------------------------------------------------------------------------

/// A page as returned by the extraction provider. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// Page title (provider-supplied, or [`DEFAULT_TITLE`]).
    pub title: String,
    /// Main page content as raw Markdown.
    pub raw_content: String,
}

// ---------------------------------------------------------------------------
// ClipRequest
// ---------------------------------------------------------------------------

/// A single user-supplied clip request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRequest {
    /// URL to clip.
    pub url: String,
    /// Tags for the frontmatter, in input order.
    pub tags: Vec<String>,
    /// Subdirectory under the base clip directory.
    pub subdir: String,
}

impl ClipRequest {
    /// Build a request from raw user input, normalizing the tags.
    pub fn new(url: impl Into<String>, raw_tags: &str, subdir: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            tags: parse_tags(raw_tags),
            subdir: subdir.into(),
        }
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tokens.
///
/// Order is preserved and duplicates are kept as-is.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

// ---------------------------------------------------------------------------
// ClippedDocument
// ---------------------------------------------------------------------------

/// The final artifact: title, source URL, tags, and cleaned body.
#[derive(Debug, Clone)]
pub struct ClippedDocument {
    /// Page title (verbatim from the provider, used in frontmatter).
    pub title: String,
    /// Source URL.
    pub url: String,
    /// Tags, in input order.
    pub tags: Vec<String>,
    /// Cleaned Markdown body.
    pub body: String,
}
