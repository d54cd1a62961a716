//! Markdown text processing for clipmark.
//!
//! Provides the content cleaner ([`CleanFilter`]) that strips comment
//! sections and social-follow lines from extracted Markdown, and the
//! filename sanitizer used to derive clip file names from page titles.

mod clean;
mod sanitize;

pub use clean::CleanFilter;
pub use sanitize::sanitize_filename;
