//! Shared types, error model, and configuration for clipmark.
//!
//! This crate is the foundation depended on by all other clipmark crates.
//! It provides:
//! - [`ClipmarkError`] — the unified error type
//! - Domain types ([`ClipRequest`], [`ExtractedPage`], [`ClippedDocument`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, CleanerConfig, DefaultsConfig, TavilyConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from, resolve_api_key, resolve_base_dir,
};
pub use error::{ClipmarkError, Result};
pub use types::{ClipRequest, ClippedDocument, DEFAULT_TITLE, ExtractedPage, parse_tags};
