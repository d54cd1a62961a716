//! Application configuration for clipmark.
//!
//! User config lives at `~/.clipmark/clipmark.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ClipmarkError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "clipmark.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".clipmark";

// ---------------------------------------------------------------------------
// Config structs (matching clipmark.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Tavily extraction provider settings.
    #[serde(default)]
    pub tavily: TavilyConfig,

    /// Content cleaner pattern/keyword lists.
    #[serde(default)]
    pub cleaner: CleanerConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Base directory clips are saved under.
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
        }
    }
}

fn default_base_dir() -> String {
    "~/clips".into()
}

/// `[tavily]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TavilyConfig {
    /// Name of the env var holding the API key (never store the key itself).
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Extraction depth passed to the provider.
    #[serde(default = "default_extract_depth")]
    pub extract_depth: String,

    /// Content format requested from the provider.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for TavilyConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            extract_depth: default_extract_depth(),
            format: default_format(),
        }
    }
}

fn default_api_key_env() -> String {
    "TAVILY_API_KEY".into()
}
fn default_extract_depth() -> String {
    "advanced".into()
}
fn default_format() -> String {
    "markdown".into()
}

/// `[cleaner]` section — pattern and keyword lists for the content cleaner.
///
/// These are configuration data rather than embedded literals so tests and
/// users can exercise edge cases without touching the production lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Regex patterns marking section boundaries (comment sections, rules).
    /// Matched case-insensitively against the start of each line.
    #[serde(default = "default_section_heading_patterns")]
    pub section_heading_patterns: Vec<String>,

    /// Substrings identifying social/author follow lines to drop.
    #[serde(default = "default_follow_keywords")]
    pub follow_keywords: Vec<String>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            section_heading_patterns: default_section_heading_patterns(),
            follow_keywords: default_follow_keywords(),
        }
    }
}

fn default_section_heading_patterns() -> Vec<String> {
    // Horizontal rules often precede comment sections, hence the last entry.
    vec![
        r"^#+\s+Comments?".into(),
        r"^#+\s+Discussion".into(),
        r"^#+\s+Leave a reply".into(),
        r"^#+\s+Post a Comment".into(),
        r"^---\s*$".into(),
    ]
}

fn default_follow_keywords() -> Vec<String> {
    vec![
        "follow me".into(),
        "follow the author".into(),
        "subscribe".into(),
        "twitter".into(),
        "linkedin".into(),
        "facebook".into(),
        "instagram".into(),
        "newsletter".into(),
        "github".into(),
        "youtube".into(),
        "mastodon".into(),
    ]
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.clipmark/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ClipmarkError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.clipmark/clipmark.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ClipmarkError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| ClipmarkError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ClipmarkError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content = toml::to_string_pretty(&config).map_err(|e| ClipmarkError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ClipmarkError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Read the Tavily API key from the configured env var.
///
/// A missing or empty key is fatal: no request is attempted without one.
pub fn resolve_api_key(config: &AppConfig) -> Result<String> {
    let var_name = &config.tavily.api_key_env;
    match std::env::var(var_name) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(ClipmarkError::config(format!(
            "Tavily API key not found. Set the {var_name} environment variable."
        ))),
    }
}

/// Expand a leading `~/` in the configured base directory to the user's home.
pub fn resolve_base_dir(config: &AppConfig) -> Result<PathBuf> {
    let raw = &config.defaults.base_dir;
    if let Some(rest) = raw.strip_prefix("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| ClipmarkError::config("could not determine home directory"))?;
        Ok(home.join(rest))
    } else {
        Ok(PathBuf::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("base_dir"));
        assert!(toml_str.contains("TAVILY_API_KEY"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.base_dir, "~/clips");
        assert_eq!(parsed.tavily.api_key_env, "TAVILY_API_KEY");
        assert_eq!(parsed.tavily.extract_depth, "advanced");
        assert_eq!(parsed.tavily.format, "markdown");
    }

    #[test]
    fn cleaner_lists_have_production_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.cleaner.section_heading_patterns.len(), 5);
        assert!(config.cleaner.follow_keywords.contains(&"newsletter".to_string()));
    }

    #[test]
    fn cleaner_lists_overridable() {
        let toml_str = r#"
[cleaner]
section_heading_patterns = ["^#+\\s+Replies"]
follow_keywords = ["ping me"]
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.cleaner.section_heading_patterns, vec![r"^#+\s+Replies"]);
        assert_eq!(config.cleaner.follow_keywords, vec!["ping me"]);
        // Untouched sections keep their defaults
        assert_eq!(config.tavily.format, "markdown");
    }

    #[test]
    fn api_key_resolution_fails_when_unset() {
        let mut config = AppConfig::default();
        // Use a unique env var name to avoid interfering with other tests
        config.tavily.api_key_env = "CLIPMARK_TEST_NONEXISTENT_KEY_12345".into();
        let result = resolve_api_key(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key not found"));
    }

    #[test]
    fn base_dir_without_tilde_is_literal() {
        let mut config = AppConfig::default();
        config.defaults.base_dir = "/data/clips".into();
        assert_eq!(resolve_base_dir(&config).unwrap(), PathBuf::from("/data/clips"));
    }
}
