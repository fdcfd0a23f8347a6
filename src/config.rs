//! Site configuration: where content lives and how long listings are.
//!
//! Looked up in this order:
//! 1. the file named by `CIVIC_CONFIG`
//! 2. `civic.toml` in the current directory
//! 3. built-in defaults
//!
//! `CIVIC_CONTENT_DIR` then overrides the content directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Env var naming a config file.
pub const CONFIG_ENV: &str = "CIVIC_CONFIG";

/// Env var overriding the content directory.
pub const CONTENT_DIR_ENV: &str = "CIVIC_CONTENT_DIR";

/// Config file looked for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "civic.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding `officials.json`, `ministries.json`, `news.json`, `services.json`.
    pub content_dir: PathBuf,
    pub limits: Limits,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            limits: Limits::default(),
        }
    }
}

/// Listing sizes and search guards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// News items on the landing page.
    pub home_news: usize,
    /// Services on the landing page.
    pub home_services: usize,
    /// Hits per collection returned by the search box.
    pub api_results: usize,
    /// Shortest trimmed query (in characters) the search box will run.
    pub min_query_len: usize,
    /// Related articles shown under a news article.
    pub related: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            home_news: 3,
            home_services: 6,
            api_results: 5,
            min_query_len: 2,
            related: 3,
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document. Relative paths are left as written.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid site configuration")
    }

    /// Load a config file, resolving a relative `content_dir` against the
    /// file's own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let content_dir = expand_tilde(&config.content_dir).into_owned();
        config.content_dir = match path.parent() {
            Some(base) if content_dir.is_relative() => base.join(content_dir),
            _ => content_dir,
        };
        Ok(config)
    }

    /// Find and load the configuration from the environment.
    pub fn discover() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match explicit {
            Some(path) => {
                tracing::info!("Loading config from {} ({})", path.display(), CONFIG_ENV);
                Self::load(&path)?
            }
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.is_file() {
                    tracing::info!("Loading config from {}", local.display());
                    Self::load(local)?
                } else {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            }
        };

        if let Some(dir) = std::env::var_os(CONTENT_DIR_ENV) {
            config.content_dir = expand_tilde(Path::new(&dir)).into_owned();
        }

        tracing::info!("Serving content from {}", config.content_dir.display());
        Ok(config)
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// Returns `Cow::Borrowed` if no expansion needed, `Cow::Owned` if expanded.
pub fn expand_tilde(path: &Path) -> Cow<'_, Path> {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.join(rest));
    }
    Cow::Borrowed(path)
}
