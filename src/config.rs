//! Configuration management with serde serialization/deserialization
//!
//! This module provides the configuration structures for the menu scraper,
//! including the target page, the product-card naming convention, and the
//! Chrome launch settings used to render the page.

use crate::ScraperError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Menu page scraped when no URL is configured.
pub const DEFAULT_MENU_URL: &str = "https://www.chilis.com/menu";

/// Main configuration structure for the menu scraper
///
/// # Examples
///
/// ```rust
/// use menu_scraper::Config;
///
/// // Use default configuration
/// let config = Config::default();
///
/// // Point at a different page with a shorter timeout
/// let config = Config {
///     target_url: "https://example.com/menu".to_string(),
///     page_timeout: std::time::Duration::from_secs(10),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Menu page to render (default: the Chili's menu)
    pub target_url: String,

    /// Upper bound for navigation until DOM content is loaded (default: 30 seconds)
    pub page_timeout: Duration,

    /// Naming convention used to recognise product cards
    pub card_pattern: CardPattern,

    /// Browser window size used while rendering
    pub viewport: Viewport,

    /// Path to Chrome/Chromium executable (default: auto-detect)
    pub chrome_path: Option<String>,

    /// Custom User-Agent string (default: Chrome default)
    ///
    /// Some menu pages serve a reduced layout to unknown agents.
    pub user_agent: Option<String>,

    /// Run Chrome without a window (default: true)
    pub headless: bool,

    /// Parent directory for the throwaway Chrome profile (default: system temp dir)
    pub profile_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_MENU_URL.to_string(),
            page_timeout: Duration::from_secs(30),
            card_pattern: CardPattern::default(),
            viewport: Viewport::default(),
            chrome_path: None,
            user_agent: None,
            headless: true,
            profile_root: None,
        }
    }
}

impl Config {
    /// Read a JSON configuration file. Missing fields take their defaults.
    pub async fn load(path: &Path) -> Result<Self, ScraperError> {
        let content = tokio::fs::read_to_string(path).await?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Chrome profile directory for this process. Removed when the browser
    /// session closes.
    pub fn profile_dir(&self) -> PathBuf {
        self.profile_root
            .clone()
            .unwrap_or_else(std::env::temp_dir)
            .join(format!("menu-scraper-{}", std::process::id()))
    }

    pub fn validate(&self) -> Result<(), ScraperError> {
        crate::validate_url(&self.target_url)?;

        if self.page_timeout.is_zero() {
            return Err(ScraperError::ConfigurationError(
                "Page timeout must be greater than 0".to_string(),
            ));
        }

        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ScraperError::ConfigurationError(
                "Viewport dimensions must be greater than 0".to_string(),
            ));
        }

        self.card_pattern.validate()
    }
}

/// The attribute convention that marks an element as a product card
///
/// A card is an element of kind `tag` whose `attribute` value starts with
/// `prefix` and does not end with `excluded_suffix`. The default matches
/// `<div data-testid="mobile-product-card-...">` while leaving out the
/// `...-name` sub-elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CardPattern {
    pub tag: String,
    pub attribute: String,
    pub prefix: String,
    pub excluded_suffix: String,
}

impl Default for CardPattern {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            attribute: "data-testid".to_string(),
            prefix: "mobile-product-card".to_string(),
            excluded_suffix: "-name".to_string(),
        }
    }
}

impl CardPattern {
    /// Whether an attribute value identifies a product card.
    ///
    /// Same result as `^<prefix>(?!.*<suffix>$)` under Python `re` rules: the
    /// suffix is also found in front of a single trailing newline, and a tail
    /// that contains a line break elsewhere is never excluded.
    pub fn accepts(&self, value: &str) -> bool {
        let Some(tail) = value.strip_prefix(self.prefix.as_str()) else {
            return false;
        };
        if self.excluded_suffix.is_empty() {
            return true;
        }

        let tail = tail.strip_suffix('\n').unwrap_or(tail);
        tail.contains('\n') || !tail.ends_with(&self.excluded_suffix)
    }

    pub fn validate(&self) -> Result<(), ScraperError> {
        if self.prefix.is_empty() {
            return Err(ScraperError::ConfigurationError(
                "Card prefix must not be empty".to_string(),
            ));
        }

        for (field, value) in [("tag", &self.tag), ("attribute", &self.attribute)] {
            let valid = !value.is_empty()
                && value
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if !valid {
                return Err(ScraperError::ConfigurationError(format!(
                    "Card {field} must be a plain identifier, got {value:?}"
                )));
            }
        }

        Ok(())
    }
}

/// Browser window size used while rendering the menu page
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Viewport {
    /// Viewport width in pixels (default: 1920)
    pub width: u32,

    /// Viewport height in pixels (default: 1080)
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Generate Chrome command-line arguments based on configuration
///
/// # Examples
///
/// ```rust
/// use menu_scraper::{Config, get_chrome_args};
///
/// let config = Config::default();
/// let args = get_chrome_args(&config);
/// assert!(args.contains(&"--no-sandbox".to_string()));
/// ```
pub fn get_chrome_args(config: &Config) -> Vec<String> {
    let mut args = vec![
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--disable-gpu".to_string(),
        "--disable-extensions".to_string(),
        "--disable-default-apps".to_string(),
        "--disable-sync".to_string(),
        "--no-first-run".to_string(),
        "--disable-features=TranslateUI".to_string(),
        format!(
            "--window-size={},{}",
            config.viewport.width, config.viewport.height
        ),
    ];

    if let Some(user_agent) = &config.user_agent {
        args.push(format!("--user-agent={user_agent}"));
    }

    args
}

pub fn create_browser_config(
    config: &Config,
) -> Result<chromiumoxide::browser::BrowserConfig, ScraperError> {
    use chromiumoxide::browser::BrowserConfig;

    let mut builder = BrowserConfig::builder()
        .window_size(config.viewport.width, config.viewport.height)
        .request_timeout(config.page_timeout)
        .user_data_dir(config.profile_dir())
        .args(get_chrome_args(config));

    if !config.headless {
        builder = builder.with_head();
    }

    if let Some(chrome_path) = &config.chrome_path {
        builder = builder.chrome_executable(chrome_path);
    }

    builder.build().map_err(ScraperError::BrowserLaunchFailed)
}
