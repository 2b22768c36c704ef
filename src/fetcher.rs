//! Page rendering collaborators
//!
//! `PageRenderer` turns a URL into the final HTML of the page. The Chrome
//! implementation executes page scripts in a headless browser; the file
//! implementation replays a previously saved page.

use crate::{validate_url, BrowserSession, Config, ScraperError};
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, url: &str) -> Result<String, ScraperError>;
}

/// Renders pages in a fresh headless Chrome session per call.
pub struct ChromeRenderer {
    config: Config,
}

impl ChromeRenderer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PageRenderer for ChromeRenderer {
    async fn render(&self, url: &str) -> Result<String, ScraperError> {
        validate_url(url)?;
        let start = Instant::now();

        let session = BrowserSession::launch(&self.config).await?;
        let result = session.render(url, self.config.page_timeout).await;
        session.close().await;

        let html = result?;
        info!(
            "Rendered {} ({} bytes) in {}",
            url,
            html.len(),
            crate::format_duration(start.elapsed())
        );
        Ok(html)
    }
}

/// Serves HTML captured earlier, ignoring the requested URL.
pub struct FileRenderer {
    path: PathBuf,
}

impl FileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PageRenderer for FileRenderer {
    async fn render(&self, url: &str) -> Result<String, ScraperError> {
        debug!("Reading saved page for {} from {}", url, self.path.display());
        let html = tokio::fs::read_to_string(&self.path).await?;
        Ok(html)
    }
}
