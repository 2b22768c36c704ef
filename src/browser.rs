//! Scoped Chrome browser session
//!
//! A `BrowserSession` owns one headless Chrome process together with the
//! task that drives its DevTools Protocol connection. The session is
//! released on every exit path: callers close it explicitly once rendering
//! is done, and dropping it (panic, cancellation) aborts the handler task
//! and lets chromiumoxide kill the child process. The throwaway profile
//! directory Chrome writes to is removed in both cases.

use crate::{create_browser_config, Config, ScraperError};
use chromiumoxide::browser::Browser;
use chromiumoxide::error::CdpError;
use futures::StreamExt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

pub struct BrowserSession {
    browser: Browser,
    /// Background task handling Chrome DevTools Protocol communication
    handler: JoinHandle<Result<(), CdpError>>,
    profile_dir: PathBuf,
    closed: bool,
}

impl BrowserSession {
    pub async fn launch(config: &Config) -> Result<Self, ScraperError> {
        let browser_config = create_browser_config(config)?;
        let profile_dir = config.profile_dir();

        let (browser, mut handler) = match Browser::launch(browser_config).await {
            Ok(launched) => launched,
            Err(e) => {
                remove_profile_dir(&profile_dir).await;
                return Err(ScraperError::BrowserLaunchFailed(e.to_string()));
            }
        };

        // The handler implements Stream and must be polled until the browser goes away
        let handler = tokio::spawn(async move {
            loop {
                match handler.next().await {
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        tracing::error!("Handler error: {}", e);
                        return Err(e);
                    }
                    None => {
                        debug!("Handler stream ended");
                        break;
                    }
                }
            }
            Ok(())
        });

        info!("Browser session started (profile {})", profile_dir.display());
        Ok(Self {
            browser,
            handler,
            profile_dir,
            closed: false,
        })
    }

    /// Navigate to `url`, wait until the DOM content is loaded and return the
    /// rendered document.
    pub async fn render(&self, url: &str, page_timeout: Duration) -> Result<String, ScraperError> {
        if self.handler.is_finished() {
            return Err(ScraperError::ChromeError(
                "browser connection closed before navigation".to_string(),
            ));
        }

        let page = timeout(page_timeout, self.browser.new_page(url))
            .await
            .map_err(|_| ScraperError::Timeout(page_timeout))?
            .map_err(|e| ScraperError::NavigationFailed(e.to_string()))?;

        let html = match timeout(page_timeout, page.wait_for_navigation()).await {
            Ok(Ok(_)) => page
                .content()
                .await
                .map_err(|e| ScraperError::ContentUnavailable(e.to_string())),
            Ok(Err(e)) => Err(ScraperError::NavigationFailed(e.to_string())),
            Err(_) => Err(ScraperError::Timeout(page_timeout)),
        };

        if let Err(e) = page.close().await {
            debug!("Failed to close page: {}", e);
        }

        html
    }

    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to reap browser process: {}", e);
        }
        self.handler.abort();
        remove_profile_dir(&self.profile_dir).await;
        self.closed = true;
        info!("Browser session closed");
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
        if !self.closed {
            // Chrome may still hold files here; whatever is left is best effort
            if let Err(e) = std::fs::remove_dir_all(&self.profile_dir) {
                if e.kind() != ErrorKind::NotFound {
                    debug!("Failed to remove profile {}: {}", self.profile_dir.display(), e);
                }
            }
        }
    }
}

/// Delete a Chrome profile directory. A directory that is already gone is fine.
pub async fn remove_profile_dir(path: &Path) {
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => debug!("Removed profile {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove profile {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_remove_profile_dir_deletes_profile_tree() {
        let root = std::env::temp_dir().join(format!("menu-scraper-browser-{}", std::process::id()));
        let config = Config {
            profile_root: Some(root.clone()),
            ..Default::default()
        };
        let profile = config.profile_dir();
        assert!(profile.starts_with(&root));

        tokio::fs::create_dir_all(profile.join("Default"))
            .await
            .unwrap();
        tokio::fs::write(profile.join("Default").join("Preferences"), "{}")
            .await
            .unwrap();

        remove_profile_dir(&profile).await;
        assert!(!profile.exists());

        // Already gone: nothing to do
        remove_profile_dir(&profile).await;

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
