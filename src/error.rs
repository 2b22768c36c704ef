use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ScraperError {
    #[error("Browser launch failed: {0}")]
    BrowserLaunchFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Page content unavailable: {0}")]
    ContentUnavailable(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Chrome error: {0}")]
    ChromeError(String),
}

impl ScraperError {
    /// Whether the failure happened while talking to the browser, as opposed
    /// to bad input or configuration.
    pub fn is_browser_failure(&self) -> bool {
        matches!(
            self,
            ScraperError::BrowserLaunchFailed(_)
                | ScraperError::NavigationFailed(_)
                | ScraperError::Timeout(_)
                | ScraperError::ContentUnavailable(_)
                | ScraperError::ChromeError(_)
        )
    }
}

impl From<std::io::Error> for ScraperError {
    fn from(err: std::io::Error) -> Self {
        ScraperError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ScraperError {
    fn from(err: serde_json::Error) -> Self {
        ScraperError::SerializationError(err.to_string())
    }
}

impl From<url::ParseError> for ScraperError {
    fn from(err: url::ParseError) -> Self {
        ScraperError::InvalidUrl(err.to_string())
    }
}
