use crate::ScraperError;
use std::time::Duration;
use url::Url;

pub fn validate_url(url: &str) -> Result<Url, ScraperError> {
    let parsed = Url::parse(url)?;

    // Ensure it's HTTP or HTTPS
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(ScraperError::InvalidUrl(format!(
            "unsupported scheme {scheme:?} in {url}"
        ))),
    }
}

pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let millis = duration.subsec_millis();

    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else if seconds > 0 {
        format!("{}.{}s", seconds, millis / 100)
    } else {
        format!("{millis}ms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5.0s");
        assert_eq!(format_duration(Duration::from_millis(2750)), "2.7s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://www.chilis.com/menu").is_ok());
        assert!(validate_url("http://example.com").is_ok());
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(ScraperError::InvalidUrl(_))
        ));
        assert!(validate_url("invalid-url").is_err());
        assert!(validate_url("").is_err());
    }
}
