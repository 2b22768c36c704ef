//! Menu scraping service tying rendering and extraction together
//!
//! `MenuScraper` renders a menu page through a `PageRenderer` and extracts
//! the product cards from the resulting HTML.

use crate::{extract_entries, CardSelector, Config, Extraction, PageRenderer, ScraperError};
use tracing::info;

/// Renders a menu page and extracts its entries
///
/// # Examples
///
/// ```rust,no_run
/// use menu_scraper::{ChromeRenderer, Config, MenuScraper};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::default();
///     let scraper = MenuScraper::new(ChromeRenderer::new(config.clone()), &config)?;
///
///     let extraction = scraper.scrape(&config.target_url).await?;
///     for entry in &extraction.entries {
///         println!("{entry}");
///     }
///     Ok(())
/// }
/// ```
pub struct MenuScraper<R> {
    renderer: R,
    selector: CardSelector,
}

impl<R: PageRenderer> MenuScraper<R> {
    pub fn new(renderer: R, config: &Config) -> Result<Self, ScraperError> {
        let selector = CardSelector::new(config.card_pattern.clone())?;
        Ok(Self { renderer, selector })
    }

    pub async fn scrape(&self, url: &str) -> Result<Extraction, ScraperError> {
        info!("Fetching menu page: {}", url);
        let html = self.renderer.render(url).await?;

        let extraction = self.extract(&html);
        info!(
            "Extracted {} menu entries ({} cards matched, {} skipped)",
            extraction.entries.len(),
            extraction.matched,
            extraction.skipped_count()
        );
        Ok(extraction)
    }

    /// Extraction alone; deterministic for a given document.
    pub fn extract(&self, html: &str) -> Extraction {
        extract_entries(html, &self.selector)
    }
}
