//! # Menu Scraper
//!
//! Renders a restaurant menu page in headless Chrome, finds the product cards
//! by their `data-testid` naming convention and prints one
//! `category → item` line per card.
//!
//! ## Pipeline
//!
//! | Stage | Module | Collaborator |
//! |-------|--------|--------------|
//! | **Fetch** | `fetcher`, `browser` | chromiumoxide |
//! | **Select** | `selector` | scraper |
//! | **Extract** | `extractor` | - |
//! | **Report** | `report` | stdout |
//!
//! Cards whose attribute does not split into a category and an item are
//! skipped and counted in [`Extraction::skipped`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use menu_scraper::{ChromeRenderer, Config, MenuScraper};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let scraper = MenuScraper::new(ChromeRenderer::new(config.clone()), &config)?;
//!
//!     let extraction = scraper.scrape(&config.target_url).await?;
//!     println!("Found {} menu entries", extraction.entries.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! menu-scraper
//! menu-scraper --url https://www.chilis.com/menu --timeout 60
//! menu-scraper --html-file saved-menu.html
//! menu-scraper validate --config menu.json
//! ```

/// Configuration and settings for the menu scraper
pub mod config;

/// Error types
pub mod error;

/// Scoped headless Chrome session
pub mod browser;

/// Page rendering collaborators
pub mod fetcher;

/// Product card selection
pub mod selector;

/// Category/item extraction from card attributes
pub mod extractor;

/// Console output of extracted entries
pub mod report;

/// Scraping service orchestrating the pipeline
pub mod menu_service;

/// Command-line interface implementation
pub mod cli;

/// Utility functions and helpers
pub mod utils;

#[cfg(test)]
mod tests;

pub use browser::*;
pub use cli::*;
pub use config::*;
pub use error::*;
pub use extractor::*;
pub use fetcher::*;
pub use menu_service::*;
pub use report::*;
pub use selector::*;
pub use utils::*;
