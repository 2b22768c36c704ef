//! Category/item extraction from product-card attributes
//!
//! A card attribute reads `<prefix>-<category>-<item>`, for example
//! `mobile-product-card-entrees-spicy-wings`. The category runs up to the
//! first hyphen after the prefix separator; everything after that hyphen is
//! the item, hyphens included.

use crate::CardSelector;
use scraper::Html;
use std::fmt;
use tracing::{debug, warn};

/// One menu entry recovered from a product card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub category: String,
    pub item: String,
}

impl MenuEntry {
    pub fn new(category: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            item: item.into(),
        }
    }
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.category, self.item)
    }
}

/// Split a card attribute into its category and item.
///
/// Returns `None` when the attribute does not start with `prefix` or has no
/// hyphen after it. Both tokens are trimmed; empty tokens are kept.
///
/// ```rust
/// use menu_scraper::{parse_card_attribute, MenuEntry};
///
/// let entry = parse_card_attribute("mobile-product-card-entrees-spicy-wings", "mobile-product-card");
/// assert_eq!(entry, Some(MenuEntry::new("entrees", "spicy-wings")));
/// ```
pub fn parse_card_attribute(attribute: &str, prefix: &str) -> Option<MenuEntry> {
    let remainder = attribute.strip_prefix(prefix)?;
    // The hyphen joining prefix and category is a separator, not the split point
    let remainder = remainder.strip_prefix('-').unwrap_or(remainder);
    let (category, item) = remainder.split_once('-')?;

    Some(MenuEntry::new(category.trim(), item.trim()))
}

/// Entries recovered from one page, with the cards that could not be parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Parsed entries in document order
    pub entries: Vec<MenuEntry>,
    /// Number of elements that matched the card pattern
    pub matched: usize,
    /// Attributes of matched cards that did not split into category and item
    pub skipped: Vec<String>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Select the product cards in `html` and parse each of them.
pub fn extract_entries(html: &str, selector: &CardSelector) -> Extraction {
    let document = Html::parse_document(html);
    let prefix = &selector.pattern().prefix;

    let mut extraction = Extraction::default();
    for card in selector.select(&document) {
        extraction.matched += 1;
        let attribute = selector.card_attribute(&card);

        match parse_card_attribute(attribute, prefix) {
            Some(entry) => extraction.entries.push(entry),
            None => {
                debug!("Skipping card with unparseable attribute {:?}", attribute);
                extraction.skipped.push(attribute.to_string());
            }
        }
    }

    if extraction.matched == 0 {
        warn!(
            "No elements matched {}[{}^={:?}]; the page layout may have changed",
            selector.pattern().tag,
            selector.pattern().attribute,
            prefix
        );
    } else {
        debug!(
            "Matched {} cards, parsed {}, skipped {}",
            extraction.matched,
            extraction.entries.len(),
            extraction.skipped_count()
        );
    }

    extraction
}
