//! Product card selection over a parsed menu document

use crate::{CardPattern, ScraperError};
use scraper::{ElementRef, Html, Selector};

/// Finds product-card elements in document order.
///
/// The CSS query narrows the document to `tag[attribute]`; the prefix and
/// suffix rules of the `CardPattern` are then applied to the attribute value.
#[derive(Debug)]
pub struct CardSelector {
    pattern: CardPattern,
    selector: Selector,
}

impl CardSelector {
    pub fn new(pattern: CardPattern) -> Result<Self, ScraperError> {
        pattern.validate()?;

        let query = format!("{}[{}]", pattern.tag, pattern.attribute);
        let selector = Selector::parse(&query).map_err(|e| {
            ScraperError::ConfigurationError(format!("Invalid card selector {query}: {e:?}"))
        })?;

        Ok(Self { pattern, selector })
    }

    pub fn pattern(&self) -> &CardPattern {
        &self.pattern
    }

    pub fn select<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        document
            .select(&self.selector)
            .filter(|element| {
                element
                    .value()
                    .attr(&self.pattern.attribute)
                    .is_some_and(|value| self.pattern.accepts(value))
            })
            .collect()
    }

    /// The identifying attribute of a selected card.
    pub fn card_attribute<'a>(&self, element: &ElementRef<'a>) -> &'a str {
        element.value().attr(&self.pattern.attribute).unwrap_or_default()
    }
}
