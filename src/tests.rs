#[cfg(test)]
mod integration_tests {
    use crate::{
        extract_entries, parse_card_attribute, CardPattern, CardSelector, Config,
        Extraction, MenuEntry, MenuScraper, MockPageRenderer, Reporter, ScraperError,
    };
    use std::time::Duration;

    const PREFIX: &str = "mobile-product-card";

    // Trimmed-down shape of the rendered menu page
    const RENDERED_MENU: &str = r#"
        <!DOCTYPE html>
        <html>
          <head><title>Menu</title></head>
          <body>
            <section id="entrees">
              <div data-testid="mobile-product-card-entrees-spicy-wings">
                <div data-testid="mobile-product-card-entrees-spicy-wings-name">Spicy Wings</div>
                <span>$12.99</span>
              </div>
              <div data-testid="mobile-product-card-entrees-chicken-crispers">
                <div data-testid="mobile-product-card-entrees-chicken-crispers-name">Crispers</div>
              </div>
            </section>
            <section id="desserts">
              <div data-testid="mobile-product-card">broken card</div>
              <div data-testid="mobile-product-card-desserts-molten-chocolate-cake"></div>
            </section>
          </body>
        </html>
    "#;

    fn default_selector() -> CardSelector {
        CardSelector::new(CardPattern::default()).unwrap()
    }

    fn render_lines(extraction: &Extraction) -> String {
        let mut reporter = Reporter::new(Vec::new());
        reporter.report(extraction).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.target_url, "https://www.chilis.com/menu");
        assert_eq!(config.page_timeout, Duration::from_secs(30));
        assert_eq!(config.card_pattern.prefix, PREFIX);
        assert_eq!(config.card_pattern.attribute, "data-testid");
        assert!(config.headless);
    }

    #[test]
    fn test_attribute_with_multiple_hyphens() {
        let entry = parse_card_attribute("mobile-product-card-entrees-spicy-wings", PREFIX).unwrap();
        assert_eq!(entry.category, "entrees");
        assert_eq!(entry.item, "spicy-wings");
    }

    #[test]
    fn test_attribute_equal_to_prefix_yields_nothing() {
        assert!(parse_card_attribute(PREFIX, PREFIX).is_none());
    }

    #[test]
    fn test_name_boundary_of_selection() {
        let html = r#"
            <div data-testid="mobile-product-card-name-something"></div>
            <div data-testid="mobile-product-card-entrees-wings-name"></div>
        "#;
        let extraction = extract_entries(html, &default_selector());

        assert_eq!(extraction.matched, 1);
        assert_eq!(extraction.entries, vec![MenuEntry::new("name", "something")]);
    }

    #[test]
    fn test_whitespace_is_trimmed_in_output() {
        let html = r#"<div data-testid="mobile-product-card- entrees - spicy wings "></div>"#;
        let extraction = extract_entries(html, &default_selector());

        assert_eq!(render_lines(&extraction), "entrees → spicy wings\n");
    }

    #[test]
    fn test_rendered_menu_end_to_end() {
        let extraction = extract_entries(RENDERED_MENU, &default_selector());

        assert_eq!(extraction.matched, 4);
        assert_eq!(extraction.skipped, vec![PREFIX]);
        assert_eq!(
            render_lines(&extraction),
            "entrees → spicy-wings\n\
             entrees → chicken-crispers\n\
             desserts → molten-chocolate-cake\n"
        );
    }

    #[test]
    fn test_zero_cards_prints_nothing() {
        let extraction = extract_entries("<html><body><p>Closed</p></body></html>", &default_selector());

        assert!(extraction.is_empty());
        assert_eq!(render_lines(&extraction), "");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let selector = default_selector();
        let first = extract_entries(RENDERED_MENU, &selector);
        let second = extract_entries(RENDERED_MENU, &selector);

        assert_eq!(first, second);
        assert_eq!(render_lines(&first), render_lines(&second));
    }

    #[tokio::test]
    async fn test_scraper_with_custom_pattern() {
        let mut config = Config::default();
        config.card_pattern = CardPattern {
            tag: "li".to_string(),
            attribute: "data-card".to_string(),
            prefix: "menu-item".to_string(),
            excluded_suffix: "-label".to_string(),
        };

        let mut renderer = MockPageRenderer::new();
        renderer.expect_render().times(1).returning(|_| {
            Ok(r#"
                <ul>
                  <li data-card="menu-item-drinks-margarita"></li>
                  <li data-card="menu-item-drinks-margarita-label"></li>
                </ul>
            "#
            .to_string())
        });

        let scraper = MenuScraper::new(renderer, &config).unwrap();
        let extraction = scraper.scrape(&config.target_url).await.unwrap();

        assert_eq!(extraction.entries, vec![MenuEntry::new("drinks", "margarita")]);
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_error() {
        let mut renderer = MockPageRenderer::new();
        renderer
            .expect_render()
            .returning(|_| Err(ScraperError::Timeout(Duration::from_secs(30))));

        let scraper = MenuScraper::new(renderer, &Config::default()).unwrap();
        let err = scraper.scrape("https://www.chilis.com/menu").await.unwrap_err();

        assert!(err.is_browser_failure());
        assert_eq!(err.to_string(), "Timeout after 30s");
    }

    #[test]
    fn test_error_classification() {
        assert!(ScraperError::NavigationFailed("dns".to_string()).is_browser_failure());
        assert!(ScraperError::BrowserLaunchFailed("no chrome".to_string()).is_browser_failure());
        assert!(!ScraperError::InvalidUrl("x".to_string()).is_browser_failure());
        assert!(!ScraperError::IoError("x".to_string()).is_browser_failure());
    }

    #[test]
    fn test_error_conversions() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "menu.json");
        assert!(matches!(ScraperError::from(io), ScraperError::IoError(_)));

        let json = serde_json::from_str::<Config>("{").unwrap_err();
        assert!(matches!(
            ScraperError::from(json),
            ScraperError::SerializationError(_)
        ));

        let url = url::Url::parse("not a url").unwrap_err();
        assert!(matches!(ScraperError::from(url), ScraperError::InvalidUrl(_)));
    }
}
