use crate::{ChromeRenderer, Config, FileRenderer, MenuScraper, PageRenderer, Reporter};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::future::Future;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "menu-scraper")]
#[command(about = "Print the category and item of every product card on a restaurant menu page")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true, help = "Configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Menu page URL")]
    pub url: Option<String>,

    #[arg(long, help = "Page load timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Chrome executable path")]
    pub chrome_path: Option<String>,

    #[arg(long, help = "Extract from a saved HTML file instead of launching Chrome")]
    pub html_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the menu page and print its entries (default)
    Scrape,

    /// Validate configuration
    Validate,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.target_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.page_timeout = std::time::Duration::from_secs(timeout);
        }
        if let Some(chrome_path) = &self.chrome_path {
            config.chrome_path = Some(chrome_path.clone());
        }
    }
}

pub struct CliRunner {
    pub config: Config,
    html_file: Option<PathBuf>,
}

impl CliRunner {
    pub fn new(config: Config, args: &Cli) -> Self {
        Self {
            config,
            html_file: args.html_file.clone(),
        }
    }

    pub async fn run(&self, command: Commands) -> anyhow::Result<()> {
        match command {
            Commands::Scrape => self.run_scrape().await,
            Commands::Validate => self.validate_config(),
        }
    }

    /// Run `command` unless `shutdown` resolves first. An interrupted run is
    /// an error; dropping the run future releases the browser session.
    pub async fn run_until<F>(&self, command: Commands, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = shutdown => Err(anyhow::anyhow!("interrupted before the run finished")),
            result = self.run(command) => result,
        }
    }

    pub async fn run_scrape(&self) -> anyhow::Result<()> {
        let printed = match &self.html_file {
            Some(path) => {
                info!("Using saved page {}", path.display());
                self.scrape_with(FileRenderer::new(path)).await?
            }
            None => {
                self.scrape_with(ChromeRenderer::new(self.config.clone()))
                    .await?
            }
        };

        info!("Printed {} menu entries", printed);
        Ok(())
    }

    async fn scrape_with<R: PageRenderer>(&self, renderer: R) -> anyhow::Result<usize> {
        let scraper = MenuScraper::new(renderer, &self.config)?;
        let extraction = scraper
            .scrape(&self.config.target_url)
            .await
            .map_err(|e| {
                if e.is_browser_failure() && self.html_file.is_none() {
                    warn!("Chrome could not render the page; try --chrome-path or --html-file");
                }
                e
            })
            .with_context(|| format!("failed to scrape {}", self.config.target_url))?;

        if !extraction.skipped.is_empty() {
            warn!(
                "{} product cards did not match the category-item layout",
                extraction.skipped_count()
            );
        }

        let stdout = std::io::stdout();
        let mut reporter = Reporter::new(stdout.lock());
        let printed = reporter.report(&extraction)?;
        Ok(printed)
    }

    pub fn validate_config(&self) -> anyhow::Result<()> {
        self.config.validate()?;

        let pattern = &self.config.card_pattern;
        println!("Configuration is valid:");
        println!("  Target URL: {}", self.config.target_url);
        println!("  Page timeout: {:?}", self.config.page_timeout);
        println!(
            "  Card pattern: {}[{}] starting with {:?}, excluding suffix {:?}",
            pattern.tag, pattern.attribute, pattern.prefix, pattern.excluded_suffix
        );
        println!(
            "  Viewport: {}x{}",
            self.config.viewport.width, self.config.viewport.height
        );

        Ok(())
    }
}

pub fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout is reserved for menu entries
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
