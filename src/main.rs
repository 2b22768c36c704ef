use clap::Parser;
use menu_scraper::{setup_logging, Cli, CliRunner, Commands, Config};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    // Setup logging
    setup_logging(args.verbose)?;

    info!("Starting menu-scraper v{}", env!("CARGO_PKG_VERSION"));

    let result = match load_config(&args).await {
        Ok(config) => {
            let cli_runner = CliRunner::new(config, &args);
            let command = args.command.clone().unwrap_or(Commands::Scrape);

            let shutdown = async {
                if signal::ctrl_c().await.is_ok() {
                    info!("Received shutdown signal");
                } else {
                    std::future::pending::<()>().await;
                }
            };
            cli_runner.run_until(command, shutdown).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn load_config(args: &Cli) -> anyhow::Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        // Load from file
        Config::load(config_path).await?
    } else {
        // Use default configuration
        Config::default()
    };

    // Override with CLI arguments
    args.apply_overrides(&mut config);

    config.validate()?;

    info!("Target URL: {}", config.target_url);
    info!("Page timeout: {:?}", config.page_timeout);

    Ok(config)
}
