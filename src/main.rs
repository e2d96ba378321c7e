use anyhow::Result;
use clap::Parser;
use log::{debug, LevelFilter};
use tradedash::cli::{run, Cli};
use tradedash::client::ApiClient;
use tradedash::core::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration; an explicit --base-url or BACKEND_URL wins
    let config = Config::load(&cli.config)?.with_base_url(cli.base_url.clone());

    // Initialize logger
    let log_level = if cli.debug {
        LevelFilter::Debug
    } else {
        config.logging.level_filter()?
    };
    env_logger::Builder::new().filter_level(log_level).init();

    debug!("Using backend at {}", config.api.base_url);
    let client = ApiClient::new(&config.api)?;

    run(cli.command, &client).await
}
