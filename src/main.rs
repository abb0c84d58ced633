use clap::Parser;
use std::path::PathBuf;

use storefront::config::Config;
use storefront::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Browse a product catalog and fill a cart")]
struct Cli {
    /// Catalog backend base URL (overrides config file and STOREFRONT_BACKEND_URL)
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = &cli.backend_url {
        config.override_backend_url(url.as_str());
        config.validate()?;
    }
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    tracing::debug!(?config, "Configuration loaded");

    storefront::ui::runtime::run(config).await
}
