use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use webdriver_urls::api::config::ApiConfig;
use webdriver_urls::api::start_server;
use webdriver_urls::config::UrlConfig;
use webdriver_urls::utils::logger::init_logger;

/// Serves URL building and redirect checks over HTTP
#[derive(Debug, Parser)]
#[command(name = "webdriver-urls", version, about)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// TOML file with base URLs and routes; `URLS_*` env vars override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to a timestamped file in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<String>,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_dir.as_deref())?;

    let urls = UrlConfig::load(cli.config.as_deref())?;
    let config = ApiConfig::new(urls)?;
    info!("Loaded {} routes", config.routes.len());

    start_server(&cli.host, cli.port, config).await
}
