use anyhow::Context;
use clap::Parser;

use edukit_server::logging::init_logging;
use edukit_server::{run_server, Cli, RelayConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Exits with a usage error if GEMINI_API_KEY is not set
    let cli = Cli::parse();

    init_logging(cli.debug);

    let config = RelayConfig::from_cli(cli).context("Invalid configuration")?;

    tracing::info!("Starting Edu-Kit relay on port {}", config.port);
    tracing::debug!("Server configuration: {:?}", config);

    run_server(config).await.context("Web server error")
}
