use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use picture_client::{
    cli::{App, Cli},
    config::Config,
};

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never interleave with game output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to read configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("Using game backend at {}", config.api_base_url);

    let mut app = match App::connect(config).await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run(cli.command).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
