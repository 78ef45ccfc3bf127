//! myq - A terminal MySQL query console.

use myq::cli::Cli;
use myq::config::Config;
use myq::error::Result;
use myq::{logging, tui};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    logging::init_file_logging();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        eprintln!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    tui::run(&config).await
}
