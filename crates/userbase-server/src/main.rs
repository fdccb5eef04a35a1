//! # Userbase Server
//!
//! Main entry point for the Userbase HTTP service.

use tracing::error;
use userbase_config::ConfigLoader;
use userbase_server::{app, logging::init_logging, startup::print_banner};

#[tokio::main]
async fn main() {
    let config = ConfigLoader::from_default_location().load();

    let logging = config
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);
    print_banner();

    let result = match config {
        Ok(config) => app::run(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!(error_code = e.error_code(), "Application error: {}", e);
        std::process::exit(1);
    }
}
