//! Server startup output.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r"
  _   _                _
 | | | |___  ___ _ __ | |__   __ _ ___  ___
 | | | / __|/ _ \ '__|| '_ \ / _` / __|/ _ \
 | |_| \__ \  __/ |   | |_) | (_| \__ \  __/
  \___/|___/\___|_|   |_.__/ \__,_|___/\___|
    "
    );
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
}

/// Prints where the server can be reached.
pub fn print_startup_info(addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!("{}", separator);
}
