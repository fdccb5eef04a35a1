//! `userbase-fetch`: print sample users from the randomuser.me API.

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use userbase_fetch::{fetch_users, render, DEFAULT_RESULTS, DEFAULT_URL};

/// `userbase-fetch` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "userbase-fetch",
    about = "Fetch sample users from randomuser.me and print them",
    version
)]
struct CliArgs {
    /// Number of users to request.
    #[arg(long, value_name = "n", default_value_t = DEFAULT_RESULTS)]
    results: u32,
    /// API endpoint.
    #[arg(long, value_name = "url", default_value = DEFAULT_URL)]
    url: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let client = reqwest::Client::new();

    match fetch_users(&client, &args.url, args.results).await {
        Ok(users) => print!("{}", render(&users)),
        Err(e) => {
            error!(error_code = e.error_code(), "{}", e);
            std::process::exit(1);
        }
    }
}
