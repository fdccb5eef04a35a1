//! randomuser.me client.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use userbase_core::{UserbaseError, UserbaseResult};

/// Endpoint queried when no other URL is given.
pub const DEFAULT_URL: &str = "https://randomuser.me/api/";

/// Number of users requested when no other count is given.
pub const DEFAULT_RESULTS: u32 = 10;

const SERVICE: &str = "randomuser";

/// A person's name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

/// Where a person lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

/// One generated user; fields not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RandomUser {
    pub name: Name,
    pub email: String,
    pub location: Location,
}

#[derive(Deserialize)]
struct Envelope {
    results: Vec<RandomUser>,
}

/// Requests `results` users from `url` in a single call.
pub async fn fetch_users(client: &Client, url: &str, results: u32) -> UserbaseResult<Vec<RandomUser>> {
    debug!("Fetching {} users from {}", results, url);

    let response = client
        .get(url)
        .query(&[("results", results)])
        .send()
        .await
        .map_err(|e| UserbaseError::external(SERVICE, format!("request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(UserbaseError::external(
            SERVICE,
            format!("HTTP error {status}: {body}"),
        ));
    }

    let envelope: Envelope = response
        .json()
        .await
        .map_err(|e| UserbaseError::external(SERVICE, format!("JSON parse error: {e}")))?;

    debug!("Fetched {} users", envelope.results.len());
    Ok(envelope.results)
}
