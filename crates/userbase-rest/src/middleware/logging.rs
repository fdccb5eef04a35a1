//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Logs one line per request with its outcome and latency.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(
            target: "userbase::http",
            method = %method,
            path = %path,
            status,
            elapsed_ms,
            "request failed"
        );
    } else {
        info!(
            target: "userbase::http",
            method = %method,
            path = %path,
            status,
            elapsed_ms,
            "request completed"
        );
    }

    response
}
