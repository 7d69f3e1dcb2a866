//! Logging middleware

use axum::{
    body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// Per-request outcome logging. Not-found responses stay at info level; the
/// single-operator console polls a few fixed paths and a stray 404 is noise,
/// not a fault.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    if status.is_server_error() || (status.is_client_error() && status != StatusCode::NOT_FOUND) {
        warn!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "request completed"
        );
    }

    response
}
