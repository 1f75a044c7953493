//! Request logging middleware.
//!
//! Logs every request line, and for POST/PUT buffers the body and logs it
//! verbatim (field values included, no redaction) before handing the request
//! on to the router. Timestamps come from the `tracing` subscriber's
//! formatter.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

pub async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!("{} {}", req.method(), req.uri());

    let log_body = *req.method() == Method::POST || *req.method() == Method::PUT;
    let req = if log_body {
        let (parts, body) = req.into_parts();
        let bytes = match to_bytes(body, usize::MAX).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!("failed to read request body: {err}");
                return StatusCode::BAD_REQUEST.into_response();
            }
        };
        tracing::info!("request body: {}", String::from_utf8_lossy(&bytes));
        Request::from_parts(parts, Body::from(bytes))
    } else {
        req
    };

    next.run(req).await
}
