use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Logs every HTTP request: method, path, status, duration and response size
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffer the body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} in {}ms (body error: {})",
                method,
                uri.path(),
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let elapsed = start.elapsed().as_millis();
    if parts.status.is_server_error() {
        tracing::error!(
            "{} {} -> {} in {}ms ({})",
            method,
            uri.path(),
            status,
            elapsed,
            format_size(bytes.len())
        );
    } else {
        tracing::info!(
            "{} {} -> {} in {}ms ({})",
            method,
            uri.path(),
            status,
            elapsed,
            format_size(bytes.len())
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
