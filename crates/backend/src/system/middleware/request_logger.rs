use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware that logs every HTTP request
///
/// Records method, path, status, duration (ms) and the real response size,
/// which requires buffering the body once.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();
    let status = parts.status.as_u16();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                %method,
                %path,
                status,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Failed to read response body: {e}"
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let size = bytes.len();
    if parts.status.is_success() {
        tracing::info!(%method, %path, status, elapsed_ms, size, "request");
    } else {
        tracing::warn!(%method, %path, status, elapsed_ms, size, "request");
    }

    Response::from_parts(parts, Body::from(bytes))
}
