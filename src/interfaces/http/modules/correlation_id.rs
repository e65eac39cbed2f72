//! Correlation ID middleware
//!
//! Round-trips the `X-Correlation-ID` header so callers can trace a request
//! across services: an incoming value is echoed back verbatim on every
//! response (success and failure alike), and requests arriving without one
//! get a fresh UUID. The ID is recorded on a `tracing::Span` so all logs
//! emitted while handling the request carry it.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for the correlation ID.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// New-type wrapper for the correlation ID, stored in request extensions.
///
/// Extract in handlers: `Extension(CorrelationId(id)): Extension<CorrelationId>`
#[derive(Clone, Debug)]
pub struct CorrelationId(pub String);

/// Middleware that assigns (or propagates) `X-Correlation-ID`.
pub async fn correlation_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    // Reuse the caller's value or generate a new one
    let correlation_id = request
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(CorrelationId(correlation_id.clone()));

    let span = tracing::info_span!(
        "request",
        correlation_id = %correlation_id,
        method = %request.method(),
        uri = %request.uri(),
    );

    let mut response = next.run(request).instrument(span).await;

    // Echo back in the response
    if let Ok(value) = correlation_id.parse() {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }

    response
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app() -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn(correlation_id_middleware))
    }

    #[tokio::test]
    async fn echoes_incoming_correlation_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/ping")
                    .header(CORRELATION_ID_HEADER, "63be7528-7efd-4f31-ae68-11a6b709ff1c")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CORRELATION_ID_HEADER],
            "63be7528-7efd-4f31-ae68-11a6b709ff1c"
        );
    }

    #[tokio::test]
    async fn generates_id_when_header_missing() {
        let response = app()
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let value = response.headers()[CORRELATION_ID_HEADER].to_str().unwrap();
        assert!(Uuid::parse_str(value).is_ok());
    }

    #[tokio::test]
    async fn echoes_on_error_responses_too() {
        let app = Router::new()
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .layer(middleware::from_fn(correlation_id_middleware));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .header(CORRELATION_ID_HEADER, "trace-me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[CORRELATION_ID_HEADER], "trace-me");
    }
}
