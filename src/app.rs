//! Router construction
//!
//! Shared by the binary and the integration tests.

use crate::api;
use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Request},
    http::Method,
    middleware::Next,
    response::Response,
    routing::{delete, get, post},
    Router,
};
use std::time::Instant;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let body_limit = match state.config.server.max_upload_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };

    // Font retrieval carries its own CORS policy: any origin, GET only
    let serve_fonts = Router::new()
        .route("/get-font/:font_name", get(api::get_font))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        );

    let manage_fonts = Router::new()
        .route("/add-font", post(api::add_font).layer(body_limit))
        .route("/delete-font/:font_name", delete(api::delete_font))
        .route("/fonts", get(api::list_fonts))
        .route("/routes-info", get(api::routes_info))
        .layer(CorsLayer::permissive());

    manage_fonts
        .merge(serve_fonts)
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}
