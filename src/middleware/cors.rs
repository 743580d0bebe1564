use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Browser clients send the bearer token in `Authorization`, never cookies,
/// so any origin may call the API.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(Any)
}
