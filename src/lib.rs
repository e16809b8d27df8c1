use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;

/// Uniform transport budget for reading a request and writing its response.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The form service: POST computes, every other method renders the form.
pub fn build_form_app() -> Router {
    Router::new()
        .route("/health", get(http::handlers::health))
        .route(
            "/",
            post(http::handlers::form_calculate).fallback(http::handlers::form_page),
        )
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(middleware::from_fn(logging::request_logging_middleware))
}

/// The query service: GET computes, every other method is rejected.
pub fn build_query_app() -> Router {
    Router::new()
        .route("/health", get(http::handlers::health))
        .route(
            "/",
            get(http::handlers::query_calculate).fallback(http::handlers::method_not_allowed),
        )
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
