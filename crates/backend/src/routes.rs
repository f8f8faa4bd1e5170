use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::{handlers, system};

fn cors() -> CorsLayer {
    use axum::http::{header, Method};

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Unit handlers
        .route(
            "/api/unit",
            get(handlers::a001_unit::list_all).post(handlers::a001_unit::create),
        )
        .route(
            "/api/unit/:id",
            get(handlers::a001_unit::get_by_id)
                .put(handlers::a001_unit::update)
                .delete(handlers::a001_unit::delete),
        )
        // A002 Standard handlers
        .route("/api/standard/sets", get(handlers::a002_standard::list_sets))
        .route(
            "/api/standard/set/:set_id",
            get(handlers::a002_standard::list_by_set_id),
        )
        .route(
            "/api/standard/testdata",
            post(handlers::a002_standard::insert_test_data),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors())
}
