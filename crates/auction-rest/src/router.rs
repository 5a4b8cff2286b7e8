//! Main application router.

use crate::{
    controllers::{
        bid_controller, category_controller, condition_controller, health_controller,
        product_controller, rating_controller, user_controller,
    },
    middleware::logging_middleware,
    state::AppState,
};
use auction_config::ServerConfig;
use axum::{http::HeaderValue, middleware, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Builds the application router with all API routes and middleware.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let api_router = Router::new()
        .nest("/users", user_controller::router())
        .nest("/categories", category_controller::router())
        .nest("/products", product_controller::router())
        .nest("/bids", bid_controller::router())
        .nest("/ratings", rating_controller::router())
        .nest("/conditions", condition_controller::router());

    let router = Router::new()
        .merge(health_controller::router())
        .nest("/api/v1", api_router)
        .route("/", get(root))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(server_config))
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints under /api/v1");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }
    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root() -> &'static str {
    "Auction Platform API v1"
}
