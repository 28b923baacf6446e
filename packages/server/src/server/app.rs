//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::error::ApiError;
use crate::server::routes::{
    confirm_presence, health_handler, list_condolences, order_pagne, reserve_hotel,
    root_handler, submit_condolence,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

async fn fallback_handler() -> ApiError {
    ApiError::NotFound
}

/// Build the Axum application router
///
/// The front-end is served separately; this process only exposes the
/// JSON API, so CORS allows any origin for GET/POST.
pub fn build_app(deps: ServerDeps) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    // Rate limiting: 10 requests per second with a burst of 20, keyed by
    // peer IP. Applied to every /api route, reads included.
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );
    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    let api = Router::new()
        .route("/reservation-hotel", post(reserve_hotel))
        .route("/confirmation-presence", post(confirm_presence))
        .route("/commande-pagne", post(order_pagne))
        .route("/condoleances", post(submit_condolence).get(list_condolences))
        .layer(rate_limit_layer);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api", api)
        .fallback(fallback_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(Extension(app_state)),
        )
}
