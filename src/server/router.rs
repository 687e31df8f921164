use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::handlers;
use crate::server::AppState;

/// Any origin, method and header, with credentials.
///
/// `*` is not allowed together with credentials, so the request's own
/// values are mirrored back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/classify-number", get(handlers::classify_number))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
