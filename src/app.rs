use crate::{handlers, Config};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Only the configured origin is granted cross-origin access; any method and
/// header is allowed for it.
pub fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(&config.cors_allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(Any)
        .allow_headers(Any))
}

pub fn build_router(config: &Config) -> anyhow::Result<Router> {
    let cors = cors_layer(config)?;

    let app = Router::new()
        .route("/health-check", get(handlers::health_check))
        .route(
            "/analyze-transcript",
            post(handlers::analysis::analyze_transcript),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
