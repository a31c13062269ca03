use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    create_application, create_technology, delete_application, get_application, health,
    list_applications, list_technologies, not_found, AppState,
};
use super::middleware::logging_middleware;
use super::openapi::ApiDoc;
use crate::config::DocsConfig;
use crate::metrics;

pub fn create_router(state: AppState, docs: &DocsConfig) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        // Health check
        .route("/health", get(health))
        // Portfolio endpoints
        .route("/applications", get(list_applications).post(create_application))
        .route(
            "/applications/:id",
            get(get_application).delete(delete_application),
        )
        .route("/technologies", get(list_technologies).post(create_technology))
        // Prometheus metrics
        .route("/metrics", get(metrics::metrics_handler))
        .route_layer(middleware::from_fn(metrics::middleware::track_metrics));

    let router = if docs.swagger_enabled {
        router.merge(SwaggerUi::new(docs.path.clone()).url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        router.route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
    };

    router
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
