use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{ExceptionResponse, HttpErrorKind, HttpException};
use crate::portfolio::{Application, NewApplication, NewTechnology, PortfolioStore, Technology};

lazy_static::lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: PortfolioStore,
    pub instance_id: String,
}

/// Exception with a JSON body for an extractor rejection
fn rejection_exception(status: StatusCode, body_text: String) -> HttpException {
    let status = status.as_u16();
    let reason = HttpErrorKind::from_status(status).map(|kind| kind.description());
    HttpException::new(status, ExceptionResponse::object(status, body_text, reason))
}

fn body_rejection(rejection: JsonRejection) -> HttpException {
    warn!(
        status = rejection.status().as_u16(),
        "Rejected request body: {}",
        rejection.body_text()
    );
    rejection_exception(rejection.status(), rejection.body_text())
}

fn path_rejection(rejection: PathRejection) -> HttpException {
    warn!(
        status = rejection.status().as_u16(),
        "Rejected path: {}",
        rejection.body_text()
    );
    rejection_exception(rejection.status(), rejection.body_text())
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "portfolio-api",
        "version": env!("CARGO_PKG_VERSION"),
        "instance_id": state.instance_id,
        "uptime_seconds": START_TIME.elapsed().as_secs(),
    }))
}

/// List portfolio applications
#[utoipa::path(
    get,
    path = "/applications",
    tag = "applications",
    responses(
        (status = 200, description = "All applications, oldest first", body = [Application])
    )
)]
pub async fn list_applications(State(state): State<AppState>) -> Json<Vec<Application>> {
    let applications = state.store.list_applications().await;
    info!("Listing {} applications", applications.len());
    Json(applications)
}

/// Get an application by ID
#[utoipa::path(
    get,
    path = "/applications/{id}",
    tag = "applications",
    params(
        ("id" = Uuid, Path, description = "Application UUID")
    ),
    responses(
        (status = 200, description = "Application found", body = Application),
        (status = 404, description = "Application not found")
    )
)]
pub async fn get_application(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Application>, HttpException> {
    let Path(id) = id.map_err(path_rejection)?;
    info!("Get application request: id={}", id);

    let application = state.store.get_application(id).await?;
    Ok(Json(application))
}

/// Create an application
#[utoipa::path(
    post,
    path = "/applications",
    tag = "applications",
    request_body = NewApplication,
    responses(
        (status = 201, description = "Application created", body = Application)
    )
)]
pub async fn create_application(
    State(state): State<AppState>,
    payload: Result<Json<NewApplication>, JsonRejection>,
) -> Result<(StatusCode, Json<Application>), HttpException> {
    let Json(new) = payload.map_err(body_rejection)?;
    info!("Create application request: name='{}'", new.name);

    let application = state.store.create_application(new).await?;
    info!("Created application {} ({})", application.name, application.id);
    Ok((StatusCode::CREATED, Json(application)))
}

/// Delete an application
#[utoipa::path(
    delete,
    path = "/applications/{id}",
    tag = "applications",
    params(
        ("id" = Uuid, Path, description = "Application UUID")
    ),
    responses(
        (status = 204, description = "Application deleted")
    )
)]
pub async fn delete_application(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, HttpException> {
    let Path(id) = id.map_err(path_rejection)?;
    info!("Delete application request: id={}", id);

    state.store.delete_application(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List technologies
#[utoipa::path(
    get,
    path = "/technologies",
    tag = "technologies",
    responses(
        (status = 200, description = "All technologies, by name", body = [Technology])
    )
)]
pub async fn list_technologies(State(state): State<AppState>) -> Json<Vec<Technology>> {
    Json(state.store.list_technologies().await)
}

/// Create a technology
#[utoipa::path(
    post,
    path = "/technologies",
    tag = "technologies",
    request_body = NewTechnology,
    responses(
        (status = 201, description = "Technology created", body = Technology)
    )
)]
pub async fn create_technology(
    State(state): State<AppState>,
    payload: Result<Json<NewTechnology>, JsonRejection>,
) -> Result<(StatusCode, Json<Technology>), HttpException> {
    let Json(new) = payload.map_err(body_rejection)?;
    info!("Create technology request: name='{}'", new.name);

    let technology = state.store.create_technology(new).await?;
    Ok((StatusCode::CREATED, Json(technology)))
}

/// Fallback for unknown routes, so they share the error body
pub async fn not_found() -> HttpException {
    HttpException::from_kind(HttpErrorKind::NotFound, Some("Route not found"))
}
