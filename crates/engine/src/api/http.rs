//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use cargotrack_domain::{Cargo, CargoStatistics, DomainError};

use crate::app::App;
use crate::use_cases::cargo::{ArriveCargoRequest, CargoError, CreateCargoRequest};
use crate::use_cases::validation::require_present;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/cargos", get(list_cargos).post(create_cargo))
        .route("/cargos/statistics", get(get_statistics))
        .route("/cargos/{code}", get(get_cargo))
        .route("/cargos/{code}/arrive", post(arrive_cargo))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Cargo
// =============================================================================

async fn create_cargo(
    State(app): State<Arc<App>>,
    payload: Result<Json<CreateCargoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Cargo>), ApiError> {
    let Json(request) = payload?;
    let cargo = app.use_cases.cargo.create.execute(request).await?;
    Ok((StatusCode::CREATED, Json(cargo)))
}

async fn list_cargos(State(app): State<Arc<App>>) -> Result<Json<Vec<Cargo>>, ApiError> {
    let cargos = app.use_cases.cargo.queries.list().await?;
    Ok(Json(cargos))
}

async fn get_cargo(
    State(app): State<Arc<App>>,
    Path(code): Path<String>,
) -> Result<Json<Cargo>, ApiError> {
    let cargo = app
        .use_cases
        .cargo
        .queries
        .get(&code)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Cargo not found: {}", code)))?;
    Ok(Json(cargo))
}

async fn arrive_cargo(
    State(app): State<Arc<App>>,
    Path(code): Path<String>,
    payload: Result<Json<ArriveCargoRequest>, JsonRejection>,
) -> Result<Json<Cargo>, ApiError> {
    let Json(request) = payload?;
    let location = require_present(request.location, "location").map_err(CargoError::from)?;
    let cargo = app
        .use_cases
        .cargo
        .arrive
        .execute(&code, location)
        .await?;
    Ok(Json(cargo))
}

async fn get_statistics(State(app): State<Arc<App>>) -> Result<Json<CargoStatistics>, ApiError> {
    let stats = app.use_cases.cargo.statistics.execute().await?;
    Ok(Json(stats))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CargoError> for ApiError {
    fn from(e: CargoError) -> Self {
        match e {
            CargoError::Validation(_) => ApiError::BadRequest(e.to_string()),
            CargoError::NonUniqueCode(_) => ApiError::Conflict(e.to_string()),
            CargoError::NotFound(_) => ApiError::NotFound(e.to_string()),
            CargoError::Domain(DomainError::InvalidStateTransition(_)) => {
                ApiError::Conflict(e.to_string())
            }
            CargoError::Domain(_) => ApiError::BadRequest(e.to_string()),
            CargoError::Repo(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
