use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::location::{LocateError, LocateRequest};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

impl From<LocateError> for ApiError {
    fn from(e: LocateError) -> Self {
        ApiError(StatusCode::BAD_REQUEST, e.to_string())
    }
}

// ─── GET / ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct Welcome {
    message: &'static str,
}

pub async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to HungerHelp Bot API",
    })
}

// ─── GET /locator/foodbanks ──────────────────────────────────────

pub async fn foodbanks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocateRequest>,
) -> Result<Response, ApiError> {
    let start = Instant::now();

    let envelope = state.locator.locate(&params)?;

    tracing::info!(
        latitude = ?params.latitude,
        longitude = ?params.longitude,
        query = ?params.query,
        level = %envelope.level,
        results = envelope.results.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /locator/foodbanks"
    );

    // Serialize here: the envelope borrows from the catalog held by `state`.
    Ok(Json(envelope).into_response())
}

// ─── GET /locator/catalog ────────────────────────────────────────

pub async fn catalog(State(state): State<Arc<AppState>>) -> Response {
    Json(state.locator.catalog().listing()).into_response()
}
