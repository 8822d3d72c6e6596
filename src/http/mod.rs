//! HTTP surface of the record gateway.
//!
//! One resource, two methods: `POST /api/data` appends a registration and
//! `GET /api/data` lists every stored record. Response envelopes and their
//! fixed messages are part of the wire contract the browser form already
//! speaks, so they are kept byte-exact.

use crate::core::record::RecordInput;
use crate::errors::Error;
use crate::gateway::RecordGateway;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Success message for a stored registration.
pub const MSG_CREATED: &str = "Dados adicionados com sucesso!";
/// Body of the 400 when a required field is missing.
pub const MSG_FIELDS_REQUIRED: &str = "Todos os campos do formulário são obrigatórios.";
/// Error envelope for append failures.
pub const MSG_APPEND_FAILED: &str = "Erro ao adicionar dados na planilha";
/// Error envelope for read failures.
pub const MSG_READ_FAILED: &str = "Erro ao ler dados da planilha";

/// Shared state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Gateway every request goes through.
    pub gateway: RecordGateway,
}

/// Builds the application router.
///
/// CORS is permissive because the form is served from a different origin
/// than the gateway.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/data", get(list_records).post(append_record))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn append_record(
    State(state): State<AppState>,
    Json(input): Json<RecordInput>,
) -> Response {
    match state.gateway.append_record(&input).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": MSG_CREATED })),
        )
            .into_response(),
        Err(Error::Validation { field }) => {
            debug!("rejected registration with missing field: {field}");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": MSG_FIELDS_REQUIRED })),
            )
                .into_response()
        }
        Err(err) => {
            error!("failed to append record to spreadsheet: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": MSG_APPEND_FAILED, "details": err.to_string() })),
            )
                .into_response()
        }
    }
}

async fn list_records(State(state): State<AppState>) -> Response {
    match state.gateway.list_records().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => {
            error!("failed to read records from spreadsheet: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": MSG_READ_FAILED, "details": err.to_string() })),
            )
                .into_response()
        }
    }
}
