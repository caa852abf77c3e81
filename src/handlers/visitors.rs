// src/handlers/visitors.rs

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::{common::error::ApiError, config::AppState};

// GET /visitantes
pub async fn list_visitors(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let visitors = app_state
        .visitor_service
        .list_visitors()
        .await
        .map_err(|app_err| app_err.to_api_error("Erro ao buscar visitantes"))?;

    Ok(Json(visitors))
}

// POST /visitantes
// O corpo não é validado: sem corpo JSON, grava um registro só com padrões.
pub async fn create_visitor(
    State(app_state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let body = body.map(|Json(v)| v).unwrap_or_else(|| json!({}));

    let visitor = app_state
        .visitor_service
        .create_visitor(&body)
        .await
        .map_err(|app_err| app_err.to_api_error("Erro ao salvar visitante"))?;

    Ok(Json(visitor))
}

// DELETE /visitantes/{id}
pub async fn delete_visitor(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .visitor_service
        .delete_visitor(&id)
        .await
        .map_err(|app_err| app_err.to_api_error("Erro ao deletar visitante"))?;

    Ok(Json(json!({ "ok": true })))
}
