// src/handlers/auth.rs

use axum::{extract::State, response::IntoResponse, Json};

use crate::{common::error::ApiError, config::AppState, models::auth::LoginPayload};

// POST /login
pub async fn login(
    State(app_state): State<AppState>,
    payload: Option<Json<LoginPayload>>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let secretary = app_state
        .auth_service
        .login(&payload)
        .map_err(|app_err| app_err.to_api_error("Erro ao fazer login"))?;

    Ok(Json(secretary))
}
