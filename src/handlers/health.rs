// src/handlers/health.rs

use crate::common::error::AppError;

// GET /api/health
pub async fn health() -> &'static str {
    "✅ API Visitantes rodando"
}

// Qualquer /api/* sem rota. Não deixa o front-end responder por ela.
pub async fn api_not_found() -> AppError {
    AppError::RouteNotFound
}
