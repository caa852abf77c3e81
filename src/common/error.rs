use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

// Erros de domínio. A conversão para HTTP acontece em `to_api_error`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Matrícula ou CPF inválidos.")]
    InvalidCredentials,

    #[error("Rota não encontrada.")]
    RouteNotFound,

    #[error("Identificador inválido: '{0}'")]
    InvalidId(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

// Erro já pronto para a resposta HTTP: status + corpo JSON.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl AppError {
    /// Converte o erro em resposta. `context` é a mensagem genérica devolvida
    /// ao cliente quando a falha é interna; o detalhe fica só no log.
    pub fn to_api_error(self, context: &str) -> ApiError {
        match self {
            AppError::InvalidCredentials => ApiError {
                status: StatusCode::UNAUTHORIZED,
                body: json!({ "message": self.to_string() }),
            },
            AppError::RouteNotFound => ApiError {
                status: StatusCode::NOT_FOUND,
                body: json!({ "error": self.to_string() }),
            },
            ref e => {
                tracing::error!("{}: {}", context, e);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: json!({ "error": context }),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error("Ocorreu um erro inesperado.").into_response()
    }
}
