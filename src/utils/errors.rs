//! Sistema de manejo de errores
//!
//! Este módulo define los errores de los registros (vehículos y viajes)
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Record {0} not found")]
    NotFound(u64),

    #[error("Invalid ride or status: {0}")]
    InvalidStateOrNotFound(u64),

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Vehicle already registered: {0}")]
    DuplicatePlate(String),

    #[error("Method not found: {0}")]
    UnknownOperation(String),

    #[error("Contract not found: {0}")]
    UnknownContract(String),

    #[error("Bad arguments: {0}")]
    BadArguments(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Etiqueta estable que viaja en el campo `error` de las respuestas
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NotFound",
            AppError::InvalidStateOrNotFound(_) => "InvalidStateOrNotFound",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::DuplicatePlate(_) => "DuplicatePlate",
            AppError::UnknownOperation(_) => "UnknownOperation",
            AppError::UnknownContract(_) => "UnknownContract",
            AppError::BadArguments(_) => "BadArguments",
            AppError::Validation(_) => "Validation",
            AppError::Configuration(_) => "Configuration",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::UnknownContract(_) => StatusCode::NOT_FOUND,
            AppError::InvalidStateOrNotFound(_) | AppError::DuplicatePlate(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::FORBIDDEN,
            AppError::UnknownOperation(_)
            | AppError::BadArguments(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::BadArguments(e.to_string())
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("💥 {}", self);
        } else {
            tracing::debug!("⚠️ {} ({})", self, status);
        }

        let body = ErrorResponse {
            success: false,
            error: self.code().to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de autorización
pub fn unauthorized_error(operation: &str, caller: &str) -> AppError {
    AppError::Unauthorized(format!("{} cannot {}", caller, operation))
}

/// Función helper para crear errores de argumentos posicionales
pub fn bad_arguments_error(method: &str, reason: &str) -> AppError {
    AppError::BadArguments(format!("{}: {}", method, reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable_tags() {
        assert_eq!(AppError::NotFound(1).code(), "NotFound");
        assert_eq!(AppError::InvalidStateOrNotFound(1).code(), "InvalidStateOrNotFound");
        assert_eq!(AppError::DuplicatePlate("ABC123".into()).code(), "DuplicatePlate");
        assert_eq!(AppError::UnknownOperation("x".into()).code(), "UnknownOperation");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound(7).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::DuplicatePlate("A".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(unauthorized_error("cancel ride 1", "eve").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            bad_arguments_error("start-ride", "missing rideId").status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
