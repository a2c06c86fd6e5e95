//! Identidad del llamador
//!
//! Las rutas REST toman la identidad del header `x-caller`. No hay firma de
//! transacciones: el entorno anfitrión confía en el header tal cual, sin
//! normalizarlo, igual que el `sender` de las llamadas de contrato.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::models::Principal;
use crate::utils::errors::AppError;

pub const CALLER_HEADER: &str = "x-caller";

/// Llamador que se inyecta en los handlers de escritura
#[derive(Debug, Clone)]
pub struct Caller(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .headers
            .get(CALLER_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::Unauthorized(format!("{} header required", CALLER_HEADER)))?;

        Ok(Caller(Principal::from(identity)))
    }
}
