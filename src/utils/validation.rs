//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para extraer y convertir los
//! argumentos posicionales que recibe una llamada de contrato.

use serde_json::Value;
use validator::ValidationError;

use crate::utils::errors::{bad_arguments_error, AppResult};

/// Obtener un argumento posicional como entero sin signo
pub fn arg_u64(method: &str, args: &[Value], index: usize, name: &str) -> AppResult<u64> {
    match args.get(index) {
        Some(value) => value.as_u64().ok_or_else(|| {
            bad_arguments_error(method, &format!("{} must be a non-negative integer, got {}", name, value))
        }),
        None => Err(bad_arguments_error(method, &format!("missing argument #{} ({})", index, name))),
    }
}

/// Obtener un argumento posicional como string
pub fn arg_string(method: &str, args: &[Value], index: usize, name: &str) -> AppResult<String> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(bad_arguments_error(
            method,
            &format!("{} must be a string, got {}", name, other),
        )),
        None => Err(bad_arguments_error(method, &format!("missing argument #{} ({})", index, name))),
    }
}

/// Validar que un string no esté vacío (solo espacios cuenta como vacío)
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
