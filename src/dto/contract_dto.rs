use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::models::BlockHeight;
use crate::services::ledger_service::Invocation;
use crate::utils::validation::validate_not_blank;

// Llamada de contrato: método + argumentos posicionales + llamador
#[derive(Debug, Deserialize, Validate)]
pub struct InvokeRequest {
    #[validate(custom = "validate_not_blank")]
    pub method: String,
    #[serde(default)]
    pub args: Vec<Value>,
    #[validate(custom = "validate_not_blank")]
    pub sender: String,
    pub height: Option<BlockHeight>,
}

// Resultado discriminado: `value` si tuvo éxito, `error` si no
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct InvokeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub tx_id: Uuid,
    pub height: BlockHeight,
}

impl From<Invocation> for InvokeResponse {
    fn from(invocation: Invocation) -> Self {
        let Invocation { tx_id, height, outcome } = invocation;
        match outcome {
            Ok(value) => Self {
                success: true,
                value,
                error: None,
                message: None,
                tx_id,
                height,
            },
            Err(e) => Self {
                success: false,
                value: None,
                error: Some(e.code().to_string()),
                message: Some(e.to_string()),
                tx_id,
                height,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use serde_json::json;

    #[test]
    fn test_envelope_validation() {
        let ok: InvokeRequest = serde_json::from_value(json!({
            "method": "start-ride",
            "args": [1],
            "sender": "driver1"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.height, None);

        let blank: InvokeRequest = serde_json::from_value(json!({
            "method": "start-ride",
            "sender": "  "
        }))
        .unwrap();
        assert!(blank.args.is_empty());
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_failure_envelope() {
        let response = InvokeResponse::from(Invocation {
            tx_id: Uuid::nil(),
            height: 7,
            outcome: Err(AppError::InvalidStateOrNotFound(1)),
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "InvalidStateOrNotFound");
        assert!(value.get("value").is_none());
    }
}
