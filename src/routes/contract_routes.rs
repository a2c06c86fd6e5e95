use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use validator::Validate;

use crate::dto::contract_dto::{InvokeRequest, InvokeResponse};
use crate::models::Principal;
use crate::services::ContractKind;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_contract_router() -> Router<AppState> {
    Router::new().route("/:contract/invoke", post(invoke_contract))
}

/// Los fallos del contrato responden 200 con `success: false`; solo los
/// errores del sobre (contrato desconocido, sobre inválido) usan el status.
async fn invoke_contract(
    State(state): State<AppState>,
    Path(contract): Path<String>,
    Json(request): Json<InvokeRequest>,
) -> AppResult<Json<InvokeResponse>> {
    let kind: ContractKind = contract.parse()?;
    request.validate()?;

    let invocation = state
        .ledger
        .invoke(
            kind,
            &request.method,
            &request.args,
            Principal::from(request.sender),
            request.height,
        )
        .await?;

    Ok(Json(InvokeResponse::from(invocation)))
}
