use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::dto::vehicle_dto::{RegisterVehicleRequest, RegisteredVehicle, UpdateVehicleStatusRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::middleware::Caller;
use crate::models::{Principal, VehicleId, VehicleRecord, VehicleStatus};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_vehicle))
        .route("/:id", get(get_vehicle))
        .route("/:id/status", put(update_vehicle_status))
        .route("/plate/:plate", get(get_vehicle_by_plate))
        .route("/owner/:owner", get(list_vehicles_by_owner))
}

async fn register_vehicle(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Json(request): Json<RegisterVehicleRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<RegisteredVehicle>>)> {
    let id = state
        .ledger
        .execute_vehicles(caller, |registry, ctx| {
            registry.register(request.model, request.license_plate, ctx)
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            RegisteredVehicle { id },
            "Vehicle registered".to_string(),
        )),
    ))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<VehicleId>,
) -> AppResult<Json<VehicleResponse>> {
    let vehicle = state
        .ledger
        .read_vehicles(|registry| registry.get(id).cloned())
        .await
        .ok_or(AppError::NotFound(id))?;

    Ok(Json(VehicleResponse { id, vehicle }))
}

async fn update_vehicle_status(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<VehicleId>,
    Json(request): Json<UpdateVehicleStatusRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .ledger
        .execute_vehicles(caller, |registry, ctx| {
            registry.update_status(id, VehicleStatus(request.status), ctx)
        })
        .await?;

    Ok(Json(ApiResponse::success_with_message((), "Vehicle status updated".to_string())))
}

async fn get_vehicle_by_plate(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Json<Vec<VehicleRecord>> {
    let vehicles = state
        .ledger
        .read_vehicles(|registry| registry.find_by_plate(&plate).into_iter().cloned().collect())
        .await;
    Json(vehicles)
}

async fn list_vehicles_by_owner(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Json<Vec<VehicleRecord>> {
    let owner = Principal::from(owner);
    let vehicles = state
        .ledger
        .read_vehicles(|registry| registry.list_by_owner(&owner).into_iter().cloned().collect())
        .await;
    Json(vehicles)
}
