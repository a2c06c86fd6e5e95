use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::dto::ride_dto::{AcceptRideRequest, CompleteRideRequest, RequestRideRequest, RequestedRide, RideResponse};
use crate::dto::ApiResponse;
use crate::middleware::Caller;
use crate::models::{Principal, RideId, RideRecord, VehicleId};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_ride_router() -> Router<AppState> {
    Router::new()
        .route("/", post(request_ride))
        .route("/:id", get(get_ride))
        .route("/:id/accept", post(accept_ride))
        .route("/:id/start", post(start_ride))
        .route("/:id/complete", post(complete_ride))
        .route("/:id/cancel", post(cancel_ride))
        .route("/passenger/:passenger", get(list_rides_by_passenger))
        .route("/vehicle/:vehicle_id", get(list_rides_by_vehicle))
}

async fn request_ride(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Json(request): Json<RequestRideRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<RequestedRide>>)> {
    let id = state
        .ledger
        .execute_rides(caller, |ledger, ctx| {
            ledger.request_ride(request.pickup_location, request.dropoff_location, ctx)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(RequestedRide { id }))))
}

async fn get_ride(
    State(state): State<AppState>,
    Path(id): Path<RideId>,
) -> AppResult<Json<RideResponse>> {
    let ride = state
        .ledger
        .read_rides(|ledger| ledger.get(id).cloned())
        .await
        .ok_or(AppError::NotFound(id))?;

    Ok(Json(RideResponse { id, ride }))
}

async fn accept_ride(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<RideId>,
    Json(request): Json<AcceptRideRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .ledger
        .execute_rides(caller, |ledger, ctx| ledger.accept_ride(id, request.vehicle_id, ctx))
        .await?;
    Ok(Json(ApiResponse::success(())))
}

async fn start_ride(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<RideId>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .ledger
        .execute_rides(caller, |ledger, ctx| ledger.start_ride(id, ctx))
        .await?;
    Ok(Json(ApiResponse::success(())))
}

async fn complete_ride(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<RideId>,
    Json(request): Json<CompleteRideRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .ledger
        .execute_rides(caller, |ledger, ctx| ledger.complete_ride(id, request.fare, ctx))
        .await?;
    Ok(Json(ApiResponse::success(())))
}

async fn cancel_ride(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<RideId>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .ledger
        .execute_rides(caller, |ledger, ctx| ledger.cancel_ride(id, ctx))
        .await?;
    Ok(Json(ApiResponse::success(())))
}

async fn list_rides_by_passenger(
    State(state): State<AppState>,
    Path(passenger): Path<String>,
) -> Json<Vec<RideRecord>> {
    let passenger = Principal::from(passenger);
    let rides = state
        .ledger
        .read_rides(|ledger| ledger.list_by_passenger(&passenger).into_iter().cloned().collect())
        .await;
    Json(rides)
}

async fn list_rides_by_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<VehicleId>,
) -> Json<Vec<RideRecord>> {
    let rides = state
        .ledger
        .read_rides(|ledger| ledger.list_by_vehicle(vehicle_id).into_iter().cloned().collect())
        .await;
    Json(rides)
}
