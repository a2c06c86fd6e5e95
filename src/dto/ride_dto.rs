use serde::{Deserialize, Serialize};

use crate::models::{RideId, RideRecord, VehicleId};

// Request para solicitar un viaje
#[derive(Debug, Deserialize)]
pub struct RequestRideRequest {
    pub pickup_location: String,
    pub dropoff_location: String,
}

#[derive(Debug, Deserialize)]
pub struct AcceptRideRequest {
    pub vehicle_id: VehicleId,
}

#[derive(Debug, Deserialize)]
pub struct CompleteRideRequest {
    pub fare: u64,
}

#[derive(Debug, Serialize)]
pub struct RequestedRide {
    pub id: RideId,
}

// Response de viaje
#[derive(Debug, Serialize)]
pub struct RideResponse {
    pub id: RideId,
    #[serde(flatten)]
    pub ride: RideRecord,
}
