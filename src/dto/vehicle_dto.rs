use serde::{Deserialize, Serialize};

use crate::models::{VehicleId, VehicleRecord};

// Request para registrar un vehículo
#[derive(Debug, Deserialize)]
pub struct RegisterVehicleRequest {
    pub model: String,
    pub license_plate: String,
}

// Request para actualizar el estado de un vehículo
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleStatusRequest {
    pub status: u64,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: VehicleId,
    #[serde(flatten)]
    pub vehicle: VehicleRecord,
}

#[derive(Debug, Serialize)]
pub struct RegisteredVehicle {
    pub id: VehicleId,
}
