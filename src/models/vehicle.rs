//! Modelo de Vehicle
//!
//! Este módulo contiene el registro de vehículo tal como lo guarda el
//! registro y como se serializa en las respuestas.

use serde::{Deserialize, Serialize};

use super::context::{BlockHeight, Principal};

/// Identificador de vehículo (nonce del registro, empieza en 1)
pub type VehicleId = u64;

/// Código de estado del vehículo
///
/// Solo `ACTIVE` tiene significado para el registro; cualquier otro código
/// lo define quien lo escribe y se guarda tal cual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleStatus(pub u64);

impl VehicleStatus {
    pub const ACTIVE: VehicleStatus = VehicleStatus(1);

    pub fn code(self) -> u64 {
        self.0
    }

    pub fn is_active(self) -> bool {
        self == Self::ACTIVE
    }
}

/// Vehicle principal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub owner: Principal,
    pub model: String,
    pub license_plate: String,
    pub status: VehicleStatus,
    pub registration_date: BlockHeight,
}

impl VehicleRecord {
    pub fn new(owner: Principal, model: String, license_plate: String, registration_date: BlockHeight) -> Self {
        Self {
            owner,
            model,
            license_plate,
            status: VehicleStatus::ACTIVE,
            registration_date,
        }
    }
}
