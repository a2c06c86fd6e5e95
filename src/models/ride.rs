//! Modelo de Ride
//!
//! Registro de viaje y su máquina de estados:
//! `REQUESTED → ACCEPTED → IN_PROGRESS → COMPLETED`, con salida a
//! `CANCELLED` desde los dos primeros estados.

use serde::{Deserialize, Serialize};

use super::context::{BlockHeight, Principal};
use super::vehicle::VehicleId;

/// Identificador de viaje (nonce del ledger, empieza en 1)
pub type RideId = u64;

/// Vehículo "sin asignar"
pub const UNASSIGNED_VEHICLE: VehicleId = 0;

/// Estado del viaje; en el cable viaja como su código numérico
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RideStatus {
    Requested = 1,
    Accepted = 2,
    InProgress = 3,
    Completed = 4,
    Cancelled = 5,
}

impl RideStatus {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RideStatus::Completed | RideStatus::Cancelled)
    }

    pub fn is_cancellable(self) -> bool {
        matches!(self, RideStatus::Requested | RideStatus::Accepted)
    }

    /// Siguiente estado del camino lineal, si existe
    pub fn next(self) -> Option<RideStatus> {
        match self {
            RideStatus::Requested => Some(RideStatus::Accepted),
            RideStatus::Accepted => Some(RideStatus::InProgress),
            RideStatus::InProgress => Some(RideStatus::Completed),
            RideStatus::Completed | RideStatus::Cancelled => None,
        }
    }
}

impl From<RideStatus> for u8 {
    fn from(status: RideStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u8> for RideStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(RideStatus::Requested),
            2 => Ok(RideStatus::Accepted),
            3 => Ok(RideStatus::InProgress),
            4 => Ok(RideStatus::Completed),
            5 => Ok(RideStatus::Cancelled),
            other => Err(format!("unknown ride status code {}", other)),
        }
    }
}

/// Ride principal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRecord {
    pub passenger: Principal,
    pub vehicle_id: VehicleId,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub status: RideStatus,
    pub request_time: BlockHeight,
    pub completion_time: Option<BlockHeight>,
    pub fare: u64,
}

impl RideRecord {
    pub fn new(passenger: Principal, pickup_location: String, dropoff_location: String, request_time: BlockHeight) -> Self {
        Self {
            passenger,
            vehicle_id: UNASSIGNED_VEHICLE,
            pickup_location,
            dropoff_location,
            status: RideStatus::Requested,
            request_time,
            completion_time: None,
            fare: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_linear_path() {
        assert_eq!(RideStatus::Requested.next(), Some(RideStatus::Accepted));
        assert_eq!(RideStatus::Accepted.next(), Some(RideStatus::InProgress));
        assert_eq!(RideStatus::InProgress.next(), Some(RideStatus::Completed));
        assert_eq!(RideStatus::Completed.next(), None);
        assert_eq!(RideStatus::Cancelled.next(), None);
    }

    #[test]
    fn test_cancellable_and_terminal() {
        assert!(RideStatus::Requested.is_cancellable());
        assert!(RideStatus::Accepted.is_cancellable());
        assert!(!RideStatus::InProgress.is_cancellable());
        assert!(RideStatus::Completed.is_terminal());
        assert!(RideStatus::Cancelled.is_terminal());
        assert!(!RideStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_status_codes_on_the_wire() {
        let record = RideRecord::new("passenger1".into(), "123 Main St".into(), "456 Elm St".into(), 100);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "passenger": "passenger1",
                "vehicleId": 0,
                "pickupLocation": "123 Main St",
                "dropoffLocation": "456 Elm St",
                "status": 1,
                "requestTime": 100,
                "completionTime": null,
                "fare": 0
            })
        );

        let status: RideStatus = serde_json::from_value(json!(4)).unwrap();
        assert_eq!(status, RideStatus::Completed);
        assert!(serde_json::from_value::<RideStatus>(json!(9)).is_err());
    }
}
