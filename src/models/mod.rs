//! Modelos del sistema
//!
//! Este módulo contiene los registros que guardan el registro de vehículos
//! y el ledger de viajes, más el contexto de llamada que comparten.

pub mod context;
pub mod ride;
pub mod vehicle;

pub use context::{BlockHeight, CallContext, Principal};
pub use ride::{RideId, RideRecord, RideStatus, UNASSIGNED_VEHICLE};
pub use vehicle::{VehicleId, VehicleRecord, VehicleStatus};
