//! Ledger de viajes
//!
//! Máquina de estados `REQUESTED → ACCEPTED → IN_PROGRESS → COMPLETED`, con
//! cancelación desde `REQUESTED` o `ACCEPTED` por el pasajero o la identidad
//! privilegiada. Cada transición es todo o nada: si falla, el registro no
//! cambia.
//!
//! Aceptar, iniciar y completar no verifican quién llama.

use tracing::{debug, info, warn};

use crate::models::{CallContext, Principal, RideId, RideRecord, RideStatus, VehicleId};
use crate::repositories::RideRepository;
use crate::utils::errors::{unauthorized_error, AppError, AppResult};

pub struct RideLedger {
    repository: RideRepository,
    contract_owner: Principal,
}

impl RideLedger {
    pub fn new(contract_owner: Principal) -> Self {
        Self {
            repository: RideRepository::new(),
            contract_owner,
        }
    }

    pub fn request_ride(&mut self, pickup_location: String, dropoff_location: String, ctx: &CallContext) -> AppResult<RideId> {
        let record = RideRecord::new(ctx.caller.clone(), pickup_location, dropoff_location, ctx.height);
        let id = self.repository.create(record);
        info!("🙋 Viaje {} solicitado por {} en altura {}", id, ctx.caller, ctx.height);
        Ok(id)
    }

    pub fn accept_ride(&mut self, ride_id: RideId, vehicle_id: VehicleId, ctx: &CallContext) -> AppResult<()> {
        self.transition(ride_id, RideStatus::Requested, |ride| {
            ride.vehicle_id = vehicle_id;
        })?;
        info!("✅ Viaje {} aceptado con vehículo {} ({})", ride_id, vehicle_id, ctx.caller);
        Ok(())
    }

    pub fn start_ride(&mut self, ride_id: RideId, ctx: &CallContext) -> AppResult<()> {
        self.transition(ride_id, RideStatus::Accepted, |_| {})?;
        info!("🚕 Viaje {} en curso ({})", ride_id, ctx.caller);
        Ok(())
    }

    pub fn complete_ride(&mut self, ride_id: RideId, fare: u64, ctx: &CallContext) -> AppResult<()> {
        let height = ctx.height;
        self.transition(ride_id, RideStatus::InProgress, |ride| {
            ride.fare = fare;
            ride.completion_time = Some(height);
        })?;
        info!("🏁 Viaje {} completado, tarifa {} en altura {}", ride_id, fare, height);
        Ok(())
    }

    pub fn cancel_ride(&mut self, ride_id: RideId, ctx: &CallContext) -> AppResult<()> {
        let ride = self
            .repository
            .find_by_id(ride_id)
            .filter(|ride| ride.status.is_cancellable())
            .ok_or(AppError::InvalidStateOrNotFound(ride_id))?;

        if ride.passenger != ctx.caller && ctx.caller != self.contract_owner {
            warn!("🚫 {} intentó cancelar el viaje {}", ctx.caller, ride_id);
            return Err(unauthorized_error(&format!("cancel ride {}", ride_id), ctx.caller.as_str()));
        }

        let mut updated = ride.clone();
        updated.status = RideStatus::Cancelled;
        self.repository.replace(ride_id, updated);

        info!("❌ Viaje {} cancelado por {}", ride_id, ctx.caller);
        Ok(())
    }

    pub fn get(&self, ride_id: RideId) -> Option<&RideRecord> {
        self.repository.find_by_id(ride_id)
    }

    pub fn list_by_passenger(&self, passenger: &Principal) -> Vec<&RideRecord> {
        self.repository.find_by_passenger(passenger)
    }

    /// `vehicle_id == 0` devuelve los viajes sin asignar
    pub fn list_by_vehicle(&self, vehicle_id: VehicleId) -> Vec<&RideRecord> {
        self.repository.find_by_vehicle(vehicle_id)
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Avanza un paso en el camino lineal si el viaje está en `from`
    fn transition<F>(&mut self, ride_id: RideId, from: RideStatus, apply: F) -> AppResult<()>
    where
        F: FnOnce(&mut RideRecord),
    {
        let current = self
            .repository
            .find_by_id(ride_id)
            .filter(|ride| ride.status == from)
            .ok_or_else(|| {
                debug!("⚠️ Viaje {} no existe o no está en {:?}", ride_id, from);
                AppError::InvalidStateOrNotFound(ride_id)
            })?;

        let next = from.next().ok_or(AppError::InvalidStateOrNotFound(ride_id))?;

        let mut updated = current.clone();
        apply(&mut updated);
        updated.status = next;
        self.repository.replace(ride_id, updated);
        Ok(())
    }
}
