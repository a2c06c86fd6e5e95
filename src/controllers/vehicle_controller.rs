//! Registro de vehículos
//!
//! Reglas de negocio: matrícula única al registrar y solo el dueño (o la
//! identidad privilegiada del contrato) puede cambiar el estado.

use tracing::{debug, info, warn};

use crate::models::{CallContext, Principal, VehicleId, VehicleRecord, VehicleStatus};
use crate::repositories::VehicleRepository;
use crate::utils::errors::{unauthorized_error, AppError, AppResult};

pub struct VehicleRegistry {
    repository: VehicleRepository,
    contract_owner: Principal,
}

impl VehicleRegistry {
    pub fn new(contract_owner: Principal) -> Self {
        Self {
            repository: VehicleRepository::new(),
            contract_owner,
        }
    }

    pub fn register(&mut self, model: String, license_plate: String, ctx: &CallContext) -> AppResult<VehicleId> {
        if self.repository.license_plate_exists(&license_plate) {
            warn!("🚫 Matrícula {} ya registrada (llamador {})", license_plate, ctx.caller);
            return Err(AppError::DuplicatePlate(license_plate));
        }

        let record = VehicleRecord::new(ctx.caller.clone(), model, license_plate, ctx.height);
        let id = self.repository.create(record);

        info!("🚗 Vehículo {} registrado por {} en altura {}", id, ctx.caller, ctx.height);
        Ok(id)
    }

    pub fn update_status(&mut self, id: VehicleId, status: VehicleStatus, ctx: &CallContext) -> AppResult<()> {
        let vehicle = self.repository.find_by_id(id).ok_or(AppError::NotFound(id))?;

        if vehicle.owner != ctx.caller && ctx.caller != self.contract_owner {
            warn!("🚫 {} intentó cambiar el estado del vehículo {}", ctx.caller, id);
            return Err(unauthorized_error(&format!("update status of vehicle {}", id), ctx.caller.as_str()));
        }

        self.repository.update_status(id, status);
        info!("🔄 Vehículo {} pasa a estado {}", id, status.code());
        Ok(())
    }

    pub fn get(&self, id: VehicleId) -> Option<&VehicleRecord> {
        self.repository.find_by_id(id)
    }

    /// Cero o un elemento
    pub fn find_by_plate(&self, license_plate: &str) -> Vec<&VehicleRecord> {
        self.repository.find_by_license_plate(license_plate).into_iter().collect()
    }

    pub fn list_by_owner(&self, owner: &Principal) -> Vec<&VehicleRecord> {
        let vehicles = self.repository.find_by_owner(owner);
        debug!("📋 {} vehículos para {}", vehicles.len(), owner);
        vehicles
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }
}
