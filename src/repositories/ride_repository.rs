//! Repositorio de viajes en memoria
//!
//! Mapa id → registro con su nonce. Los índices por pasajero y vehículo se
//! mantienen al reemplazar un registro.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::{Principal, RideId, RideRecord, VehicleId};

/// Almacén en memoria de viajes con índices por pasajero y vehículo
#[derive(Debug, Default)]
pub struct RideRepository {
    records: BTreeMap<RideId, RideRecord>,
    nonce: RideId,
    by_passenger: HashMap<Principal, BTreeSet<RideId>>,
    by_vehicle: HashMap<VehicleId, BTreeSet<RideId>>,
}

impl RideRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, record: RideRecord) -> RideId {
        self.nonce += 1;
        let id = self.nonce;

        self.by_passenger
            .entry(record.passenger.clone())
            .or_default()
            .insert(id);
        self.by_vehicle
            .entry(record.vehicle_id)
            .or_default()
            .insert(id);
        self.records.insert(id, record);

        id
    }

    pub fn find_by_id(&self, id: RideId) -> Option<&RideRecord> {
        self.records.get(&id)
    }

    pub fn find_by_passenger(&self, passenger: &Principal) -> Vec<&RideRecord> {
        self.by_passenger
            .get(passenger)
            .map(|ids| ids.iter().filter_map(|id| self.records.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn find_by_vehicle(&self, vehicle_id: VehicleId) -> Vec<&RideRecord> {
        self.by_vehicle
            .get(&vehicle_id)
            .map(|ids| ids.iter().filter_map(|id| self.records.get(id)).collect())
            .unwrap_or_default()
    }

    /// Reemplaza un registro existente de una sola vez y reindexa el
    /// vehículo si cambió. Devuelve `false` si el id no existe.
    ///
    /// El pasajero es inmutable, así que su índice no se toca.
    pub fn replace(&mut self, id: RideId, record: RideRecord) -> bool {
        let previous_vehicle = match self.records.get(&id) {
            Some(current) => current.vehicle_id,
            None => return false,
        };

        if previous_vehicle != record.vehicle_id {
            if let Some(ids) = self.by_vehicle.get_mut(&previous_vehicle) {
                ids.remove(&id);
                if ids.is_empty() {
                    self.by_vehicle.remove(&previous_vehicle);
                }
            }
            self.by_vehicle
                .entry(record.vehicle_id)
                .or_default()
                .insert(id);
        }

        self.records.insert(id, record);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
