//! Repositorio de vehículos en memoria
//!
//! Mapa id → registro con su nonce y los índices por matrícula y dueño.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::{Principal, VehicleId, VehicleRecord, VehicleStatus};

/// Almacén en memoria de vehículos con índices secundarios
///
/// Los índices se mantienen en cada escritura. Iterar un índice por id
/// ascendente equivale a orden de inserción.
#[derive(Debug, Default)]
pub struct VehicleRepository {
    records: BTreeMap<VehicleId, VehicleRecord>,
    nonce: VehicleId,
    by_plate: HashMap<String, VehicleId>,
    by_owner: HashMap<Principal, BTreeSet<VehicleId>>,
}

impl VehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarda un registro nuevo con el siguiente nonce y lo devuelve
    pub fn create(&mut self, record: VehicleRecord) -> VehicleId {
        self.nonce += 1;
        let id = self.nonce;

        self.by_plate.insert(record.license_plate.clone(), id);
        self.by_owner
            .entry(record.owner.clone())
            .or_default()
            .insert(id);
        self.records.insert(id, record);

        id
    }

    pub fn find_by_id(&self, id: VehicleId) -> Option<&VehicleRecord> {
        self.records.get(&id)
    }

    pub fn license_plate_exists(&self, license_plate: &str) -> bool {
        self.by_plate.contains_key(license_plate)
    }

    pub fn find_by_license_plate(&self, license_plate: &str) -> Option<&VehicleRecord> {
        self.by_plate
            .get(license_plate)
            .and_then(|id| self.records.get(id))
    }

    pub fn find_by_owner(&self, owner: &Principal) -> Vec<&VehicleRecord> {
        self.by_owner
            .get(owner)
            .map(|ids| ids.iter().filter_map(|id| self.records.get(id)).collect())
            .unwrap_or_default()
    }

    /// Sobrescribe el estado. Devuelve `false` si el id no existe.
    pub fn update_status(&mut self, id: VehicleId, status: VehicleStatus) -> bool {
        match self.records.get_mut(&id) {
            Some(record) => {
                record.status = status;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
