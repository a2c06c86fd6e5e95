//! Servicio anfitrión de los registros
//!
//! Cada registro vive detrás de su propio `Mutex`: un único escritor por
//! registro, así que la comprobación y la escritura de cada operación son
//! atómicas frente a otros llamadores. La altura se toma con el lock
//! adquirido para que cada registro vea alturas no decrecientes.

use std::str::FromStr;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::controllers::{RideLedger, VehicleRegistry};
use crate::models::{BlockHeight, CallContext, Principal};
use crate::services::chain_clock::ChainClock;
use crate::services::contract_service::Contract;
use crate::utils::errors::{AppError, AppResult};

/// Contratos que hospeda el servicio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractKind {
    Vehicles,
    Rides,
}

impl FromStr for ContractKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vehicles" => Ok(ContractKind::Vehicles),
            "rides" => Ok(ContractKind::Rides),
            other => Err(AppError::UnknownContract(other.to_string())),
        }
    }
}

/// Resultado de una llamada ya ejecutada
#[derive(Debug)]
pub struct Invocation {
    pub tx_id: Uuid,
    pub height: BlockHeight,
    pub outcome: AppResult<Option<Value>>,
}

pub struct LedgerService {
    vehicles: Mutex<VehicleRegistry>,
    rides: Mutex<RideLedger>,
    clock: ChainClock,
}

impl LedgerService {
    pub fn new(contract_owner: Principal, genesis_height: BlockHeight) -> Self {
        Self {
            vehicles: Mutex::new(VehicleRegistry::new(contract_owner.clone())),
            rides: Mutex::new(RideLedger::new(contract_owner)),
            clock: ChainClock::new(genesis_height),
        }
    }

    pub fn current_height(&self) -> BlockHeight {
        self.clock.current()
    }

    /// Ejecuta una llamada por nombre de método.
    ///
    /// El `Err` exterior es un fallo del sobre (altura inválida); los
    /// fallos del contrato viajan en `Invocation::outcome`.
    pub async fn invoke(
        &self,
        kind: ContractKind,
        method: &str,
        args: &[Value],
        sender: Principal,
        height: Option<BlockHeight>,
    ) -> AppResult<Invocation> {
        match kind {
            ContractKind::Vehicles => self.invoke_on(&self.vehicles, method, args, sender, height).await,
            ContractKind::Rides => self.invoke_on(&self.rides, method, args, sender, height).await,
        }
    }

    async fn invoke_on<C: Contract>(
        &self,
        contract: &Mutex<C>,
        method: &str,
        args: &[Value],
        sender: Principal,
        height: Option<BlockHeight>,
    ) -> AppResult<Invocation> {
        let mut contract = contract.lock().await;
        let height = self.clock.next_height(height)?;
        let ctx = CallContext::new(sender, height);
        let tx_id = Uuid::new_v4();

        let outcome = contract.invoke(method, args, &ctx);
        match &outcome {
            Ok(_) => info!("📦 tx {} {}::{} ok en altura {}", tx_id, contract.name(), method, height),
            Err(e) => info!("📦 tx {} {}::{} falló: {}", tx_id, contract.name(), method, e),
        }

        Ok(Invocation { tx_id, height, outcome })
    }

    /// Operación de escritura tipada sobre el registro de vehículos
    pub async fn execute_vehicles<T, F>(&self, caller: Principal, op: F) -> AppResult<T>
    where
        F: FnOnce(&mut VehicleRegistry, &CallContext) -> AppResult<T>,
    {
        let mut registry = self.vehicles.lock().await;
        let ctx = CallContext::new(caller, self.clock.next_height(None)?);
        op(&mut registry, &ctx)
    }

    /// Lectura sobre el registro de vehículos; no avanza la altura
    pub async fn read_vehicles<T, F>(&self, op: F) -> T
    where
        F: FnOnce(&VehicleRegistry) -> T,
    {
        let registry = self.vehicles.lock().await;
        op(&registry)
    }

    pub async fn execute_rides<T, F>(&self, caller: Principal, op: F) -> AppResult<T>
    where
        F: FnOnce(&mut RideLedger, &CallContext) -> AppResult<T>,
    {
        let mut ledger = self.rides.lock().await;
        let ctx = CallContext::new(caller, self.clock.next_height(None)?);
        op(&mut ledger, &ctx)
    }

    pub async fn read_rides<T, F>(&self, op: F) -> T
    where
        F: FnOnce(&RideLedger) -> T,
    {
        let ledger = self.rides.lock().await;
        op(&ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contract_kind_from_str() {
        assert_eq!("vehicles".parse::<ContractKind>().unwrap(), ContractKind::Vehicles);
        assert_eq!("rides".parse::<ContractKind>().unwrap(), ContractKind::Rides);
        assert_eq!(
            "boats".parse::<ContractKind>().unwrap_err(),
            AppError::UnknownContract("boats".into())
        );
    }

    #[tokio::test]
    async fn test_invoke_assigns_heights() {
        let service = LedgerService::new("CONTRACT_OWNER".into(), 99);

        let first = service
            .invoke(ContractKind::Rides, "request-ride", &[json!("a"), json!("b")], "p1".into(), None)
            .await
            .unwrap();
        assert_eq!(first.height, 100);
        assert_eq!(first.outcome, Ok(Some(json!(1))));

        let pinned = service
            .invoke(ContractKind::Rides, "get-ride", &[json!(1)], "p1".into(), Some(200))
            .await
            .unwrap();
        assert_eq!(pinned.height, 200);

        let stale = service
            .invoke(ContractKind::Rides, "get-ride", &[json!(1)], "p1".into(), Some(150))
            .await;
        assert_eq!(stale.unwrap_err().code(), "BadArguments");
    }

    #[tokio::test]
    async fn test_registries_are_independent() {
        let service = LedgerService::new("CONTRACT_OWNER".into(), 0);

        service
            .execute_vehicles("owner1".into(), |reg, ctx| reg.register("Tesla".into(), "ABC123".into(), ctx))
            .await
            .unwrap();
        let ride_id = service
            .execute_rides("passenger1".into(), |ledger, ctx| {
                ledger.request_ride("here".into(), "there".into(), ctx)
            })
            .await
            .unwrap();

        assert_eq!(ride_id, 1);
        assert_eq!(service.read_vehicles(|reg| reg.len()).await, 1);
        assert_eq!(service.read_rides(|ledger| ledger.len()).await, 1);
        assert_eq!(service.read_rides(|ledger| ledger.get(1).unwrap().request_time).await, 2);
    }
}
