//! Despacho de llamadas de contrato
//!
//! Traduce `invoke(método, argumentos posicionales, llamador)` a las
//! operaciones tipadas de cada registro.

use serde_json::Value;
use tracing::debug;

use crate::controllers::{RideLedger, VehicleRegistry};
use crate::models::{CallContext, Principal, VehicleStatus};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{arg_string, arg_u64};

/// Un registro invocable por nombre de método
pub trait Contract {
    fn name(&self) -> &'static str;

    /// `Ok(None)` para operaciones sin valor de retorno
    fn invoke(&mut self, method: &str, args: &[Value], ctx: &CallContext) -> AppResult<Option<Value>>;
}

impl Contract for VehicleRegistry {
    fn name(&self) -> &'static str {
        "vehicles"
    }

    fn invoke(&mut self, method: &str, args: &[Value], ctx: &CallContext) -> AppResult<Option<Value>> {
        debug!("📨 vehicles::{} {:?} desde {}", method, args, ctx.caller);
        match method {
            "register-vehicle" => {
                let model = arg_string(method, args, 0, "model")?;
                let license_plate = arg_string(method, args, 1, "licensePlate")?;
                let id = self.register(model, license_plate, ctx)?;
                Ok(Some(Value::from(id)))
            }
            "update-vehicle-status" => {
                let vehicle_id = arg_u64(method, args, 0, "vehicleId")?;
                let status = arg_u64(method, args, 1, "newStatus")?;
                self.update_status(vehicle_id, VehicleStatus(status), ctx)?;
                Ok(None)
            }
            "get-vehicle" => {
                let vehicle_id = arg_u64(method, args, 0, "vehicleId")?;
                Ok(Some(serde_json::to_value(self.get(vehicle_id))?))
            }
            "get-vehicle-by-license-plate" => {
                let license_plate = arg_string(method, args, 0, "licensePlate")?;
                Ok(Some(serde_json::to_value(self.find_by_plate(&license_plate))?))
            }
            "get-vehicles-by-owner" => {
                let owner = Principal::from(arg_string(method, args, 0, "owner")?);
                Ok(Some(serde_json::to_value(self.list_by_owner(&owner))?))
            }
            other => Err(AppError::UnknownOperation(other.to_string())),
        }
    }
}

impl Contract for RideLedger {
    fn name(&self) -> &'static str {
        "rides"
    }

    fn invoke(&mut self, method: &str, args: &[Value], ctx: &CallContext) -> AppResult<Option<Value>> {
        debug!("📨 rides::{} {:?} desde {}", method, args, ctx.caller);
        match method {
            "request-ride" => {
                let pickup = arg_string(method, args, 0, "pickupLocation")?;
                let dropoff = arg_string(method, args, 1, "dropoffLocation")?;
                let id = self.request_ride(pickup, dropoff, ctx)?;
                Ok(Some(Value::from(id)))
            }
            "accept-ride" => {
                let ride_id = arg_u64(method, args, 0, "rideId")?;
                let vehicle_id = arg_u64(method, args, 1, "vehicleId")?;
                self.accept_ride(ride_id, vehicle_id, ctx)?;
                Ok(None)
            }
            "start-ride" => {
                let ride_id = arg_u64(method, args, 0, "rideId")?;
                self.start_ride(ride_id, ctx)?;
                Ok(None)
            }
            "complete-ride" => {
                let ride_id = arg_u64(method, args, 0, "rideId")?;
                let fare = arg_u64(method, args, 1, "fare")?;
                self.complete_ride(ride_id, fare, ctx)?;
                Ok(None)
            }
            "cancel-ride" => {
                let ride_id = arg_u64(method, args, 0, "rideId")?;
                self.cancel_ride(ride_id, ctx)?;
                Ok(None)
            }
            "get-ride" => {
                let ride_id = arg_u64(method, args, 0, "rideId")?;
                Ok(Some(serde_json::to_value(self.get(ride_id))?))
            }
            "get-rides-by-passenger" => {
                let passenger = Principal::from(arg_string(method, args, 0, "passenger")?);
                Ok(Some(serde_json::to_value(self.list_by_passenger(&passenger))?))
            }
            "get-rides-by-vehicle" => {
                let vehicle_id = arg_u64(method, args, 0, "vehicleId")?;
                Ok(Some(serde_json::to_value(self.list_by_vehicle(vehicle_id))?))
            }
            other => Err(AppError::UnknownOperation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx(caller: &str) -> CallContext {
        CallContext::new(caller, 100)
    }

    #[test]
    fn test_vehicle_contract_calls() {
        let mut reg = VehicleRegistry::new("CONTRACT_OWNER".into());

        let id = reg
            .invoke("register-vehicle", &[json!("Tesla Model 3"), json!("ABC123")], &ctx("owner1"))
            .unwrap();
        assert_eq!(id, Some(json!(1)));

        let dup = reg.invoke("register-vehicle", &[json!("Tesla Model S"), json!("ABC123")], &ctx("owner2"));
        assert_eq!(dup.unwrap_err().code(), "DuplicatePlate");

        assert_eq!(reg.invoke("update-vehicle-status", &[json!(1), json!(2)], &ctx("owner1")).unwrap(), None);
        assert!(reg.invoke("update-vehicle-status", &[json!(1), json!(2)], &ctx("owner2")).is_err());

        let vehicle = reg.invoke("get-vehicle", &[json!(1)], &ctx("anyone")).unwrap().unwrap();
        assert_eq!(vehicle["model"], "Tesla Model 3");
        assert_eq!(vehicle["status"], 2);

        let missing = reg.invoke("get-vehicle", &[json!(9)], &ctx("anyone")).unwrap();
        assert_eq!(missing, Some(Value::Null));

        let by_plate = reg
            .invoke("get-vehicle-by-license-plate", &[json!("ABC123")], &ctx("anyone"))
            .unwrap()
            .unwrap();
        assert_eq!(by_plate.as_array().unwrap().len(), 1);

        let by_owner = reg
            .invoke("get-vehicles-by-owner", &[json!("owner1")], &ctx("anyone"))
            .unwrap()
            .unwrap();
        assert_eq!(by_owner.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_ride_contract_calls() {
        let mut ledger = RideLedger::new("CONTRACT_OWNER".into());

        let id = ledger
            .invoke("request-ride", &[json!("123 Main St"), json!("456 Elm St")], &ctx("passenger1"))
            .unwrap();
        assert_eq!(id, Some(json!(1)));

        ledger.invoke("accept-ride", &[json!(1), json!(1)], &ctx("driver1")).unwrap();
        ledger.invoke("start-ride", &[json!(1)], &ctx("driver1")).unwrap();
        ledger.invoke("complete-ride", &[json!(1), json!(1000)], &ctx("driver1")).unwrap();

        let again = ledger.invoke("complete-ride", &[json!(1), json!(500)], &ctx("driver1"));
        assert_eq!(again.unwrap_err().code(), "InvalidStateOrNotFound");

        let ride = ledger.invoke("get-ride", &[json!(1)], &ctx("anyone")).unwrap().unwrap();
        assert_eq!(ride["status"], 4);
        assert_eq!(ride["fare"], 1000);

        let by_vehicle = ledger
            .invoke("get-rides-by-vehicle", &[json!(1)], &ctx("anyone"))
            .unwrap()
            .unwrap();
        assert_eq!(by_vehicle.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_method_and_bad_arguments() {
        let mut ledger = RideLedger::new("CONTRACT_OWNER".into());
        let err = ledger.invoke("teleport", &[], &ctx("passenger1")).unwrap_err();
        assert_eq!(err, AppError::UnknownOperation("teleport".into()));

        let err = ledger.invoke("accept-ride", &[json!(1)], &ctx("driver1")).unwrap_err();
        assert_eq!(err.code(), "BadArguments");

        let err = ledger.invoke("request-ride", &[json!("only pickup")], &ctx("p")).unwrap_err();
        assert_eq!(err.code(), "BadArguments");
        assert!(ledger.is_empty());
    }
}
