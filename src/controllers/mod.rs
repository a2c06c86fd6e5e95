pub mod ride_controller;
pub mod vehicle_controller;

pub use ride_controller::RideLedger;
pub use vehicle_controller::VehicleRegistry;
