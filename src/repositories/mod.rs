//! Repositorios en memoria
//!
//! Cada registro es dueño de su propio mapa id → registro y de su nonce.

pub mod ride_repository;
pub mod vehicle_repository;

pub use ride_repository::RideRepository;
pub use vehicle_repository::VehicleRepository;
