//! Ride Ledger
//!
//! Registro de vehículos y ledger de viajes con semántica de contrato:
//! identidad del llamador, altura de bloque monótona y autorización por
//! dueño. El binario los expone por HTTP.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
