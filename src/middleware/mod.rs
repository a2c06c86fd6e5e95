//! Middleware del sistema
//!
//! Este módulo contiene la extracción de la identidad del llamador y CORS.

pub mod caller;
pub mod cors;

pub use caller::*;
pub use cors::*;
