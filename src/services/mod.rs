//! Services module
//!
//! Este módulo contiene el despacho de llamadas de contrato y el reloj de
//! cadena que hace de entorno anfitrión.

pub mod chain_clock;
pub mod contract_service;
pub mod ledger_service;

pub use chain_clock::ChainClock;
pub use contract_service::Contract;
pub use ledger_service::{ContractKind, LedgerService};
