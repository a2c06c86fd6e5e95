//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::LedgerService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub ledger: Arc<LedgerService>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        let ledger = LedgerService::new(config.contract_owner.clone(), config.genesis_height);
        Self {
            config,
            ledger: Arc::new(ledger),
        }
    }
}
