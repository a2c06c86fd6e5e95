//! Contexto de ejecución de una llamada
//!
//! Identidad del llamador y altura de bloque. Ambos los aporta el entorno
//! anfitrión; los registros nunca los generan.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Altura de bloque (marca temporal monótona no decreciente)
pub type BlockHeight = u64;

/// Identidad de un llamador
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Quién llama y a qué altura se ejecuta la llamada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Principal,
    pub height: BlockHeight,
}

impl CallContext {
    pub fn new(caller: impl Into<Principal>, height: BlockHeight) -> Self {
        Self {
            caller: caller.into(),
            height,
        }
    }
}
