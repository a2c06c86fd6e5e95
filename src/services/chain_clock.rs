//! Reloj de cadena simulado
//!
//! El servicio hace de entorno anfitrión y asigna a cada llamada una altura
//! de bloque monótona no decreciente.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::BlockHeight;
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug)]
pub struct ChainClock {
    height: AtomicU64,
}

impl ChainClock {
    pub fn new(genesis: BlockHeight) -> Self {
        Self {
            height: AtomicU64::new(genesis),
        }
    }

    pub fn current(&self) -> BlockHeight {
        self.height.load(Ordering::SeqCst)
    }

    /// Altura para la próxima llamada.
    ///
    /// Sin altura pedida avanza un bloque. Con altura pedida la adopta si
    /// no retrocede respecto a la actual.
    pub fn next_height(&self, requested: Option<BlockHeight>) -> AppResult<BlockHeight> {
        let result = self.height.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| match requested {
            Some(h) if h < current => None,
            Some(h) => Some(h),
            None => current.checked_add(1),
        });

        match result {
            Ok(previous) => Ok(requested.unwrap_or(previous + 1)),
            Err(current) => Err(AppError::BadArguments(match requested {
                Some(h) => format!("height {} is below current height {}", h, current),
                None => "height overflow".to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_one_block_per_call() {
        let clock = ChainClock::new(100);
        assert_eq!(clock.next_height(None).unwrap(), 101);
        assert_eq!(clock.next_height(None).unwrap(), 102);
        assert_eq!(clock.current(), 102);
    }

    #[test]
    fn test_requested_height_must_not_go_back() {
        let clock = ChainClock::new(100);
        assert_eq!(clock.next_height(Some(200)).unwrap(), 200);
        assert_eq!(clock.next_height(Some(200)).unwrap(), 200);
        assert!(clock.next_height(Some(150)).is_err());
        assert_eq!(clock.current(), 200);
        assert_eq!(clock.next_height(None).unwrap(), 201);
    }
}
