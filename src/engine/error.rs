//! Error types for ledger operations.

use thiserror::Error;

use crate::Amount;
use crate::model::PotId;

/// Error returned by [`Ledger`](super::Ledger) operations.
///
/// One variant per taxonomy kind; all are reported synchronously and none of
/// them leave a partial mutation behind.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid amount {0}: must be positive")]
    InvalidAmount(Amount),

    #[error("insufficient funds in pot {pot}: available {available}, requested {requested}")]
    InsufficientFunds {
        pot: PotId,
        available: Amount,
        requested: Amount,
    },

    #[error("pot {0} not found")]
    NotFound(PotId),

    /// Concurrent mutation detected by the store. Never produced by the
    /// in-memory store; reserved for stores with real write contention.
    #[error("pot {0} was modified concurrently")]
    Conflict(PotId),
}
