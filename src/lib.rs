pub mod amount;
pub mod csv;
pub mod engine;
pub mod model;

pub use amount::Amount;
pub use engine::{DepositOutcome, Ledger, LedgerError, MemoryStore, PotStore};
pub use model::{Category, Goal, GoalState, Operation, Pot, PotId};
