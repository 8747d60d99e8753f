//! Savings pot ledger engine.
//!
//! The ledger owns the invariants of pot balances and goal state across
//! create, deposit, withdraw, set-goal, rename, and delete operations, and
//! decides when a goal-completion signal fires. Also supports an async stream
//! of operations.

use tokio_stream::{Stream, StreamExt};
use tracing::info;

use crate::Amount;
use crate::model::{Category, Goal, Operation, Pot, PotId};

mod store;
pub use store::{MemoryStore, PotStore};

mod error;
pub use error::LedgerError;

/// Result of a deposit: the updated pot plus the one-shot goal signal.
///
/// `goal_just_reached` is computed once here, authoritatively, instead of
/// being re-derived by every consumer from before/after balances.
#[derive(Debug)]
pub struct DepositOutcome<'a> {
    pub pot: &'a Pot,
    pub goal_just_reached: bool,
}

/// The pot ledger engine.
///
/// Generic over its [`PotStore`] so the backing store is an explicit
/// collaborator rather than shared module state.
pub struct Ledger<S: PotStore = MemoryStore> {
    store: S,
}

/// Public API
impl Ledger<MemoryStore> {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl<S: PotStore> Ledger<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Run the ledger over the given operation stream
    pub async fn run(&mut self, mut stream: impl Stream<Item = Operation> + Unpin) {
        while let Some(op) = stream.next().await {
            // a failed operation should not stop the run, so the result is
            // logged by apply and otherwise ignored
            let _ = self.apply(op);
        }
    }

    /// Return all pots in the ledger.
    pub fn pots(&self) -> impl Iterator<Item = &Pot> {
        self.store.pots()
    }

    /// Return one pot, if it exists.
    pub fn get(&self, id: PotId) -> Option<&Pot> {
        self.store.get(id)
    }

    /// Open a new pot with zero balance and no goal.
    pub fn create(&mut self, name: &str, category: Category) -> Result<&Pot, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidInput(
                "pot name must not be empty".to_string(),
            ));
        }
        Ok(self.store.insert(name.to_string(), category))
    }

    /// Credit `amount` to the pot and evaluate the goal crossing.
    ///
    /// The completion signal fires exactly once per (pot, target) pair, on
    /// the deposit that moves the balance from below the target to at or
    /// above it.
    pub fn deposit(
        &mut self,
        id: PotId,
        amount: Amount,
    ) -> Result<DepositOutcome<'_>, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let pot = self.store.get_mut(id).ok_or(LedgerError::NotFound(id))?;

        let previous = pot.balance;
        pot.balance += amount;

        let goal_just_reached = match pot.goal.as_mut() {
            Some(goal)
                if !goal.notified && previous < goal.target && goal.target <= pot.balance =>
            {
                goal.notified = true;
                true
            }
            _ => false,
        };

        pot.touch();
        Ok(DepositOutcome {
            pot,
            goal_just_reached,
        })
    }

    /// Debit `amount` from the pot.
    ///
    /// Rejected atomically when the pot holds less than `amount`; the balance
    /// is never clamped and never goes negative.
    pub fn withdraw(&mut self, id: PotId, amount: Amount) -> Result<&Pot, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let pot = self.store.get_mut(id).ok_or(LedgerError::NotFound(id))?;

        if pot.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                pot: id,
                available: pot.balance,
                requested: amount,
            });
        }

        pot.balance -= amount;
        pot.touch();
        Ok(pot)
    }

    /// Set or replace the pot's savings target.
    ///
    /// A target above the balance arms completion detection. A target at or
    /// below the balance is marked reached without a signal: the crossing
    /// predicate can never hold for it, and the signal is only ever emitted
    /// by deposits. Re-setting the current target keeps its notified flag, so
    /// the signal stays one-shot per (pot, target) pair.
    pub fn set_goal(&mut self, id: PotId, target: Amount) -> Result<&Pot, LedgerError> {
        if !target.is_positive() {
            return Err(LedgerError::InvalidAmount(target));
        }

        let pot = self.store.get_mut(id).ok_or(LedgerError::NotFound(id))?;

        let notified = match pot.goal {
            Some(goal) if goal.target == target => goal.notified,
            _ => target <= pot.balance,
        };
        pot.goal = Some(Goal { target, notified });
        pot.touch();
        Ok(pot)
    }

    /// Change the pot's display name.
    pub fn rename(&mut self, id: PotId, name: &str) -> Result<&Pot, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidInput(
                "pot name must not be empty".to_string(),
            ));
        }

        let pot = self.store.get_mut(id).ok_or(LedgerError::NotFound(id))?;
        pot.name = name.to_string();
        pot.touch();
        Ok(pot)
    }

    /// Remove the pot. The id is terminal: every later operation on it
    /// reports `NotFound`.
    pub fn delete(&mut self, id: PotId) -> Result<(), LedgerError> {
        self.store
            .remove(id)
            .map(|_| ())
            .ok_or(LedgerError::NotFound(id))
    }

    /// Apply a single operation on top of the current ledger state
    pub fn apply(&mut self, op: Operation) -> Result<(), LedgerError> {
        match op {
            Operation::Create { name, category } => {
                let result = self.create(&name, category);
                match &result {
                    Ok(pot) => {
                        info!(pot = pot.id, name = %pot.name, category = %pot.category, "create applied");
                    }
                    Err(e) => info!(name = %name, reason = %e, "create skipped"),
                }
                result?;
            }
            Operation::Deposit { pot, amount } => {
                let result = self.deposit(pot, amount);
                match &result {
                    Ok(outcome) => {
                        info!(pot, amount = %amount, balance = %outcome.pot.balance, "deposit applied");
                        if outcome.goal_just_reached {
                            info!(pot, balance = %outcome.pot.balance, "savings goal reached");
                        }
                    }
                    Err(e) => info!(pot, amount = %amount, reason = %e, "deposit skipped"),
                }
                result.map(|_| ())?;
            }
            Operation::Withdraw { pot, amount } => {
                let result = self.withdraw(pot, amount);
                Self::log_result("withdraw", pot, Some(amount), &result);
                result.map(|_| ())?;
            }
            Operation::SetGoal { pot, target } => {
                let result = self.set_goal(pot, target);
                Self::log_result("set_goal", pot, Some(target), &result);
                result.map(|_| ())?;
            }
            Operation::Rename { pot, name } => {
                let result = self.rename(pot, &name);
                Self::log_result("rename", pot, None, &result);
                result.map(|_| ())?;
            }
            Operation::Delete { pot } => {
                let result = self.delete(pot);
                Self::log_result("delete", pot, None, &result);
                result?;
            }
        }
        Ok(())
    }
}

/// Private API
impl<S: PotStore> Ledger<S> {
    /// Small helper to log `apply` results
    fn log_result<T>(
        op: &str,
        pot: PotId,
        amount: Option<Amount>,
        result: &Result<T, LedgerError>,
    ) {
        match (result, amount) {
            (Ok(_), Some(amt)) => {
                info!(pot, amount = %amt, "{op} applied");
            }
            (Ok(_), None) => {
                info!(pot, "{op} applied");
            }
            (Err(e), Some(amt)) => {
                info!(pot, amount = %amt, reason = %e, "{op} skipped");
            }
            (Err(e), None) => {
                info!(pot, reason = %e, "{op} skipped");
            }
        }
    }
}

impl Default for Ledger<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}
