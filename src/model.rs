//! Core domain types for the pot ledger.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::Amount;

/// Pot identifier, assigned by the store at creation.
pub type PotId = u32;

/// Presentation category for a pot. Drives no ledger behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Holiday,
    Emergency,
    Gift,
    Upcoming,
    Gold,
    Gadget,
    Education,
    Custom,
}

/// Category string outside the fixed set.
#[derive(Debug, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Holiday => "holiday",
            Category::Emergency => "emergency",
            Category::Gift => "gift",
            Category::Upcoming => "upcoming",
            Category::Gold => "gold",
            Category::Gadget => "gadget",
            Category::Education => "education",
            Category::Custom => "custom",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "holiday" => Ok(Category::Holiday),
            "emergency" => Ok(Category::Emergency),
            "gift" => Ok(Category::Gift),
            "upcoming" => Ok(Category::Upcoming),
            "gold" => Ok(Category::Gold),
            "gadget" => Ok(Category::Gadget),
            "education" => Ok(Category::Education),
            "custom" => Ok(Category::Custom),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Savings target attached to a pot.
///
/// `notified` records whether the one-shot completion signal for the current
/// target has already been emitted (or forfeited by setting a target at or
/// below the balance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub target: Amount,
    pub notified: bool,
}

/// Derived goal lifecycle state of a pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalState {
    NoGoal,
    Active,
    Reached,
}

/// A named, categorized sub-account with a non-negative balance and an
/// optional savings goal.
#[derive(Debug, Clone)]
pub struct Pot {
    pub id: PotId,
    pub name: String,
    pub category: Category,
    pub balance: Amount,
    pub goal: Option<Goal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pot {
    /// Create a fresh pot: zero balance, no goal.
    pub fn new(id: PotId, name: String, category: Category, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            category,
            balance: Amount::ZERO,
            goal: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn goal_state(&self) -> GoalState {
        match &self.goal {
            None => GoalState::NoGoal,
            Some(goal) if goal.notified => GoalState::Reached,
            Some(_) => GoalState::Active,
        }
    }

    /// Mark the pot as mutated.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// An operation representing the possible inputs of the ledger.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Open a new pot with zero balance and no goal.
    Create { name: String, category: Category },
    /// Credit funds to a pot's balance.
    Deposit { pot: PotId, amount: Amount },
    /// Debit funds from a pot's balance.
    Withdraw { pot: PotId, amount: Amount },
    /// Set or replace a pot's savings target.
    SetGoal { pot: PotId, target: Amount },
    /// Change a pot's display name.
    Rename { pot: PotId, name: String },
    /// Remove a pot; its id is never valid again.
    Delete { pot: PotId },
}
