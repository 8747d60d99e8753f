use std::collections::HashMap;

use chrono::Utc;

use crate::model::{Category, Pot, PotId};

/// Storage seam between the ledger and whatever persists pots.
///
/// The ledger is generic over this trait so the backing store can be swapped
/// (in-memory here, a remote service in production). Id assignment and the
/// `created_at` stamp belong to the store; serialization of concurrent writers
/// to one pot is also the store's job.
pub trait PotStore {
    /// Insert a fresh pot, assigning its id, and return it.
    fn insert(&mut self, name: String, category: Category) -> &mut Pot;

    fn get(&self, id: PotId) -> Option<&Pot>;

    fn get_mut(&mut self, id: PotId) -> Option<&mut Pot>;

    /// Remove a pot. Removal is terminal: the id is never reused.
    fn remove(&mut self, id: PotId) -> Option<Pot>;

    fn pots(&self) -> impl Iterator<Item = &Pot>;
}

/// In-process store backing the ledger by default.
#[derive(Debug)]
pub struct MemoryStore {
    pots: HashMap<PotId, Pot>,
    next_id: PotId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            pots: HashMap::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PotStore for MemoryStore {
    fn insert(&mut self, name: String, category: Category) -> &mut Pot {
        let id = self.next_id;
        self.next_id += 1;
        self.pots
            .entry(id)
            .or_insert(Pot::new(id, name, category, Utc::now()))
    }

    fn get(&self, id: PotId) -> Option<&Pot> {
        self.pots.get(&id)
    }

    fn get_mut(&mut self, id: PotId) -> Option<&mut Pot> {
        self.pots.get_mut(&id)
    }

    fn remove(&mut self, id: PotId) -> Option<Pot> {
        self.pots.remove(&id)
    }

    fn pots(&self) -> impl Iterator<Item = &Pot> {
        self.pots.values()
    }
}
