//! In-Memory Pizza Store
//!
//! An insertion-ordered collection of pizza records plus the identifier
//! counter, behind one `RwLock`. The lock covers both pieces of state so that
//! identifier assignment and insertion are a single atomic step.

use super::types::Pizza;

use tokio::sync::RwLock;

/// Collection state guarded by the store lock.
struct StoreState {
    pizzas: Vec<Pizza>,
    next_id: i64,
}

/// In-memory pizza store.
///
/// Owns every live record. All mutation goes through this type; callers get
/// clones back, never references into the collection.
pub struct PizzaStore {
    state: RwLock<StoreState>,
}

impl PizzaStore {
    /// Creates an empty store. The first assigned identifier will be 1.
    pub fn new() -> Self {
        Self::with_records(vec![], 1)
    }

    /// Creates a store seeded with the classic demo menu, counter at 3.
    pub fn seeded() -> Self {
        Self::with_records(
            vec![
                Pizza {
                    id: 1,
                    name: Some("Classic Italian".to_string()),
                    is_gluten_free: false,
                },
                Pizza {
                    id: 2,
                    name: Some("Veggie".to_string()),
                    is_gluten_free: true,
                },
            ],
            3,
        )
    }

    /// Creates a store with predefined records and counter, for fixtures.
    ///
    /// `next_id` must be greater than every identifier in `pizzas` or the
    /// uniqueness invariant breaks on the next add.
    pub fn with_records(pizzas: Vec<Pizza>, next_id: i64) -> Self {
        Self {
            state: RwLock::new(StoreState { pizzas, next_id }),
        }
    }

    /// Returns all records in insertion order.
    pub async fn list(&self) -> Vec<Pizza> {
        self.state.read().await.pizzas.clone()
    }

    /// Returns the record with the given identifier, if present.
    pub async fn get(&self, id: i64) -> Option<Pizza> {
        let state = self.state.read().await;
        state.pizzas.iter().find(|p| p.id == id).cloned()
    }

    /// Assigns the next identifier to `pizza`, appends it, and returns the
    /// stored record. Any identifier already set on `pizza` is overwritten.
    pub async fn add(&self, mut pizza: Pizza) -> Pizza {
        let mut state = self.state.write().await;
        pizza.id = state.next_id;
        state.next_id += 1;
        state.pizzas.push(pizza.clone());
        pizza
    }

    /// Replaces the record whose identifier matches `pizza.id`, preserving its
    /// position in the sequence. Returns `false` if no such record exists.
    pub async fn replace(&self, pizza: Pizza) -> bool {
        let mut state = self.state.write().await;
        match state.pizzas.iter().position(|p| p.id == pizza.id) {
            Some(index) => {
                state.pizzas[index] = pizza;
                true
            }
            None => false,
        }
    }

    /// Removes the record with the given identifier. Returns `false` if no
    /// such record exists. The counter is unaffected; identifiers are never
    /// reused.
    pub async fn remove(&self, id: i64) -> bool {
        let mut state = self.state.write().await;
        match state.pizzas.iter().position(|p| p.id == id) {
            Some(index) => {
                state.pizzas.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for PizzaStore {
    fn default() -> Self {
        Self::new()
    }
}
