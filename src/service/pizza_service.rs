//! Pizza Service
//!
//! Thin pass-through over [`PizzaStore`]. Same operations, same contracts.

use crate::store::memory::PizzaStore;
use crate::store::types::Pizza;

use std::sync::Arc;

/// CRUD service for pizza records.
///
/// Cheap to clone; all clones share the same store.
#[derive(Clone)]
pub struct PizzaService {
    store: Arc<PizzaStore>,
}

impl PizzaService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<PizzaStore>) -> Self {
        Self { store }
    }

    /// Returns all pizzas in insertion order.
    pub async fn get_all(&self) -> Vec<Pizza> {
        self.store.list().await
    }

    /// Returns the pizza with the given identifier, if any.
    pub async fn get(&self, id: i64) -> Option<Pizza> {
        self.store.get(id).await
    }

    /// Stores a new pizza with a freshly assigned identifier and returns it.
    pub async fn add(&self, pizza: Pizza) -> Pizza {
        self.store.add(pizza).await
    }

    /// Full-replaces the pizza matching `pizza.id`. Returns `false` if it does
    /// not exist.
    pub async fn update(&self, pizza: Pizza) -> bool {
        self.store.replace(pizza).await
    }

    /// Deletes the pizza with the given identifier. Returns `false` if it does
    /// not exist.
    pub async fn delete(&self, id: i64) -> bool {
        self.store.remove(id).await
    }
}
