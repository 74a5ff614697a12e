//! Pizza Controller
//!
//! Transport-free request handling. Each operation validates its input, then
//! delegates to [`PizzaService`] and reports a typed outcome. The HTTP layer
//! in `handlers.rs` only translates these outcomes to status codes; it never
//! reimplements any of the checks below.

use super::error::ApiError;
use super::protocol::{pizza_location, CreatedResponse};
use crate::service::pizza_service::PizzaService;
use crate::store::types::{Pizza, PizzaPatch};

use anyhow::anyhow;

/// Request handler for the pizza resource.
#[derive(Clone)]
pub struct PizzaController {
    service: PizzaService,
}

impl PizzaController {
    pub fn new(service: PizzaService) -> Self {
        Self { service }
    }

    /// Rejects identifiers that can never name a record. 0 is reserved by the
    /// store, negatives are malformed; both are bad input regardless of store
    /// contents.
    fn validate_id(id: i64) -> Result<(), ApiError> {
        if id <= 0 {
            return Err(ApiError::BadInput);
        }
        Ok(())
    }

    /// Lists all pizzas. Never fails.
    pub async fn get_all(&self) -> Vec<Pizza> {
        self.service.get_all().await
    }

    /// Fetches one pizza by identifier.
    pub async fn get(&self, id: i64) -> Result<Pizza, ApiError> {
        Self::validate_id(id)?;

        self.service.get(id).await.ok_or(ApiError::NotFound)
    }

    /// Creates a pizza. Any identifier in the payload is ignored; the store
    /// assigns the real one.
    pub async fn create(&self, pizza: Pizza) -> Result<CreatedResponse, ApiError> {
        let stored = self.service.add(pizza).await;
        let location = pizza_location(stored.id);

        Ok(CreatedResponse {
            pizza: stored,
            location,
        })
    }

    /// Full-replaces the pizza at `id` with `pizza`.
    ///
    /// The path/body identifier mismatch check runs before the existence
    /// check: a mismatched request is bad input even when neither identifier
    /// names a live record.
    pub async fn update(&self, id: i64, pizza: Pizza) -> Result<(), ApiError> {
        Self::validate_id(id)?;

        if id != pizza.id {
            return Err(ApiError::BadInput);
        }

        if self.service.get(id).await.is_none() {
            return Err(ApiError::NotFound);
        }

        self.service.update(pizza).await;
        Ok(())
    }

    /// Applies a partial-update document to the pizza at `id`, preserving
    /// every field the document does not mention.
    pub async fn patch(&self, id: i64, updates: PizzaPatch) -> Result<(), ApiError> {
        Self::validate_id(id)?;

        let mut existing = self.service.get(id).await.ok_or(ApiError::NotFound)?;

        updates.apply_to(&mut existing);
        self.service.update(existing).await;
        Ok(())
    }

    /// Deletes the pizza at `id`.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        Self::validate_id(id)?;

        if self.service.get(id).await.is_none() {
            return Err(ApiError::NotFound);
        }

        self.service.delete(id).await;
        Ok(())
    }

    /// Fault-injection hook: always fails with an unhandled error, so the
    /// boundary handler can be exercised end to end. Takes an identifier only
    /// to mirror the shape of [`PizzaController::get`].
    pub async fn error_demo(&self, _id: i64) -> Result<Pizza, ApiError> {
        Err(ApiError::Unhandled(anyhow!(
            "demonstration fault: this operation fails unconditionally"
        )))
    }
}
