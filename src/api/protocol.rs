//! API Wire Protocol
//!
//! Defines the endpoints and Data Transfer Objects of the pizza API.
//!
//! These structures are serialized via JSON and exchanged over HTTP between
//! the server and clients (including the bundled [`crate::client`] wrapper).

use crate::store::types::Pizza;

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint (list, create).
pub const ENDPOINT_PIZZAS: &str = "/pizzas";
/// Fault-injection endpoint; always fails, exercising the boundary handler.
pub const ENDPOINT_ERROR_DEMO: &str = "/errorDemo";

/// Builds the location reference for a pizza, of the form `/pizzas/{id}`.
pub fn pizza_location(id: i64) -> String {
    format!("{}/{}", ENDPOINT_PIZZAS, id)
}

// --- Data Transfer Objects ---

/// Response to a successful create.
///
/// Carries the stored record (with its assigned identifier) and a location
/// reference usable to re-fetch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// The record as stored, identifier included.
    pub pizza: Pizza,
    /// Path of the new resource, `/pizzas/{id}`.
    pub location: String,
}

/// Generic problem document returned for unhandled failures.
///
/// Deliberately content-free: the real error is logged server-side and never
/// leaves the process.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProblemResponse {
    /// Short human-readable summary.
    pub title: String,
    /// HTTP status code mirrored into the body.
    pub status: u16,
}

impl ProblemResponse {
    /// The one problem document the API ever returns.
    pub fn internal() -> Self {
        Self {
            title: "An unexpected error occurred while processing the request".to_string(),
            status: 500,
        }
    }
}
