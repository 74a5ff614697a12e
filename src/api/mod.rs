//! Pizza API Module
//!
//! Request handling for the pizza resource.
//!
//! ## Core Concepts
//! - **Controller**: Transport-free request handling. Validates identifiers and
//!   payloads, delegates to the service, and returns typed outcomes.
//! - **Outcomes**: `BadInput` and `NotFound` are expected results, not
//!   exceptional control flow; `Unhandled` propagates to the boundary.
//! - **Handlers**: axum wiring that translates controller outcomes to HTTP
//!   status codes (200, 201, 204, 400, 404, 500).

pub mod controller;
pub mod error;
pub mod handlers;
pub mod protocol;

#[cfg(test)]
mod tests;
