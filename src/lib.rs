//! Pizza Web API Library
//!
//! This library crate defines the core modules of a small CRUD web API for
//! pizza records, backed by an in-memory store. It serves as the foundation
//! for the server binary (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`store`**: The in-memory state layer. Owns the ordered pizza collection
//!   and the monotonic identifier counter, guarded by a single lock so that
//!   concurrent requests never observe a stale counter.
//! - **`service`**: The service layer. A thin pass-through over the store that
//!   decouples the request layer from the storage representation.
//! - **`api`**: The request handling layer. Validates input, delegates to the
//!   service, and maps results to a small outcome taxonomy which the axum
//!   transport translates to HTTP status codes.
//! - **`client`**: An HTTP client wrapper over the API surface, for consumers
//!   that want typed access to a running server.

pub mod api;
pub mod client;
pub mod service;
pub mod store;
