//! Pizza API Client Module
//!
//! A typed HTTP wrapper over the pizza API for external consumers. Mirrors
//! the server's outcome taxonomy: 400 and 404 come back as typed errors, any
//! other non-success status is reported as unexpected.

pub mod http;
