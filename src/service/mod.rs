//! Pizza Service Module
//!
//! The service layer between request handling and storage. It adds no
//! invariants of its own; it exists so the request layer never touches the
//! storage representation directly, which keeps a later swap to a real
//! database behind one seam.

pub mod pizza_service;
