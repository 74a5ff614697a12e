//! In-Memory Pizza Store Module
//!
//! Holds the record collection and assigns identifiers.
//!
//! ## Core Concepts
//! - **Ordering**: Records are kept in insertion order; no other ordering is guaranteed.
//! - **Identifiers**: A monotonic counter assigns unique identifiers. Identifier 0 is
//!   reserved and never assigned; deleted identifiers are never reused.
//! - **Exclusion**: A single lock guards both the collection and the counter, so
//!   concurrent creates can never observe a stale counter.

pub mod memory;
pub mod types;
