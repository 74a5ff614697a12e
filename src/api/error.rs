//! API Error Taxonomy
//!
//! Three outcomes cover every failure the API can produce. `BadInput` and
//! `NotFound` flow back to the caller as ordinary values; `Unhandled` carries
//! an arbitrary failure to the boundary handler, which logs it and answers
//! with a generic problem document so internals never leak.

use thiserror::Error;

/// Failure outcomes of a controller operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid input: a non-positive identifier, or a path/body
    /// identifier mismatch on update.
    #[error("invalid input")]
    BadInput,

    /// No record exists with the given identifier.
    #[error("resource not found")]
    NotFound,

    /// Any other failure. Not recovered locally; the transport boundary logs
    /// it and returns a generic problem response.
    #[error("unhandled failure: {0}")]
    Unhandled(#[from] anyhow::Error),
}

impl ApiError {
    /// True for the outcomes callers are expected to handle (mapped to 4xx).
    pub fn is_expected(&self) -> bool {
        matches!(self, ApiError::BadInput | ApiError::NotFound)
    }
}
