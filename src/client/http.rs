//! Pizza API HTTP Client
//!
//! Thin reqwest wrapper over the server's endpoints. Each method issues one
//! request and translates the response status back into the API's outcome
//! taxonomy.

use crate::api::protocol::{pizza_location, CreatedResponse, ENDPOINT_PIZZAS};
use crate::store::types::{Pizza, PizzaPatch};

use reqwest::StatusCode;
use thiserror::Error;

/// Failures a client call can produce.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the input (HTTP 400).
    #[error("server rejected the request as bad input")]
    BadRequest,

    /// No record with the requested identifier (HTTP 404).
    #[error("resource not found")]
    NotFound,

    /// The server answered with a status the API contract does not define.
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),

    /// Transport-level failure (connection, serialization).
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Maps a response status to the typed outcome, treating `ok` as success.
pub(crate) fn check_status(status: StatusCode, ok: StatusCode) -> Result<(), ClientError> {
    if status == ok {
        return Ok(());
    }
    match status {
        StatusCode::BAD_REQUEST => Err(ClientError::BadRequest),
        StatusCode::NOT_FOUND => Err(ClientError::NotFound),
        other => Err(ClientError::Unexpected(other)),
    }
}

/// Client for one pizza API server.
#[derive(Clone)]
pub struct PizzaClient {
    base_url: String,
    http: reqwest::Client,
}

impl PizzaClient {
    /// Creates a client for the server at `base_url`, e.g.
    /// `http://localhost:8080`. A trailing slash is tolerated.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL this client targets, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, ENDPOINT_PIZZAS)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}{}", self.base_url, pizza_location(id))
    }

    /// Fetches all pizzas.
    pub async fn get_all(&self) -> Result<Vec<Pizza>, ClientError> {
        let resp = self.http.get(self.collection_url()).send().await?;
        check_status(resp.status(), StatusCode::OK)?;
        Ok(resp.json().await?)
    }

    /// Fetches one pizza by identifier.
    pub async fn get(&self, id: i64) -> Result<Pizza, ClientError> {
        let resp = self.http.get(self.record_url(id)).send().await?;
        check_status(resp.status(), StatusCode::OK)?;
        Ok(resp.json().await?)
    }

    /// Creates a pizza; the identifier in `pizza` is ignored by the server.
    /// Returns the stored record and its location reference.
    pub async fn create(&self, pizza: &Pizza) -> Result<CreatedResponse, ClientError> {
        let resp = self
            .http
            .post(self.collection_url())
            .json(pizza)
            .send()
            .await?;
        check_status(resp.status(), StatusCode::CREATED)?;
        Ok(resp.json().await?)
    }

    /// Full-replaces the pizza at `id`. `pizza.id` must match `id` or the
    /// server answers 400.
    pub async fn update(&self, id: i64, pizza: &Pizza) -> Result<(), ClientError> {
        let resp = self.http.put(self.record_url(id)).json(pizza).send().await?;
        check_status(resp.status(), StatusCode::NO_CONTENT)
    }

    /// Applies a partial-update document to the pizza at `id`.
    pub async fn patch(&self, id: i64, updates: &PizzaPatch) -> Result<(), ClientError> {
        let resp = self
            .http
            .patch(self.record_url(id))
            .json(updates)
            .send()
            .await?;
        check_status(resp.status(), StatusCode::NO_CONTENT)
    }

    /// Deletes the pizza at `id`.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let resp = self.http.delete(self.record_url(id)).send().await?;
        check_status(resp.status(), StatusCode::NO_CONTENT)
    }
}
