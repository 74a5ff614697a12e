//! HTTP Handlers
//!
//! axum wiring around [`PizzaController`]. Each handler extracts the request
//! pieces, calls the matching controller operation, and maps the outcome to a
//! status code: success 200, created 201, no-content 204, bad input 400, not
//! found 404, unhandled 500.

use super::controller::PizzaController;
use super::error::ApiError;
use super::protocol::{CreatedResponse, ProblemResponse, ENDPOINT_ERROR_DEMO, ENDPOINT_PIZZAS};
use crate::store::types::{Pizza, PizzaPatch};

use axum::extract::{Extension, Path};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadInput => StatusCode::BAD_REQUEST.into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Unhandled(source) => {
                // Boundary handler: log the real failure, answer generically.
                tracing::error!("Unhandled API failure: {:#}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ProblemResponse::internal()),
                )
                    .into_response()
            }
        }
    }
}

/// Builds the full API router over a shared controller.
pub fn router(controller: Arc<PizzaController>) -> Router {
    Router::new()
        .route(ENDPOINT_PIZZAS, get(handle_get_all).post(handle_create))
        .route(
            &format!("{}/:id", ENDPOINT_PIZZAS),
            get(handle_get)
                .put(handle_update)
                .patch(handle_patch)
                .delete(handle_delete),
        )
        .route(&format!("{}/:id", ENDPOINT_ERROR_DEMO), get(handle_error_demo))
        .layer(Extension(controller))
}

pub async fn handle_get_all(
    Extension(controller): Extension<Arc<PizzaController>>,
) -> Json<Vec<Pizza>> {
    Json(controller.get_all().await)
}

pub async fn handle_get(
    Extension(controller): Extension<Arc<PizzaController>>,
    Path(id): Path<i64>,
) -> Result<Json<Pizza>, ApiError> {
    let pizza = controller.get(id).await?;
    Ok(Json(pizza))
}

pub async fn handle_create(
    Extension(controller): Extension<Arc<PizzaController>>,
    Json(pizza): Json<Pizza>,
) -> Result<Response, ApiError> {
    let created: CreatedResponse = controller.create(pizza).await?;

    tracing::debug!("Created pizza {} at {}", created.pizza.id, created.location);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created.location.clone())],
        Json(created),
    )
        .into_response())
}

pub async fn handle_update(
    Extension(controller): Extension<Arc<PizzaController>>,
    Path(id): Path<i64>,
    Json(pizza): Json<Pizza>,
) -> Result<StatusCode, ApiError> {
    controller.update(id, pizza).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_patch(
    Extension(controller): Extension<Arc<PizzaController>>,
    Path(id): Path<i64>,
    Json(updates): Json<PizzaPatch>,
) -> Result<StatusCode, ApiError> {
    controller.patch(id, updates).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_delete(
    Extension(controller): Extension<Arc<PizzaController>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_error_demo(
    Extension(controller): Extension<Arc<PizzaController>>,
    Path(id): Path<i64>,
) -> Result<Json<Pizza>, ApiError> {
    let pizza = controller.error_demo(id).await?;
    Ok(Json(pizza))
}
