//! HTTP transport - maps REST requests onto the rating store.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /`, `GET /shoes` - all records as a JSON array.
//! - `POST /shoes` - body `{"shoe": "...", "trueToSizeVal": 1..=5}`; resolves
//!   the shoe by name (creating it if needed), appends the rating and returns
//!   the updated record with `201`.
//! - `GET /shoes/:id` - one record.
//! - `DELETE /shoes/:id` - remove a record, `{"result": "success"}`.
//!
//! Errors are `{"error": "...", "result": "error"}` with 400 for unparseable
//! input, 404 for unknown shoes, 422 for invalid values and 500 for storage
//! failures.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fitscore::{http, ShoeStore};
//!
//! let store = Arc::new(ShoeStore::in_memory());
//! http::serve(store, "0.0.0.0:8080").await?;
//! ```

mod payload;

pub use payload::{RatingPayload, ValidRating};

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::error::StoreError;
use crate::model::ShoeId;
use crate::store::ShoeRepository;

/// Build an axum `Router` over the given repository.
pub fn router<R: ShoeRepository + 'static>(repo: Arc<R>) -> Router {
    Router::new()
        .route("/", get(list_shoes::<R>))
        .route("/shoes", get(list_shoes::<R>).post(add_rating::<R>))
        .route("/shoes/:id", get(get_shoe::<R>).delete(delete_shoe::<R>))
        .with_state(repo)
}

/// Serve the repository over HTTP at the given address (e.g. `"0.0.0.0:8080"`).
pub async fn serve<R: ShoeRepository + 'static>(
    repo: Arc<R>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "fit score service listening");
    axum::serve(listener, router(repo)).await
}

/// `GET /shoes`
async fn list_shoes<R: ShoeRepository + 'static>(State(repo): State<Arc<R>>) -> Response {
    match blocking(repo, |repo| repo.list()).await {
        Ok(shoes) => (StatusCode::OK, Json(shoes)).into_response(),
        Err(err) => store_error(err),
    }
}

/// `GET /shoes/:id`
async fn get_shoe<R: ShoeRepository + 'static>(
    State(repo): State<Arc<R>>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match blocking(repo, move |repo| repo.get(id)).await {
        Ok(shoe) => (StatusCode::OK, Json(shoe)).into_response(),
        Err(err) => store_error(err),
    }
}

/// `POST /shoes`
async fn add_rating<R: ShoeRepository + 'static>(
    State(repo): State<Arc<R>>,
    body: Bytes,
) -> Response {
    let payload: RatingPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => return respond_error(StatusCode::BAD_REQUEST, "Invalid request payload"),
    };
    let rating = match payload.validate() {
        Ok(rating) => rating,
        Err(message) => return respond_error(StatusCode::UNPROCESSABLE_ENTITY, message),
    };

    match blocking(repo, move |repo| repo.rate(&rating.shoe, rating.value)).await {
        Ok(shoe) => (StatusCode::CREATED, Json(shoe)).into_response(),
        Err(err) => store_error(err),
    }
}

/// `DELETE /shoes/:id`
async fn delete_shoe<R: ShoeRepository + 'static>(
    State(repo): State<Arc<R>>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match blocking(repo, move |repo| repo.delete(id)).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "result": "success" }))).into_response(),
        Err(err) => store_error(err),
    }
}

/// Store calls may wait on record locks, so they run off the async workers.
async fn blocking<R, T, F>(repo: Arc<R>, op: F) -> Result<T, StoreError>
where
    R: ShoeRepository + 'static,
    T: Send + 'static,
    F: FnOnce(&R) -> Result<T, StoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || op(repo.as_ref()))
        .await
        .map_err(|e| StoreError::storage(format!("store task failed: {}", e)))?
}

fn parse_id(raw: &str) -> Result<ShoeId, Response> {
    raw.parse::<u64>()
        .map(ShoeId::new)
        .map_err(|_| respond_error(StatusCode::BAD_REQUEST, "Invalid shoe ID"))
}

fn store_error(err: StoreError) -> Response {
    match &err {
        StoreError::NotFound(_) => respond_error(StatusCode::NOT_FOUND, "Shoe not found"),
        StoreError::InvalidRating(_) | StoreError::InvalidName(_) => {
            respond_error(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        StoreError::StorageFailure(_) => {
            tracing::error!(error = %err, "request failed");
            respond_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

fn respond_error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = json!({ "error": message.into(), "result": "error" });
    (status, Json(body)).into_response()
}
