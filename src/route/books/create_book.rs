use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    book::Book, error::ApiError, extractor::json::ApiJson, state::ApiState,
    traits::ErrorVerbosityProvider,
};

use super::{BookError, BookErrorType};

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CreateBookResponse {
    pub book: Book,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

/// Creates the book described by the body.
///
/// The `{id}` path segment is not consulted, only the id in the body counts.
pub async fn create_book(
    State(state): State<ApiState>,
    ApiJson(book): ApiJson<Book>,
) -> Result<CreateBookResponse, ApiError> {
    let verbosity = state.error_verbosity();

    if book.id == 0 {
        return Err(BookError::new(verbosity, BookErrorType::MissingId).into());
    }

    let book = state
        .store()
        .insert(book)
        .await
        .map_err(|err| BookError::from_store_error(verbosity, err))?;

    tracing::info!(id = book.id, "Book created");

    Ok(CreateBookResponse { book })
}
