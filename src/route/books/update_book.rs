use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    book::{Book, BookId},
    error::ApiError,
    extractor::{json::ApiJson, path::ApiPath},
    state::ApiState,
    traits::ErrorVerbosityProvider,
};

use super::{BookError, BookErrorType};

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UpdateBookResponse {
    pub book: Book,
}

impl IntoResponse for UpdateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Replaces the whole book stored under `id` with the body.
pub async fn update_book(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<BookId>,
    ApiJson(book): ApiJson<Book>,
) -> Result<UpdateBookResponse, ApiError> {
    let verbosity = state.error_verbosity();

    if book.id != id {
        return Err(BookError::new(
            verbosity,
            BookErrorType::IdMismatch {
                path_id: id,
                body_id: book.id,
            },
        )
        .into());
    }

    let book = state
        .store()
        .replace(id, book)
        .await
        .map_err(|err| BookError::from_store_error(verbosity, err))?;

    tracing::info!(id, "Book updated");

    Ok(UpdateBookResponse { book })
}
