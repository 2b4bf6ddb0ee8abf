use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    book::BookId, error::ApiError, extractor::path::ApiPath, state::ApiState,
    traits::ErrorVerbosityProvider,
};

use super::BookError;

pub struct DeleteBookResponse;

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

pub async fn delete_book(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<BookId>,
) -> Result<DeleteBookResponse, ApiError> {
    state
        .store()
        .remove(id)
        .await
        .map_err(|err| BookError::from_store_error(state.error_verbosity(), err))?;

    tracing::info!(id, "Book deleted");

    Ok(DeleteBookResponse)
}
