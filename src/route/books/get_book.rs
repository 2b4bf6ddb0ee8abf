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
    extractor::path::ApiPath,
    state::ApiState,
    traits::ErrorVerbosityProvider,
};

use super::BookError;

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetBookResponse {
    pub book: Book,
}

impl IntoResponse for GetBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn get_book(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<BookId>,
) -> Result<GetBookResponse, ApiError> {
    let book = state
        .store()
        .get(id)
        .await
        .map_err(|err| BookError::from_store_error(state.error_verbosity(), err))?;

    Ok(GetBookResponse { book })
}
