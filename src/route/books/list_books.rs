use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    book::{Book, BookId},
    state::ApiState,
};

/// All books keyed by their id, serialized as a JSON object.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListBooksResponse {
    pub books: BTreeMap<BookId, Book>,
}

impl IntoResponse for ListBooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn list_books(State(state): State<ApiState>) -> ListBooksResponse {
    let books = state
        .store()
        .list_all()
        .await
        .into_iter()
        .map(|book| (book.id, book))
        .collect();

    ListBooksResponse { books }
}
