use axum::{
    routing::{any, get},
    Router,
};

use crate::{middleware::method_not_allowed::reject_head, state::ApiState};

pub fn app() -> Router<ApiState> {
    // `HEAD` is rejected explicitly, otherwise axum answers it with the `GET` handler.
    let book = get(super::get_book::get_book)
        .post(super::create_book::create_book)
        .put(super::update_book::update_book)
        .delete(super::delete_book::delete_book)
        .head(reject_head::<ApiState>);

    // `/*id` does not match an empty segment, `/books/` is registered on its own
    // so that an empty id is rejected like any other unparseable one.
    Router::<ApiState>::new()
        .route("/books", any(super::list_books::list_books))
        .route("/books/", book.clone())
        .route("/books/*id", book)
}
