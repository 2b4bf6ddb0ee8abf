pub mod app;
mod create_book;
mod delete_book;
mod error;
mod get_book;
mod list_books;
mod update_book;

pub use error::{BookError, BookErrorType};
