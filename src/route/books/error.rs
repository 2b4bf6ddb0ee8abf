use std::borrow::Cow;

use axum::http::StatusCode;

use crate::{
    book::BookId,
    error::{ApiError, ErrorVerbosity},
    store::StoreError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookErrorType {
    NotFound { id: BookId },
    AlreadyExists { id: BookId },
    MissingId,
    IdMismatch { path_id: BookId, body_id: BookId },
}

impl BookErrorType {
    fn status_code(&self) -> StatusCode {
        match self {
            BookErrorType::NotFound { .. } => StatusCode::NOT_FOUND,
            BookErrorType::AlreadyExists { .. } => StatusCode::CONFLICT,
            BookErrorType::MissingId => StatusCode::BAD_REQUEST,
            BookErrorType::IdMismatch { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            BookErrorType::NotFound { .. } => "Book not found",
            BookErrorType::AlreadyExists { .. } => "Book already exists",
            BookErrorType::MissingId => "Book id is required",
            BookErrorType::IdMismatch { .. } => "Book id in the URL must match the id in the body",
        }
    }

    fn reason(&self) -> Cow<'static, str> {
        match self {
            BookErrorType::NotFound { id } => Cow::Owned(format!("Book with id {id} not found")),
            BookErrorType::AlreadyExists { id } => {
                Cow::Owned(format!("Book with id {id} already exists"))
            }
            BookErrorType::MissingId => Cow::Borrowed("`id` must be present and non-zero"),
            BookErrorType::IdMismatch { path_id, body_id } => Cow::Owned(format!(
                "Path id {path_id} does not match body id {body_id}"
            )),
        }
    }
}

impl From<StoreError> for BookErrorType {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => BookErrorType::NotFound { id },
            StoreError::AlreadyExists(id) => BookErrorType::AlreadyExists { id },
        }
    }
}

/// Error returned by the books routes once the request itself was parsed.
#[derive(Debug)]
pub struct BookError {
    verbosity: ErrorVerbosity,
    book_error_type: BookErrorType,
    book_error_reason: Option<Cow<'static, str>>,
}

impl BookError {
    pub fn new(verbosity: ErrorVerbosity, book_error_type: BookErrorType) -> Self {
        tracing::warn!(?book_error_type, "Rejected");

        let book_error_reason = verbosity
            .should_generate_error_reason()
            .then(|| book_error_type.reason());

        BookError {
            verbosity,
            book_error_type,
            book_error_reason,
        }
    }

    pub fn from_store_error(verbosity: ErrorVerbosity, err: StoreError) -> ApiError {
        Self::new(verbosity, err.into()).into()
    }

    pub(crate) fn verbosity(&self) -> ErrorVerbosity {
        self.verbosity
    }

    pub(crate) fn message(&self) -> &'static str {
        self.book_error_type.message()
    }

    pub(crate) fn reason(&self) -> Option<Cow<'_, str>> {
        self.book_error_reason.as_deref().map(Cow::Borrowed)
    }

    pub(crate) fn status_code(&self) -> StatusCode {
        self.book_error_type.status_code()
    }
}
