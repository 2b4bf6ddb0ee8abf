use std::borrow::Cow;

use axum::{
    extract::rejection::PathRejection,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use derive_more::From;
use serde::Deserialize;

use crate::route::books::BookError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ErrorVerbosity {
    /// Server returns only the appropriate status code with an empty body.
    StatusCode,
    /// Server returns a short plain text message with the appropriate status code.
    #[default]
    Message,
    /// Server returns the message followed by the reason of the error.
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

#[derive(Debug, From)]
/// API error
pub enum ApiError {
    /// Internal server error
    ///
    /// This error is returned when an internal server error occurs.
    InternalServerError(InternalServerError),
    /// Body error
    ///
    /// This error is returned when the body is not a valid book.
    Body(BodyError),
    /// Path error
    ///
    /// This error is returned when the id segment of the path is not an integer.
    Path(PathError),
    /// Method not allowed
    ///
    /// This error is returned when the method is not allowed on the route.
    MethodNotAllowed(MethodNotAllowedError),
    /// Not found error
    ///
    /// This error is returned when no route matches the request.
    NotFound(NotFoundError),
    /// Book error
    ///
    /// This error is returned when the request is well formed but the books collection refuses it.
    Book(BookError),
}

impl ApiError {
    fn verbosity(&self) -> ErrorVerbosity {
        match self {
            ApiError::InternalServerError(err) => err.verbosity,
            ApiError::Body(err) => err.verbosity,
            ApiError::Path(err) => err.verbosity,
            ApiError::MethodNotAllowed(err) => err.verbosity,
            ApiError::NotFound(err) => err.verbosity,
            ApiError::Book(err) => err.verbosity(),
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::InternalServerError(_) => "An internal server error has occurred",
            ApiError::Body(_) => "Invalid input",
            ApiError::Path(_) => "Invalid book ID",
            ApiError::MethodNotAllowed(_) => "Unsupported method",
            ApiError::NotFound(_) => "The requested resource was not found",
            ApiError::Book(err) => err.message(),
        }
    }

    fn reason(&self) -> Option<Cow<'_, str>> {
        match self {
            ApiError::InternalServerError(err) => {
                err.internal_server_error.as_deref().map(Cow::Borrowed)
            }
            ApiError::Body(err) => err.reason(),
            ApiError::Path(err) => err.path_error_reason.as_deref().map(Cow::Borrowed),
            ApiError::MethodNotAllowed(err) => err.reason(),
            ApiError::NotFound(err) => err.not_found_reason.as_deref().map(Cow::Borrowed),
            ApiError::Book(err) => err.reason(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(err) => err.status_code(),
            ApiError::Body(err) => err.status_code(),
            ApiError::Path(err) => err.status_code(),
            ApiError::MethodNotAllowed(err) => err.status_code(),
            ApiError::NotFound(err) => err.status_code(),
            ApiError::Book(err) => err.status_code(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let ApiError::MethodNotAllowed(MethodNotAllowedError {
            allow: Some(allow),
            ..
        }) = self
        {
            headers.insert(header::ALLOW, allow.clone());
        }

        headers
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let headers = self.headers();

        match self.verbosity() {
            ErrorVerbosity::StatusCode => (status_code, headers).into_response(),
            ErrorVerbosity::Message => (status_code, headers, self.message()).into_response(),
            ErrorVerbosity::Full => {
                let body = match self.reason() {
                    Some(reason) => format!("{}\n\n{reason}", self.message()),
                    None => self.message().to_string(),
                };

                (status_code, headers, body).into_response()
            }
        }
    }
}

#[derive(Debug)]
pub struct InternalServerError {
    verbosity: ErrorVerbosity,
    internal_server_error: Option<String>,
}

impl InternalServerError {
    pub fn from_generic_error<E: Into<anyhow::Error>>(verbosity: ErrorVerbosity, err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        let internal_server_error = verbosity.should_generate_error_reason().then_some(err);

        InternalServerError {
            verbosity,
            internal_server_error,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Debug)]
pub struct BodyError {
    verbosity: ErrorVerbosity,
    body_error_reason: Option<String>,
    body_expected_schema: Option<String>,
}

impl BodyError {
    pub fn new(
        verbosity: ErrorVerbosity,
        body_error_reason: String,
        body_expected_schema: String,
    ) -> Self {
        let (body_error_reason, body_expected_schema) =
            match verbosity.should_generate_error_reason() {
                true => (Some(body_error_reason), Some(body_expected_schema)),
                false => (None, None),
            };

        BodyError {
            verbosity,
            body_error_reason,
            body_expected_schema,
        }
    }

    fn reason(&self) -> Option<Cow<'_, str>> {
        match (&self.body_error_reason, &self.body_expected_schema) {
            (Some(reason), Some(schema)) => Some(Cow::Owned(format!(
                "{reason}\n\nExpected schema:\n{schema}"
            ))),
            (Some(reason), None) => Some(Cow::Borrowed(reason.as_str())),
            _ => None,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug)]
pub struct PathError {
    verbosity: ErrorVerbosity,
    path_error_reason: Option<String>,
}

impl PathError {
    pub fn new(verbosity: ErrorVerbosity, path_error_reason: String) -> Self {
        let path_error_reason = verbosity
            .should_generate_error_reason()
            .then_some(path_error_reason);

        PathError {
            verbosity,
            path_error_reason,
        }
    }

    pub fn from_path_rejection(verbosity: ErrorVerbosity, path_rejection: PathRejection) -> Self {
        Self::new(verbosity, path_rejection.body_text())
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug)]
pub struct MethodNotAllowedError {
    verbosity: ErrorVerbosity,
    allow: Option<HeaderValue>,
}

impl MethodNotAllowedError {
    pub fn new(verbosity: ErrorVerbosity, allow: Option<HeaderValue>) -> Self {
        MethodNotAllowedError { verbosity, allow }
    }

    fn reason(&self) -> Option<Cow<'_, str>> {
        let allow = self.allow.as_ref()?.to_str().ok()?;

        Some(Cow::Owned(format!("Allowed methods: {allow}")))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::METHOD_NOT_ALLOWED
    }
}

#[derive(Debug)]
pub struct NotFoundError {
    verbosity: ErrorVerbosity,
    not_found_reason: Option<String>,
}

impl NotFoundError {
    pub fn new(verbosity: ErrorVerbosity, path: &str) -> Self {
        let not_found_reason = verbosity
            .should_generate_error_reason()
            .then(|| format!("No route matches `{path}`"));

        NotFoundError {
            verbosity,
            not_found_reason,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn message_verbosity_renders_plain_text_message() {
        let response = ApiError::from(PathError::new(
            ErrorVerbosity::Message,
            "invalid digit found in string".to_string(),
        ))
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_text(response).await, "Invalid book ID");
    }

    #[tokio::test]
    async fn status_code_verbosity_renders_empty_body() {
        let response = ApiError::from(NotFoundError::new(ErrorVerbosity::StatusCode, "/nowhere"))
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn full_verbosity_appends_reason() {
        let response = ApiError::from(BodyError::new(
            ErrorVerbosity::Full,
            "EOF while parsing".to_string(),
            "type: object".to_string(),
        ))
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_text(response).await;
        assert!(body.starts_with("Invalid input\n\nEOF while parsing"));
        assert!(body.ends_with("Expected schema:\ntype: object"));
    }

    #[tokio::test]
    async fn reasons_are_dropped_below_full_verbosity() {
        let error = InternalServerError::from_generic_error(
            ErrorVerbosity::Message,
            anyhow::anyhow!("secret detail"),
        );

        assert!(error.internal_server_error.is_none());

        let response = ApiError::from(error).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response).await,
            "An internal server error has occurred"
        );
    }

    #[tokio::test]
    async fn method_not_allowed_keeps_allow_header() {
        let response = ApiError::from(MethodNotAllowedError::new(
            ErrorVerbosity::Full,
            Some(HeaderValue::from_static("GET,HEAD")),
        ))
        .into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET,HEAD");
        assert_eq!(
            body_text(response).await,
            "Unsupported method\n\nAllowed methods: GET,HEAD"
        );
    }
}
