use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::IntoResponse,
};

use crate::{
    error::{ApiError, MethodNotAllowedError},
    traits::ErrorVerbosityProvider,
};

/// Middleware to map axum's bare `405 Method Not Allowed` to our [`ApiError`].
///
/// The `Allow` header set by the router is carried over.
pub async fn method_not_allowed<S: ErrorVerbosityProvider>(
    State(state): State<S>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let method = req.method().clone();
    let resp = next.run(req).await;

    match resp.status() {
        StatusCode::METHOD_NOT_ALLOWED => {
            tracing::warn!(%method, "Method not allowed");

            let allow = resp.headers().get(header::ALLOW).cloned();

            Err(MethodNotAllowedError::new(state.error_verbosity(), allow).into())
        }
        _ => Ok(resp),
    }
}

/// Handler for `HEAD` on routes that only serve `GET`, `POST`, `PUT` and `DELETE`.
///
/// The resulting 405 passes through [`method_not_allowed`] like the router's own.
pub async fn reject_head<S: ErrorVerbosityProvider>(State(state): State<S>) -> ApiError {
    let allow = HeaderValue::from_static("GET,POST,PUT,DELETE");

    MethodNotAllowedError::new(state.error_verbosity(), Some(allow)).into()
}
