use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;

use crate::{
    error::{ApiError, InternalServerError},
    state::ApiState,
    traits::ErrorVerbosityProvider,
};

/// Middlware to trace request and response headers.
///
/// If enabled in the state, the response body is traced too. This is very expensive,
/// since it reads the entire response body into memory.
pub async fn trace_exchange(
    State(state): State<ApiState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let incoming_headers = req.headers();
    tracing::trace!(method = %req.method(), uri = %req.uri(), ?incoming_headers, "Request");

    let res = next.run(req).await;
    let (parts, body) = res.into_parts();

    let status = parts.status;
    let outgoing_headers = &parts.headers;

    if !state.trace_response_body() {
        tracing::trace!(%status, ?outgoing_headers, "Response");

        return Ok(Response::from_parts(parts, body));
    }

    let bytes = body
        .collect()
        .await
        .map_err(|err| InternalServerError::from_generic_error(state.error_verbosity(), err))?
        .to_bytes();

    match std::str::from_utf8(&bytes) {
        Ok(body) => tracing::trace!(%status, ?outgoing_headers, %body, "Response"),
        Err(_) => tracing::trace!(%status, ?outgoing_headers, len = bytes.len(), "Response"),
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
