use axum::{extract::State, http::Uri};

use crate::{
    error::{ApiError, NotFoundError},
    state::ApiState,
    traits::ErrorVerbosityProvider,
};

pub async fn not_found(State(state): State<ApiState>, uri: Uri) -> ApiError {
    tracing::warn!(%uri, "No route");

    ApiError::NotFound(NotFoundError::new(state.error_verbosity(), uri.path()))
}
