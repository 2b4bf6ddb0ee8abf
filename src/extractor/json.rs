use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Json as AxumJson, Request},
};
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::{
    error::{ApiError, BodyError, ErrorVerbosity, InternalServerError},
    traits::ErrorVerbosityProvider,
};

/// A Wrapper around [`axum::extract::Json`] that rejects with an [`ApiError`].
///
/// Extracts the request body as JSON consuming the request.
/// The `Content-Type` header is not consulted, only the body has to decode.
pub struct ApiJson<T>(pub T);

impl<T> ApiJson<T>
where
    T: JsonSchema,
{
    fn body_error(verbosity: ErrorVerbosity, body_error_reason: String) -> ApiError {
        // The schema is only shown with the reason.
        let body_expected_schema = match verbosity.should_generate_error_reason() {
            true => match serde_yaml::to_string(&schema_for!(T)) {
                Ok(schema) => schema,
                Err(err) => return InternalServerError::from_generic_error(verbosity, err).into(),
            },
            false => String::new(),
        };

        BodyError::new(verbosity, body_error_reason, body_expected_schema).into()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + JsonSchema + Debug + Send,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "json_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        let bytes = Bytes::from_request(req, state).await.map_err(|bytes_rejection| {
            tracing::warn!(rejection=?bytes_rejection, "Rejection");

            Self::body_error(verbosity, bytes_rejection.body_text())
        })?;

        match AxumJson::<T>::from_bytes(&bytes) {
            Ok(json) => {
                tracing::trace!(json=?json.0, "Extracted");

                Ok(ApiJson(json.0))
            }
            Err(json_rejection) => {
                tracing::warn!(rejection=?json_rejection, "Rejection");

                Err(Self::body_error(verbosity, json_rejection.body_text()))
            }
        }
    }
}
