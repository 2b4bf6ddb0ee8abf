use std::{ops::Deref, sync::Arc};

use crate::{error::ErrorVerbosity, store::BookStore, traits::ErrorVerbosityProvider};

/// Shared application state, cloned into every handler.
///
/// Owns the [`BookStore`] for the lifetime of the server.
#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity, store: BookStore) -> Self {
        Self::with_response_body_tracing(error_verbosity, false, store)
    }

    pub fn with_response_body_tracing(
        error_verbosity: ErrorVerbosity,
        trace_response_body: bool,
        store: BookStore,
    ) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                trace_response_body,
                store,
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    trace_response_body: bool,
    store: BookStore,
}

impl ApiStateInner {
    pub fn store(&self) -> &BookStore {
        &self.store
    }

    pub fn trace_response_body(&self) -> bool {
        self.trace_response_body
    }
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}
