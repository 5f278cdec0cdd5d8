//! HTTP client wrapper with an ordered interceptor pipeline.
//!
//! DESIGN
//! ======
//! Request interceptors transform each outgoing `RequestBuilder` in order
//! (the bearer token is one). Response interceptors observe every failure in
//! order (error dispatch is one) and the failure is then returned unchanged.
//! Successful responses bypass the response interceptors. There are no
//! retries; the only deadline is the client-wide request timeout, and a
//! timeout fails like any other transport error.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;

// =============================================================================
// INTERCEPTORS
// =============================================================================

/// Transforms a request before it is sent.
pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Observes a failed call before the failure reaches the caller.
pub trait ResponseInterceptor: Send + Sync {
    fn on_error(&self, error: &ApiError);
}

/// Attaches `Authorization: Bearer <token>` while a session is active.
#[derive(Clone, Debug)]
pub struct BearerAuth {
    auth: AuthState,
}

impl BearerAuth {
    #[must_use]
    pub fn new(auth: AuthState) -> Self {
        Self { auth }
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Build a client with no interceptors.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    #[must_use]
    pub fn with_response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request for an API path such as `/board/free/1`.
    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Run the request interceptors and build the final request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the request cannot be built. The
    /// error has not been through the response interceptors yet.
    pub fn prepare(&self, request: RequestBuilder) -> Result<reqwest::Request, ApiError> {
        let request = self
            .request_interceptors
            .iter()
            .fold(request, |request, interceptor| interceptor.on_request(request));
        Ok(request.build()?)
    }

    /// Send a request through the pipeline. Non-success statuses are errors.
    ///
    /// # Errors
    ///
    /// Returns the build, transport or status failure after every response
    /// interceptor has observed it.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = self.prepare(request).map_err(|e| self.fail(e))?;
        tracing::debug!(method = %request.method(), url = %request.url(), "api request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| self.fail(ApiError::Transport(e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // An unreadable error body is treated like a missing one.
        let bytes = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        Err(self.fail(ApiError::from_status(status.as_u16(), &bytes)))
    }

    /// Send and decode a JSON response body.
    ///
    /// # Errors
    ///
    /// Pipeline failures as in [`ApiClient::send`]; decode failures of a
    /// successful body are returned without dispatch.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let bytes = self.send_bytes(request).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send and discard the response body.
    ///
    /// # Errors
    ///
    /// Pipeline failures as in [`ApiClient::send`].
    pub async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(request).await?;
        Ok(())
    }

    /// Send and return the raw response body.
    ///
    /// # Errors
    ///
    /// Pipeline failures as in [`ApiClient::send`], or a transport error
    /// while reading the body. Both are observed by the response interceptors.
    pub async fn send_bytes(&self, request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await.map_err(|e| self.fail(ApiError::Transport(e)))?;
        Ok(bytes.to_vec())
    }

    fn fail(&self, error: ApiError) -> ApiError {
        tracing::warn!(
            status = error.status(),
            code = error.error_code().unwrap_or("-"),
            error = %error,
            "api request failed"
        );
        for interceptor in &self.response_interceptors {
            interceptor.on_error(&error);
        }
        error
    }
}
