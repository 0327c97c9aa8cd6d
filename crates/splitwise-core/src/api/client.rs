//! API client for communicating with the Splitwise REST API.
//!
//! This module provides the `SplitwiseClient` struct and the request
//! plumbing shared by the category and expense operations.

use std::sync::Arc;

use reqwest::{header, Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::AuthProvider;
use crate::config::ClientConfig;

use super::{ApiError, ApiResult};

/// API client for Splitwise.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling,
/// and the auth provider is shared.
///
/// Operations hold no per-call state, so one client can serve many
/// concurrent callers. Dropping an operation's future aborts its request.
#[derive(Clone)]
pub struct SplitwiseClient {
    client: Client,
    base_url: String,
    auth: Arc<dyn AuthProvider>,
}

impl SplitwiseClient {
    /// Create a client for the production API
    pub fn new(auth: impl AuthProvider + 'static) -> ApiResult<Self> {
        Self::with_config(ClientConfig::default(), auth)
    }

    pub fn with_config(config: ClientConfig, auth: impl AuthProvider + 'static) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth: Arc::new(auth),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authorize and send a request to `path` on the configured host.
    ///
    /// The token is fetched first; if that fails nothing is sent.
    pub(crate) async fn send(&self, method: Method, path: &str, json_body: Option<Vec<u8>>) -> ApiResult<Response> {
        let token = self.auth.token()?;
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self.client.request(method.clone(), &url).bearer_auth(token);
        if let Some(body) = json_body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }
        let request = builder.build().map_err(ApiError::Request)?;

        debug!(method = %method, url = %url, "Sending request");
        let response = self
            .client
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;
        debug!(status = %response.status(), url = %url, "Response received");

        Ok(response)
    }

    /// Reject anything but 200 without reading the body.
    pub(crate) fn check_response(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status == StatusCode::OK {
            Ok(response)
        } else {
            Err(ApiError::from_status(status))
        }
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let bytes = response.bytes().await.map_err(ApiError::Transport)?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }
}
