//! HTTP client for the storefront backend.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

/// Configuration for connecting to the backend API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL, e.g. `"https://shop.example.com/api"`.
    pub base_url: String,

    /// Bearer token, when the deployment requires one.
    pub token: Option<String>,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// JSON client with the backend's status-code conventions baked in.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    /// GET `path` and decode a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path));

        Self::decode(self.authorized(request).send().await?).await
    }

    /// POST a JSON `body` to `path` and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.http.post(self.url(path)).json(body);

        Self::decode(self.authorized(request).send().await?).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map the backend's status conventions onto the error taxonomy:
    /// 404 is a missing resource, any other 4xx is a rejection carrying the
    /// server's message, everything else non-2xx is unexpected.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);

        if status.is_client_error() {
            return Err(ApiError::Rejected(message));
        }

        Err(ApiError::Unexpected(format!(
            "request failed with status {status}: {message}"
        )))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Errors that can occur when calling the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The resource does not exist (404).
    #[error("resource not found")]
    NotFound,

    /// The backend rejected the request (other 4xx) with a message.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-2xx response outside the 4xx conventions.
    #[error("unexpected response: {0}")]
    Unexpected(String),
}
