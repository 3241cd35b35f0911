//! Compass API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Endpoint operations are implemented as inherent methods in the
//! [`ops`](crate::ops) modules.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CompassError, ErrorMap, Result};

const USER_AGENT: &str = concat!("compassapi/", env!("CARGO_PKG_VERSION"));

/// Low-level Compass API client.
///
/// Handles authentication and HTTP requests. Endpoint-specific operations
/// live in `impl CompassClient` blocks grouped by API area (resources,
/// folders, trash, projects, markings, roles).
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool. The client is stateless apart from its configuration:
/// no responses are cached and no retries are attempted at this layer.
///
/// # Example
///
/// ```no_run
/// use compassapi::CompassClient;
///
/// # fn example() -> compassapi::Result<()> {
/// // Create from environment variables
/// let client = CompassClient::from_env()?;
///
/// // Or configure manually
/// let client = CompassClient::new("your-token", "https://stack.example.com/compass/api")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CompassClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for CompassClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompassClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Structured error body returned by the Compass API on failures.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub error_code: Option<String>,
    pub error_name: String,
    #[serde(default)]
    pub error_instance_id: Option<String>,
    #[serde(default)]
    pub parameters: Option<serde_json::Value>,
}

impl CompassClient {
    /// Create a client from environment variables.
    ///
    /// Uses `COMPASS_API_TOKEN` for authentication and `COMPASS_API_URL`
    /// for the base URL (e.g. `https://stack.example.com/compass/api`).
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("COMPASS_API_TOKEN").map_err(|_| {
            CompassError::ConfigMissing("COMPASS_API_TOKEN environment variable not set".to_string())
        })?;
        let base_url = env::var("COMPASS_API_URL").map_err(|_| {
            CompassError::ConfigMissing("COMPASS_API_URL environment variable not set".to_string())
        })?;

        Self::new(&token, &base_url)
    }

    /// Create a new client with the provided token and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so joins keep the full prefix
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(CompassError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a request without a body.
    #[tracing::instrument(skip(self, query, user_bearer_token, errors))]
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        user_bearer_token: Option<&str>,
        errors: ErrorMap,
    ) -> Result<Response> {
        let builder = self.builder(method, path, query, user_bearer_token)?;
        let response = builder.send().await.map_err(CompassError::HttpError)?;
        Self::check_response(response, errors).await
    }

    /// Make a request with a JSON body.
    #[tracing::instrument(skip(self, query, body, user_bearer_token, errors))]
    pub(crate) async fn request_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: &B,
        user_bearer_token: Option<&str>,
        errors: ErrorMap,
    ) -> Result<Response> {
        let builder = self.builder(method, path, query, user_bearer_token)?;
        let response = builder
            .json(body)
            .send()
            .await
            .map_err(CompassError::HttpError)?;
        Self::check_response(response, errors).await
    }

    fn builder(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        user_bearer_token: Option<&str>,
    ) -> Result<reqwest::RequestBuilder> {
        let url = self.base_url.join(path)?;

        let mut builder = self.http.request(method, url).bearer_auth(&self.token);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        // Needed for operations touching service project resources.
        if let Some(token) = user_bearer_token {
            builder = builder.header("User-Bearer-Token", format!("Bearer {token}"));
        }
        Ok(builder)
    }

    /// Check response status and convert failures using the operation's
    /// error map.
    async fn check_response(response: Response, errors: ErrorMap) -> Result<Response> {
        if errors.is_passthrough() {
            return Ok(response);
        }

        let status = response.status();

        // Status mappings beat the success shortcut: a mapped 204 is a
        // "not found" signal on lookup endpoints.
        if let Some(kind) = errors.kind_for_status(status.as_u16()) {
            return Err(errors.build(kind));
        }

        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => String::new(),
        };

        if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(&body) {
            if let Some(kind) = errors.kind_for_name(&api_error.error_name) {
                return Err(errors.build(kind));
            }
            return Err(CompassError::ApiError {
                message: match &api_error.error_instance_id {
                    Some(id) => format!("{} (instance {id})", api_error.error_name),
                    None => api_error.error_name.clone(),
                },
                error_name: Some(api_error.error_name),
                status_code: Some(status.as_u16()),
            });
        }

        Err(CompassError::ApiError {
            message: Self::extract_error_message(&body, status),
            error_name: None,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract an error message from an unstructured failure body.
    fn extract_error_message(body: &str, status: reqwest::StatusCode) -> String {
        if body.is_empty() {
            return format!("HTTP {status}");
        }

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        body.to_string()
    }
}
