//! HTTP request wrapper
//!
//! [`HttpClient`] issues a single GET or POST and folds every outcome into a
//! [`RequestResult`]. Nothing is retried and nothing escapes as an error:
//!
//! - 2xx response: `{status: <code>, data: <body>}`
//! - non-2xx response: `{status: <code>, data: <body>}`, reported to the sink
//! - no response: `{status: <error identifier>, data: ""}`, reported to the sink

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::config::HttpClientConfig;
use crate::diagnostics::{DiagnosticSink, RequestFailure, TracingSink};
use crate::error_code;
use crate::result::{body_to_data, RequestResult, Status};
use crate::{NetworkError, Result};

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client returning normalized results
///
/// Cloning is cheap: the underlying connection handle and the diagnostic
/// sink are both shared.
///
/// # Examples
/// ```
/// use networking::{HttpClient, HttpClientConfig};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = HttpClient::new(HttpClientConfig::new())?;
///
///     let result = client.get_contents("https://example.com").await;
///     if result.is_success() {
///         println!("{}", result.data);
///     } else {
///         println!("request failed: {}", result.status);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct HttpClient {
    /// HTTP client
    client: ReqwestClient,
    /// Where failures are reported
    sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        match Self::new(HttpClientConfig::default()) {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!("Falling back to a bare HTTP client: {}", e);
                Self::from_client(ReqwestClient::new())
            }
        }
    }
}

impl HttpClient {
    /// Create a new client from a configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| NetworkError::InvalidHeader(key.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| NetworkError::InvalidHeader(key.clone()))?;
            headers.insert(name, value);
        }

        let client = ReqwestClient::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self::from_client(client))
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: ReqwestClient) -> Self {
        Self {
            client,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Perform a GET request and return the status code and response data
    ///
    /// The URL is not validated; a malformed URL is reported with the
    /// `ERR_INVALID_URL` identifier.
    pub async fn get_contents(&self, url: &str) -> RequestResult {
        self.execute("GET", url, self.client.get(url)).await
    }

    /// Perform a POST request with `contents` as the body and return the
    /// status code and response data
    ///
    /// String payloads are sent unchanged as form data; every other payload
    /// is encoded as JSON.
    pub async fn post_contents<T>(&self, url: &str, contents: &T) -> RequestResult
    where
        T: Serialize + ?Sized,
    {
        let encoded = serde_json::to_value(contents).and_then(|value| match value {
            Value::String(text) => Ok((FORM_CONTENT_TYPE, text.into_bytes())),
            other => serde_json::to_vec(&other).map(|body| (JSON_CONTENT_TYPE, body)),
        });

        let (content_type, body) = match encoded {
            Ok(encoded) => encoded,
            Err(e) => {
                let result = RequestResult::transport_failure(error_code::BAD_REQUEST);
                self.report("POST", url, &result.status, error_code::describe(&e));
                return result;
            }
        };

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body);

        self.execute("POST", url, request).await
    }

    async fn execute(&self, method: &'static str, url: &str, request: RequestBuilder) -> RequestResult {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let result = RequestResult::transport_failure(error_code::from_reqwest(&e));
                self.report(method, url, &result.status, error_code::describe(&e));
                return result;
            }
        };

        let status = response.status();
        let result = match response.text().await {
            Ok(body) => RequestResult::new(status.as_u16(), body_to_data(body)),
            Err(e) => {
                let result = RequestResult::new(status.as_u16(), Value::String(String::new()));
                self.report(method, url, &result.status, error_code::describe(&e));
                return result;
            }
        };

        if status.is_success() {
            tracing::debug!(method, url, status = status.as_u16(), "Request completed");
        } else {
            self.report(
                method,
                url,
                &result.status,
                format!("Request failed with status code {}", status),
            );
        }

        result
    }

    fn report(&self, method: &'static str, url: &str, status: &Status, detail: String) {
        self.sink.request_failed(&RequestFailure {
            method,
            url: url.to_string(),
            status: status.clone(),
            detail,
        });
    }
}

fn default_client() -> &'static HttpClient {
    static DEFAULT: OnceLock<HttpClient> = OnceLock::new();
    DEFAULT.get_or_init(HttpClient::default)
}

/// Perform a GET request with the shared default client
///
/// # Examples
/// ```
/// async fn example() {
///     let result = networking::get_contents("https://example.com").await;
///     println!("{} {}", result.status, result.data);
/// }
/// ```
pub async fn get_contents(url: &str) -> RequestResult {
    default_client().get_contents(url).await
}

/// Perform a POST request with the shared default client
pub async fn post_contents<T>(url: &str, contents: &T) -> RequestResult
where
    T: Serialize + ?Sized,
{
    default_client().post_contents(url, contents).await
}
