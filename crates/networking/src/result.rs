//! Normalized request outcomes
//!
//! Both successful responses and failures are reported through the same
//! [`RequestResult`] shape. Callers distinguish the two only by inspecting
//! [`RequestResult::status`].

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// Status
// =============================================================================

/// Status of a finished request
///
/// Either an HTTP status code (success or HTTP error response) or a
/// transport error identifier such as `ECONNREFUSED` when no response
/// was received at all.
///
/// # Examples
/// ```
/// use networking::Status;
///
/// assert!(Status::Code(200).is_success());
/// assert!(!Status::Code(404).is_success());
/// assert_eq!(Status::from("ENOTFOUND").error_code(), Some("ENOTFOUND"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Status {
    /// HTTP status code
    Code(u16),
    /// Transport-level error identifier
    Error(String),
}

impl Status {
    /// Get the HTTP status code, if a response was received
    pub fn code(&self) -> Option<u16> {
        match self {
            Status::Code(code) => Some(*code),
            Status::Error(_) => None,
        }
    }

    /// Get the transport error identifier, if no response was received
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Status::Code(_) => None,
            Status::Error(code) => Some(code),
        }
    }

    /// Check if this is a 2xx status code
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Code(code) if (200..300).contains(code))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Code(code) => write!(f, "{}", code),
            Status::Error(code) => f.write_str(code),
        }
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        Status::Code(code)
    }
}

impl From<&str> for Status {
    fn from(code: &str) -> Self {
        Status::Error(code.to_string())
    }
}

impl From<String> for Status {
    fn from(code: String) -> Self {
        Status::Error(code)
    }
}

// =============================================================================
// RequestResult
// =============================================================================

/// Normalized `{status, data}` outcome of a GET or POST
///
/// `data` holds the parsed JSON body when the body is JSON, the raw text
/// otherwise, and an empty string when no response was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestResult {
    /// Status code or transport error identifier
    pub status: Status,
    /// Response body
    pub data: Value,
}

impl RequestResult {
    /// Create a new result
    pub fn new(status: impl Into<Status>, data: Value) -> Self {
        Self {
            status: status.into(),
            data,
        }
    }

    /// Result for a request that never produced a response
    pub(crate) fn transport_failure(code: impl Into<String>) -> Self {
        Self {
            status: Status::Error(code.into()),
            data: Value::String(String::new()),
        }
    }

    /// Check if the request succeeded with a 2xx status
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get the body as text, if it was not JSON
    pub fn text(&self) -> Option<&str> {
        self.data.as_str()
    }

    /// Decode the body into a typed value
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.data)
    }
}

/// Interpret a raw response body the way callers expect to receive it
///
/// JSON bodies are parsed; everything else stays a string. An empty body
/// yields an empty string.
pub(crate) fn body_to_data(body: String) -> Value {
    if body.trim().is_empty() {
        return Value::String(body);
    }

    match serde_json::from_str::<Value>(&body) {
        Ok(value) => value,
        Err(_) => Value::String(body),
    }
}
