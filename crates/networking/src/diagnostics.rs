//! Failure reporting
//!
//! Failed requests are never returned as errors; instead they are reported
//! to a [`DiagnosticSink`] before the normalized result is handed back.
//! The default sink forwards to `tracing`.

use crate::result::Status;

/// Description of one failed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    /// HTTP method ("GET" or "POST")
    pub method: &'static str,
    /// Requested URL, as given by the caller
    pub url: String,
    /// Status that will be returned to the caller
    pub status: Status,
    /// Rendered raw error
    pub detail: String,
}

/// Destination for failure diagnostics
///
/// Implementations must not block for long: they are invoked inline on the
/// request path.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    /// Record a failed request
    fn request_failed(&self, failure: &RequestFailure);
}

/// Sink that emits each failure as a `tracing` error event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn request_failed(&self, failure: &RequestFailure) {
        tracing::error!(
            method = failure.method,
            url = %failure.url,
            status = %failure.status,
            error = %failure.detail,
            "Request failed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_failure() -> RequestFailure {
        RequestFailure {
            method: "GET",
            url: "http://localhost:1/".to_string(),
            status: Status::from("ECONNREFUSED"),
            detail: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.request_failed(&sample_failure());
    }

    #[test]
    fn test_mock_sink_receives_failure() {
        let mut sink = MockDiagnosticSink::new();
        sink.expect_request_failed()
            .withf(|f| f.method == "GET" && f.status == Status::from("ECONNREFUSED"))
            .times(1)
            .return_const(());

        sink.request_failed(&sample_failure());
    }
}
