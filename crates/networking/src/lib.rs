//! Networking utilities for Request Utils
//!
//! This crate provides two thin HTTP helpers, [`get_contents`] and
//! [`post_contents`], that never fail: every outcome is folded into a
//! [`RequestResult`] carrying a status and a body.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error_code;
pub mod result;

pub use client::{get_contents, post_contents, HttpClient};
pub use config::HttpClientConfig;
pub use diagnostics::{DiagnosticSink, RequestFailure, TracingSink};
pub use result::{RequestResult, Status};

/// Result type for client construction
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Error types for building an [`HttpClient`]
///
/// Request operations never return these; they only surface while
/// turning an [`HttpClientConfig`] into a working client.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// A default header name or value was rejected
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The underlying HTTP client could not be built
    #[error("Client error: {0}")]
    Client(#[from] reqwest::Error),
}
