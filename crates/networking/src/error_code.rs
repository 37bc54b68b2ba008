//! Transport error identifiers
//!
//! When a request fails without producing a response, the caller receives a
//! string identifier in place of the status code. The identifiers follow the
//! names commonly used by HTTP clients (`ECONNREFUSED`, `ENOTFOUND`, ...).

use std::error::Error as StdError;
use std::io;

/// Request could not be built (malformed URL, invalid header)
pub const INVALID_URL: &str = "ERR_INVALID_URL";
/// Request payload could not be serialized
pub const BAD_REQUEST: &str = "ERR_BAD_REQUEST";
/// Response body could not be read or decoded
pub const BAD_RESPONSE: &str = "ERR_BAD_RESPONSE";
/// Redirect limit exceeded
pub const TOO_MANY_REDIRECTS: &str = "ERR_FR_TOO_MANY_REDIRECTS";
/// Request timed out in the client
pub const ABORTED: &str = "ECONNABORTED";
/// Remote host refused the connection
pub const CONNECTION_REFUSED: &str = "ECONNREFUSED";
/// Connection reset by peer
pub const CONNECTION_RESET: &str = "ECONNRESET";
/// Socket-level timeout
pub const TIMED_OUT: &str = "ETIMEDOUT";
/// Host name could not be resolved
pub const NOT_FOUND: &str = "ENOTFOUND";
/// Any other network failure
pub const NETWORK: &str = "ERR_NETWORK";

/// Map a failed request to its transport error identifier
pub fn from_reqwest(err: &reqwest::Error) -> &'static str {
    if err.is_builder() {
        return INVALID_URL;
    }
    if err.is_timeout() {
        return ABORTED;
    }
    if err.is_redirect() {
        return TOO_MANY_REDIRECTS;
    }

    if let Some(code) = io_error_code(err) {
        return code;
    }

    if mentions_dns(err) {
        return NOT_FOUND;
    }

    if err.is_body() || err.is_decode() {
        return BAD_RESPONSE;
    }

    NETWORK
}

/// Find the first `io::Error` in the source chain and map its kind
fn io_error_code(err: &(dyn StdError + 'static)) -> Option<&'static str> {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            let code = match io_err.kind() {
                io::ErrorKind::ConnectionRefused => Some(CONNECTION_REFUSED),
                io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => {
                    Some(CONNECTION_RESET)
                }
                io::ErrorKind::TimedOut => Some(TIMED_OUT),
                _ => None,
            };
            if code.is_some() {
                return code;
            }
        }
        source = cause.source();
    }
    None
}

// The resolver error is only distinguishable by its message.
fn mentions_dns(err: &(dyn StdError + 'static)) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(cause) = source {
        if cause.to_string().to_ascii_lowercase().contains("dns error") {
            return true;
        }
        source = cause.source();
    }
    false
}

/// Render an error together with its source chain
pub fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
