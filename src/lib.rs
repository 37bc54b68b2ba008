//! Request Utils
//!
//! Small helpers for fetching remote contents and sanitising text.
//!
//! - [`networking`]: `get_contents` / `post_contents`, which always return a
//!   normalized [`RequestResult`] instead of an error
//! - [`text_sanitizer`]: `escape_reg_exp`, `clean_text` and `normalise_text`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use networking;
pub use text_sanitizer;

pub use networking::{get_contents, post_contents, HttpClient, RequestResult, Status};
pub use text_sanitizer::{clean_text, escape_reg_exp, normalise_text};
