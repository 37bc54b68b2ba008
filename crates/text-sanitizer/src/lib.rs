//! Text sanitizing utilities for Request Utils
//!
//! This crate provides pure string transformations: escaping regex
//! metacharacters, stripping symbols, and folding exotic Unicode
//! characters to plain ASCII.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clean;
pub mod escape;
pub mod normalise;

pub use clean::clean_text;
pub use escape::escape_reg_exp;
pub use normalise::normalise_text;
