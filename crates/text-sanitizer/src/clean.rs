//! Symbol stripping

use regex::Regex;
use std::sync::OnceLock;

/// Remove every character that is not a Unicode letter, a Unicode number,
/// or a plain space
///
/// Tabs, newlines and other whitespace are removed as well.
///
/// # Examples
/// ```
/// use text_sanitizer::clean_text;
///
/// assert_eq!(clean_text("Hello, World! 123"), "Hello World 123");
/// ```
pub fn clean_text(string: &str) -> String {
    static SYMBOLS: OnceLock<Regex> = OnceLock::new();
    let re = SYMBOLS.get_or_init(|| Regex::new(r"[^\p{N}\p{L} ]").unwrap());

    re.replace_all(string, "").into_owned()
}
