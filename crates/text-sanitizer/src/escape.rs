//! Regex escaping

use regex::Regex;
use std::sync::OnceLock;

/// Escape regex metacharacters so the string can be embedded literally in a
/// pattern
///
/// Every character in `. * + - ? ^ $ { } ( ) | [ ] \` is prefixed with a
/// backslash; everything else is left untouched.
///
/// # Examples
/// ```
/// use text_sanitizer::escape_reg_exp;
///
/// assert_eq!(escape_reg_exp("a.b*c"), r"a\.b\*c");
/// assert_eq!(escape_reg_exp("plain"), "plain");
/// ```
pub fn escape_reg_exp(string: &str) -> String {
    static METACHARS: OnceLock<Regex> = OnceLock::new();
    let re = METACHARS.get_or_init(|| Regex::new(r"[.*+\-?^${}()|\[\]\\]").unwrap());

    re.replace_all(string, r"\$0").into_owned()
}
