//! Exotic character folding
//!
//! Accented letters, ligatures and stylised glyphs (mathematical
//! alphanumerics, full-width forms, circled digits) are replaced with their
//! plain ASCII equivalents. Characters with no plain equivalent, such as
//! CJK ideographs or Hangul syllables, are left as they are.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Replace exotic Unicode characters with their closest plain-ASCII form
///
/// # Examples
/// ```
/// use text_sanitizer::normalise_text;
///
/// assert_eq!(normalise_text("café"), "cafe");
/// assert_eq!(normalise_text("ﬁnal straße"), "final strasse");
/// ```
pub fn normalise_text(string: &str) -> String {
    let mut out = String::with_capacity(string.len());
    let mut after_ascii = false;

    for ch in string.chars() {
        if ch.is_ascii() {
            out.push(ch);
            after_ascii = true;
            continue;
        }

        // Loose diacritic following a letter that is already plain
        if after_ascii && is_combining_mark(ch) {
            continue;
        }

        if let Some(replacement) = undecomposable(ch) {
            out.push_str(replacement);
            after_ascii = true;
            continue;
        }

        match fold(ch) {
            Some(folded) => {
                out.push_str(&folded);
                after_ascii = true;
            }
            None => {
                out.push(ch);
                after_ascii = false;
            }
        }
    }

    out
}

/// Compatibility-decompose a character and drop its marks, keeping the
/// result only when it is non-empty plain ASCII
fn fold(ch: char) -> Option<String> {
    let folded: String = std::iter::once(ch)
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    if !folded.is_empty() && folded.is_ascii() {
        Some(folded)
    } else {
        None
    }
}

/// Letters and punctuation that Unicode gives no decomposition for
fn undecomposable(ch: char) -> Option<&'static str> {
    let replacement = match ch {
        'ß' => "ss",
        'ẞ' => "SS",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'ł' | 'ŀ' => "l",
        'Ł' | 'Ŀ' => "L",
        'þ' => "th",
        'Þ' => "TH",
        'ı' => "i",
        'ħ' => "h",
        'Ħ' => "H",
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => "\"",
        '\u{2013}' | '\u{2014}' | '\u{2212}' => "-",
        _ => return None,
    };
    Some(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_accents() {
        assert_eq!(normalise_text("café"), "cafe");
        assert_eq!(normalise_text("Ångström naïve façade"), "Angstrom naive facade");
        assert_eq!(normalise_text("Ñandú"), "Nandu");
    }

    #[test]
    fn test_normalise_empty() {
        assert_eq!(normalise_text(""), "");
    }

    #[test]
    fn test_normalise_plain_ascii_unchanged() {
        let input = "Hello, World! 123 ~`";
        assert_eq!(normalise_text(input), input);
    }

    #[test]
    fn test_normalise_stylised_glyphs() {
        assert_eq!(normalise_text("𝐇𝐞𝐥𝐥𝐨"), "Hello");
        assert_eq!(normalise_text("Ｆｕｌｌ"), "Full");
        assert_eq!(normalise_text("①②③"), "123");
        assert_eq!(normalise_text("ﬁﬂ"), "fifl");
    }

    #[test]
    fn test_normalise_undecomposable_letters() {
        assert_eq!(normalise_text("Straße"), "Strasse");
        assert_eq!(normalise_text("Ærøskøbing"), "AEroskobing");
        assert_eq!(normalise_text("Łódź"), "Lodz");
        assert_eq!(normalise_text("Þórr"), "THorr");
        assert_eq!(normalise_text("Coŀlegi"), "Collegi");
        assert_eq!(normalise_text("ĿA"), "LA");
    }

    #[test]
    fn test_normalise_typographic_punctuation() {
        assert_eq!(
            normalise_text("\u{201C}quoted\u{201D} \u{2014} it\u{2019}s"),
            "\"quoted\" - it's"
        );
    }

    #[test]
    fn test_normalise_decomposed_input() {
        assert_eq!(normalise_text("cafe\u{0301}"), "cafe");
    }

    #[test]
    fn test_normalise_keeps_text_without_ascii_form() {
        assert_eq!(normalise_text("日本語"), "日本語");
        assert_eq!(normalise_text("한국어"), "한국어");
        assert_eq!(normalise_text("Привет"), "Привет");
    }

    #[test]
    fn test_normalise_is_idempotent() {
        for input in ["café", "Straße", "𝐇𝐞𝐥𝐥𝐨", "日本語", "Ærøskøbing"] {
            let once = normalise_text(input);
            assert_eq!(normalise_text(&once), once);
        }
    }
}
