//! Repairs of non-standard JSON emitted by the food service.
//!
//! The service serializes missing numeric cells as bare `NaN` and
//! `Infinity` tokens, which strict JSON parsers reject.

use std::borrow::Cow;

const REPLACEMENT: &str = "null";
const NON_FINITE: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Replaces bare `NaN`, `Infinity` and `-Infinity` values with `null`.
///
/// Tokens inside string literals are left alone. Returns the input unchanged
/// when there is nothing to replace.
pub fn replace_non_finite(body: &str) -> Cow<'_, str> {
    if !body.contains("NaN") && !body.contains("Infinity") {
        return Cow::Borrowed(body);
    }

    let mut out = String::with_capacity(body.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut idx = 0;
    let mut prev: Option<char> = None;

    while let Some(ch) = body[idx..].chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
        } else if ch == '"' {
            in_string = true;
        } else if let Some(token) = bare_token_at(body, idx, prev) {
            out.push_str(REPLACEMENT);
            idx += token.len();
            prev = token.chars().last();
            continue;
        }
        out.push(ch);
        idx += ch.len_utf8();
        prev = Some(ch);
    }

    Cow::Owned(out)
}

fn bare_token_at(body: &str, idx: usize, prev: Option<char>) -> Option<&'static str> {
    if prev.is_some_and(is_word_char) {
        return None;
    }
    let rest = &body[idx..];
    NON_FINITE.into_iter().find(|token| {
        rest.starts_with(token)
            && !rest[token.len()..]
                .chars()
                .next()
                .is_some_and(is_word_char)
    })
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_bare_tokens() {
        let body = r#"{"a": NaN, "b": [Infinity, -Infinity], "c": 1}"#;
        assert_eq!(
            replace_non_finite(body),
            r#"{"a": null, "b": [null, null], "c": 1}"#
        );
    }

    #[test]
    fn leaves_strings_alone() {
        let body = r#"{"name": "NaN bread \" Infinity", "x":NaN}"#;
        assert_eq!(
            replace_non_finite(body),
            r#"{"name": "NaN bread \" Infinity", "x":null}"#
        );
    }

    #[test]
    fn borrowed_when_clean() {
        let body = r#"{"data": [], "page": 1}"#;
        assert!(matches!(replace_non_finite(body), Cow::Borrowed(_)));
    }

    #[test]
    fn keeps_non_ascii_text() {
        let body = r#"{"שם": "תפוח", "קלוריות": NaN}"#;
        assert_eq!(replace_non_finite(body), r#"{"שם": "תפוח", "קלוריות": null}"#);
    }
}
