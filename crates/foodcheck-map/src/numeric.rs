//! Number recognition for free-form cell text.
//!
//! Two flavours are needed: a strict test that the whole text is a number
//! (used to skip numeric columns when guessing a name), and a lenient parse
//! that reads the longest numeric prefix (used for calorie values such as
//! `"95 kcal"`).

use foodcheck_model::CellValue;

fn trim_blank(raw: &str) -> &str {
    raw.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
}

fn trim_blank_start(raw: &str) -> &str {
    raw.trim_start_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
}

/// Returns true when the whole text reads as a number.
///
/// Surrounding whitespace is ignored and blank text counts as numeric (it
/// converts to zero). Accepted forms are signed decimals with an optional
/// exponent, `Infinity`, and unsigned `0x`/`0o`/`0b` integers.
pub fn is_numeric_text(raw: &str) -> bool {
    let text = trim_blank(raw);
    if text.is_empty() {
        return true;
    }
    if matches!(text, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    if let Some(valid) = radix_literal(text) {
        return valid;
    }
    is_decimal_literal(text)
}

fn radix_literal(text: &str) -> Option<bool> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &text[2..];
    Some(!digits.is_empty() && digits.chars().all(|ch| ch.is_digit(radix)))
}

fn is_decimal_literal(text: &str) -> bool {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };
    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in mantissa.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    if digits == 0 || dots > 1 {
        return false;
    }
    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && exp.chars().all(|ch| ch.is_ascii_digit())
        }
    }
}

/// Parses the longest numeric prefix of `raw`, ignoring leading whitespace.
///
/// Returns `None` when the text does not start with a number.
pub fn parse_number_prefix(raw: &str) -> Option<f64> {
    let text = trim_blank_start(raw);
    let (sign, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if unsigned.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let bytes = unsigned.as_bytes();
    let mut end = 0usize;
    let mut digits = 0usize;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    unsigned[..end].parse::<f64>().ok().map(|value| sign * value)
}

/// Reads a cell as a number the lenient way: numbers as-is, text by prefix.
pub fn lenient_number(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(number) if !number.is_nan() => Some(*number),
        CellValue::Text(text) => parse_number_prefix(text),
        _ => None,
    }
}
