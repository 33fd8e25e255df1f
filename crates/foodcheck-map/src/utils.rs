//! Utility functions for column matching.

/// Lower-cases text for case-insensitive comparison.
pub fn fold_case(raw: &str) -> String {
    raw.to_lowercase()
}

/// True when either folded string contains the other.
pub fn contains_either_way(left: &str, right: &str) -> bool {
    left.contains(right) || right.contains(left)
}

/// Length of `text` in UTF-16 code units, the unit browsers count string length in.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
