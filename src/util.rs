//! String helpers shared by the filter pipeline and the public projection.

use regex::Regex;
use std::sync::LazyLock;

/// Matches one HTML/XML tag, including its attributes.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Fold a string for case-insensitive matching. Full Unicode lowercasing,
/// so Cyrillic catalog text matches Cyrillic queries.
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive substring containment. `needle` must already be folded.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(needle)
}

/// Remove markup tags from a description.
pub fn strip_html(value: &str) -> String {
    TAG.replace_all(value, "").into_owned()
}

/// Truncate to at most `max_chars` characters, appending `...` when
/// anything was cut. Character-based so multi-byte text never splits
/// mid-codepoint.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &value[..byte_idx]),
        None => value.to_string(),
    }
}
