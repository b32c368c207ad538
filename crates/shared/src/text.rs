//! Text helpers for user-facing messages and free-text form fields.

/// Placeholder substituted by [`fill_count`].
pub const COUNT_PLACEHOLDER: &str = "{n}";

/// Replaces the first `{n}` in `template` with `count`.
///
/// Returns an empty string for an empty template so callers can hide the
/// message entirely.
pub fn fill_count(template: &str, count: i32) -> String {
    if template.is_empty() {
        return String::new();
    }
    template.replacen(COUNT_PLACEHOLDER, &count.to_string(), 1)
}

/// Trims surrounding whitespace from a free-text field.
pub fn trim_field(value: &str) -> String {
    value.trim().to_string()
}

/// Returns true when `value` is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
