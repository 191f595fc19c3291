//! Rules shared by both catalog entities for optional request fields.
//!
//! A field counts as absent when it is missing, `null`, or the empty string.

/// Returns the value, or `None` when it is empty.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Returns the value, or `default` when it is absent.
pub fn or_default(value: Option<String>, default: &str) -> String {
    present(value).unwrap_or_else(|| default.to_string())
}

/// Returns the update, or `current` when the update is absent.
pub fn keep_unless_absent(current: String, update: Option<String>) -> String {
    present(update).unwrap_or(current)
}

/// Lists the names of the required fields that are absent, in declaration order.
pub fn missing_fields(fields: &[(&'static str, &Option<String>)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(name, _)| *name)
        .collect()
}
