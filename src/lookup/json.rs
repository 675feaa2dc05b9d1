//! Flat string-field extraction from small trusted JSON bodies.
//!
//! Deliberately not a JSON parser: the lookup services answer with a
//! small flat object, and pulling three string fields out of it does
//! not justify one. No brace or array awareness, no escape handling —
//! the first occurrence of a quoted key anywhere in the text wins even
//! if it is nested in an unrelated object.

/// Extracts the string value of `field` from `text`.
///
/// Locates the literal `"field"` pattern, skips any run of `:`, space,
/// or tab, and returns the span up to the next double quote. Returns
/// `None` when the key is absent or its value is not a string literal
/// (numeric and boolean fields are unsupported).
#[must_use]
pub fn extract_string_field<'a>(text: &'a str, field: &str) -> Option<&'a str> {
    let pattern = format!("\"{field}\"");
    let start = text.find(&pattern)? + pattern.len();
    let rest = &text[start..];

    let rest = rest.trim_start_matches([':', ' ', '\t']);
    let value = rest.strip_prefix('"')?;

    let end = value.find('"')?;
    Some(&value[..end])
}
